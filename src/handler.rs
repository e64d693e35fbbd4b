//! Context-menu facade exposed to the host.
//!
//! `build_menu` produces the snapshot the presentation layer renders;
//! `on_select` interprets the index the user picked. The model is rebuilt
//! for each call, so indices are only meaningful while the underlying
//! documents are unchanged in between — a selection against a source list
//! that shrank meanwhile fails rather than fetching from the wrong source.

use std::path::PathBuf;

use crate::error::Result;
use crate::menu::MenuModel;
use crate::options::OptionStore;
use crate::resolver::{self, Action};
use crate::sources::SourceCatalog;

/// One context-menu interaction surface over a pair of document locations.
pub struct ContextMenu {
    catalog: SourceCatalog,
    store: OptionStore,
}

impl ContextMenu {
    pub fn new(sources_path: impl Into<PathBuf>, options_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog: SourceCatalog::new(sources_path),
            store: OptionStore::new(options_path),
        }
    }

    pub fn catalog(&self) -> &SourceCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &OptionStore {
        &self.store
    }

    /// A fresh snapshot for the presentation layer to render.
    pub fn build_menu(&self) -> Result<MenuModel> {
        MenuModel::build(&self.catalog, &self.store)
    }

    /// Interpret a selection index reported back by the presentation
    /// layer.
    ///
    /// Toggles are applied and persisted here so the follow-up re-render
    /// shows the flipped state; fetch actions are returned untouched for
    /// the launcher collaborator. On failure nothing is toggled and
    /// nothing is fetched.
    pub fn on_select(&self, index: usize, package: &str) -> Result<Action> {
        let menu = self.build_menu()?;
        let action = resolver::resolve(&menu, index, package)?;
        if let Action::Toggle(flag) = &action {
            self.store.toggle(*flag)?;
        }
        Ok(action)
    }
}
