//! The ordered, indexable selection space.
//!
//! A menu snapshot is exactly three option toggles followed by the enabled
//! sources in catalog order. That layout is a load-bearing contract: the
//! resolver's index arithmetic assumes three leading option entries.
//! Index assignment is only stable within one build/resolve round trip;
//! rebuilding after a catalog or option mutation may move sources.

use std::fmt;

use strum::EnumCount;

use crate::error::Result;
use crate::options::{OptionFlag, OptionSet, OptionStore};
use crate::sources::{PackageSource, SourceCatalog};

/// A single selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A toggleable fetch option with its current state.
    Option { flag: OptionFlag, enabled: bool },
    /// A package source to fetch from.
    Source(PackageSource),
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option { flag, enabled } => {
                write!(f, "[{}] {flag}", if *enabled { "x" } else { " " })
            }
            Self::Source(source) => write!(f, "{} ({})", source.key, source.location),
        }
    }
}

/// An immutable snapshot of the selection space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    options: OptionSet,
    sources: Vec<PackageSource>,
}

impl MenuModel {
    /// Compose a fresh snapshot from both documents.
    ///
    /// Failure of either component propagates unchanged; there is no
    /// partial menu.
    pub fn build(catalog: &SourceCatalog, store: &OptionStore) -> Result<Self> {
        Ok(Self {
            options: store.options()?,
            sources: catalog.enabled_sources()?,
        })
    }

    pub fn options(&self) -> OptionSet {
        self.options
    }

    pub fn sources(&self) -> &[PackageSource] {
        &self.sources
    }

    /// Total number of selectable entries.
    pub fn entry_count(&self) -> usize {
        OptionFlag::COUNT + self.sources.len()
    }

    /// Entries in selection order: the option block, then the sources.
    pub fn entries(&self) -> Vec<MenuEntry> {
        let mut entries: Vec<MenuEntry> = self
            .options
            .entries()
            .map(|(flag, enabled)| MenuEntry::Option { flag, enabled })
            .collect();
        entries.extend(self.sources.iter().cloned().map(MenuEntry::Source));
        entries
    }
}
