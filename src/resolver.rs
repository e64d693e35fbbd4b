//! Selection resolution.
//!
//! Maps a selection index from a rendered menu snapshot to either an
//! option toggle or a fully assembled fetch invocation. `resolve` is a
//! pure function of the index and the snapshot; it performs no I/O and
//! persists nothing.

use strum::EnumCount;

use crate::error::{MenuError, Result};
use crate::menu::MenuModel;
use crate::options::{OptionFlag, OptionSet};

/// What a menu selection resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip the named option; the presentation layer re-renders.
    Toggle(OptionFlag),
    /// Hand the assembled command to the launcher.
    Fetch(FetchCommand),
}

/// A fully assembled `get` invocation for the external fetch tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    /// Package id the menu was opened on.
    pub package: String,
    /// Location of the selected source.
    pub source: String,
    /// `-x`: strip the version from the unpacked directory name. Applies
    /// when `useVersionedPackages` is off.
    pub exclude_version: bool,
    /// `-latest`: resolve to the newest available package version.
    pub latest: bool,
    /// `-clean`: remove leftovers from earlier fetches first.
    pub clean: bool,
}

impl FetchCommand {
    fn assemble(package: &str, source: &str, options: OptionSet) -> Self {
        Self {
            package: package.to_string(),
            source: source.to_string(),
            exclude_version: !options.use_versioned_packages,
            latest: options.get_latest,
            clean: options.clean_packages,
        }
    }

    /// Arguments exactly as the external tool expects them, order fixed.
    ///
    /// The package and source text is passed through untouched; values are
    /// trusted to be well-formed and no shell escaping is applied.
    pub fn to_cli_args(&self) -> Vec<String> {
        let mut args = vec![
            "get".to_string(),
            self.package.clone(),
            "-s".to_string(),
            self.source.clone(),
        ];
        if self.exclude_version {
            args.push("-x".to_string());
        }
        if self.latest {
            args.push("-latest".to_string());
        }
        if self.clean {
            args.push("-clean".to_string());
        }
        args
    }

    /// The argument list joined for display and logging.
    pub fn argument_string(&self) -> String {
        self.to_cli_args().join(" ")
    }
}

/// Resolve a selection index against the snapshot the user was shown.
///
/// The caller must pass the same snapshot the presentation layer rendered;
/// an index past the current source list fails with `IndexOutOfRange`
/// rather than being silently re-mapped against refreshed state.
pub fn resolve(menu: &MenuModel, index: usize, package: &str) -> Result<Action> {
    if let Some(flag) = OptionFlag::from_index(index) {
        return Ok(Action::Toggle(flag));
    }
    let source = menu
        .sources()
        .get(index - OptionFlag::COUNT)
        .ok_or(MenuError::IndexOutOfRange {
            index,
            len: menu.entry_count(),
        })?;
    Ok(Action::Fetch(FetchCommand::assemble(
        package,
        &source.location,
        menu.options(),
    )))
}
