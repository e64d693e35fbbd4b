//! Context-menu package-fetch engine.
//!
//! Merges the package manager's source catalog with a persisted set of
//! fetch options into an indexable menu, then maps a selection index back
//! to an option toggle or a fully assembled external fetch invocation.
//! Menu presentation and process launching are host concerns; this library
//! produces the snapshots and actions they consume.

pub mod cli;
mod document;
pub mod error;
pub mod handler;
pub mod launcher;
pub mod menu;
pub mod options;
pub mod paths;
pub mod resolver;
pub mod sources;

// Re-export main types for convenience
pub use error::{MenuError, Result};
pub use handler::ContextMenu;
pub use launcher::{FetchOutput, run_fetch};
pub use menu::{MenuEntry, MenuModel};
pub use options::{OptionFlag, OptionSet, OptionStore};
pub use resolver::{Action, FetchCommand, resolve};
pub use sources::{PackageSource, SourceCatalog};
