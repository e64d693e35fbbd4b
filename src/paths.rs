//! Default per-user locations of the two documents.
//!
//! The sources document belongs to the package manager's config directory;
//! the options document lives in local app data and is created on demand.
//! Both can be overridden per invocation, which the tests rely on.

use std::path::PathBuf;

const VENDOR_DIR: &str = "NuGet";

/// Default location of the externally-owned sources document.
pub fn sources_document() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(VENDOR_DIR).join("sources.json"))
}

/// Default location of the options document owned by this crate.
pub fn options_document() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(VENDOR_DIR).join("ContextMenu.json"))
}
