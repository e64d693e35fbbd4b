//! Error handling for the context-menu engine.
//!
//! Every fallible core operation surfaces one of these variants to its
//! caller. Nothing is recovered silently; the single local recovery in the
//! crate is `OptionStore::options`, which bootstraps defaults on
//! `ConfigNotFound`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for menu building and selection resolution.
#[derive(Error, Debug)]
pub enum MenuError {
    /// A required document is absent and bootstrap does not apply.
    #[error("configuration not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// A document exists but its structure does not match the expected
    /// shape (missing section, missing attribute, unparsable boolean).
    #[error("malformed configuration in {}: {}", path.display(), reason)]
    MalformedConfig { path: PathBuf, reason: String },

    /// A document write could not complete.
    #[error("failed to persist {}", path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selection index does not correspond to any current menu entry,
    /// e.g. a stale index from a menu built before the source list changed.
    #[error("selection index {index} out of range for a menu of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// IO errors outside the cases above (a read that fails for a reason
    /// other than the file being absent).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;

impl MenuError {
    /// Create a malformed-configuration error for a document.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedConfig {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
