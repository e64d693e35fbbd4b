//! Blocking read/write plumbing shared by the two configuration documents.
//!
//! Both documents are small JSON files read in full on every access and
//! written in full on every mutation. There is no caching layer; external
//! edits are visible on the next read.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::{MenuError, Result};

/// Read a document, mapping a missing file to `ConfigNotFound`.
pub(crate) fn read(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(MenuError::ConfigNotFound(path.to_path_buf()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Parse document text into JSON, mapping syntax errors to
/// `MalformedConfig`.
pub(crate) fn parse(text: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(text).map_err(|err| MenuError::malformed(path, err.to_string()))
}

/// Write a document, creating parent directories on first use. Failures
/// surface as `PersistenceFailure`.
pub(crate) fn write(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| MenuError::PersistenceFailure {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| MenuError::PersistenceFailure {
        path: path.to_path_buf(),
        source,
    })
}
