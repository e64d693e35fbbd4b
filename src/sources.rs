//! Package source catalog.
//!
//! Reads the externally-owned sources document and produces the ordered
//! list of enabled sources: `packageSources` in document order, minus every
//! entry whose key appears under `disabledPackageSources`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::document;
use crate::error::{MenuError, Result};

/// Section holding all registered sources.
pub const PACKAGE_SOURCES: &str = "packageSources";
/// Section holding the keys of sources the user has switched off.
pub const DISABLED_PACKAGE_SOURCES: &str = "disabledPackageSources";

/// A single package source: unique key plus feed location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSource {
    pub key: String,
    /// Feed location (URL or path), stored as the entry's `value`.
    #[serde(rename = "value")]
    pub location: String,
}

/// Read-only view over the sources document.
///
/// The document is owned by the package manager, not by this crate; the
/// catalog never writes it and re-reads it on every call so that edits made
/// elsewhere are visible on the next menu build.
pub struct SourceCatalog {
    path: PathBuf,
}

impl SourceCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The ordered, de-duplicated enabled sources.
    ///
    /// Ordering is the `packageSources` insertion order with disabled
    /// entries removed; no re-sorting. A disabled key with no match in
    /// `packageSources` is ignored.
    pub fn enabled_sources(&self) -> Result<Vec<PackageSource>> {
        let doc = document::parse(&document::read(&self.path)?, &self.path)?;
        let all = section_entries(&doc, PACKAGE_SOURCES, &self.path)?;
        let disabled = section_entries(&doc, DISABLED_PACKAGE_SOURCES, &self.path)?;
        let enabled = apply_disabled(all, &disabled);
        debug!(
            path = %self.path.display(),
            enabled = enabled.len(),
            disabled = disabled.len(),
            "resolved enabled sources"
        );
        Ok(enabled)
    }
}

/// Remove every source whose key appears in `disabled`, preserving the
/// relative order of the remainder. Key comparison is exact ordinal
/// equality.
pub fn apply_disabled(all: Vec<PackageSource>, disabled: &[PackageSource]) -> Vec<PackageSource> {
    let excluded: HashSet<&str> = disabled.iter().map(|s| s.key.as_str()).collect();
    all.into_iter()
        .filter(|source| !excluded.contains(source.key.as_str()))
        .collect()
}

fn section_entries(doc: &Value, tag: &str, path: &Path) -> Result<Vec<PackageSource>> {
    let items = doc
        .get(tag)
        .ok_or_else(|| MenuError::malformed(path, format!("missing `{tag}` section")))?
        .as_array()
        .ok_or_else(|| MenuError::malformed(path, format!("`{tag}` is not an entry list")))?;

    items
        .iter()
        .map(|item| {
            serde_json::from_value(item.clone())
                .map_err(|err| MenuError::malformed(path, format!("`{tag}` entry: {err}")))
        })
        .collect()
}
