//! Persisted fetch options.
//!
//! Three named boolean flags in a fixed order that doubles as the option
//! block of the selection space. The backing document lives at a per-user
//! path and is created with defaults on first access through `options()`;
//! the other operations require it to already exist.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};
use tracing::info;

use crate::document;
use crate::error::{MenuError, Result};

/// The three persisted fetch flags.
///
/// Variant order is the menu order and defines the selection-index
/// offsets; the string forms are the section names in the options
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter, EnumCount)]
pub enum OptionFlag {
    #[strum(serialize = "useVersionedPackages")]
    UseVersionedPackages,
    #[strum(serialize = "getLatest")]
    GetLatest,
    #[strum(serialize = "cleanPackages")]
    CleanPackages,
}

impl OptionFlag {
    /// The flag at a menu position, if the position addresses the option
    /// block.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// The value written when the document is bootstrapped.
    pub fn default_value(self) -> bool {
        match self {
            Self::UseVersionedPackages => false,
            Self::GetLatest => true,
            Self::CleanPackages => true,
        }
    }
}

/// The resolved values of all three flags.
///
/// Always complete: no flag is ever absent once the document has been
/// accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSet {
    pub use_versioned_packages: bool,
    pub get_latest: bool,
    pub clean_packages: bool,
}

impl OptionSet {
    pub fn get(&self, flag: OptionFlag) -> bool {
        match flag {
            OptionFlag::UseVersionedPackages => self.use_versioned_packages,
            OptionFlag::GetLatest => self.get_latest,
            OptionFlag::CleanPackages => self.clean_packages,
        }
    }

    /// Flags paired with their values, in menu order.
    pub fn entries(&self) -> impl Iterator<Item = (OptionFlag, bool)> + '_ {
        OptionFlag::iter().map(move |flag| (flag, self.get(flag)))
    }
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            use_versioned_packages: OptionFlag::UseVersionedPackages.default_value(),
            get_latest: OptionFlag::GetLatest.default_value(),
            clean_packages: OptionFlag::CleanPackages.default_value(),
        }
    }
}

/// Read/write access to the options document.
///
/// Each operation re-reads the document from storage, so a toggle is
/// durably visible to the next access, including one from a concurrently
/// running second instance. `toggle` is an unlocked load-mutate-persist
/// sequence; concurrent toggles race last-write-wins.
pub struct OptionStore {
    path: PathBuf,
}

impl OptionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All three flags in fixed order.
    ///
    /// When the backing document does not exist it is synthesized with
    /// defaults, persisted, and the defaults returned. Any other failure
    /// propagates.
    pub fn options(&self) -> Result<OptionSet> {
        let text = match document::read(&self.path) {
            Ok(text) => text,
            Err(MenuError::ConfigNotFound(_)) => return self.bootstrap(),
            Err(err) => return Err(err),
        };
        let doc = document::parse(&text, &self.path)?;
        Ok(OptionSet {
            use_versioned_packages: flag_value(&doc, OptionFlag::UseVersionedPackages, &self.path)?,
            get_latest: flag_value(&doc, OptionFlag::GetLatest, &self.path)?,
            clean_packages: flag_value(&doc, OptionFlag::CleanPackages, &self.path)?,
        })
    }

    /// Read a single flag. The document must already exist; this never
    /// bootstraps.
    pub fn option(&self, flag: OptionFlag) -> Result<bool> {
        let doc = document::parse(&document::read(&self.path)?, &self.path)?;
        flag_value(&doc, flag, &self.path)
    }

    /// Flip one flag and write the full document back, otherwise
    /// unchanged.
    pub fn toggle(&self, flag: OptionFlag) -> Result<()> {
        let mut doc = document::parse(&document::read(&self.path)?, &self.path)?;
        let flipped = !flag_value(&doc, flag, &self.path)?;
        set_flag_value(&mut doc, flag, flipped, &self.path)?;
        self.persist(&doc)?;
        info!(flag = %flag, value = flipped, "toggled option");
        Ok(())
    }

    fn bootstrap(&self) -> Result<OptionSet> {
        let defaults = OptionSet::default();
        let mut doc = Map::new();
        for (flag, value) in defaults.entries() {
            doc.insert(
                flag.to_string(),
                json!({ "key": "enabled", "value": bool_literal(value) }),
            );
        }
        self.persist(&Value::Object(doc))?;
        info!(path = %self.path.display(), "created options document with defaults");
        Ok(defaults)
    }

    fn persist(&self, doc: &Value) -> Result<()> {
        let text = serde_json::to_string_pretty(doc).map_err(|err| {
            MenuError::PersistenceFailure {
                path: self.path.clone(),
                source: std::io::Error::other(err),
            }
        })?;
        document::write(&self.path, &text)
    }
}

fn flag_value(doc: &Value, flag: OptionFlag, path: &Path) -> Result<bool> {
    let section = doc
        .get(flag.to_string())
        .ok_or_else(|| MenuError::malformed(path, format!("missing `{flag}` element")))?;
    let value = section
        .get("value")
        .and_then(Value::as_str)
        .ok_or_else(|| MenuError::malformed(path, format!("`{flag}` is missing its `value` attribute")))?;
    parse_bool_literal(value, flag, path)
}

fn set_flag_value(doc: &mut Value, flag: OptionFlag, value: bool, path: &Path) -> Result<()> {
    let section = doc
        .get_mut(flag.to_string())
        .and_then(Value::as_object_mut)
        .ok_or_else(|| MenuError::malformed(path, format!("missing `{flag}` element")))?;
    // key is rewritten along with value
    section.insert("key".to_string(), Value::String("enabled".to_string()));
    section.insert("value".to_string(), Value::String(bool_literal(value).to_string()));
    Ok(())
}

/// The literal persisted form of a flag value.
fn bool_literal(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Parse a persisted literal, accepting any casing of true/false.
fn parse_bool_literal(value: &str, flag: OptionFlag, path: &Path) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(MenuError::malformed(
            path,
            format!("`{flag}` holds unparsable boolean `{value}`"),
        ))
    }
}
