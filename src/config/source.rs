//! Key/value configuration sources.
//!
//! The core reads configuration as named sections holding keys, e.g.
//! `global` / `url` or `list.announce` / `url`. [`ConfigSource`] hides how
//! those sections are stored.

use std::collections::BTreeMap;
use std::path::Path;

use super::ConfigError;

/// A read-only view of sectioned key/value configuration.
pub trait ConfigSource {
    /// Returns the raw value of `key` in `section`, if present.
    fn value(&self, section: &str, key: &str) -> Option<&toml::Value>;

    /// Returns the names of all sections.
    fn sections(&self) -> Vec<String>;

    /// Returns `key` in `section` as a string.
    ///
    /// A value of any other type is treated as absent.
    fn get_str(&self, section: &str, key: &str) -> Option<&str> {
        self.value(section, key).and_then(toml::Value::as_str)
    }

    /// Returns `key` in `section` as a non-negative integer.
    ///
    /// Negative numbers and values of any other type are treated as absent.
    fn get_u64(&self, section: &str, key: &str) -> Option<u64> {
        self.value(section, key)
            .and_then(toml::Value::as_integer)
            .and_then(|n| u64::try_from(n).ok())
    }
}

/// Configuration backed by a parsed TOML document.
///
/// Tables at any depth are sections named by their dotted path:
/// `[list.announce]` is `list.announce`, and both `[list.dev.team]` and
/// `[list."dev.team"]` are `list.dev.team`. A quoted top-level table
/// `["list.announce"]` lands on the same name; keys of tables that share a
/// name are merged. Tables that only group other tables, such as `list` and
/// `list.dev` above, are not sections. Top-level keys outside any table are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TomlSource {
    sections: BTreeMap<String, toml::Table>,
}

impl TomlSource {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let root = toml::from_str::<toml::Table>(content)?;

        let mut sections = BTreeMap::new();
        for (name, value) in root {
            if let toml::Value::Table(table) = value {
                flatten_into(&mut sections, &name, table);
            }
        }

        Ok(Self { sections })
    }
}

/// Records `table` as section `path`, then each nested table as `path.<key>`.
///
/// A table holding only nested tables is a path segment, not a section.
fn flatten_into(sections: &mut BTreeMap<String, toml::Table>, path: &str, table: toml::Table) {
    let mut keys = toml::Table::new();
    let mut children = Vec::new();

    for (key, value) in table {
        match value {
            toml::Value::Table(child) => children.push((key, child)),
            other => {
                keys.insert(key, other);
            }
        }
    }

    if children.is_empty() || !keys.is_empty() {
        let section = sections.entry(path.to_string()).or_default();
        for (key, value) in keys {
            section.insert(key, value);
        }
    }

    for (key, child) in children {
        flatten_into(sections, &format!("{path}.{key}"), child);
    }
}

impl ConfigSource for TomlSource {
    fn value(&self, section: &str, key: &str) -> Option<&toml::Value> {
        self.sections.get(section)?.get(key)
    }

    fn sections(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }
}

/// In-memory configuration, for hosts that already hold parsed settings.
///
/// # Example
///
/// ```
/// use list_hook::config::{ConfigSource, MapSource};
///
/// let source = MapSource::new()
///     .with("global", "url", "https://chat.example/hooks/default")
///     .with("list.announce", "url", "");
///
/// assert_eq!(source.get_str("list.announce", "url"), Some(""));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSource {
    sections: BTreeMap<String, BTreeMap<String, toml::Value>>,
}

impl MapSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` in `section`, creating the section if needed.
    #[must_use]
    pub fn with(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<toml::Value>,
    ) -> Self {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Adds an empty section.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.sections.entry(section.into()).or_default();
        self
    }
}

impl ConfigSource for MapSource {
    fn value(&self, section: &str, key: &str) -> Option<&toml::Value> {
        self.sections.get(section)?.get(key)
    }

    fn sections(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }
}
