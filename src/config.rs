//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a tocbar.toml, and if present we load settings from there.
//! This provides the default heading selector, numbering, column layout and the identifiers
//! of the trigger and panel elements.

use crate::ids::DEFAULT_PREFIX;
use crate::toc::{ColumnSplit, DEFAULT_COLUMN_CAPACITY};
use crate::visibility::{PanelIds, DEFAULT_PANEL_ID, DEFAULT_TRIGGER_ID};
use facet::Facet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Selector used when neither the config file nor the command line names one.
pub const DEFAULT_SELECTOR: &str = "h1, h2";

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "tocbar.toml";

#[derive(Debug, Error)]
/// Problems reading a config file.
pub enum ConfigError {
    /// The TOML did not describe a valid configuration.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from tocbar.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_SELECTOR.to_string())]
    /// Selector picking the headings of the outline.
    pub selector: String,
    #[facet(default = false)]
    /// Prefix heading text with a running numeral.
    pub numerate: bool,
    #[facet(default = DEFAULT_COLUMN_CAPACITY)]
    /// Entries per column before a new one starts.
    pub column_capacity: usize,
    #[facet(default = false)]
    /// Seal columns at exactly `column_capacity` entries instead of one past it.
    pub strict_columns: bool,
    #[facet(default = DEFAULT_PREFIX.to_string())]
    /// Prefix for generated heading identifiers.
    pub id_prefix: String,
    #[facet(default = DEFAULT_TRIGGER_ID.to_string())]
    /// Identifier of the element that reveals the panel.
    pub trigger_id: String,
    #[facet(default = DEFAULT_PANEL_ID.to_string())]
    /// Identifier of the panel receiving the columns.
    pub panel_id: String,
    #[facet(default = vec!["html".to_string(), "htm".to_string(), "md".to_string()])]
    /// File suffixes accepted as input.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            numerate: false,
            column_capacity: DEFAULT_COLUMN_CAPACITY,
            strict_columns: false,
            id_prefix: DEFAULT_PREFIX.to_string(),
            trigger_id: DEFAULT_TRIGGER_ID.to_string(),
            panel_id: DEFAULT_PANEL_ID.to_string(),
            file_extensions: vec!["html".to_string(), "htm".to_string(), "md".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from tocbar.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the TOML does not deserialise.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        facet_toml::from_str::<Self>(contents).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    #[must_use]
    /// Column split policy selected by `strict_columns`.
    pub fn column_split(&self) -> ColumnSplit {
        if self.strict_columns {
            ColumnSplit::AtCapacity
        } else {
            ColumnSplit::AfterAppend
        }
    }

    #[must_use]
    /// Trigger and panel identifiers.
    pub fn panel_ids(&self) -> PanelIds {
        PanelIds::new(&self.trigger_id, &self.panel_id)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
