//! Configuration file support
//!
//! Loads settings from ~/.px2-syntax.toml (or %USERPROFILE%\.px2-syntax.toml
//! on Windows), or from a path given on the command line.
//!
//! Example:
//! ```toml
//! # px2-syntax configuration
//! color = true
//! keyword-set = ["dup", "drop", "over", "swap", "rot", "println"]
//! boolean-set = ["true", "false"]
//! numeric-pattern = "[0-9]+"
//!
//! [theme]
//! Keyword = "bold magenta"
//! Number = "cyan"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::warn;

use crate::error::{Result, SyntaxError};
use crate::syntax::builtin::{PX2_BOOLEANS, PX2_KEYWORDS, PX2_NUMERIC_PATTERN};
use crate::syntax::{CategoryTable, Theme};

/// The alternate-table surface: which words and shapes map to which category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Exact strings classified as `Keyword`
    pub keyword_set: Vec<String>,
    /// Exact strings classified as `BooleanLiteral`
    pub boolean_set: Vec<String>,
    /// Whole-token pattern classified as `NumericLiteral`
    pub numeric_pattern: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            keyword_set: PX2_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            boolean_set: PX2_BOOLEANS.iter().map(|s| s.to_string()).collect(),
            numeric_pattern: PX2_NUMERIC_PATTERN.to_string(),
        }
    }
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether highlighting is enabled at all
    pub enabled: bool,
    /// Whether to emit terminal colors
    pub color: bool,
    pub table: TableConfig,
    /// Role name -> style description overrides
    pub theme: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            color: true,
            table: TableConfig::default(),
            theme: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".px2-syntax.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".px2-syntax.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file means defaults. A file that exists but is broken is
    /// reported and ignored.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let settings: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&settings)?;
        Ok(config)
    }

    /// Apply settings from a parsed table; unknown keys are ignored
    fn apply(&mut self, settings: &Table) -> Result<()> {
        if let Some(value) = settings.get("enabled") {
            self.enabled = expect_bool("enabled", value)?;
        }

        if let Some(value) = settings.get("color") {
            self.color = expect_bool("color", value)?;
        }

        if let Some(value) = settings.get("keyword-set") {
            self.table.keyword_set = expect_string_array("keyword-set", value)?;
        }

        if let Some(value) = settings.get("boolean-set") {
            self.table.boolean_set = expect_string_array("boolean-set", value)?;
        }

        if let Some(value) = settings.get("numeric-pattern") {
            self.table.numeric_pattern = value
                .as_str()
                .ok_or_else(|| invalid("numeric-pattern", "a string"))?
                .to_string();
        }

        if let Some(value) = settings.get("theme") {
            let theme = value.as_table().ok_or_else(|| invalid("theme", "a table"))?;
            for (role, style) in theme {
                let style = style.as_str().ok_or_else(|| invalid(role, "a style string"))?;
                self.theme.insert(role.clone(), style.to_string());
            }
        }

        Ok(())
    }

    /// Build the category table these settings describe
    pub fn category_table(&self) -> Result<CategoryTable> {
        CategoryTable::from_config(&self.table)
    }

    /// Build the theme: defaults plus configured overrides
    pub fn theme(&self) -> Result<Theme> {
        let mut theme = Theme::default();
        theme.apply_overrides(&self.theme)?;
        Ok(theme)
    }
}

fn invalid(key: &str, expected: &'static str) -> SyntaxError {
    SyntaxError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| invalid(key, "a boolean"))
}

fn expect_string_array(key: &str, value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(key, "an array of strings"))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(key, "an array of strings"))
        })
        .collect()
}
