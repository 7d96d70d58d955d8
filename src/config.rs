use crate::catalog::Locale;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "design-patterns.toml";
pub const CONFIG_ENV_VAR: &str = "DESIGN_PATTERNS_CONFIG";

/// Settings for the walkthrough binaries.
///
/// ```toml
/// locale = "zh"
/// store_path = "target/defaults.json"
/// log_filter = "design_patterns=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub locale: Locale,
    /// Backing file for the defaults store. In-memory when absent.
    pub store_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            store_path: None,
            log_filter: "design_patterns=info".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reads `$DESIGN_PATTERNS_CONFIG` or `./design-patterns.toml`; defaults if neither exists.
    pub fn load_default() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
