//! Ukrainian-table configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `translit_core::Config` (flattened via serde)
//! - Whether apostrophes are kept instead of dropped
//!
//! # Example
//!
//! ```rust
//! use uknational::UkNationalConfig;
//!
//! let config = UkNationalConfig::default();
//! assert!(config.base().normalize_nfc);
//! let base_config = config.into_base();
//! ```
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UkNationalConfig {
    /// Base configuration fields (override rules, normalization, buffering)
    #[serde(flatten)]
    pub base: translit_core::Config,

    /// Pass apostrophes through instead of deleting them
    pub keep_apostrophe: bool,
}

impl Default for UkNationalConfig {
    fn default() -> Self {
        Self {
            base: translit_core::Config::default(),
            keep_apostrophe: false,
        }
    }
}

impl UkNationalConfig {
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> translit_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Convert into the base config
    pub fn into_base(self) -> translit_core::Config {
        self.base
    }

    pub fn base(&self) -> &translit_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut translit_core::Config {
        &mut self.base
    }
}
