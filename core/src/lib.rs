//! translit-core
//!
//! Rule-driven transliteration engine shared by language table crates
//! (uknational).
//!
//! Rules map source byte sequences to replacement bytes. They are loaded
//! once into a byte-keyed prefix trie; the matcher then walks the input and,
//! at every position, applies the longest rule that matches there or passes
//! the byte through unchanged.
//!
//! Public API:
//! - `Trie` - Arena prefix tree built from rules, serializable with bincode
//! - `Matcher` / `Scan` - Longest-match scanning over a built trie
//! - `Transliterator` - Streaming host with `Read`/`Write` adapters
//! - `Rule`, `RuleTable` - Rule-table data, parsed from text or TOML
//! - `Config` - Override rules, normalization and buffering options
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Result, TranslitError};

pub mod trie;
pub use trie::{NodeId, Trie};

pub mod matcher;
pub use matcher::{Matcher, Scan};

pub mod rules;
pub use rules::{parse_rule, parse_rules, Rule, RuleTable};

pub mod stream;
pub use stream::{TranslitReader, TranslitWriter, Transliterator};

/// Generic transliteration configuration.
///
/// Contains only table-independent options. Options that only make sense for
/// one rule table belong in that table crate's config, which flattens this one.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Extra rules as `"source=replacement"` strings.
    /// Applied after the base table, so they override it.
    pub rules: Vec<String>,

    /// NFC-normalize `&str` input before transliterating.
    /// Rule tables are written in NFC, so decomposed input would not match.
    pub normalize_nfc: bool,

    /// Read size used by the streaming reader, in bytes.
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: vec![],
            normalize_nfc: true,
            buffer_size: 4096,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Add an override rule (`"source=replacement"`).
    pub fn add_rule(&mut self, rule: &str) {
        self.rules.push(rule.to_string());
    }

    /// Parse the override rules.
    pub fn parsed_rules(&self) -> Result<Vec<Rule>> {
        parse_rules(&self.rules)
    }
}

/// Utility helpers.
pub mod utils {
    use std::borrow::Cow;

    /// NFC-normalize a string, borrowing it when it is already normalized.
    pub fn normalize_nfc(s: &str) -> Cow<'_, str> {
        use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};
        match is_nfc_quick(s.chars()) {
            IsNormalized::Yes => Cow::Borrowed(s),
            _ => Cow::Owned(s.nfc().collect()),
        }
    }
}
