//! Rule-table data interface.
//!
//! Rules arrive either from static tables compiled into a language crate or
//! as text: `"source=replacement"` strings in a config, or a `[rules]` table
//! in a TOML file. Text input is validated here so that `Trie::insert` only
//! ever sees non-empty sources.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslitError};
use crate::trie::Trie;

/// A single rewrite rule: `source` bytes are replaced with `replacement`.
///
/// An empty replacement deletes the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub source: Vec<u8>,
    pub replacement: Vec<u8>,
}

impl Rule {
    pub fn new<S: AsRef<[u8]>, R: AsRef<[u8]>>(source: S, replacement: R) -> Self {
        Self {
            source: source.as_ref().to_vec(),
            replacement: replacement.as_ref().to_vec(),
        }
    }
}

/// Parse a textual rule of the form `source=replacement`.
///
/// The line is split at the first `=`, so a replacement may itself contain
/// `=`. Surrounding whitespace is kept: `" =_"` maps a space to an
/// underscore.
///
/// # Example
/// ```
/// use translit_core::rules::parse_rule;
///
/// let rule = parse_rule("щ=shch").unwrap();
/// assert_eq!(rule.source, "щ".as_bytes());
/// assert_eq!(rule.replacement, b"shch");
///
/// // deletion rule
/// assert!(parse_rule("ь=").unwrap().replacement.is_empty());
/// assert!(parse_rule("=x").is_err());
/// ```
pub fn parse_rule(line: &str) -> Result<Rule> {
    let (source, replacement) = line
        .split_once('=')
        .ok_or_else(|| TranslitError::MalformedRule(line.to_string()))?;
    if source.is_empty() {
        return Err(TranslitError::EmptySource);
    }
    Ok(Rule::new(source, replacement))
}

/// Parse a list of textual rules, stopping at the first invalid one.
pub fn parse_rules(lines: &[String]) -> Result<Vec<Rule>> {
    lines.iter().map(|l| parse_rule(l)).collect()
}

/// A named rule table as stored on disk.
///
/// ```toml
/// name = "custom"
///
/// [rules]
/// "ж" = "zh"
/// "ь" = ""
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(default)]
    pub name: String,
    pub rules: BTreeMap<String, String>,
}

impl RuleTable {
    /// Build a table from `(source, replacement)` string pairs.
    pub fn from_pairs<'a, I>(name: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            name: name.to_string(),
            rules: pairs
                .into_iter()
                .map(|(s, r)| (s.to_string(), r.to_string()))
                .collect(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validated rules in source order.
    pub fn to_rules(&self) -> Result<Vec<Rule>> {
        self.rules
            .iter()
            .map(|(s, r)| {
                if s.is_empty() {
                    Err(TranslitError::EmptySource)
                } else {
                    Ok(Rule::new(s, r))
                }
            })
            .collect()
    }

    pub fn build_trie(&self) -> Result<Trie> {
        Ok(Trie::from_rules(self.to_rules()?))
    }
}
