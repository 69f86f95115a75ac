//! # uknational
//!
//! Ukrainian national Cyrillic to Latin transliteration built on translit-core.
//!
//! ```
//! assert_eq!(uknational::to_latin().transliterate("Біла Церква"), "Bila Tserkva");
//! ```

pub mod config;
pub mod rules;

use std::sync::Arc;

use once_cell::sync::Lazy;
use translit_core::{Rule, RuleTable, Transliterator, Trie};

pub use config::UkNationalConfig;
pub use rules::{APOSTROPHES, UK_NATIONAL};

/// Trie of the built-in table, built on first use and shared afterwards.
static UK_NATIONAL_TRIE: Lazy<Arc<Trie>> = Lazy::new(|| Arc::new(Trie::from_rules(table_rules())));

/// The built-in table as core rules.
pub fn table_rules() -> Vec<Rule> {
    UK_NATIONAL
        .entries()
        .map(|(source, replacement)| Rule::new(source, replacement))
        .collect()
}

/// The built-in table as a serializable rule table.
pub fn rule_table() -> RuleTable {
    RuleTable::from_pairs("uknational", UK_NATIONAL.entries().map(|(s, r)| (*s, *r)))
}

/// Transliterator for the national table with default options.
pub fn to_latin() -> Transliterator {
    Transliterator::new(UK_NATIONAL_TRIE.clone())
}

/// Transliterator for the national table with the given options applied.
///
/// Table-level options are inserted after the built-in rules and the
/// config's override rules after those, so later entries win.
pub fn to_latin_with_config(config: &UkNationalConfig) -> translit_core::Result<Transliterator> {
    let mut base = table_rules();
    if config.keep_apostrophe {
        base.extend(APOSTROPHES.iter().map(|a| Rule::new(a, a)));
    }
    Transliterator::from_config(base, &config.base)
}
