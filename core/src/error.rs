//! Error type for rule loading and trie artifacts.
//!
//! Matching never fails. Everything here belongs to the build side: parsing
//! rule strings, reading TOML tables and decoding compiled tries.

use thiserror::Error;

/// Errors produced while building or loading transliteration data.
#[derive(Debug, Error)]
pub enum TranslitError {
    /// A rule with a zero-length source pattern.
    #[error("rule source must not be empty")]
    EmptySource,

    /// A textual rule that is not of the form `source=replacement`.
    #[error("malformed rule: {0:?}")]
    MalformedRule(String),

    /// A compiled trie whose arena does not describe a tree.
    #[error("corrupt trie artifact: {0}")]
    CorruptTrie(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("bincode: {0}")]
    Bincode(#[from] Box<bincode::ErrorKind>),

    #[error("toml: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("toml: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, TranslitError>;
