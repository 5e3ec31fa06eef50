use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One lexical unit extracted from a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appeared in the source text.
    pub word: String,
    /// Normalized/root form. Empty unless stemming was requested.
    #[serde(default)]
    pub stem: String,
    /// Detected language tag, e.g. `"en"`.
    #[serde(default)]
    pub language: String,
    /// Byte offsets where the word occurs in the source field. A single word
    /// may occur more than once.
    #[serde(default)]
    pub positions: Vec<i64>,
}

/// Per-field tokenize output: the ordered token stream plus any URLs the
/// service extracted from the field (populated only when URLs were requested).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizedField {
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Per-field convert output: the cleaned/normalized text, its stemmed form
/// (only when stemming was requested) and any extracted URLs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertedField {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub stem: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Tokenize reply, keyed by the same field prefixes as the request. The
/// service may omit fields it could not process but never invents new keys.
pub type TokenizedResult = HashMap<String, TokenizedField>;

/// Convert reply, keyed by the same field prefixes as the request.
pub type ConvertedResult = HashMap<String, ConvertedField>;
