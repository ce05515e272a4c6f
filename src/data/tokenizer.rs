// ============================================================
// Layer 4 — Word Tokenizer
// ============================================================
// Splits raw text into word and punctuation tokens.
//
// A token is either:
//   - a maximal run of ASCII word characters and apostrophes
//     ("Mary", "John's", "10k")
//   - a single mark from the set  . , ! ? ;
//
// Everything else (spaces, tabs, other symbols) separates
// tokens and is dropped. No lowercasing, no stemming.
//
// Example:
//   "Where is Mary?"  →  ["Where", "is", "Mary", "?"]
//
// The task files are ASCII, so the word class is ASCII-only
// ((?-u) turns off Unicode classes for the whole pattern).
//
// Reference: regex crate documentation (find_iter)
//            Rust Book §13 (Iterators)

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::story::{Sentence, Token};

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)[\w']+|[.,!?;]").expect("token pattern is valid")
});

/// Lazily yield the tokens of `raw` as slices of the input.
pub fn tokens(raw: &str) -> impl Iterator<Item = &str> + '_ {
    TOKEN_RE.find_iter(raw).map(|m| m.as_str())
}

/// Tokenize `raw` into an owned sentence.
pub fn tokenize(raw: &str) -> Sentence {
    tokens(raw).map(Token::from).collect()
}
