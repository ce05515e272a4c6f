// ============================================================
// Layer 4 — Vocabulary
// ============================================================
// Maps every distinct training token to an integer id.
//
// Ids are assigned in sorted (byte-wise lexicographic) order
// starting at 1. Id 0 is reserved for tokens that are not in
// the map:
//
//   tokens {"the", "Mary", "."}   →   "." = 1, "Mary" = 2, "the" = 3
//   reverse:                          0 = "UNK", 1 = ".", 2 = "Mary", 3 = "the"
//
// The two directions are stored separately. The forward map
// never contains an entry for id 0, so a real token spelled
// "UNK" gets its own positive id like any other word.
//
// Only the training split's tokens are used; test-only tokens
// therefore look up to 0.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::story::{Token, TokenId};

/// Id returned for any token missing from the vocabulary
pub const UNK_ID: TokenId = 0;

/// Reverse-direction label for [`UNK_ID`]
pub const UNK_TOKEN: &str = "UNK";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// token → id, ids 1..=N
    forward: HashMap<Token, TokenId>,
    /// id → token, index 0 holds "UNK"
    reverse: Vec<Token>,
}

impl Vocabulary {
    /// Build from a sorted token set. BTreeSet iteration order
    /// is exactly the id assignment order.
    pub fn from_tokens(tokens: &BTreeSet<Token>) -> Self {
        let mut reverse = Vec::with_capacity(tokens.len() + 1);
        reverse.push(UNK_TOKEN.to_string());
        reverse.extend(tokens.iter().cloned());

        let forward = tokens
            .iter()
            .zip(1..)
            .map(|(token, id)| (token.clone(), id))
            .collect();

        tracing::debug!("Built vocabulary of {} tokens (+1 UNK)", tokens.len());
        Self { forward, reverse }
    }

    /// Id of `token`, or [`UNK_ID`] if it was never seen in training
    pub fn id(&self, token: &str) -> TokenId {
        self.forward.get(token).copied().unwrap_or(UNK_ID)
    }

    /// Token for `id`; `token(0)` is "UNK"
    pub fn token(&self, id: TokenId) -> Option<&str> {
        self.reverse.get(id as usize).map(String::as_str)
    }

    /// Number of entries including the UNK slot
    pub fn size(&self) -> usize {
        self.reverse.len()
    }

    /// Iterate (token, id) pairs in id order, UNK excluded
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> + '_ {
        self.reverse.iter().zip(0..).skip(1).map(|(t, id)| (t.as_str(), id))
    }
}
