// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The use case only needs "give me the train files and the
// test files". Where they come from is an implementation
// detail:
//   - BabiDirectory → filters a directory listing by name
//   - tests         → hand-built lists in a temp directory
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::PathBuf;

use crate::domain::error::DataError;

/// The ordered file lists of the two splits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitFiles {
    pub train: Vec<PathBuf>,
    pub test:  Vec<PathBuf>,
}

// ─── SplitSource ──────────────────────────────────────────────────────────────
/// Any component that can name the files of a train/test split.
pub trait SplitSource {
    fn split_files(&self) -> Result<SplitFiles, DataError>;
}
