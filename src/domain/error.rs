// ============================================================
// Layer 3 — Data Pipeline Errors
// ============================================================
// The fatal failures of the pipeline. Malformed input lines are
// NOT errors: the parser logs and skips them.
//
// Application code wraps these in anyhow::Error with context;
// tests match on the variants directly.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    /// Parallel story/question/answer sequences of one split differ in length
    #[error("split size mismatch: {stories} stories, {questions} questions, {answers} answers")]
    SizeMismatch {
        stories:   usize,
        questions: usize,
        answers:   usize,
    },

    /// A batch was requested that is larger than the whole split
    #[error("batch size {batch_size} cannot be greater than data size {len}")]
    BatchTooLarge { batch_size: usize, len: usize },

    /// The corpus size selector was neither "small" nor "large"
    #[error("invalid size {0:?}: choose 'small' or 'large' (10k)")]
    UnknownSize(String),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
