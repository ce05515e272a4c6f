// ============================================================
// Layer 6 — Corpus Location
// ============================================================
// The bAbI v1.2 release comes in two sizes:
//
//   small → data/tasks_1-20_v1-2/en/       (1k questions per task)
//   large → data/tasks_1-20_v1-2/en-10k/   (10k questions per task)
//
// The selector is parsed from a string so it can come straight
// from the command line or a JSON config.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::DataError;

/// Root of the extracted bAbI archive
pub const CORPUS_ROOT: &str = "data/tasks_1-20_v1-2";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSize {
    #[default]
    Small,
    Large,
}

impl DataSize {
    /// Directory holding the task files for this size
    pub fn dir(self) -> PathBuf {
        let leaf = match self {
            DataSize::Small => "en",
            DataSize::Large => "en-10k",
        };
        PathBuf::from(CORPUS_ROOT).join(leaf)
    }
}

impl FromStr for DataSize {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            other   => Err(DataError::UnknownSize(other.to_string())),
        }
    }
}

impl fmt::Display for DataSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSize::Small => write!(f, "small"),
            DataSize::Large => write!(f, "large"),
        }
    }
}
