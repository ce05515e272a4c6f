// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `stats` and `batches`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::load_use_case::LoadConfig;
use crate::domain::error::DataError;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print vocabulary size and max lengths of the train and test splits
    Stats(StatsArgs),

    /// Print the first few training batches
    Batches(BatchesArgs),
}

/// Which corpus and which tasks to load. Shared by every command.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Corpus size: "small" (1k) or "large" (10k)
    #[arg(long, default_value = "small")]
    pub size: String,

    /// Read task files from this directory instead of the one implied by --size
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Keep only task files whose name starts with this, e.g. "qa1_"
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Keep only task files whose name ends with "<suffix>_train.txt" / "<suffix>_test.txt"
    #[arg(long, default_value = "")]
    pub suffix: String,
}

/// Convert CLI CorpusArgs into the application-layer LoadConfig.
/// The size string is validated here; an unknown size is an error.
impl TryFrom<CorpusArgs> for LoadConfig {
    type Error = DataError;

    fn try_from(a: CorpusArgs) -> Result<Self, Self::Error> {
        Ok(LoadConfig {
            size:     a.size.parse()?,
            data_dir: a.data_dir,
            prefix:   a.prefix,
            suffix:   a.suffix,
        })
    }
}

/// All arguments for the `stats` command
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// All arguments for the `batches` command
#[derive(Args, Debug)]
pub struct BatchesArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Examples per batch
    #[arg(long, default_value_t = 1)]
    pub batch_size: usize,

    /// Number of batches to print
    #[arg(long, default_value_t = 2)]
    pub count: usize,
}
