// ============================================================
// Layer 2 — LoadUseCase
// ============================================================
// Orchestrates the full loading pipeline in order:
//
//   Step 1: Resolve the corpus directory   (Layer 6 - infra)
//   Step 2: Find train / test files        (Layer 4 - data)
//   Step 3: Parse every split              (Layer 4 - data)
//   Step 4: Build vocabulary from TRAIN    (Layer 4 - data)
//   Step 5: Encode every split             (Layer 4 - data)
//   Step 6: Wrap each split in a dataset   (Layer 4 - data)
//
// The vocabulary comes from the first split only. Later splits
// reuse it, so tokens that appear only in test data encode to 0.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::BabiDataset,
    encoder::encode_split,
    loader::BabiDirectory,
    parser::{read_babi_files, ParsedSplit},
    vocab::Vocabulary,
};
use crate::domain::traits::SplitSource;
use crate::infra::corpus::DataSize;

// ─── Load Configuration ──────────────────────────────────────────────────────
// Which corpus to read and which tasks to keep.
// Serialisable so a run can record exactly what it loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    pub size:     DataSize,
    /// Overrides the directory implied by `size`
    pub data_dir: Option<PathBuf>,
    pub prefix:   String,
    pub suffix:   String,
}

impl LoadConfig {
    /// Directory the task files are read from
    pub fn resolved_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| self.size.dir())
    }
}

// ─── Results ──────────────────────────────────────────────────────────────────
/// The two datasets of a corpus. Both hold the same vocabulary.
#[derive(Debug, Clone)]
pub struct BabiSplits {
    pub train: BabiDataset,
    pub test:  BabiDataset,
}

/// Shape summary of one dataset, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitStats {
    pub examples:         usize,
    pub vocab_size:       usize,
    pub max_story_len:    usize,
    pub max_sentence_len: usize,
    pub max_question_len: usize,
}

impl From<&BabiDataset> for SplitStats {
    fn from(ds: &BabiDataset) -> Self {
        Self {
            examples:         ds.len(),
            vocab_size:       ds.vocab_size(),
            max_story_len:    ds.max_story_len(),
            max_sentence_len: ds.max_sentence_len(),
            max_question_len: ds.max_question_len(),
        }
    }
}

// ─── LoadUseCase ──────────────────────────────────────────────────────────────
pub struct LoadUseCase {
    config: LoadConfig,
}

impl LoadUseCase {
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    /// Execute the full loading pipeline end to end
    pub fn execute(&self) -> Result<BabiSplits> {
        let cfg = &self.config;
        let dir = cfg.resolved_dir();
        tracing::info!(
            "Loading bAbI tasks from '{}' (prefix {:?}, suffix {:?})",
            dir.display(),
            cfg.prefix,
            cfg.suffix
        );

        let source = BabiDirectory::new(dir, cfg.prefix.clone(), cfg.suffix.clone());
        read_babi_all(&source)
    }
}

/// Discover the train/test files of `source` and load both.
pub fn read_babi_all(source: &impl SplitSource) -> Result<BabiSplits> {
    let files = source
        .split_files()
        .context("Cannot list bAbI task files")?;
    read_babi_split(&files.train, &files.test)
}

/// Load a train and a test file list into two datasets.
pub fn read_babi_split<P: AsRef<Path>>(train: &[P], test: &[P]) -> Result<BabiSplits> {
    let train_files: Vec<&Path> = train.iter().map(AsRef::as_ref).collect();
    let test_files:  Vec<&Path> = test.iter().map(AsRef::as_ref).collect();

    let [train, test]: [BabiDataset; 2] = read_babi_splits(&[train_files, test_files])?
        .try_into()
        .map_err(|v: Vec<BabiDataset>| anyhow!("expected 2 datasets, got {}", v.len()))?;
    Ok(BabiSplits { train, test })
}

/// Load any number of splits. The vocabulary is built from the
/// FIRST split and shared by every returned dataset.
pub fn read_babi_splits<P: AsRef<Path>>(splits: &[Vec<P>]) -> Result<Vec<BabiDataset>> {
    let parsed: Vec<ParsedSplit> = splits
        .iter()
        .enumerate()
        .map(|(i, paths)| {
            read_babi_files(paths.as_slice()).with_context(|| format!("Cannot parse split #{i}"))
        })
        .collect::<Result<_>>()?;

    let Some(first) = parsed.first() else {
        return Ok(Vec::new());
    };
    let vocab = Arc::new(Vocabulary::from_tokens(&first.vocab));
    tracing::info!("Vocabulary: {} entries (including UNK)", vocab.size());

    parsed
        .iter()
        .enumerate()
        .map(|(i, split)| {
            let encoded = encode_split(&vocab, split);
            BabiDataset::from_encoded(encoded, Arc::clone(&vocab))
                .with_context(|| format!("Cannot build dataset for split #{i}"))
        })
        .collect()
}
