// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All loading work is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `stats`   — loads a corpus and prints split shapes
//   2. `batches` — loads a corpus and prints training batches
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{BatchesArgs, Commands, CorpusArgs, StatsArgs};

use crate::application::load_use_case::{BabiSplits, LoadConfig, LoadUseCase, SplitStats};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "babi-data",
    version,
    about = "Parse bAbI question-answering tasks into encoded mini-batches."
)]
pub struct Cli {
    /// The subcommand to run (stats or batches)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct handler.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Stats(args)   => run_stats(args),
            Commands::Batches(args) => run_batches(args),
        }
    }
}

fn load(corpus: CorpusArgs) -> Result<BabiSplits> {
    let config = LoadConfig::try_from(corpus).context("Invalid corpus arguments")?;
    LoadUseCase::new(config).execute()
}

/// Handles the `stats` subcommand.
fn run_stats(args: StatsArgs) -> Result<()> {
    let splits = load(args.corpus)?;
    let train  = SplitStats::from(&splits.train);
    let test   = SplitStats::from(&splits.test);

    if args.json {
        let report = serde_json::json!({ "train": train, "test": test });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("split  examples  vocab  story  sentence  question");
    for (name, s) in [("train", train), ("test", test)] {
        println!(
            "{:<5}  {:>8}  {:>5}  {:>5}  {:>8}  {:>8}",
            name, s.examples, s.vocab_size, s.max_story_len, s.max_sentence_len, s.max_question_len
        );
    }
    Ok(())
}

/// Handles the `batches` subcommand.
fn run_batches(args: BatchesArgs) -> Result<()> {
    let BabiSplits { mut train, .. } = load(args.corpus)?;

    for n in 1..=args.count {
        let (stories, questions, answers) = train
            .next_batch(args.batch_size)
            .with_context(|| format!("Cannot fetch batch {n}"))?
            .into_parts();

        println!("batch {n}:");
        println!("  stories:   {stories:?}");
        println!("  questions: {questions:?}");
        println!("  answers:   {answers:?}");
        println!(
            "  cursor:    index {} / epoch {}",
            train.index_in_epoch(),
            train.epochs_completed()
        );
    }
    Ok(())
}
