// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from bAbI task files all the
// way to mini-batches of token ids.
//
// The pipeline flows in this order:
//
//   task directory
//       │
//       ▼
//   BabiDirectory     → picks the train and test files
//       │
//       ▼
//   parser            → classifies lines, tracks stories,
//       │               collects the token set
//       ▼
//   Vocabulary        → sorted token → id map, 0 = UNK
//       │
//       ▼
//   encoder           → tokens → ids, nesting preserved
//       │
//       ▼
//   BabiDataset       → shape metadata + sequential batches
//                       (EpochCursor tracks the position)
//
// Each module is responsible for exactly one step.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Finds train/test task files in a directory
pub mod loader;

/// Word and punctuation tokenizer
pub mod tokenizer;

/// Line classification and story tracking
pub mod parser;

/// Token ↔ id mapping with the UNK fallback
pub mod vocab;

/// Applies the vocabulary to a parsed split
pub mod encoder;

/// Position of sequential batch retrieval
pub mod cursor;

/// Encoded split with batching and shape metadata
pub mod dataset;
