// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that name the core concepts of
// a bAbI corpus: tokens, sentences, stories, the two kinds of
// line record, and the errors the pipeline can raise.
//
// Rules for this layer:
//   - NO file I/O
//   - NO regex or parsing machinery
//   - NO burn types
//   - Only plain Rust structs, enums, type aliases and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// Tokens, sentences, stories and their encoded counterparts
pub mod story;

/// The two kinds of line found in a bAbI task file
pub mod record;

/// Typed errors raised by the data pipeline
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
