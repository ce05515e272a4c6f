// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Where the corpus lives on disk.
//
//   corpus.rs — maps the "small" / "large" size selector to
//               the directory of the matching bAbI release
//
// Kept apart from the data layer so the directory layout can
// change without touching parsing or batching.

/// Corpus size selector and directory layout
pub mod corpus;
