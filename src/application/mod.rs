// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal: turning a bAbI task directory into a train and a test
// dataset that share one vocabulary.
//
// Rules for this layer:
//   - No parsing or batching logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The corpus loading workflow
pub mod load_use_case;
