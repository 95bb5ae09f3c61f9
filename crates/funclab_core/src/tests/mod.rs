//! Cross-module tests for the engine
//!
//! Tests are organized by topic:
//! - `worked_examples` - Textbook cases checked end to end
//! - `sampling` - Determinism, ordering and coverage of sampled sequences
//! - `catalog_flow` - Problem catalog transitions across reloads

mod worked_examples;
