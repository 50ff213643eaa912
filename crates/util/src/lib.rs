//! avl-forest-util - Test data generation for avl-forest
//!
//! Provides a seeded fuzzer that produces reproducible operation traces for
//! model-based testing of the tree.

pub mod fuzzer;
pub mod trace;

pub use fuzzer::Fuzzer;
pub use trace::{Op, TraceConfig};
