//! Common types and utilities for the wpfjs lowering engine.
//!
//! This crate provides foundational types used across all wpfjs crates:
//! - Trivia spans attached to syntax nodes (`Trivia`)
//! - Output formatting kinds (`NewLineKind`, `IndentStyle`)
//! - Nesting limits

// Trivia - whitespace and comments carried verbatim from the source
pub mod trivia;
pub use trivia::Trivia;

// Common types - Shared formatting enums
pub mod common;
pub use common::{IndentStyle, NewLineKind};

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "tests/trivia_tests.rs"]
mod trivia_tests;
#[cfg(test)]
#[path = "tests/common_tests.rs"]
mod common_tests;
