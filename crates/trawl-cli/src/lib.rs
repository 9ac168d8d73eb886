// Rust guideline compliant 2026-02-06

//! Trawl CLI Library
//!
//! Argument parsing helpers, output formatting, and the search command
//! behind the `trawl` binary.

pub mod commands;
pub mod output;
pub mod parse;
pub mod terminal;

pub use output::{create_formatter, FoundEntry, OutputFormatter};
pub use terminal::should_use_color;
