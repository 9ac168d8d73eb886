// Rust guideline compliant 2026-02-06

//! Command implementations for the Trawl CLI.

pub mod find;
