// Rust guideline compliant 2026-02-06

//! Error types for the Trawl core library.

use thiserror::Error;

/// Result type alias for Trawl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Trawl operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Filter specification is inconsistent.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Search root is missing or not a directory.
    #[error("Invalid search root: {0}")]
    InvalidRoot(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Worker pool could not be constructed.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
