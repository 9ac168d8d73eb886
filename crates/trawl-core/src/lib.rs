// Rust guideline compliant 2026-02-06

//! Trawl Core Library
//!
//! This crate provides the foundational components for the Trawl file finder:
//! - Name matchers and combinators (exact, substring, glob, regex)
//! - Metadata filters (size, kind, depth, modification time)
//! - Glob to regex translation
//! - Ignore-file rules and scoped evaluation
//! - Directory traversal with pruning and parallel result dispatch
//! - Configuration loading and error types

pub mod config;
pub mod error;
pub mod filter;
pub mod glob;
pub mod ignore;
pub mod matcher;
pub mod walk;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use filter::{DepthMatcher, FileKind, KindMatcher, MtimeMatcher, SizeMatcher};
pub use ignore::{IgnoreRules, IgnoreStack};
pub use matcher::{
    HiddenMatcher, MatchMode, Matcher, MatcherSet, MaxResultsMatcher, NameMatcher, NopMatcher,
    NotMatcher, SuffixMatcher,
};
pub use walk::{FindOptions, Finder};
