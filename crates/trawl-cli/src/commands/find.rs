// Rust guideline compliant 2026-02-06

//! Implementation of the `trawl` search command.
//!
//! Runs a search described by [`FindOptions`] and prints the results
//! through the selected output formatter.

use crate::output::{FoundEntry, OutputFormatter};
use crate::terminal::print_warning;
use anyhow::Result;
use std::path::Path;
use trawl_core::{FindOptions, Finder};

/// Runs a search and prints its results.
///
/// # Arguments
///
/// * `root` - The directory to search
/// * `options` - The compiled search request
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// The number of results printed.
///
/// # Errors
///
/// Returns an error if the root is invalid or a pattern in the options
/// fails to compile.
pub fn execute(
    root: &Path,
    options: FindOptions,
    formatter: &dyn OutputFormatter,
) -> Result<usize> {
    let finder = Finder::new(options);
    let paths = finder.find(root)?;

    let entries: Vec<FoundEntry> = paths.iter().map(|p| FoundEntry::from_path(p)).collect();

    let opaque = entries.iter().filter(|e| e.kind == "unknown").count();
    if opaque > 0 {
        print_warning(&format!("{} results could not be inspected", opaque));
    }

    let rendered = formatter.format_results(&entries);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::PlainFormatter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_counts_results() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.rs"), "").unwrap();
        fs::write(temp.path().join("two.rs"), "").unwrap();
        fs::write(temp.path().join("three.txt"), "").unwrap();

        let options = FindOptions {
            suffixes: vec!["rs".to_string()],
            ..FindOptions::default()
        };
        let formatter = PlainFormatter::new(false);
        let count = execute(temp.path(), options, &formatter).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_execute_missing_root_fails() {
        let formatter = PlainFormatter::new(false);
        let result = execute(
            Path::new("/no/such/root"),
            FindOptions::default(),
            &formatter,
        );
        assert!(result.is_err());
    }
}
