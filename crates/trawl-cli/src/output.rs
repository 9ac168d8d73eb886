// Rust guideline compliant 2026-02-06

//! Output formatting module for the Trawl CLI.
//!
//! This module provides functionality for formatting search results
//! in various output formats (plain paths, JSON, long table).

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// A search result with the metadata the formatters need.
#[derive(Debug, Clone, Serialize)]
pub struct FoundEntry {
    /// The matched path.
    pub path: String,
    /// Entry kind: dir, file, symlink, other, or unknown.
    pub kind: String,
    /// Size in bytes, when the entry could be stat-ed.
    pub size: Option<u64>,
    /// Modification time, when the entry could be stat-ed.
    pub modified: Option<String>,
}

impl FoundEntry {
    /// Builds an entry from a path, stat-ing it without following
    /// symlinks. Stat failures leave the metadata fields empty.
    pub fn from_path(path: &Path) -> Self {
        let display = path.display().to_string();
        match path.symlink_metadata() {
            Ok(meta) => {
                let ft = meta.file_type();
                let kind = if ft.is_dir() {
                    "dir"
                } else if ft.is_file() {
                    "file"
                } else if ft.is_symlink() {
                    "symlink"
                } else {
                    "other"
                };
                let modified = meta.modified().ok().map(|m| {
                    let dt: DateTime<Utc> = m.into();
                    dt.format("%Y-%m-%d %H:%M:%S").to_string()
                });
                Self {
                    path: display,
                    kind: kind.to_string(),
                    size: Some(meta.len()),
                    modified,
                }
            }
            Err(_) => Self {
                path: display,
                kind: "unknown".to_string(),
                size: None,
                modified: None,
            },
        }
    }
}

/// Output formatter trait.
///
/// Defines the interface for formatting search results in different
/// output formats.
pub trait OutputFormatter {
    /// Formats the full result list for display.
    ///
    /// # Arguments
    /// * `entries` - The results to format
    ///
    /// # Returns
    /// A formatted string representation of the results
    fn format_results(&self, entries: &[FoundEntry]) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// Renders text with an ANSI color sequence.
fn paint(text: &str, color: Color, bold: bool) -> String {
    let mut ansi = Ansi::new(Vec::new());
    let _ = ansi.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(ansi, "{}", text);
    let _ = ansi.reset();
    String::from_utf8(ansi.into_inner()).unwrap_or_else(|_| text.to_string())
}

/// Plain output formatter: one path per line.
pub struct PlainFormatter {
    use_color: bool,
}

impl PlainFormatter {
    /// Creates a plain formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether directory results are colorized
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_results(&self, entries: &[FoundEntry]) -> String {
        let mut lines = Vec::with_capacity(entries.len());
        for entry in entries {
            if self.use_color && entry.kind == "dir" {
                lines.push(paint(&entry.path, Color::Blue, true));
            } else if self.use_color && entry.kind == "symlink" {
                lines.push(paint(&entry.path, Color::Cyan, false));
            } else {
                lines.push(entry.path.clone());
            }
        }
        lines.join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            format!("{} {}", paint("Error:", Color::Red, true), error)
        } else {
            format!("Error: {}", error)
        }
    }
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, entries: &[FoundEntry]) -> String {
        let output = json!({
            "results": entries,
            "total": entries.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize results" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Long output formatter.
///
/// Formats results as a human-readable table with kind, size and
/// modification time columns.
pub struct LongFormatter;

impl OutputFormatter for LongFormatter {
    fn format_results(&self, entries: &[FoundEntry]) -> String {
        if entries.is_empty() {
            return "No matches found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec![
            "Path".to_string(),
            "Type".to_string(),
            "Size".to_string(),
            "Modified".to_string(),
        ]);

        for entry in entries {
            builder.push_record(vec![
                entry.path.clone(),
                entry.kind.clone(),
                entry.size.map(humanize_size).unwrap_or_default(),
                entry.modified.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Renders a byte count with a binary unit suffix.
pub fn humanize_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Creates a formatter for the requested output format.
///
/// # Arguments
/// * `format` - One of "plain", "json", or "long"
/// * `use_color` - Whether colored output is enabled
///
/// # Returns
/// A boxed formatter; unknown formats fall back to plain.
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "long" => Box::new(LongFormatter),
        _ => Box::new(PlainFormatter::new(use_color)),
    }
}
