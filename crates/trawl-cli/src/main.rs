// Rust guideline compliant 2026-02-06

//! Trawl CLI Application
//!
//! Command-line interface for the Trawl file finder.

use clap::Parser;
use std::path::PathBuf;
use trawl_cli::parse::{parse_kinds, parse_size, parse_time};
use trawl_cli::{create_formatter, should_use_color};
use trawl_core::{Config, FindOptions, MatchMode};

#[derive(Parser, Debug)]
#[command(
    name = "trawl",
    version,
    about = "Trawl: recursive, filter-driven file search",
    long_about = "Trawl walks a directory tree and prints the entries matching a name pattern and a set of metadata filters. Patterns are substrings by default; glob, regex and exact modes are available.",
    after_help = "Examples:\n  trawl main.rs\n  trawl --glob '*.toml' --max-depth 2\n  trawl -e rs -t f src\n  trawl --newer 7d --min-size 1m /var/log\n  trawl conf -i --hidden --format long\n"
)]
struct Cli {
    /// Name pattern to search for (substring match by default)
    pattern: Option<String>,

    /// Directory to search (defaults to the current directory)
    path: Option<PathBuf>,

    /// Interpret the pattern as a shell glob
    #[arg(long, conflicts_with_all = ["regex", "exact"])]
    glob: bool,

    /// Interpret the pattern as a regular expression
    #[arg(long, conflicts_with = "exact")]
    regex: bool,

    /// Match the pattern against the whole name
    #[arg(long)]
    exact: bool,

    /// Case-insensitive matching
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Include hidden entries
    #[arg(short = 'H', long)]
    hidden: bool,

    /// Do not honor .gitignore files
    #[arg(short = 'I', long)]
    no_ignore: bool,

    /// Descend into symlinked directories
    #[arg(short = 'L', long)]
    follow: bool,

    /// Restrict file results to these extensions
    #[arg(short = 'e', long = "extension", value_delimiter = ',')]
    extensions: Vec<String>,

    /// Restrict results to these types (d f l x e s p)
    #[arg(short = 't', long = "type", value_delimiter = ',')]
    types: Vec<String>,

    /// Exclude entries matching these globs (directories are pruned)
    #[arg(short = 'E', long = "exclude")]
    exclude: Vec<String>,

    /// Only results deeper than this (exclusive)
    #[arg(long)]
    min_depth: Option<usize>,

    /// Only results shallower than this (exclusive)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Only results at exactly this depth
    #[arg(long, conflicts_with_all = ["min_depth", "max_depth"])]
    exact_depth: Option<usize>,

    /// Only files larger than this (exclusive; accepts b/k/m/g suffixes)
    #[arg(long)]
    min_size: Option<String>,

    /// Only files smaller than this (exclusive; accepts b/k/m/g suffixes)
    #[arg(long)]
    max_size: Option<String>,

    /// Only results modified after this time (RFC 3339, YYYY-MM-DD, or an age like 7d)
    #[arg(long)]
    newer: Option<String>,

    /// Only results modified before this time (RFC 3339, YYYY-MM-DD, or an age like 7d)
    #[arg(long)]
    older: Option<String>,

    /// Stop after this many results
    #[arg(long)]
    max_results: Option<usize>,

    /// Worker threads (0 = automatic)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormatArg>,

    /// Enable JSON output
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Custom config directory
    #[arg(long)]
    config: Option<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Plain,
    Json,
    Long,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_dir = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_config_dir);
    let config = Config::load(&config_dir)?;

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormatArg::Plain) => "plain",
        Some(OutputFormatArg::Json) => "json",
        Some(OutputFormatArg::Long) => "long",
        None => {
            if cli.json {
                "json"
            } else {
                match config.output_format {
                    trawl_core::OutputFormat::Plain => "plain",
                    trawl_core::OutputFormat::Json => "json",
                    trawl_core::OutputFormat::Long => "long",
                }
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    let root = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let options = build_options(&cli, &config)?;

    trawl_cli::commands::find::execute(&root, options, formatter.as_ref())?;

    Ok(())
}

/// Layers command-line flags over loaded configuration.
fn build_options(cli: &Cli, config: &Config) -> anyhow::Result<FindOptions> {
    let mode = if cli.glob {
        MatchMode::Glob
    } else if cli.regex {
        MatchMode::Regex
    } else if cli.exact {
        MatchMode::Exact
    } else {
        MatchMode::Substring
    };

    let mut options = FindOptions::from_config(config);
    options.pattern = cli.pattern.clone().unwrap_or_default();
    options.mode = mode;
    options.ignore_case = cli.ignore_case;
    options.show_hidden = cli.hidden || config.show_hidden;
    options.follow_symlinks = cli.follow || config.follow_symlinks;
    options.respect_ignore_files = !cli.no_ignore && config.respect_ignore_files;
    options.exclude.extend(cli.exclude.iter().cloned());
    options.kinds = parse_kinds(&cli.types)?;
    options.suffixes = cli.extensions.clone();
    options.exact_depth = cli.exact_depth;
    options.min_depth = cli.min_depth;
    options.max_depth = cli.max_depth;
    options.max_results = cli.max_results.unwrap_or(0);
    if let Some(threads) = cli.threads {
        options.threads = threads;
    }

    options.min_size = cli.min_size.as_deref().map(parse_size).transpose()?;
    options.max_size = cli.max_size.as_deref().map(parse_size).transpose()?;
    options.modified_after = cli.newer.as_deref().map(parse_time).transpose()?;
    options.modified_before = cli.older.as_deref().map(parse_time).transpose()?;

    Ok(options)
}

/// Resolves the default config directory.
///
/// `$XDG_CONFIG_HOME/trawl` when set, otherwise `$HOME/.config/trawl`.
/// Falls back to the current directory when neither is available, which
/// simply means no config file is found.
fn default_config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("trawl");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config").join("trawl");
    }
    PathBuf::from(".")
}
