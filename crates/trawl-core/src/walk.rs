// Rust guideline compliant 2026-02-06

//! Directory traversal and search execution.
//!
//! [`Finder`] walks a root top-down, classifying each entry as a
//! directory-like or file-like candidate. Three matcher sets drive the
//! walk: a prune set decides which directories are entered at all, and
//! the directory and file sets decide which candidates become results.
//! Both candidate sets share one result cap so `max_results` bounds the
//! whole search.

use crate::config::Config;
use crate::filter::{DepthMatcher, FileKind, KindMatcher, MtimeMatcher, SizeMatcher};
use crate::ignore::IgnoreStack;
use crate::matcher::{
    HiddenMatcher, MatchMode, Matcher, MatcherSet, MaxResultsMatcher, NameMatcher, NotMatcher,
    SuffixMatcher,
};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A complete search request.
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Name pattern; an empty substring pattern matches everything.
    pub pattern: String,
    /// How the pattern is interpreted.
    pub mode: MatchMode,
    /// Case-insensitive name matching.
    pub ignore_case: bool,
    /// Include entries whose name begins with a dot.
    pub show_hidden: bool,
    /// Descend into symlinked directories.
    pub follow_symlinks: bool,
    /// Honor `.gitignore` files found during the walk.
    pub respect_ignore_files: bool,
    /// Glob patterns excluding entries (and pruning directories) by name.
    pub exclude: Vec<String>,
    /// Restrict results to these kinds; empty means all kinds.
    pub kinds: Vec<FileKind>,
    /// Restrict file results to these extensions; empty means all.
    pub suffixes: Vec<String>,
    /// Exclusive lower size bound for file results, in bytes.
    pub min_size: Option<u64>,
    /// Exclusive upper size bound for file results, in bytes.
    pub max_size: Option<u64>,
    /// Only results at exactly this depth below the root.
    pub exact_depth: Option<usize>,
    /// Exclusive lower depth bound.
    pub min_depth: Option<usize>,
    /// Exclusive upper depth bound.
    pub max_depth: Option<usize>,
    /// Only results modified strictly after this instant.
    pub modified_after: Option<DateTime<Utc>>,
    /// Only results modified strictly before this instant.
    pub modified_before: Option<DateTime<Utc>>,
    /// Stop admitting results after this many; zero means unlimited.
    pub max_results: usize,
    /// Worker threads for callback dispatch; zero picks a default.
    pub threads: usize,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            mode: MatchMode::Substring,
            ignore_case: false,
            show_hidden: false,
            follow_symlinks: false,
            respect_ignore_files: true,
            exclude: Vec::new(),
            kinds: Vec::new(),
            suffixes: Vec::new(),
            min_size: None,
            max_size: None,
            exact_depth: None,
            min_depth: None,
            max_depth: None,
            modified_after: None,
            modified_before: None,
            max_results: 0,
            threads: 0,
        }
    }
}

impl FindOptions {
    /// Seeds options from loaded configuration. Filter fields keep their
    /// defaults; only behavioral settings are taken from the config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            show_hidden: config.show_hidden,
            follow_symlinks: config.follow_symlinks,
            respect_ignore_files: config.respect_ignore_files,
            exclude: config.exclude.clone(),
            threads: config.threads,
            ..Self::default()
        }
    }
}

/// The matcher sets a search compiles down to.
struct CandidateSets {
    /// Gate for descending into a directory.
    prune: Arc<MatcherSet>,
    /// Full predicate for directory-like candidates.
    dirs: MatcherSet,
    /// Full predicate for file-like candidates.
    files: MatcherSet,
}

/// Executes searches described by [`FindOptions`].
pub struct Finder {
    options: FindOptions,
}

impl Finder {
    /// Creates a finder for one set of options.
    pub fn new(options: FindOptions) -> Self {
        Self { options }
    }

    /// Runs the search and returns matching paths in walk order.
    ///
    /// Unreadable directories below the root are skipped; only a missing
    /// or non-directory root is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not a directory or a pattern in
    /// the options fails to compile.
    pub fn find(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(Error::InvalidRoot(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let sets = self.build_sets(root)?;
        let mut ignores = IgnoreStack::new();
        let mut results = Vec::new();
        self.walk_dir(root, &sets, &mut ignores, &mut results);
        Ok(results)
    }

    /// Runs the search and dispatches each result to `cb` on a worker
    /// pool sized by `threads`.
    ///
    /// # Returns
    ///
    /// The number of results dispatched.
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails or the pool cannot be built.
    pub fn find_each<F>(&self, root: &Path, cb: F) -> Result<usize>
    where
        F: Fn(&Path) + Send + Sync,
    {
        let results = self.find(root)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.threads)
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;
        pool.install(|| results.par_iter().for_each(|p| cb(p)));
        Ok(results.len())
    }

    /// Compiles the options into prune, directory and file matcher sets.
    fn build_sets(&self, root: &Path) -> Result<CandidateSets> {
        let options = &self.options;

        let mut prune = MatcherSet::new();
        prune.add(HiddenMatcher::new(options.show_hidden));
        for pattern in &options.exclude {
            prune.add(NotMatcher::new(NameMatcher::new(
                pattern,
                MatchMode::Glob,
                options.ignore_case,
            )?));
        }
        let prune = Arc::new(prune);

        let mut common = MatcherSet::new();
        common.add(prune.clone());
        common.add(KindMatcher::new(options.kinds.clone()));
        common.add(DepthMatcher::new(
            root,
            options.exact_depth,
            options.min_depth,
            options.max_depth,
        )?);
        common.add(MtimeMatcher::new(
            options.modified_after,
            options.modified_before,
        )?);
        common.add(NameMatcher::new(
            &options.pattern,
            options.mode,
            options.ignore_case,
        )?);
        let common = Arc::new(common);

        // One cap shared by both candidate streams.
        let cap = Arc::new(MaxResultsMatcher::new(options.max_results));

        let mut files = MatcherSet::new();
        files.add(common.clone());
        files.add(SizeMatcher::new(options.min_size, options.max_size)?);
        files.add(SuffixMatcher::new(options.suffixes.iter()));
        files.add(cap.clone());

        let mut dirs = MatcherSet::new();
        dirs.add(common);
        dirs.add(cap);

        Ok(CandidateSets { prune, dirs, files })
    }

    fn walk_dir(
        &self,
        dir: &Path,
        sets: &CandidateSets,
        ignores: &mut IgnoreStack,
        results: &mut Vec<PathBuf>,
    ) {
        let scoped = self.options.respect_ignore_files && ignores.enter(dir);

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                if scoped {
                    ignores.exit();
                }
                return;
            }
        };

        // TODO: stop descending once the shared result cap is exhausted.
        let mut subdirs = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let is_dirlike = file_type.is_dir() || (file_type.is_symlink() && path.is_dir());

            if self.options.respect_ignore_files && ignores.is_ignored(&path, is_dirlike) {
                continue;
            }

            if is_dirlike {
                if sets.dirs.is_match(&path) {
                    results.push(path.clone());
                }
                let descend = file_type.is_dir() || self.options.follow_symlinks;
                if descend && sets.prune.is_match(&path) {
                    subdirs.push(path);
                }
            } else if sets.files.is_match(&path) {
                results.push(path);
            }
        }

        for sub in &subdirs {
            self.walk_dir(sub, sets, ignores, results);
        }

        if scoped {
            ignores.exit();
        }
    }
}
