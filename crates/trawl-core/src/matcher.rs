// Rust guideline compliant 2026-02-06

//! Name-based matchers and matcher combinators.
//!
//! A [`Matcher`] decides whether a candidate path belongs in the result
//! set. Matchers compose: [`MatcherSet`] is a conjunction, [`NotMatcher`]
//! inverts, and `Arc`-wrapped matchers can be shared between sets so that
//! stateful matchers such as [`MaxResultsMatcher`] count across both the
//! file and directory candidate streams.

use crate::{glob, Error, Result};
use regex::{Regex, RegexBuilder};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Decides whether a path belongs in the result set.
pub trait Matcher: Send + Sync {
    /// Returns true if the path matches.
    fn is_match(&self, path: &Path) -> bool;
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn is_match(&self, path: &Path) -> bool {
        (**self).is_match(path)
    }
}

/// How a name pattern is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The final path component equals the pattern.
    Exact,
    /// The final path component contains the pattern.
    #[default]
    Substring,
    /// The pattern is a shell glob over the final path component.
    Glob,
    /// The pattern is a regular expression over the final path component.
    Regex,
}

enum CompiledPattern {
    Exact(String),
    Substring(String),
    Regex(Regex),
}

/// Matches the final path component against a pattern.
pub struct NameMatcher {
    pattern: CompiledPattern,
    fold_case: bool,
}

impl NameMatcher {
    /// Compiles a name matcher.
    ///
    /// For `Exact`, `Substring` and `Glob` modes, `ignore_case` folds both
    /// the pattern and the candidate name to lowercase. For `Regex` mode
    /// the expression is compiled case-insensitively instead.
    ///
    /// # Errors
    ///
    /// Returns an error if a glob or regex pattern fails to compile.
    pub fn new(pattern: &str, mode: MatchMode, ignore_case: bool) -> Result<Self> {
        let folded = if ignore_case {
            pattern.to_lowercase()
        } else {
            pattern.to_string()
        };

        let pattern = match mode {
            MatchMode::Exact => CompiledPattern::Exact(folded),
            MatchMode::Substring => CompiledPattern::Substring(folded),
            MatchMode::Glob => CompiledPattern::Regex(glob::translate(pattern, ignore_case)?),
            MatchMode::Regex => CompiledPattern::Regex(
                RegexBuilder::new(pattern)
                    .case_insensitive(ignore_case)
                    .build()
                    .map_err(Error::Pattern)?,
            ),
        };

        Ok(Self {
            pattern,
            fold_case: ignore_case,
        })
    }
}

impl Matcher for NameMatcher {
    fn is_match(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match &self.pattern {
            CompiledPattern::Exact(p) => {
                if self.fold_case {
                    name.to_lowercase() == *p
                } else {
                    name == *p
                }
            }
            CompiledPattern::Substring(p) => {
                if self.fold_case {
                    name.to_lowercase().contains(p)
                } else {
                    name.contains(p)
                }
            }
            CompiledPattern::Regex(re) => re.is_match(&name),
        }
    }
}

/// Inverts an inner matcher.
pub struct NotMatcher {
    inner: Box<dyn Matcher>,
}

impl NotMatcher {
    /// Wraps a matcher, inverting its verdict.
    pub fn new(inner: impl Matcher + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Matcher for NotMatcher {
    fn is_match(&self, path: &Path) -> bool {
        !self.inner.is_match(path)
    }
}

/// Matches everything.
pub struct NopMatcher;

impl Matcher for NopMatcher {
    fn is_match(&self, _path: &Path) -> bool {
        true
    }
}

/// Conjunction of matchers. An empty set matches everything.
#[derive(Default)]
pub struct MatcherSet {
    matchers: Vec<Box<dyn Matcher>>,
}

impl MatcherSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a matcher to the set.
    pub fn add(&mut self, matcher: impl Matcher + 'static) {
        self.matchers.push(Box::new(matcher));
    }

    /// Returns the number of matchers in the set.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Matcher for MatcherSet {
    fn is_match(&self, path: &Path) -> bool {
        self.matchers.iter().all(|m| m.is_match(path))
    }
}

/// Rejects names beginning with a dot unless hidden entries are wanted.
pub struct HiddenMatcher {
    show_hidden: bool,
}

impl HiddenMatcher {
    /// Creates a hidden-file filter.
    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }
}

impl Matcher for HiddenMatcher {
    fn is_match(&self, path: &Path) -> bool {
        if self.show_hidden {
            return true;
        }
        !path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }
}

/// Matches paths whose extension is in a set. An empty set matches everything.
pub struct SuffixMatcher {
    suffixes: Vec<String>,
}

impl SuffixMatcher {
    /// Creates a suffix matcher, normalizing each suffix to carry a
    /// leading dot. Empty entries are dropped.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = suffixes
            .into_iter()
            .filter(|s| !s.as_ref().is_empty())
            .map(|s| {
                let s = s.as_ref();
                if s.starts_with('.') {
                    s.to_string()
                } else {
                    format!(".{}", s)
                }
            })
            .collect();
        Self { suffixes }
    }
}

impl Matcher for SuffixMatcher {
    fn is_match(&self, path: &Path) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }
        path.extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .map(|s| self.suffixes.contains(&s))
            .unwrap_or(false)
    }
}

/// Admits the first `limit` candidates, then rejects forever.
///
/// A limit of zero disables the cap. The counter is atomic so a single
/// instance can be shared across candidate streams.
pub struct MaxResultsMatcher {
    limit: usize,
    seen: AtomicUsize,
}

impl MaxResultsMatcher {
    /// Creates a result cap. Zero means unlimited.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: AtomicUsize::new(0),
        }
    }
}

impl Matcher for MaxResultsMatcher {
    fn is_match(&self, _path: &Path) -> bool {
        if self.limit == 0 {
            return true;
        }
        self.seen.fetch_add(1, Ordering::SeqCst) < self.limit
    }
}
