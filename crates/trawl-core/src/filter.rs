// Rust guideline compliant 2026-02-06

//! Metadata-based matchers: size, kind, depth and modification time.
//!
//! These matchers stat the candidate lazily. A path whose metadata cannot
//! be read does not match; walk-level errors are handled by the walker.

use crate::matcher::Matcher;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::fs::Metadata;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{FileTypeExt, PermissionsExt};

/// Matches file sizes with strict bounds.
///
/// `min` and `max` are exclusive: a candidate matches when
/// `size > min` and `size < max`. Both bounds may be combined.
pub struct SizeMatcher {
    min: Option<u64>,
    max: Option<u64>,
}

impl SizeMatcher {
    /// Creates a size matcher.
    ///
    /// # Errors
    ///
    /// Returns an error if both bounds are given and `min >= max`.
    pub fn new(min: Option<u64>, max: Option<u64>) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo >= hi {
                return Err(Error::InvalidFilter(format!(
                    "size bounds are empty: min {} >= max {}",
                    lo, hi
                )));
            }
        }
        Ok(Self { min, max })
    }
}

impl Matcher for SizeMatcher {
    fn is_match(&self, path: &Path) -> bool {
        if self.min.is_none() && self.max.is_none() {
            return true;
        }
        let Ok(meta) = path.symlink_metadata() else {
            return false;
        };
        let size = meta.len();
        if let Some(lo) = self.min {
            if size <= lo {
                return false;
            }
        }
        if let Some(hi) = self.max {
            if size >= hi {
                return false;
            }
        }
        true
    }
}

/// Kinds of filesystem entries a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A directory.
    Directory,
    /// A regular file.
    File,
    /// A symbolic link.
    Symlink,
    /// A regular file with any execute permission bit set.
    Executable,
    /// A zero-length regular file or a directory with no entries.
    Empty,
    /// A Unix domain socket.
    Socket,
    /// A named pipe.
    Pipe,
}

impl FileKind {
    /// Resolves a single-character type code.
    ///
    /// Codes follow the conventional find/fd scheme: `d`irectory, `f`ile,
    /// symbolic `l`ink, e`x`ecutable, `e`mpty, `s`ocket, `p`ipe.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'd' => Some(Self::Directory),
            'f' => Some(Self::File),
            'l' => Some(Self::Symlink),
            'x' => Some(Self::Executable),
            'e' => Some(Self::Empty),
            's' => Some(Self::Socket),
            'p' => Some(Self::Pipe),
            _ => None,
        }
    }

    fn matches(self, path: &Path, meta: &Metadata) -> bool {
        let ft = meta.file_type();
        match self {
            Self::Directory => ft.is_dir(),
            Self::File => ft.is_file(),
            Self::Symlink => ft.is_symlink(),
            Self::Executable => is_executable(meta),
            Self::Empty => is_empty(path, meta),
            Self::Socket => is_socket(meta),
            Self::Pipe => is_pipe(meta),
        }
    }
}

#[cfg(unix)]
fn is_executable(meta: &Metadata) -> bool {
    meta.is_file() && meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &Metadata) -> bool {
    false
}

fn is_empty(path: &Path, meta: &Metadata) -> bool {
    if meta.is_dir() {
        std::fs::read_dir(path)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false)
    } else if meta.is_file() {
        meta.len() == 0
    } else {
        false
    }
}

#[cfg(unix)]
fn is_socket(meta: &Metadata) -> bool {
    meta.file_type().is_socket()
}

#[cfg(not(unix))]
fn is_socket(_meta: &Metadata) -> bool {
    false
}

#[cfg(unix)]
fn is_pipe(meta: &Metadata) -> bool {
    meta.file_type().is_fifo()
}

#[cfg(not(unix))]
fn is_pipe(_meta: &Metadata) -> bool {
    false
}

/// Matches entries of any of the requested kinds.
///
/// An empty kind list matches everything. Type checks use the entry
/// itself (symlinks are not followed), so a symlink to a directory is a
/// `Symlink`, not a `Directory`.
pub struct KindMatcher {
    kinds: Vec<FileKind>,
}

impl KindMatcher {
    /// Creates a kind matcher.
    pub fn new(kinds: Vec<FileKind>) -> Self {
        Self { kinds }
    }
}

impl Matcher for KindMatcher {
    fn is_match(&self, path: &Path) -> bool {
        if self.kinds.is_empty() {
            return true;
        }
        let Ok(meta) = path.symlink_metadata() else {
            return false;
        };
        self.kinds.iter().any(|k| k.matches(path, &meta))
    }
}

/// Matches the depth of a path below the walk root.
///
/// Direct children of the root are at depth 1. `exact` takes precedence;
/// otherwise `min` and `max` are strict bounds and may be combined.
pub struct DepthMatcher {
    root_components: usize,
    exact: Option<usize>,
    min: Option<usize>,
    max: Option<usize>,
}

impl DepthMatcher {
    /// Creates a depth matcher rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `min` and `max` are given and `min + 1 >= max`.
    pub fn new(
        root: &Path,
        exact: Option<usize>,
        min: Option<usize>,
        max: Option<usize>,
    ) -> Result<Self> {
        if exact.is_none() {
            if let (Some(lo), Some(hi)) = (min, max) {
                if lo + 1 >= hi {
                    return Err(Error::InvalidFilter(format!(
                        "depth bounds are empty: min {} and max {}",
                        lo, hi
                    )));
                }
            }
        }
        Ok(Self {
            root_components: root.components().count(),
            exact,
            min,
            max,
        })
    }
}

impl Matcher for DepthMatcher {
    fn is_match(&self, path: &Path) -> bool {
        let depth = path
            .components()
            .count()
            .saturating_sub(self.root_components);
        if let Some(exact) = self.exact {
            return depth == exact;
        }
        if let Some(lo) = self.min {
            if depth <= lo {
                return false;
            }
        }
        if let Some(hi) = self.max {
            if depth >= hi {
                return false;
            }
        }
        true
    }
}

/// Matches the modification time of an entry.
///
/// `after` and `before` are strict bounds on the mtime and may be
/// combined to select a window.
pub struct MtimeMatcher {
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
}

impl MtimeMatcher {
    /// Creates a modification-time matcher.
    ///
    /// # Errors
    ///
    /// Returns an error if both bounds are given and `after >= before`.
    pub fn new(after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>) -> Result<Self> {
        if let (Some(a), Some(b)) = (after, before) {
            if a >= b {
                return Err(Error::InvalidFilter(format!(
                    "time bounds are empty: {} is not before {}",
                    a, b
                )));
            }
        }
        Ok(Self { after, before })
    }
}

impl Matcher for MtimeMatcher {
    fn is_match(&self, path: &Path) -> bool {
        if self.after.is_none() && self.before.is_none() {
            return true;
        }
        let Ok(meta) = path.symlink_metadata() else {
            return false;
        };
        let Ok(modified) = meta.modified() else {
            return false;
        };
        let mtime: DateTime<Utc> = modified.into();
        if let Some(a) = self.after {
            if mtime <= a {
                return false;
            }
        }
        if let Some(b) = self.before {
            if mtime >= b {
                return false;
            }
        }
        true
    }
}
