// Rust guideline compliant 2026-02-06

//! Ignore-file rules in the gitignore style.
//!
//! Each directory may carry a `.gitignore` whose rules apply to
//! everything beneath it. Rules are evaluated in order and the last
//! matching rule decides, so a negated rule (`!pattern`) can re-admit
//! entries a broader rule excluded. Patterns containing a slash are
//! anchored to the directory holding the ignore file; bare patterns match
//! any entry name at any depth below it.

use crate::glob;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Name of the ignore file recognized during a walk.
pub const IGNORE_FILE: &str = ".gitignore";

struct IgnoreRule {
    regex: Regex,
    dir_only: bool,
    negated: bool,
    anchored: bool,
}

/// The parsed rules of a single ignore file.
#[derive(Default)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRules {
    /// Parses ignore-file content.
    ///
    /// Blank lines and `#` comments are skipped, as are rules whose glob
    /// fails to compile.
    pub fn parse(content: &str) -> Self {
        let rules = content.lines().filter_map(compile_rule).collect();
        Self { rules }
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules were parsed.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies the rules to a candidate.
    ///
    /// # Arguments
    ///
    /// * `rel_path` - The candidate path relative to the ignore file's
    ///   directory, with `/` separators
    /// * `name` - The candidate's final path component
    /// * `is_dir` - Whether the candidate is a directory
    ///
    /// # Returns
    ///
    /// `Some(true)` if the last matching rule ignores the candidate,
    /// `Some(false)` if it re-admits it, `None` if no rule matched.
    pub fn matched(&self, rel_path: &str, name: &str, is_dir: bool) -> Option<bool> {
        let mut decision = None;
        for rule in &self.rules {
            if rule.dir_only && !is_dir {
                continue;
            }
            let target = if rule.anchored { rel_path } else { name };
            if rule.regex.is_match(target) {
                decision = Some(!rule.negated);
            }
        }
        decision
    }
}

fn compile_rule(line: &str) -> Option<IgnoreRule> {
    let mut pat = line.trim();
    if pat.is_empty() || pat.starts_with('#') {
        return None;
    }

    let negated = pat.starts_with('!');
    if negated {
        pat = &pat[1..];
    }

    let mut dir_only = false;
    if let Some(stripped) = pat.strip_suffix('/') {
        dir_only = true;
        pat = stripped;
    }

    let anchored = pat.contains('/');
    let pat = pat.strip_prefix('/').unwrap_or(pat);
    if pat.is_empty() {
        return None;
    }

    let regex = glob::translate(pat, false).ok()?;
    Some(IgnoreRule {
        regex,
        dir_only,
        negated,
        anchored,
    })
}

/// Layered ignore scopes, one per directory carrying an ignore file.
///
/// The walker pushes a scope when it enters a directory with an ignore
/// file and pops it on the way out. Inner scopes are evaluated after
/// outer ones, so they take precedence.
#[derive(Default)]
pub struct IgnoreStack {
    scopes: Vec<(PathBuf, IgnoreRules)>,
}

impl IgnoreStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the ignore file of `dir`, if present, and pushes its scope.
    ///
    /// # Returns
    ///
    /// True if a scope was pushed; the caller must balance it with
    /// [`IgnoreStack::exit`].
    pub fn enter(&mut self, dir: &Path) -> bool {
        let Ok(content) = std::fs::read_to_string(dir.join(IGNORE_FILE)) else {
            return false;
        };
        let rules = IgnoreRules::parse(&content);
        if rules.is_empty() {
            return false;
        }
        self.scopes.push((dir.to_path_buf(), rules));
        true
    }

    /// Pops the innermost scope.
    pub fn exit(&mut self) {
        self.scopes.pop();
    }

    /// Returns true if the candidate is ignored by the current scopes.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut decision = false;
        for (dir, rules) in &self.scopes {
            let Ok(rel) = path.strip_prefix(dir) else {
                continue;
            };
            let rel = rel.to_string_lossy().replace('\\', "/");
            if let Some(ignored) = rules.matched(&rel, &name, is_dir) {
                decision = ignored;
            }
        }
        decision
    }
}
