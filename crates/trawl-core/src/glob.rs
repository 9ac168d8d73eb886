// Rust guideline compliant 2026-02-06

//! Shell glob to regex translation.
//!
//! Supports `*`, `**`, `?`, `[seq]` and `[!seq]`. Translated patterns are
//! anchored on both ends, so a glob must cover the whole string it is
//! matched against. `*` and `?` never cross a path separator; `**` does,
//! which only matters for path-shaped inputs such as ignore rules.

use crate::Result;
use regex::Regex;

/// Translates a glob pattern into a compiled, anchored regex.
///
/// # Arguments
///
/// * `pattern` - The glob pattern to translate
/// * `ignore_case` - Whether the resulting regex matches case-insensitively
///
/// # Errors
///
/// Returns an error if the translated pattern fails to compile, for
/// example a character class with a reversed range.
pub fn translate(pattern: &str, ignore_case: bool) -> Result<Regex> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut re = String::with_capacity(pattern.len() * 2 + 8);
    if ignore_case {
        re.push_str("(?i)");
    }
    re.push('^');

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    re.push_str(".*");
                    i += 1;
                } else {
                    re.push_str("[^/]*");
                }
            }
            '?' => re.push_str("[^/]"),
            '[' => {
                if let Some(end) = find_class_end(&chars, i) {
                    re.push('[');
                    let mut k = i + 1;
                    if chars[k] == '!' {
                        re.push('^');
                        k += 1;
                    }
                    while k < end {
                        let c = chars[k];
                        if c == '\\' || c == ']' || c == '^' {
                            re.push('\\');
                        }
                        re.push(c);
                        k += 1;
                    }
                    re.push(']');
                    i = end;
                } else {
                    // unterminated class is a literal bracket
                    re.push_str("\\[");
                }
            }
            c => re.push_str(&regex::escape(&c.to_string())),
        }
        i += 1;
    }

    re.push('$');
    Ok(Regex::new(&re)?)
}

/// Locates the closing bracket of a character class starting at `start`.
///
/// A `]` immediately after the opening bracket (or after a leading `!`)
/// is treated as a literal member of the class, matching fnmatch rules.
fn find_class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if j < chars.len() && chars[j] == '!' {
        j += 1;
    }
    if j < chars.len() && chars[j] == ']' {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    if j < chars.len() && j > start + 1 {
        Some(j)
    } else {
        None
    }
}
