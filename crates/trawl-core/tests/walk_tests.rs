// Rust guideline compliant 2026-02-06

//! End-to-end walker tests over real directory trees.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;
use trawl_core::{FileKind, FindOptions, Finder, MatchMode};

/// Builds the fixture tree:
///
/// ```text
/// root/
///   a.rs
///   b.txt
///   .hidden.rs
///   sub/
///     c.rs
///     big.bin        (2048 bytes)
///     nested/
///       deep.rs
///   target/
///     d.rs
///   logs/
///     app.log
///   .gitignore       ("*.log")
/// ```
fn build_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("a.rs"), "fn main() {}").unwrap();
    fs::write(root.join("b.txt"), "text").unwrap();
    fs::write(root.join(".hidden.rs"), "").unwrap();

    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/c.rs"), "mod c;").unwrap();
    fs::write(root.join("sub/big.bin"), vec![0u8; 2048]).unwrap();
    fs::create_dir(root.join("sub/nested")).unwrap();
    fs::write(root.join("sub/nested/deep.rs"), "").unwrap();

    fs::create_dir(root.join("target")).unwrap();
    fs::write(root.join("target/d.rs"), "").unwrap();

    fs::create_dir(root.join("logs")).unwrap();
    fs::write(root.join("logs/app.log"), "log line").unwrap();

    fs::write(root.join(".gitignore"), "*.log\n").unwrap();

    temp
}

fn names(root: &Path, results: &[PathBuf]) -> Vec<String> {
    let mut names: Vec<String> = results
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    names.sort();
    names
}

#[test]
fn test_default_search_skips_hidden_and_ignored() {
    let temp = build_tree();
    let finder = Finder::new(FindOptions::default());
    let results = finder.find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert!(names.contains(&"a.rs".to_string()));
    assert!(names.contains(&"sub/c.rs".to_string()));
    assert!(names.contains(&"sub".to_string()));
    assert!(!names.contains(&".hidden.rs".to_string()));
    assert!(!names.contains(&"logs/app.log".to_string()));
}

#[test]
fn test_show_hidden_includes_dotfiles() {
    let temp = build_tree();
    let options = FindOptions {
        show_hidden: true,
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert!(names.contains(&".hidden.rs".to_string()));
}

#[test]
fn test_no_ignore_includes_ignored_entries() {
    let temp = build_tree();
    let options = FindOptions {
        respect_ignore_files: false,
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert!(names.contains(&"logs/app.log".to_string()));
}

#[test]
fn test_substring_pattern() {
    let temp = build_tree();
    let options = FindOptions {
        pattern: "c.rs".to_string(),
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert_eq!(names, vec!["sub/c.rs".to_string()]);
}

#[test]
fn test_glob_pattern() {
    let temp = build_tree();
    let options = FindOptions {
        pattern: "*.rs".to_string(),
        mode: MatchMode::Glob,
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert_eq!(
        names,
        vec![
            "a.rs".to_string(),
            "sub/c.rs".to_string(),
            "sub/nested/deep.rs".to_string(),
            "target/d.rs".to_string(),
        ]
    );
}

#[test]
fn test_exclude_prunes_directories() {
    let temp = build_tree();
    let options = FindOptions {
        pattern: "*.rs".to_string(),
        mode: MatchMode::Glob,
        exclude: vec!["target".to_string()],
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert!(!names.contains(&"target/d.rs".to_string()));
    assert!(names.contains(&"a.rs".to_string()));
}

#[test]
fn test_suffix_filter_applies_to_files() {
    let temp = build_tree();
    let options = FindOptions {
        suffixes: vec!["txt".to_string()],
        kinds: vec![FileKind::File],
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert_eq!(names, vec!["b.txt".to_string()]);
}

#[test]
fn test_kind_directory_only() {
    let temp = build_tree();
    let options = FindOptions {
        kinds: vec![FileKind::Directory],
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert_eq!(
        names,
        vec![
            "logs".to_string(),
            "sub".to_string(),
            "sub/nested".to_string(),
            "target".to_string(),
        ]
    );
}

#[test]
fn test_min_size_selects_large_files() {
    let temp = build_tree();
    let options = FindOptions {
        kinds: vec![FileKind::File],
        min_size: Some(1024),
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert_eq!(names, vec!["sub/big.bin".to_string()]);
}

#[test]
fn test_max_depth_limits_descent_results() {
    let temp = build_tree();
    let options = FindOptions {
        pattern: "*.rs".to_string(),
        mode: MatchMode::Glob,
        max_depth: Some(2),
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert!(names.contains(&"a.rs".to_string()));
    assert!(!names.contains(&"sub/nested/deep.rs".to_string()));
}

#[test]
fn test_exact_depth() {
    let temp = build_tree();
    let options = FindOptions {
        pattern: "*.rs".to_string(),
        mode: MatchMode::Glob,
        exact_depth: Some(2),
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let names = names(temp.path(), &results);

    assert_eq!(
        names,
        vec!["sub/c.rs".to_string(), "target/d.rs".to_string()]
    );
}

#[test]
fn test_max_results_caps_across_kinds() {
    let temp = build_tree();
    let options = FindOptions {
        max_results: 3,
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();

    assert_eq!(results.len(), 3);
}

#[test]
fn test_invalid_root_is_an_error() {
    let finder = Finder::new(FindOptions::default());
    assert!(finder.find(Path::new("/no/such/root")).is_err());
}

#[test]
fn test_inconsistent_bounds_are_an_error() {
    let temp = build_tree();
    let options = FindOptions {
        min_size: Some(2048),
        max_size: Some(1024),
        ..FindOptions::default()
    };
    assert!(Finder::new(options).find(temp.path()).is_err());
}

#[test]
fn test_find_each_dispatches_every_result() {
    let temp = build_tree();
    let options = FindOptions {
        pattern: "*.rs".to_string(),
        mode: MatchMode::Glob,
        threads: 2,
        ..FindOptions::default()
    };
    let finder = Finder::new(options);

    let seen = Mutex::new(Vec::new());
    let count = finder
        .find_each(temp.path(), |path| {
            seen.lock().unwrap().push(path.to_path_buf());
        })
        .unwrap();

    let mut seen = seen.into_inner().unwrap();
    seen.sort();
    assert_eq!(count, seen.len());
    assert_eq!(count, 4);
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_require_follow() {
    let temp = build_tree();
    let link = temp.path().join("alias");
    std::os::unix::fs::symlink(temp.path().join("sub/nested"), &link).unwrap();

    let options = FindOptions {
        pattern: "deep".to_string(),
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let found = names(temp.path(), &results);
    assert_eq!(found, vec!["sub/nested/deep.rs".to_string()]);

    let options = FindOptions {
        pattern: "deep".to_string(),
        follow_symlinks: true,
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(temp.path()).unwrap();
    let found = names(temp.path(), &results);
    assert_eq!(
        found,
        vec![
            "alias/deep.rs".to_string(),
            "sub/nested/deep.rs".to_string(),
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("open.rs"), "").unwrap();
    fs::create_dir(root.join("locked")).unwrap();
    fs::write(root.join("locked/secret.rs"), "").unwrap();
    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o000)).unwrap();

    // permissions do not bind under root; nothing to observe then
    if fs::read_dir(root.join("locked")).is_ok() {
        fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let options = FindOptions {
        pattern: ".rs".to_string(),
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(root).unwrap();
    let found = names(root, &results);

    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o755)).unwrap();

    assert!(found.contains(&"open.rs".to_string()));
    assert!(!found.contains(&"locked/secret.rs".to_string()));
}

#[test]
fn test_nested_ignore_negation() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join(".gitignore"), "*.log\n").unwrap();
    fs::write(root.join("app.log"), "").unwrap();
    fs::create_dir(root.join("keepers")).unwrap();
    fs::write(root.join("keepers/.gitignore"), "!special.log\n").unwrap();
    fs::write(root.join("keepers/special.log"), "").unwrap();
    fs::write(root.join("keepers/other.log"), "").unwrap();

    let options = FindOptions {
        show_hidden: true,
        ..FindOptions::default()
    };
    let results = Finder::new(options).find(root).unwrap();
    let names = names(root, &results);

    assert!(!names.contains(&"app.log".to_string()));
    assert!(names.contains(&"keepers/special.log".to_string()));
    assert!(!names.contains(&"keepers/other.log".to_string()));
}
