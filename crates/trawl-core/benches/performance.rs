// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use trawl_core::{
    FindOptions, Finder, HiddenMatcher, MatchMode, Matcher, MatcherSet, NameMatcher, SuffixMatcher,
};

fn build_paths(count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| PathBuf::from(format!("dir{}/file_{}.rs", i % 16, i)))
        .collect()
}

fn build_tree(files_per_dir: usize, dirs: usize) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    for d in 0..dirs {
        let dir = temp.path().join(format!("dir{}", d));
        fs::create_dir(&dir).expect("Failed to create benchmark dir");
        for f in 0..files_per_dir {
            fs::write(dir.join(format!("file_{}.rs", f)), "x").expect("Failed to write file");
        }
    }
    temp
}

fn bench_matcher_set(c: &mut Criterion) {
    let paths = build_paths(10_000);
    let mut set = MatcherSet::new();
    set.add(HiddenMatcher::new(false));
    set.add(NameMatcher::new("file_*.rs", MatchMode::Glob, false).expect("glob"));
    set.add(SuffixMatcher::new(["rs"]));

    c.bench_function("matcher_set_10000", |b| {
        b.iter(|| {
            let hits = paths.iter().filter(|p| set.is_match(p)).count();
            black_box(hits)
        })
    });
}

fn bench_walk(c: &mut Criterion) {
    let temp = build_tree(50, 20);
    let options = FindOptions {
        pattern: "*.rs".to_string(),
        mode: MatchMode::Glob,
        ..FindOptions::default()
    };
    let finder = Finder::new(options);

    c.bench_function("walk_1000_files", |b| {
        b.iter(|| black_box(finder.find(temp.path()).expect("walk failed")))
    });
}

criterion_group!(benches, bench_matcher_set, bench_walk);
criterion_main!(benches);
