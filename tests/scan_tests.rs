use marksplice::LocateOptions;
use marksplice::cli::commands::scan;
use marksplice::core::file_collector::{FileFilter, collect_files};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MARKED: &str = "intro\nMARK\nbody\nEND\n";

#[tokio::test]
async fn test_scan_skips_files_that_are_not_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.txt"), b"caf\xe9\n").unwrap();
    fs::write(root.join("b.txt"), MARKED).unwrap();

    let found = scan::execute(
        vec![root.to_path_buf()],
        LocateOptions::new("MARK", "END"),
        Vec::new(),
        Vec::new(),
        10,
    )
    .await
    .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, root.join("b.txt"));
    assert_eq!(found[0].1.range(), 0..4);
}

#[tokio::test]
async fn test_scan_root_inside_excluded_directory_name() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("build").join("proj");
    fs::create_dir_all(project.join("target")).unwrap();
    fs::write(project.join("b.txt"), MARKED).unwrap();
    fs::write(project.join("target").join("c.txt"), MARKED).unwrap();

    let found = scan::execute(
        vec![project.clone()],
        LocateOptions::new("MARK", "END"),
        Vec::new(),
        Vec::new(),
        10,
    )
    .await
    .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, project.join("b.txt"));
}

#[tokio::test]
async fn test_collect_files_from_excluded_ancestor() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("node_modules").join("pkg");
    fs::create_dir_all(project.join("dist")).unwrap();
    fs::write(project.join("index.js"), "MARK\nEND\n").unwrap();
    fs::write(project.join("dist").join("index.js"), "MARK\nEND\n").unwrap();

    let files = collect_files(&[project.clone()], &[], &[], 10).await.unwrap();
    assert_eq!(files, vec![project.join("index.js")]);

    let single = project.join("index.js");
    let files = collect_files(&[single.clone()], &[], &[], 10).await.unwrap();
    assert_eq!(files, vec![single]);
}

#[test]
fn test_file_filter_uses_relative_paths() {
    let filter = FileFilter::new(&["*.log".to_string()], &[], 1);

    assert!(filter.admits(Path::new("src/page.tsx"), 10));
    assert!(!filter.admits(Path::new("src/debug.log"), 10));
    assert!(!filter.admits(Path::new("src/page.tsx"), 0));
    assert!(!filter.admits(Path::new("src/page.tsx"), 2 * 1024 * 1024));

    assert!(filter.skips_directory(Path::new("app/node_modules")));
    assert!(filter.skips_directory(Path::new(".git")));
    assert!(!filter.skips_directory(Path::new("src/components")));
}
