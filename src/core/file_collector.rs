use crate::config::patterns::{DEFAULT_EXCLUDE_PATTERNS, DEFAULT_INCLUDE_PATTERNS};
use crate::core::pattern_matcher::PatternMatcher;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

const SKIPPED_DIRECTORIES: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "__pycache__",
    ".mypy_cache",
    ".pytest_cache",
    ".next",
    "target",
    "build",
    "dist",
];

pub fn is_binary_file(content: &[u8]) -> bool {
    let check_len = content.len().min(1024);
    content[..check_len].contains(&0)
}

/// Decides which files under a walk root are scan candidates. Every path it
/// sees is relative to that root, so the directories the root itself lives
/// in never trigger an exclusion.
#[derive(Debug, Clone)]
pub struct FileFilter {
    exclude: PatternMatcher,
    include: PatternMatcher,
    max_size_bytes: u64,
}

impl FileFilter {
    /// Extra excludes add to the defaults; includes, when given, replace them.
    pub fn new(additional_excludes: &[String], includes: &[String], max_size_mb: u64) -> Self {
        let mut exclude: Vec<String> = DEFAULT_EXCLUDE_PATTERNS
            .iter()
            .map(|s| s.to_string())
            .collect();
        exclude.extend(additional_excludes.iter().cloned());

        let include: Vec<String> = if includes.is_empty() {
            DEFAULT_INCLUDE_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            includes.to_vec()
        };

        debug!(
            "Using {} exclude and {} include patterns",
            exclude.len(),
            include.len()
        );

        Self {
            exclude: PatternMatcher::new(&exclude),
            include: PatternMatcher::new(&include),
            max_size_bytes: max_size_mb * 1024 * 1024,
        }
    }

    pub fn skips_directory(&self, relative: &Path) -> bool {
        let skipped_name = relative
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| SKIPPED_DIRECTORIES.contains(&name));

        skipped_name || self.exclude.matches_path(relative)
    }

    pub fn admits(&self, relative: &Path, size: u64) -> bool {
        size > 0
            && size <= self.max_size_bytes
            && self.include.matches_path(relative)
            && !self.exclude.matches_path(relative)
    }
}

async fn is_text_file(path: &Path) -> Result<bool> {
    let content = fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(!is_binary_file(&content))
}

/// Collects candidate text files under `paths`, in walk order. An explicit
/// file argument is judged by its file name alone.
#[instrument(skip(additional_excludes, includes))]
pub async fn collect_files(
    paths: &[PathBuf],
    additional_excludes: &[String],
    includes: &[String],
    max_size_mb: u64,
) -> Result<Vec<PathBuf>> {
    let filter = FileFilter::new(additional_excludes, includes, max_size_mb);
    let mut files = Vec::new();

    for root in paths {
        if root.is_file() {
            let relative = root.file_name().map(Path::new).unwrap_or(root.as_path());
            let size = std::fs::metadata(root)
                .with_context(|| format!("Failed to stat {}", root.display()))?
                .len();
            if filter.admits(relative, size) && is_text_file(root).await? {
                files.push(root.clone());
            }
            continue;
        }

        if !root.is_dir() {
            debug!("Skipping missing path: {}", root.display());
            continue;
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                !e.file_type().is_dir()
                    || e.depth() == 0
                    || !filter.skips_directory(e.path().strip_prefix(root).unwrap_or(e.path()))
            });

        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);

            if filter.admits(relative, size) && is_text_file(entry.path()).await? {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    info!("Found {} files after filtering", files.len());
    Ok(files)
}
