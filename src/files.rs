//! Source file discovery.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal path prefixes.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to process, sorted and deduplicated.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Expand `paths` into the list of files to process.
///
/// Files named directly are always taken. Directories are walked and only
/// files whose extension is in `extensions` and which match no ignore pattern
/// are kept.
pub fn scan_files(
    paths: &[PathBuf],
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(PathBuf::from(p));
        }
    }

    let is_ignored = |path: &Path| {
        let path_str = path.to_string_lossy();
        literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
            || glob_patterns.iter().any(|p| p.matches(&path_str))
    };

    for root in paths {
        if root.is_file() {
            files.insert(root.clone());
            continue;
        }
        if !root.is_dir() {
            skipped_count += 1;
            if verbose {
                eprintln!(
                    "{} Path does not exist: {}",
                    "warning:".bold().yellow(),
                    root.display()
                );
            }
            continue;
        }

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if is_ignored(path) {
                continue;
            }

            if entry.file_type().is_file() && has_extension(path, extensions) {
                files.insert(path.to_path_buf());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
