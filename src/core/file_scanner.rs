use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning a locale directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Locale files, sorted lexicographically.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed during the walk.
    pub skipped_count: usize,
}

/// Recursively finds all `.json` files under `dir`.
///
/// Paths matching any of `ignore_patterns` are left out. Invalid patterns
/// are reported under `verbose` and otherwise ignored; `Config::validate`
/// rejects them before a normal run gets here.
pub fn scan_json_files(
    dir: impl AsRef<Path>,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<ScanResult> {
    let dir = dir.as_ref();

    if !dir.exists() {
        bail!(
            "Locale directory '{}' does not exist.\n\
             Hint: Pass a directory to `keylint check` or set 'path' in .keylintrc.json.",
            dir.display()
        );
    }

    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
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
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_json_file(entry.path()) {
            continue;
        }

        let path_str = entry.path().to_string_lossy();
        if patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        result.files.push(entry.into_path());
    }

    result.files.sort();
    Ok(result)
}

fn is_json_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json"))
}
