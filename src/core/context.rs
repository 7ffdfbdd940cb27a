use std::{cell::OnceCell, env, path::PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, RulesConfig, load_config},
    core::{FileAnalysis, analyze_locale_file, file_scanner::scan_json_files},
    issues::ParseErrorIssue,
};

/// Analysis context for a single `check` run.
///
/// Holds the merged configuration and the discovered locale files. Files are
/// analyzed lazily, in parallel, on the first call to [`CheckContext::analyses`].
///
/// # Configuration Priority
///
/// 1. CLI arguments / action inputs (`INPUT_PATH`, `INPUT_RULES`)
/// 2. `.keylintrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Effective rule levels after applying `--rules`.
    pub rules: RulesConfig,

    /// Directory that was scanned for locale files.
    pub locale_dir: PathBuf,

    /// Locale files to analyze, sorted.
    pub files: Vec<PathBuf>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// One analysis per entry in `files`, same order.
    analyses: OnceCell<Vec<FileAnalysis>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - `--rules` is not a valid rules object
    /// - The locale directory doesn't exist
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let cwd = env::current_dir().context("Failed to resolve current directory")?;
        let config = load_config(&cwd)?.config;

        let rules = match &common_args.rules {
            Some(json) => config.rules.merge_json(json)?,
            None => config.rules,
        };

        let locale_dir = common_args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.path));

        if verbose {
            eprintln!("Linting i18n files in: {}", locale_dir.display());
            eprintln!(
                "Rules: namespace-conflict={}, invalid-value={}",
                rules.namespace_conflict, rules.invalid_value
            );
        }

        let scan_result = scan_json_files(&locale_dir, &config.ignores, verbose)?;

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            rules,
            locale_dir,
            files: scan_result.files,
            verbose,
            analyses: OnceCell::new(),
        })
    }

    /// Analysis results for all locale files (lazy initialization).
    ///
    /// Each file is read and analyzed independently on the rayon pool;
    /// results keep the sorted file order.
    pub fn analyses(&self) -> &[FileAnalysis] {
        self.analyses.get_or_init(|| {
            let analyses: Vec<FileAnalysis> =
                self.files.par_iter().map(analyze_locale_file).collect();

            if self.verbose {
                for analysis in &analyses {
                    eprintln!(
                        "Analyzed {}: {} finding(s)",
                        analysis.file_path,
                        analysis.finding_count()
                    );
                }
            }

            analyses
        })
    }

    /// Files that could not be analyzed and were skipped.
    pub fn parse_errors(&self) -> Vec<ParseErrorIssue> {
        self.analyses()
            .iter()
            .filter_map(|analysis| {
                analysis.error.as_ref().map(|error| ParseErrorIssue {
                    file_path: analysis.file_path.clone(),
                    error: error.clone(),
                })
            })
            .collect()
    }
}
