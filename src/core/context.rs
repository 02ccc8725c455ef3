use std::{
    cell::OnceCell,
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        classify::ButtonClassifier, extract::file_analyzer::analyze_source,
        file_scanner::scan_files,
    },
    issues::{IconButtonIssue, ParseErrorIssue},
};

/// Icon button issues across the codebase, indexed by file path.
pub type AllIconButtonIssues = HashMap<String, Vec<IconButtonIssue>>;

/// Output of analyzing every scanned file.
pub struct AnalysisResults {
    pub issues: AllIconButtonIssues,

    /// Files that could not be read or parsed.
    pub parse_errors: Vec<ParseErrorIssue>,
}

/// Analysis context for a single `check` run.
///
/// Holds the loaded configuration, the set of files to analyze and the
/// classifier built from the configuration. Files are parsed and analyzed
/// lazily on first access to `results()`.
///
/// # Configuration Priority
///
/// 1. CLI `--source-root` decides where the config file is searched for
/// 2. `.ariabtnrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    pub config: Config,

    /// All source files to analyze (TSX/JSX/JS).
    pub files: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    classifier: ButtonClassifier,

    results: OnceCell<AnalysisResults>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read, does not parse, or
    /// holds unusable values.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let source_root = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = source_root
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", source_root))?;

        let config_result = load_config(Path::new(path))?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }
        let config = config_result.config;

        let classifier = ButtonClassifier::new(&config.classifier)?;

        let scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            files: scan_result.files,
            verbose,
            classifier,
            results: OnceCell::new(),
        })
    }

    /// Analyze all source files (lazy initialization).
    ///
    /// Reading, parsing and classification all run in parallel. Each file
    /// gets its own `SourceMap`, so nothing is shared between workers but the
    /// classifier.
    pub fn results(&self) -> &AnalysisResults {
        self.results.get_or_init(|| {
            let classifier = &self.classifier;
            let severity = self.config.severity;

            let file_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let result = std::fs::read_to_string(file_path)
                        .map_err(|e| anyhow!("Failed to read file: {}", e))
                        .and_then(|code| {
                            analyze_source(code, file_path, classifier, severity)
                        });
                    (file_path.clone(), result)
                })
                .collect();

            let mut issues = HashMap::new();
            let mut parse_errors = Vec::new();

            for (file_path, result) in file_results {
                match result {
                    Ok(file_issues) => {
                        if !file_issues.is_empty() {
                            issues.insert(file_path, file_issues);
                        }
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!("Warning: {} - {}", file_path, e);
                        }
                        parse_errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            AnalysisResults {
                issues,
                parse_errors,
            }
        })
    }

    pub fn icon_button_issues(&self) -> &AllIconButtonIssues {
        &self.results().issues
    }

    /// Get parse errors from source files.
    pub fn parsed_files_errors(&self) -> &Vec<ParseErrorIssue> {
        &self.results().parse_errors
    }
}
