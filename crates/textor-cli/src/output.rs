//! Output formatting for textor
//!
//! Supports text (colored terminal), JSON, and unified diff output formats.

use colored::*;
use serde::Serialize;
use std::path::Path;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Diff,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "diff" => Some(OutputFormat::Diff),
            _ => None,
        }
    }
}

/// Result of processing a single file, for reporting
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub changed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn unchanged(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            changed: false,
            rules: Vec::new(),
            error: None,
        }
    }

    pub fn changed(path: &Path, rules: Vec<String>) -> Self {
        Self {
            path: path.display().to_string(),
            changed: true,
            rules,
            error: None,
        }
    }

    pub fn error(path: &Path, error: String) -> Self {
        Self {
            path: path.display().to_string(),
            changed: false,
            rules: Vec::new(),
            error: Some(error),
        }
    }
}

/// Summary statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub errors: usize,
}

/// Full JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub summary: Summary,
    pub files: Vec<FileReport>,
}

/// Reporter for accumulating and outputting results
pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
    reports: Vec<FileReport>,
    summary: Summary,
}

impl Reporter {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            reports: Vec::new(),
            summary: Summary::default(),
        }
    }

    /// Report a file with pending changes (check mode - nothing written)
    pub fn report_check(&mut self, path: &Path, rules: Vec<String>, old: &str, new: &str) {
        self.summary.files_scanned += 1;
        self.summary.files_changed += 1;

        match self.format {
            OutputFormat::Text => {
                println!("{}", path.display().to_string().bold());
                print_diff(old, new);
                for rule in &rules {
                    println!("  {} {}", "->".green(), rule);
                }
                println!();
            }
            OutputFormat::Diff => {
                print_unified_diff(path, old, new);
            }
            OutputFormat::Json => {
                // JSON output is handled in finish()
            }
        }

        self.reports.push(FileReport::changed(path, rules));
    }

    /// Report a file after writing the rewritten content
    pub fn report_fix(&mut self, path: &Path, rules: Vec<String>) {
        self.summary.files_scanned += 1;
        self.summary.files_changed += 1;

        if self.format == OutputFormat::Text {
            println!("{}", path.display().to_string().bold());
            println!("  {} Rewritten ({})", "OK".green(), rules.join(", "));
            println!();
        }

        self.reports.push(FileReport::changed(path, rules));
    }

    /// Report a file the engine left untouched (zero writes)
    pub fn report_unchanged(&mut self, path: &Path) {
        self.summary.files_scanned += 1;
        if self.verbose && self.format == OutputFormat::Text {
            println!("{}: unchanged", path.display());
        }
        self.reports.push(FileReport::unchanged(path));
    }

    /// Report an error processing a file (the rest of the corpus continues)
    pub fn report_error(&mut self, path: &Path, error: &str) {
        self.summary.files_scanned += 1;
        self.summary.errors += 1;

        if self.format == OutputFormat::Text {
            eprintln!("{}: {} - {}", "Warning".yellow(), path.display(), error);
        }

        self.reports.push(FileReport::error(path, error.to_string()));
    }

    /// Print final summary/output
    pub fn finish(self, check_mode: bool) {
        match self.format {
            OutputFormat::Text => {
                println!();
                println!("{}", "Summary".bold().underline());
                println!("  Files scanned: {}", self.summary.files_scanned);
                println!("  Files changed: {}", self.summary.files_changed);
                if self.summary.errors > 0 {
                    println!("  Errors: {}", self.summary.errors);
                }

                if check_mode && self.summary.files_changed > 0 {
                    println!();
                    println!("{}", "Run with --fix to apply changes".yellow());
                }
            }
            OutputFormat::Json => {
                let output = JsonOutput {
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    summary: self.summary,
                    files: self.reports,
                };
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
            OutputFormat::Diff => {
                // Diff format emits each file's diff as it's processed
            }
        }
    }

    /// Get summary for exit code determination
    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// Print a colored diff between old and new content
fn print_diff(old: &str, new: &str) {
    for diff_result in diff::lines(old, new) {
        match diff_result {
            diff::Result::Left(l) => {
                println!("  {}", format!("- {}", l).red());
            }
            diff::Result::Right(r) => {
                println!("  {}", format!("+ {}", r).green());
            }
            diff::Result::Both(_, _) => {
                // Skip unchanged lines for cleaner output
            }
        }
    }
}

/// Print unified diff format (standard diff -u compatible)
fn print_unified_diff(path: &Path, old: &str, new: &str) {
    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);
    let path_str = path.display().to_string();

    println!("--- a/{}", path_str);
    println!("+++ b/{}", path_str);

    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        println!("{}", hunk.header());
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "-",
                ChangeTag::Insert => "+",
                ChangeTag::Equal => " ",
            };
            print!("{}{}", sign, change);
            if change.missing_newline() {
                println!();
            }
        }
    }
}
