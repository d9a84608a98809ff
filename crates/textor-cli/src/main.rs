//! textor CLI - bulk source text rewriter
//!
//! Applies two rule sets over a corpus of files and writes back only the
//! files whose content actually changed:
//! - structural: collapse verbose `Message { .. }` literals into
//!   `Message::text(role, content)`
//! - lexical: translate Chinese comment phrases to English from an ordered
//!   phrase table

mod config;
mod output;
mod process;

use anyhow::Result;
use clap::Parser;
use colored::*;
use rayon::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

use config::Config;
use output::{OutputFormat, Reporter};
use process::{process_file, write_file};
use textor_core::Engine;
use textor_rules::{builtin_engine, message_rules, translation_table};

#[derive(Parser)]
#[command(name = "textor")]
#[command(version = "0.1.0")]
#[command(about = "A rule-driven bulk source rewriter")]
#[command(author = "textor contributors")]
struct Cli {
    /// Files or directories to process
    #[arg(required_unless_present = "list_rules")]
    paths: Vec<PathBuf>,

    /// Show pending changes without applying them (default mode)
    #[arg(long, conflicts_with = "fix")]
    check: bool,

    /// Rewrite files in place
    #[arg(long, conflicts_with = "check")]
    fix: bool,

    /// Only apply the structural rule set
    #[arg(long, conflicts_with = "lexical_only")]
    structural_only: bool,

    /// Only apply the translation table
    #[arg(long, conflicts_with = "structural_only")]
    lexical_only: bool,

    /// Show verbose output
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Output format: text, json, diff (default: text)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Path to config file (default: auto-detect .textor.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// List available rules and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Handle --list-rules
    if cli.list_rules {
        println!("{}", "Structural rules:".bold());
        for rule in message_rules()? {
            println!("  {} - {}", rule.name().green(), rule.description());
        }
        println!("{}", "Lexical:".bold());
        println!(
            "  {} - {} phrase entries, applied per line in table order",
            "translation_table".green(),
            translation_table().len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    // Load config first: it may supply the output format
    let (config, config_source) = if cli.no_config {
        (Config::default(), None)
    } else if let Some(config_path) = &cli.config {
        (Config::load_path(config_path)?, Some(config_path.clone()))
    } else {
        match Config::load()? {
            Some((cfg, path)) => (cfg, Some(path)),
            None => (Config::default(), None),
        }
    };

    let output_format = resolve_format(
        cli.json,
        cli.format.as_deref(),
        config.output.format.as_deref(),
    )?;

    if cli.verbose && output_format == OutputFormat::Text {
        if let Some(path) = &config_source {
            println!("{}: {}", "Using config".bold(), path.display());
        }
    }

    // Mode flags override config toggles
    let structural = if cli.lexical_only {
        false
    } else if cli.structural_only {
        true
    } else {
        config.rules.structural.unwrap_or(true)
    };
    let lexical = if cli.structural_only {
        false
    } else if cli.lexical_only {
        true
    } else {
        config.rules.lexical.unwrap_or(true)
    };

    if !structural && !lexical {
        eprintln!("{}: No rules enabled", "Error".red());
        return Ok(ExitCode::from(1));
    }

    // The fixed, read-only configuration: built once, shared by all workers.
    let engine = builtin_engine(structural, lexical)?;

    let fix_mode = cli.fix;
    let check_mode = !fix_mode;

    if cli.verbose && output_format == OutputFormat::Text {
        println!(
            "{}: {}",
            "Mode".bold(),
            if fix_mode { "fix" } else { "check" }
        );
        let mut enabled = Vec::new();
        if structural {
            enabled.push("structural");
        }
        if lexical {
            enabled.push("lexical");
        }
        println!("{}: {}", "Rules".bold(), enabled.join(", "));
        println!();
    }

    // Collect all file paths first
    let mut file_paths: Vec<PathBuf> = Vec::new();
    let mut missing_paths: Vec<PathBuf> = Vec::new();

    for path in &cli.paths {
        if path.is_file() {
            file_paths.push(path.clone());
        } else if path.is_dir() {
            for entry in walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let file_path = entry.path();
                if config.matches_extension(file_path) && !config.should_exclude(file_path) {
                    file_paths.push(file_path.to_path_buf());
                }
            }
        } else {
            missing_paths.push(path.clone());
        }
    }

    if file_paths.is_empty() {
        anyhow::bail!(
            "No files to process (paths given: {})",
            cli.paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    // Process files in parallel; the engine is read-only shared state.
    let results: Vec<FileOutcome> = file_paths
        .par_iter()
        .map(|path| process_file_to_outcome(path, &engine))
        .collect();

    // Sort results by path for deterministic output
    let mut sorted_results: Vec<_> = results.into_iter().zip(file_paths.iter()).collect();
    sorted_results.sort_by(|a, b| a.1.cmp(b.1));

    let mut reporter = Reporter::new(output_format, cli.verbose);

    // Missing paths count as errors so every output format and the exit
    // code see them, not just text-mode stderr.
    for path in &missing_paths {
        reporter.report_error(path, "Path does not exist");
    }

    // Report file results
    for (outcome, path) in sorted_results {
        report_outcome(path, outcome, fix_mode, &mut reporter)?;
    }

    // Determine exit code
    let summary = reporter.summary();
    let exit_code = if summary.errors > 0 {
        ExitCode::from(1)
    } else if check_mode && summary.files_changed > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    };

    reporter.finish(check_mode);

    Ok(exit_code)
}

/// Result of processing a single file (for parallel processing)
enum FileOutcome {
    /// Content came back identical; no write happens
    Unchanged,
    /// Content was rewritten
    Changed {
        rules: Vec<String>,
        old_source: String,
        new_source: String,
    },
    /// Read failed; the file is skipped, the corpus continues
    Error(String),
}

/// Process a file and return an outcome (no writes, suitable for rayon)
fn process_file_to_outcome(path: &PathBuf, engine: &Engine) -> FileOutcome {
    match process_file(path, engine) {
        Ok(result) => match result.new_source {
            Some(new_source) => FileOutcome::Changed {
                rules: result.matched_rules,
                old_source: result.old_source,
                new_source,
            },
            None => FileOutcome::Unchanged,
        },
        Err(e) => FileOutcome::Error(format!("{:#}", e)),
    }
}

/// Report a file outcome and optionally apply the rewrite
fn report_outcome(
    path: &PathBuf,
    outcome: FileOutcome,
    fix_mode: bool,
    reporter: &mut Reporter,
) -> Result<()> {
    match outcome {
        FileOutcome::Unchanged => {
            reporter.report_unchanged(path);
        }
        FileOutcome::Changed {
            rules,
            old_source,
            new_source,
        } => {
            if fix_mode {
                write_file(path, &new_source)?;
                reporter.report_fix(path, rules);
            } else {
                reporter.report_check(path, rules, &old_source, &new_source);
            }
        }
        FileOutcome::Error(msg) => {
            reporter.report_error(path, &msg);
        }
    }
    Ok(())
}

/// Resolve the output format: CLI flags take precedence over the config
/// file's `[output] format`, which takes precedence over the text default.
fn resolve_format(
    json_flag: bool,
    cli_format: Option<&str>,
    config_format: Option<&str>,
) -> Result<OutputFormat> {
    if json_flag {
        return Ok(OutputFormat::Json);
    }

    match cli_format.or(config_format) {
        Some(name) => OutputFormat::from_str(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid output format '{}'. Valid options: text, json, diff",
                name
            )
        }),
        None => Ok(OutputFormat::Text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_text() {
        assert_eq!(
            resolve_format(false, None, None).unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_config_format_applies_without_flag() {
        assert_eq!(
            resolve_format(false, None, Some("json")).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(false, None, Some("diff")).unwrap(),
            OutputFormat::Diff
        );
    }

    #[test]
    fn test_cli_flags_override_config_format() {
        assert_eq!(
            resolve_format(false, Some("text"), Some("json")).unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            resolve_format(true, None, Some("diff")).unwrap(),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_invalid_format_is_an_error() {
        assert!(resolve_format(false, Some("xml"), None).is_err());
        assert!(resolve_format(false, None, Some("xml")).is_err());
    }
}
