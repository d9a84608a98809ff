//! File processing logic for textor

use anyhow::{Context, Result};
use std::path::Path;

use textor_core::{rewrite_structural, Engine};

/// Result of processing a single file
pub struct ProcessResult {
    /// Original source code
    pub old_source: String,
    /// New source code (only if the content changed)
    pub new_source: Option<String>,
    /// Names of the rule sets that contributed to the change
    pub matched_rules: Vec<String>,
}

/// Read a file and run the engine over its content.
///
/// Pure apart from the read; suitable for parallel execution. A read failure
/// is surfaced to the caller so the file can be reported and skipped without
/// aborting the rest of the corpus.
pub fn process_file(path: &Path, engine: &Engine) -> Result<ProcessResult> {
    let old_source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let rewrite = engine.process(&old_source);

    if !rewrite.changed {
        return Ok(ProcessResult {
            old_source,
            new_source: None,
            matched_rules: vec![],
        });
    }

    let mut matched_rules: Vec<String> = engine
        .rules()
        .iter()
        .filter(|rule| rule.is_match(&old_source))
        .map(|rule| rule.name().to_string())
        .collect();

    // Attribute the remainder of the change to the phrase table.
    let structural_only = rewrite_structural(&old_source, engine.rules());
    if rewrite.content != structural_only {
        matched_rules.push("translation_table".to_string());
    }

    Ok(ProcessResult {
        old_source,
        new_source: Some(rewrite.content),
        matched_rules,
    })
}

/// Write the rewritten content back to the file
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
