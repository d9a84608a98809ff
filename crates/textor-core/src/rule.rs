//! Structural rules: pattern-with-captures rewritten into a normalized form

use regex::Regex;
use std::borrow::Cow;
use thiserror::Error;

/// Errors that can occur while building a rule set
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("invalid pattern for rule '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// A single structural rewrite rule: a matcher over a fixed syntactic shape
/// plus a replacement template built from the captured groups.
///
/// The replacement must not be re-matchable by this rule or any rule ordered
/// before it, so that repeated application is a no-op.
#[derive(Debug, Clone)]
pub struct StructuralRule {
    name: &'static str,
    description: &'static str,
    pattern: Regex,
    template: String,
}

impl StructuralRule {
    /// Create a new rule from a regex pattern and a replacement template.
    ///
    /// The template may reference capture groups as `${1}`, `${2}`, etc.
    /// An invalid pattern is the only failure mode; it is surfaced here,
    /// at configuration time, never during rewriting.
    pub fn new(
        name: &'static str,
        description: &'static str,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let pattern = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            name: name.to_string(),
            source,
        })?;

        Ok(Self {
            name,
            description,
            pattern,
            template: template.into(),
        })
    }

    /// The unique identifier for this rule (e.g., "message_default_literal")
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// A short description of what this rule does
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Whether this rule matches anywhere in the text
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Replace all non-overlapping occurrences of the pattern in one pass.
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.template.as_str())
    }
}

/// Apply an ordered list of structural rules to `text`.
///
/// Each rule scans the entire current text (not just the original) and
/// replaces all of its occurrences before the next rule runs. Rule order is
/// priority order: a rule whose shape is more field-explicit must come before
/// a more general rule that matches a prefix of the same input, or the
/// general rule would consume text the specific rule should have rewritten.
///
/// A rule that matches nowhere is a no-op, never an error. Pure function.
pub fn rewrite_structural(text: &str, rules: &[StructuralRule]) -> String {
    let mut current = text.to_string();

    for rule in rules {
        if rule.is_match(&current) {
            current = rule.apply(&current).into_owned();
        }
    }

    current
}
