//! Engine orchestration and changed-detection

use crate::rule::{rewrite_structural, StructuralRule};
use crate::table::{rewrite_lexical, PhraseTable};

/// Result of rewriting one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Content after all rules ran (equals the input when nothing matched)
    pub content: String,
    /// True iff `content` differs byte-for-byte from the original input.
    /// This is the sole signal the caller uses to decide whether to write.
    pub changed: bool,
}

/// The rule application engine: an ordered structural rule list and an
/// ordered phrase table, fixed for the lifetime of the engine.
///
/// Both rewriters are pure functions of their input, so a single engine can
/// be shared across threads without coordination.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    rules: Vec<StructuralRule>,
    table: PhraseTable,
}

impl Engine {
    /// Create an engine from a rule list and a phrase table.
    ///
    /// Either side may be empty, in which case that rewriter is the identity.
    pub fn new(rules: Vec<StructuralRule>, table: PhraseTable) -> Self {
        Self { rules, table }
    }

    /// An engine that only applies structural rules
    pub fn structural_only(rules: Vec<StructuralRule>) -> Self {
        Self::new(rules, PhraseTable::new())
    }

    /// An engine that only applies the phrase table
    pub fn lexical_only(table: PhraseTable) -> Self {
        Self::new(Vec::new(), table)
    }

    /// The structural rules, in priority order
    pub fn rules(&self) -> &[StructuralRule] {
        &self.rules
    }

    /// The phrase table, in application order
    pub fn table(&self) -> &PhraseTable {
        &self.table
    }

    /// Rewrite one file's content: structural rules first, then the phrase
    /// table, then exact string comparison against the original.
    ///
    /// Total function; content is never partially transformed.
    pub fn process(&self, original: &str) -> Rewrite {
        let structural = rewrite_structural(original, &self.rules);
        let content = rewrite_lexical(&structural, &self.table);
        let changed = content != original;

        Rewrite { content, changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::StructuralRule;

    fn sample_engine() -> Engine {
        let rules = vec![StructuralRule::new(
            "wrap_call",
            "test rule",
            r"call\s*\{\s*(\w+)\s*\}",
            "call(${1})",
        )
        .unwrap()];
        let table = PhraseTable::from_pairs([("旧", "new")]);
        Engine::new(rules, table)
    }

    #[test]
    fn test_noop_input_is_unchanged() {
        let engine = sample_engine();
        let result = engine.process("nothing matches here");
        assert_eq!(result.content, "nothing matches here");
        assert!(!result.changed);
    }

    #[test]
    fn test_empty_input() {
        let engine = sample_engine();
        let result = engine.process("");
        assert_eq!(result.content, "");
        assert!(!result.changed);
    }

    #[test]
    fn test_structural_then_lexical() {
        let engine = sample_engine();
        let result = engine.process("call { x } // 旧");
        assert_eq!(result.content, "call(x) // new");
        assert!(result.changed);
    }

    #[test]
    fn test_changed_flag_matches_exact_equality() {
        // A rewrite that differs only in trailing whitespace still counts.
        let rules = vec![
            StructuralRule::new("trim", "test rule", r"end \n", "end\n").unwrap(),
        ];
        let engine = Engine::structural_only(rules);
        let result = engine.process("end \n");
        assert_eq!(result.content, "end\n");
        assert!(result.changed);
    }

    #[test]
    fn test_idempotence() {
        let engine = sample_engine();
        let first = engine.process("call { x } and 旧 text");
        assert!(first.changed);

        let second = engine.process(&first.content);
        assert_eq!(second.content, first.content);
        assert!(!second.changed);
    }

    #[test]
    fn test_default_engine_is_identity() {
        let engine = Engine::default();
        let result = engine.process("any text at all");
        assert!(!result.changed);
    }

    #[test]
    fn test_lexical_only_mode() {
        let engine = Engine::lexical_only(PhraseTable::from_pairs([("旧", "new")]));
        let result = engine.process("call { x } // 旧");
        // Structural construct left alone, phrase translated.
        assert_eq!(result.content, "call { x } // new");
        assert!(result.changed);
    }
}
