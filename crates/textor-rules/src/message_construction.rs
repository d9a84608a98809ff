//! Rules: message_construction
//!
//! Collapses verbose `Message` struct literals into the canonical short-form
//! constructor, keeping only the values that carry information (the role tag
//! and the content). The dropped boilerplate is redundant by construction:
//! every field it spells out always had the defaulted value.
//!
//! Pattern:
//! ```rust,ignore
//! // Before
//! Message { role: Role::User, content: "hi".to_string(), ..Default::default() }
//!
//! // After
//! Message::text(Role::User, "hi")
//! ```
//!
//! Rule order matters: the explicit-fields form must be tried before the
//! `..Default::default()` forms, because the general pattern matches a prefix
//! of the explicit one and would otherwise consume its text.

use textor_core::{RuleError, StructuralRule};

/// `Message { role, content, name: None, tool_calls: None, ... }` with every
/// optional field spelled out
const EXPLICIT_FIELDS_PATTERN: &str = r#"Message\s*\{\s*role:\s*Role::(\w+),\s*content:\s*"([^"]+)"\.to_string\(\),\s*name:\s*None,\s*tool_calls:\s*None,\s*tool_call_id:\s*None,\s*reasoning_content:\s*None,\s*reasoning:\s*None,\s*thought:\s*None,\s*thinking:\s*None,\s*\}"#;

/// `Message { role, content: "...", ..Default::default() }`
const DEFAULT_LITERAL_PATTERN: &str = r#"Message\s*\{\s*role:\s*Role::(\w+),\s*content:\s*"([^"]+)"\.to_string\(\),\s*\.\.Default::default\(\)\s*\}"#;

/// `Message { role, content: some_var, ..Default::default() }`
const DEFAULT_IDENT_PATTERN: &str = r#"Message\s*\{\s*role:\s*Role::(\w+),\s*content:\s*(\w+)\.to_string\(\),\s*\.\.Default::default\(\)\s*\}"#;

const QUOTED_TEMPLATE: &str = r#"Message::text(Role::${1}, "${2}")"#;
const IDENT_TEMPLATE: &str = "Message::text(Role::${1}, ${2})";

/// The built-in structural rule set, in priority order (most specific first)
pub fn message_rules() -> Result<Vec<StructuralRule>, RuleError> {
    Ok(vec![
        StructuralRule::new(
            "message_explicit_fields",
            "Collapse Message with all optional fields set to None",
            EXPLICIT_FIELDS_PATTERN,
            QUOTED_TEMPLATE,
        )?,
        StructuralRule::new(
            "message_default_literal",
            "Collapse Message { .., ..Default::default() } with string literal content",
            DEFAULT_LITERAL_PATTERN,
            QUOTED_TEMPLATE,
        )?,
        StructuralRule::new(
            "message_default_ident",
            "Collapse Message { .., ..Default::default() } with identifier content",
            DEFAULT_IDENT_PATTERN,
            IDENT_TEMPLATE,
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use textor_core::rewrite_structural;

    fn rewrite(source: &str) -> String {
        rewrite_structural(source, &message_rules().unwrap())
    }

    #[test]
    fn test_default_literal_form() {
        let source = r#"let m = Message { role: Role::User, content: "hi".to_string(), ..Default::default() };"#;
        assert_eq!(rewrite(source), r#"let m = Message::text(Role::User, "hi");"#);
    }

    #[test]
    fn test_default_ident_form() {
        let source = r#"let m = Message { role: Role::System, content: prompt.to_string(), ..Default::default() };"#;
        assert_eq!(
            rewrite(source),
            "let m = Message::text(Role::System, prompt);"
        );
    }

    #[test]
    fn test_explicit_fields_form() {
        let source = r#"Message {
    role: Role::Assistant,
    content: "ok".to_string(),
    name: None,
    tool_calls: None,
    tool_call_id: None,
    reasoning_content: None,
    reasoning: None,
    thought: None,
    thinking: None,
}"#;
        assert_eq!(rewrite(source), r#"Message::text(Role::Assistant, "ok")"#);
    }

    #[test]
    fn test_explicit_fields_wins_over_general_rules() {
        // The explicit form must collapse via the most specific rule; the
        // role capture survives and no partial rewrite happens.
        let source = r#"Message { role: Role::User, content: "x".to_string(), name: None, tool_calls: None, tool_call_id: None, reasoning_content: None, reasoning: None, thought: None, thinking: None, }"#;
        let result = rewrite(source);
        assert_eq!(result, r#"Message::text(Role::User, "x")"#);
        assert!(!result.contains("None"));
    }

    #[test]
    fn test_multiline_whitespace() {
        let source = "Message {\n    role: Role::User,\n    content: \"multi\".to_string(),\n    ..Default::default()\n}";
        assert_eq!(rewrite(source), r#"Message::text(Role::User, "multi")"#);
    }

    #[test]
    fn test_multiple_occurrences() {
        let source = r#"
let a = Message { role: Role::User, content: "one".to_string(), ..Default::default() };
let b = Message { role: Role::Assistant, content: "two".to_string(), ..Default::default() };
"#;
        let result = rewrite(source);
        assert!(result.contains(r#"Message::text(Role::User, "one")"#));
        assert!(result.contains(r#"Message::text(Role::Assistant, "two")"#));
        assert!(!result.contains("Default::default"));
    }

    #[test]
    fn test_partial_construct_untouched() {
        // Missing the boilerplate suffix: none of the shapes match.
        let source = r#"Message { role: Role::User, content: "hi".to_string() }"#;
        assert_eq!(rewrite(source), source);
    }

    #[test]
    fn test_other_struct_untouched() {
        let source = r#"Request { role: Role::User, content: "hi".to_string(), ..Default::default() }"#;
        assert_eq!(rewrite(source), source);
    }

    #[test]
    fn test_output_not_rematchable() {
        let once = rewrite(
            r#"Message { role: Role::User, content: "hi".to_string(), ..Default::default() }"#,
        );
        assert_eq!(rewrite(&once), once);
    }
}
