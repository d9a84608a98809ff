//! textor-rules: Built-in rewrite configuration
//!
//! Available structural rules:
//! - message_explicit_fields: Collapse `Message { .. }` with every optional
//!   field written out as `None` to `Message::text(role, "...")`
//! - message_default_literal: Collapse `Message { .., ..Default::default() }`
//!   with a quoted string content to `Message::text(role, "...")`
//! - message_default_ident: Same, with a bare identifier content
//!
//! Plus the built-in Chinese-to-English phrase table for doc comments.

pub mod message_construction;
pub mod translations;

pub use message_construction::message_rules;
pub use translations::translation_table;

use textor_core::{Engine, PhraseTable, RuleError};

/// Build an engine carrying the built-in configuration, with either side
/// optionally disabled.
pub fn builtin_engine(structural: bool, lexical: bool) -> Result<Engine, RuleError> {
    let rules = if structural {
        message_rules()?
    } else {
        Vec::new()
    };
    let table = if lexical {
        translation_table()
    } else {
        PhraseTable::new()
    };

    Ok(Engine::new(rules, table))
}
