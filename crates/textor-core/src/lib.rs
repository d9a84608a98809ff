//! textor-core: Core abstractions for bulk text rewriting
//!
//! This crate provides:
//! - `StructuralRule`: A regex pattern plus a replacement template
//! - `rewrite_structural()`: Apply an ordered rule list to a whole text
//! - `PhraseTable`: An insertion-ordered phrase-for-phrase substitution table
//! - `rewrite_lexical()`: Apply a phrase table line by line
//! - `Engine`: Composes both rewriters and computes the changed flag

mod engine;
mod rule;
mod table;

pub use engine::{Engine, Rewrite};
pub use rule::{rewrite_structural, RuleError, StructuralRule};
pub use table::{rewrite_lexical, PhraseTable};
