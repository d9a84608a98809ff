//! Lexical rewriting: ordered literal phrase substitution, applied per line

use indexmap::IndexMap;

/// An insertion-ordered mapping of literal source phrases to replacements.
///
/// Order is part of the table's identity: entries are applied in insertion
/// order, and later entries may match text introduced by earlier entries'
/// replacement values, so the output is a function of table order, not just
/// table contents. Re-inserting an existing key replaces its value but keeps
/// the key's original position.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    entries: IndexMap<String, String>,
}

impl PhraseTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (key, value) pairs, preserving iteration order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (key, value) in pairs {
            table.insert(key, value);
        }
        table
    }

    /// Insert an entry at the end of the table.
    ///
    /// Returns the previous value if the key was already present; in that
    /// case the key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up the replacement for an exact key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Apply every table entry, in table order, to each line of `text`.
///
/// Lines are the unit of locality: a key never matches across a line
/// boundary, even when adjacent lines would concatenate into a match.
/// Replacement is plain substring replacement with no regex semantics and no
/// word-boundary awareness.
///
/// Known hazard, accepted by design: a short, high-frequency key ordered
/// before longer keys that contain it as a substring will corrupt the longer
/// keys' text before they can match, and can strip that substring out of
/// unrelated words introduced by earlier replacements.
pub fn rewrite_lexical(text: &str, table: &PhraseTable) -> String {
    if table.is_empty() {
        return text.to_string();
    }

    let lines: Vec<String> = text
        .split('\n')
        .map(|line| rewrite_line(line, table))
        .collect();

    lines.join("\n")
}

fn rewrite_line(line: &str, table: &PhraseTable) -> String {
    let mut current = line.to_string();

    for (key, value) in table.iter() {
        if current.contains(key) {
            current = current.replace(key, value);
        }
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_replacement() {
        let table = PhraseTable::from_pairs([("创建OpenAI客户端", "Create OpenAI client")]);
        assert_eq!(
            rewrite_lexical("// 创建OpenAI客户端", &table),
            "// Create OpenAI client"
        );
    }

    #[test]
    fn test_table_order_is_load_bearing() {
        let longer_first = PhraseTable::from_pairs([("ab", "X"), ("a", "Y")]);
        assert_eq!(rewrite_lexical("ab", &longer_first), "X");

        let shorter_first = PhraseTable::from_pairs([("a", "Y"), ("ab", "X")]);
        assert_eq!(rewrite_lexical("ab", &shorter_first), "Yb");
    }

    #[test]
    fn test_reinsert_keeps_position_replaces_value() {
        let mut table = PhraseTable::new();
        table.insert("ab", "wrong");
        table.insert("a", "Y");
        let previous = table.insert("ab", "X");

        assert_eq!(previous.as_deref(), Some("wrong"));
        assert_eq!(table.len(), 2);
        // "ab" still applies before "a".
        assert_eq!(rewrite_lexical("ab", &table), "X");
    }

    #[test]
    fn test_key_never_spans_a_line_boundary() {
        let table = PhraseTable::from_pairs([("foobar", "X")]);
        assert_eq!(rewrite_lexical("foo\nbar", &table), "foo\nbar");
    }

    #[test]
    fn test_line_structure_preserved() {
        let table = PhraseTable::from_pairs([("old", "new")]);
        assert_eq!(rewrite_lexical("old\n\nold\n", &table), "new\n\nnew\n");
    }

    #[test]
    fn test_missing_key_is_noop() {
        let table = PhraseTable::from_pairs([("missing", "X")]);
        assert_eq!(rewrite_lexical("plain text", &table), "plain text");
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = PhraseTable::new();
        assert!(table.is_empty());
        assert_eq!(rewrite_lexical("anything", &table), "anything");
    }

    #[test]
    fn test_later_entry_sees_earlier_replacement() {
        // The second entry matches text the first entry introduced.
        let table = PhraseTable::from_pairs([("alpha", "beta"), ("beta", "gamma")]);
        assert_eq!(rewrite_lexical("alpha", &table), "gamma");
    }

    #[test]
    fn test_all_occurrences_on_a_line() {
        let table = PhraseTable::from_pairs([("x", "y")]);
        assert_eq!(rewrite_lexical("x x x", &table), "y y y");
    }
}
