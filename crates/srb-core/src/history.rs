use std::collections::BTreeMap;

use crate::{domain::ChatId, errors::Error, Result};

/// In-memory log of open questions: content key -> the chat that asked.
///
/// Keys are derived from message content, so two users asking the identical
/// question collide and the later write wins; the earlier question becomes
/// unreachable by key lookup. That overwrite behavior is intentional and
/// relied upon by callers. Entries live until `/clear_history` or process
/// exit; nothing is persisted.
#[derive(Clone, Debug, Default)]
pub struct CorrelationTable {
    entries: BTreeMap<String, ChatId>,
}

impl CorrelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `key -> asker`, returning the displaced chat id on collision.
    pub fn record(&mut self, key: String, asker: ChatId) -> Option<ChatId> {
        self.entries.insert(key, asker)
    }

    /// Resolve a reply's content key back to the chat that asked.
    pub fn resolve(&self, key: &str) -> Result<ChatId> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| Error::Lookup {
                key: key.to_string(),
            })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain-text dump for `/show_history`, one entry per line in key order.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "History is empty.".to_string();
        }
        self.entries
            .iter()
            .map(|(key, chat)| format!("{key} => {}", chat.0))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_resolves() {
        let mut table = CorrelationTable::new();
        assert!(table.record("Question A".to_string(), ChatId(42)).is_none());
        assert_eq!(table.resolve("Question A").unwrap(), ChatId(42));
    }

    #[test]
    fn collision_keeps_the_later_sender() {
        let mut table = CorrelationTable::new();
        table.record("help".to_string(), ChatId(1));
        let displaced = table.record("help".to_string(), ChatId(2));

        assert_eq!(displaced, Some(ChatId(1)));
        assert_eq!(table.resolve("help").unwrap(), ChatId(2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_key_is_a_typed_lookup_error() {
        let table = CorrelationTable::new();
        match table.resolve("never stored") {
            Err(Error::Lookup { key }) => assert_eq!(key, "never stored"),
            other => panic!("expected lookup error, got {other:?}"),
        }
    }

    #[test]
    fn clear_empties_the_table() {
        let mut table = CorrelationTable::new();
        table.record("a".to_string(), ChatId(1));
        table.record("b".to_string(), ChatId(2));

        table.clear();

        assert!(table.is_empty());
        assert!(matches!(table.resolve("a"), Err(Error::Lookup { .. })));
    }

    #[test]
    fn render_is_deterministic_and_keyed() {
        let mut table = CorrelationTable::new();
        assert_eq!(table.render(), "History is empty.");

        table.record("b".to_string(), ChatId(2));
        table.record("a".to_string(), ChatId(1));
        assert_eq!(table.render(), "a => 1\nb => 2");
    }
}
