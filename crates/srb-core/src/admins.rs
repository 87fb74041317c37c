use std::collections::HashMap;

use crate::domain::ChatId;

/// The fixed set of administrators: chat id -> display name.
///
/// Loaded once from configuration and immutable during execution.
#[derive(Clone, Debug)]
pub struct AdminSet {
    inner: HashMap<ChatId, String>,
}

impl AdminSet {
    pub fn new(admins: HashMap<i64, String>) -> Self {
        Self {
            inner: admins
                .into_iter()
                .map(|(id, name)| (ChatId(id), name))
                .collect(),
        }
    }

    pub fn contains(&self, id: ChatId) -> bool {
        self.inner.contains_key(&id)
    }

    pub fn display_name(&self, id: ChatId) -> Option<&str> {
        self.inner.get(&id).map(String::as_str)
    }

    pub fn ids(&self) -> impl Iterator<Item = ChatId> + '_ {
        self.inner.keys().copied()
    }

    /// Every admin except `excluding` (used to skip the replying admin when
    /// broadcasting "question answered" notifications).
    pub fn others(&self, excluding: ChatId) -> impl Iterator<Item = ChatId> + '_ {
        self.inner.keys().copied().filter(move |id| *id != excluding)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> AdminSet {
        AdminSet::new(HashMap::from([
            (1, "Alice".to_string()),
            (2, "Bob".to_string()),
        ]))
    }

    #[test]
    fn membership() {
        let admins = set();
        assert!(admins.contains(ChatId(1)));
        assert!(admins.contains(ChatId(2)));
        assert!(!admins.contains(ChatId(3)));
        assert!(!admins.contains(ChatId(-1)));
    }

    #[test]
    fn others_excludes_only_the_given_admin() {
        let admins = set();
        let mut rest: Vec<i64> = admins.others(ChatId(1)).map(|c| c.0).collect();
        rest.sort_unstable();
        assert_eq!(rest, vec![2]);

        // Excluding a non-member leaves the set intact.
        assert_eq!(admins.others(ChatId(99)).count(), 2);
    }

    #[test]
    fn display_names() {
        let admins = set();
        assert_eq!(admins.display_name(ChatId(1)), Some("Alice"));
        assert_eq!(admins.display_name(ChatId(3)), None);
    }
}
