use super::RecordStore;
use crate::model::Record;

/// Vector-backed record store. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    fn records(&self) -> &[Record] {
        &self.records
    }

    fn remove_where<F>(&mut self, mut remove: F) -> usize
    where
        F: FnMut(&Record) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| !remove(r));
        before - self.records.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_shift(mut self, text: &str, owner: &str, date: &str, shift: i64) -> Self {
            self.store.push(Record::shift(text, owner, date, shift));
            self
        }

        pub fn with_substitution(mut self, text: &str, owner: &str, date: &str) -> Self {
            self.store
                .push(Record::substitution(text, owner, date, "abc", "xyz"));
            self
        }

        /// One shift record per owner, text "Text <n>" (6 chars), date 2024-01-01.
        pub fn with_owners(mut self, owners: &[&str]) -> Self {
            for (i, owner) in owners.iter().enumerate() {
                let text = format!("Text {}", i + 1);
                self.store.push(Record::shift(text, *owner, "2024-01-01", 1));
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let store = StoreFixture::new()
            .with_owners(&["alice", "bob", "carol"])
            .store;
        let owners: Vec<_> = store.records().iter().map(|r| r.owner()).collect();
        assert_eq!(owners, ["alice", "bob", "carol"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_where_reports_count_and_preserves_order() {
        let mut store = StoreFixture::new()
            .with_owners(&["alice", "bob", "alice", "carol"])
            .store;
        let removed = store.remove_where(|r| r.owner() == "alice");
        assert_eq!(removed, 2);
        let owners: Vec<_> = store.records().iter().map(|r| r.owner()).collect();
        assert_eq!(owners, ["bob", "carol"]);
    }

    #[test]
    fn remove_where_on_empty_store() {
        let mut store = InMemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.remove_where(|_| true), 0);
    }
}
