//! Session-scoped entry store.

use tracing::debug;

use crate::record::Record;

/// Append-only, ordered collection of submitted entries.
///
/// Order of append is order of display and order of export. Entries are
/// never edited, reordered or removed; the store lives as long as the
/// session that owns it.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Record>,
}

impl EntryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the end of the sequence.
    pub fn append(&mut self, record: Record) {
        self.entries.push(record);
        debug!(entries = self.entries.len(), "Appended entry");
    }

    /// All entries, in append order.
    #[must_use]
    pub fn all(&self) -> &[Record] {
        &self.entries
    }

    /// Number of entries recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    fn entry(note: &str) -> Record {
        let mut record = Record::blank();
        record.set(Field::DailyNotes, note);
        record
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = EntryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = EntryStore::new();
        for note in ["one", "two", "three"] {
            store.append(entry(note));
        }
        let notes: Vec<&str> = store.all().iter().map(|r| r.get(Field::DailyNotes)).collect();
        assert_eq!(notes, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = EntryStore::new();
        store.append(entry("same"));
        store.append(entry("same"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0], store.all()[1]);
    }

    #[test]
    fn test_all_does_not_mutate() {
        let mut store = EntryStore::new();
        store.append(entry("only"));
        let first = store.all().to_vec();
        let second = store.all().to_vec();
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }
}
