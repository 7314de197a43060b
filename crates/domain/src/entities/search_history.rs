//! Search history - ordered, deduplicated record of successful lookups
//!
//! Entries keep insertion order and are never re-sorted. A location key
//! appears at most once; the first write wins, so repeating a lookup never
//! moves an entry or changes its timestamp.

use serde::{Deserialize, Serialize};

use super::HistoryEntry;
use crate::value_objects::LocationKey;

/// In-memory search history for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an entry exists for `key` (exact match on normalized keys)
    pub fn contains(&self, key: &LocationKey) -> bool {
        self.entries.iter().any(|e| &e.location_key == key)
    }

    /// Append an entry unless its key is already present.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn append(&mut self, entry: HistoryEntry) -> bool {
        if self.contains(&entry.location_key) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry for `key`, keeping the order of the others
    pub fn remove(&mut self, key: &LocationKey) -> Option<HistoryEntry> {
        let index = self.entries.iter().position(|e| &e.location_key == key)?;
        Some(self.entries.remove(index))
    }

    /// Oldest remaining entry
    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn get(&self, key: &LocationKey) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| &e.location_key == key)
    }

    /// Entry at a zero-based position
    pub fn get_index(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &LocationKey> {
        self.entries.iter().map(|e| &e.location_key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
