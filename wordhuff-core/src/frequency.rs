//! Word frequency tables.
//!
//! [`FrequencyTable`] maps each distinct word to its number of occurrences.
//! Storage order carries no meaning; [`FrequencyTable::sorted`] yields the
//! entries in lexicographic word order for anything that must be
//! reproducible, such as code tree construction.

use crate::error::{Result, WordHuffError};
use std::collections::HashMap;
use std::collections::hash_map;

/// Mapping from word to occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` distinct words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Record one occurrence of `word`.
    #[inline]
    pub fn increment(&mut self, word: &str) -> Result<()> {
        self.add(word, 1)
    }

    /// Add `count` occurrences of `word`.
    pub fn add(&mut self, word: &str, count: u64) -> Result<()> {
        if let Some(existing) = self.counts.get_mut(word) {
            *existing = existing
                .checked_add(count)
                .ok_or_else(|| WordHuffError::count_overflow(word))?;
        } else {
            self.counts.insert(word.to_owned(), count);
        }
        Ok(())
    }

    /// Count for `word`, if present.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Whether `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> Result<u64> {
        self.counts.iter().try_fold(0u64, |acc, (word, &count)| {
            acc.checked_add(count)
                .ok_or_else(|| WordHuffError::count_overflow(word.as_str()))
        })
    }

    /// Iterate over `(word, count)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Entries sorted lexicographically by word.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Fold `other` into `self`, summing counts per word.
    pub fn merge(&mut self, other: FrequencyTable) -> Result<()> {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return Ok(());
        }
        for (word, count) in other.counts {
            match self.counts.entry(word) {
                hash_map::Entry::Occupied(mut slot) => {
                    let sum = slot
                        .get()
                        .checked_add(count)
                        .ok_or_else(|| WordHuffError::count_overflow(slot.key().as_str()))?;
                    *slot.get_mut() = sum;
                }
                hash_map::Entry::Vacant(slot) => {
                    slot.insert(count);
                }
            }
        }
        Ok(())
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    /// Consume the table, returning the underlying map.
    pub fn into_map(self) -> HashMap<String, u64> {
        self.counts
    }
}

impl From<HashMap<String, u64>> for FrequencyTable {
    fn from(counts: HashMap<String, u64>) -> Self {
        Self { counts }
    }
}

/// Later duplicates of a word overwrite earlier ones, as with `HashMap`.
impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(w, c)| (w.into(), c)).collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, u64)> for FrequencyTable {
    fn extend<I: IntoIterator<Item = (S, u64)>>(&mut self, iter: I) {
        self.counts
            .extend(iter.into_iter().map(|(w, c)| (w.into(), c)));
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
