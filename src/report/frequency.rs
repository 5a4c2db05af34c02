//! Frequency counting and ranking
//!
//! [`FrequencyCounter`] records counts in first-occurrence order;
//! [`FrequencyTable`] is the ranked view. Ranking uses a stable sort, so
//! items with equal counts keep the order in which they were first seen.

use rustc_hash::FxHashMap;

/// Multiset of strings that remembers first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyCounter {
    /// Item -> position in `entries`
    index: FxHashMap<String, u32>,
    /// (item, count) in first-occurrence order
    entries: Vec<(String, usize)>,
    total: usize,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `item`.
    pub fn add(&mut self, item: &str) {
        self.add_count(item, 1);
    }

    /// Count `count` occurrences of `item`.
    pub fn add_count(&mut self, item: &str, count: usize) {
        let slot = match self.index.get(item) {
            Some(&slot) => slot as usize,
            None => {
                let slot = self.entries.len();
                self.index.insert(item.to_string(), slot as u32);
                self.entries.push((item.to_string(), 0));
                slot
            }
        };
        self.entries[slot].1 += count;
        self.total += count;
    }

    /// Count every item of `items`, in order.
    pub fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.add(item.as_ref());
        }
    }

    pub fn count(&self, item: &str) -> usize {
        self.index
            .get(item)
            .map(|&slot| self.entries[slot as usize].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index.contains_key(item)
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of occurrences
    pub fn total(&self) -> usize {
        self.total
    }

    /// Rank by descending count, ties in first-occurrence order.
    pub fn rank(&self) -> FrequencyTable {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        FrequencyTable { entries }
    }
}

/// Ranked `(item, count)` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Top `n` entries.
    pub fn most_common(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(item, count)| (item.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
