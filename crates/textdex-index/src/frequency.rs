//! Word occurrence counts

use std::cmp::Reverse;
use std::collections::HashMap;

/// Occurrence count per word, remembering the order words were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, word: &str, count: usize) {
        match self.counts.get_mut(word) {
            Some(total) => *total += count,
            None => {
                self.counts.insert(word.to_string(), count);
                self.order.push(word.to_string());
            }
        }
    }

    /// Count for `word`, zero if never seen
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Words with their counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order
            .iter()
            .map(|word| (word.as_str(), self.get(word)))
    }

    /// Up to `n` words with a nonzero count, most frequent first.
    ///
    /// Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        if n == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<_> = self.iter().filter(|&(_, count)| count > 0).collect();
        ranked.sort_by_key(|&(_, count)| Reverse(count));
        ranked.truncate(n);
        ranked
    }
}
