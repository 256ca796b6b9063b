//! Immutable word → document → positions index

use crate::frequency::FrequencyTable;
use crate::position::Position;
use std::collections::{BTreeMap, HashMap};

/// Positions found in a single document, one entry per indexed word in
/// first-seen order.
///
/// This is the unit of work the builder produces per document; merging
/// partials in document order yields the same index whether they were
/// collected sequentially or in parallel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DocumentPostings {
    pub document: String,
    pub words: Vec<(String, Vec<Position>)>,
}

impl DocumentPostings {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            words: Vec::new(),
        }
    }

    /// Number of positions across all words
    pub fn occurrence_count(&self) -> usize {
        self.words.iter().map(|(_, positions)| positions.len()).sum()
    }
}

/// Built index. Read-only: the only way to get one is
/// [`IndexBuilder::build`](crate::IndexBuilder::build).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    words: HashMap<String, BTreeMap<String, Vec<Position>>>,
    frequencies: FrequencyTable,
    document_count: usize,
}

impl WordIndex {
    pub(crate) fn from_postings<I>(postings: I) -> Self
    where
        I: IntoIterator<Item = DocumentPostings>,
    {
        let mut index = Self::default();

        for DocumentPostings { document, words } in postings {
            index.document_count += 1;
            for (word, positions) in words {
                index.frequencies.add(&word, positions.len());
                index
                    .words
                    .entry(word)
                    .or_default()
                    .entry(document.clone())
                    .or_default()
                    .extend(positions);
            }
        }

        index
    }

    /// Positions of `word` in `document`
    pub fn occurrences(&self, word: &str, document: &str) -> Option<&[Position]> {
        self.words
            .get(word)
            .and_then(|docs| docs.get(document))
            .map(Vec::as_slice)
    }

    /// Documents containing `word` with their positions, in ascending
    /// document order. Empty if the word isn't indexed.
    pub fn documents(&self, word: &str) -> impl Iterator<Item = (&str, &[Position])> + '_ {
        self.words
            .get(word)
            .into_iter()
            .flatten()
            .map(|(doc, positions)| (doc.as_str(), positions.as_slice()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Total occurrences of `word` across all documents
    pub fn frequency(&self, word: &str) -> usize {
        self.frequencies.get(word)
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Indexed words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.keys().map(String::as_str)
    }

    /// Number of distinct indexed words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of documents that went into the build
    pub fn document_count(&self) -> usize {
        self.document_count
    }
}
