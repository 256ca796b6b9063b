//! Index construction

use crate::config::{BuildStrategy, IndexConfig};
use crate::error::Result;
use crate::position::Position;
use crate::store::{DocumentPostings, WordIndex};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use textdex_corpus::{CorpusSource, StopwordSet, TokenizedDocument};
use tracing::{debug, info};

/// Builds a [`WordIndex`] from a corpus in one pass over its documents
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Index every document of `corpus`.
    ///
    /// Each call returns a fresh index; nothing is shared between builds.
    pub fn build<C>(&self, corpus: &C) -> Result<WordIndex>
    where
        C: CorpusSource + ?Sized,
    {
        let ids = corpus.document_ids();
        let stopwords = corpus.stopwords();

        let postings: Vec<DocumentPostings> = if self.config.parallel {
            ids.par_iter()
                .map(|id| -> Result<DocumentPostings> {
                    Ok(self.index_document(id, corpus.document(id)?, stopwords))
                })
                .collect::<Result<_>>()?
        } else {
            ids.iter()
                .map(|id| -> Result<DocumentPostings> {
                    Ok(self.index_document(id, corpus.document(id)?, stopwords))
                })
                .collect::<Result<_>>()?
        };

        let index = WordIndex::from_postings(postings);
        info!(
            documents = index.document_count(),
            words = index.len(),
            occurrences = index.frequencies().total(),
            strategy = ?self.config.strategy,
            parallel = self.config.parallel,
            "built index"
        );

        Ok(index)
    }

    fn index_document(
        &self,
        id: &str,
        document: &TokenizedDocument,
        stopwords: &StopwordSet,
    ) -> DocumentPostings {
        let postings = match self.config.strategy {
            BuildStrategy::Scan => scan_postings(id, document, stopwords),
            BuildStrategy::SinglePass => single_pass_postings(id, document, stopwords),
        };
        debug!(
            document = id,
            words = postings.words.len(),
            occurrences = postings.occurrence_count(),
            "indexed document"
        );
        postings
    }
}

/// Distinct lowercased non-stopword tokens in first-seen order, then one full
/// rescan of the document per word. Quadratic in document size.
fn scan_postings(
    id: &str,
    document: &TokenizedDocument,
    stopwords: &StopwordSet,
) -> DocumentPostings {
    let mut seen = HashSet::new();
    let candidates: Vec<String> = document
        .tokens()
        .map(str::to_lowercase)
        .filter(|word| seen.insert(word.clone()))
        .filter(|word| !stopwords.contains(word))
        .collect();

    let mut postings = DocumentPostings::new(id);
    for word in candidates {
        let mut positions = Vec::new();
        for (i, sentence) in document.sentences().iter().enumerate() {
            for (j, token) in sentence.iter().enumerate() {
                if token.to_lowercase() == word {
                    positions.push(Position::new(i, j));
                }
            }
        }
        postings.words.push((word, positions));
    }

    postings
}

/// Every token visited once; its position goes to its lowercased form
fn single_pass_postings(
    id: &str,
    document: &TokenizedDocument,
    stopwords: &StopwordSet,
) -> DocumentPostings {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut postings = DocumentPostings::new(id);

    for (i, sentence) in document.sentences().iter().enumerate() {
        for (j, token) in sentence.iter().enumerate() {
            let word = token.to_lowercase();
            if stopwords.contains(&word) {
                continue;
            }
            let slot = match slots.get(&word) {
                Some(&slot) => slot,
                None => {
                    let slot = postings.words.len();
                    slots.insert(word.clone(), slot);
                    postings.words.push((word, Vec::new()));
                    slot
                }
            };
            postings.words[slot].1.push(Position::new(i, j));
        }
    }

    postings
}
