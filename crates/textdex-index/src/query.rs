//! Read-side queries over a built index

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::position::Position;
use crate::report::ReportRow;
use crate::store::WordIndex;
use serde::Serialize;
use textdex_corpus::{CorpusSource, Sentence};

/// Documents containing a word and its rendered sentences, one per occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Occurrences {
    pub files: Vec<String>,
    pub sentences: Vec<String>,
}

impl Occurrences {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Answers lookups against an index, rendering sentences from the corpus it
/// was built from
pub struct QueryEngine<'a, C: ?Sized> {
    index: &'a WordIndex,
    corpus: &'a C,
    marker: String,
}

impl<'a, C> QueryEngine<'a, C>
where
    C: CorpusSource + ?Sized,
{
    pub fn new(index: &'a WordIndex, corpus: &'a C) -> Self {
        Self {
            index,
            corpus,
            marker: "*".to_string(),
        }
    }

    /// Engine rendering with the marker from `config`
    pub fn with_config(index: &'a WordIndex, corpus: &'a C, config: &IndexConfig) -> Self {
        Self::new(index, corpus).with_marker(config.marker.as_str())
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn index(&self) -> &WordIndex {
        self.index
    }

    /// All occurrences of `word`, looked up verbatim.
    ///
    /// Files come in document order, each listed once; sentences follow
    /// document order then position order. An unindexed word yields an empty
    /// result.
    pub fn fetch_occurrences(&self, word: &str) -> Result<Occurrences> {
        let mut occurrences = Occurrences::default();

        for (id, positions) in self.index.documents(word) {
            occurrences.files.push(id.to_string());

            let document = self.corpus.document(id)?;
            for &position in positions {
                let sentence = document
                    .sentence(position.sentence)
                    .ok_or_else(|| out_of_range(id, position))?;
                occurrences
                    .sentences
                    .push(self.render(id, sentence, position)?);
            }
        }

        Ok(occurrences)
    }

    /// The `n` most frequent words with their occurrences
    pub fn top_n_report(&self, n: usize) -> Result<Vec<ReportRow>> {
        self.index
            .frequencies()
            .most_common(n)
            .into_iter()
            .map(|(word, count)| {
                let occurrences = self.fetch_occurrences(word)?;
                Ok(ReportRow::new(word, count, &occurrences))
            })
            .collect()
    }

    /// Join a copy of `sentence` with the token at `position` marked
    fn render(&self, id: &str, sentence: &Sentence, position: Position) -> Result<String> {
        if position.token >= sentence.len() {
            return Err(out_of_range(id, position));
        }

        let rendered: Vec<String> = sentence
            .iter()
            .enumerate()
            .map(|(j, token)| {
                if j == position.token {
                    format!("{}{}{}", self.marker, token, self.marker)
                } else {
                    token.clone()
                }
            })
            .collect();

        Ok(rendered.join(" "))
    }
}

fn out_of_range(id: &str, position: Position) -> IndexError {
    IndexError::PositionOutOfRange {
        document: id.to_string(),
        sentence: position.sentence,
        token: position.token,
    }
}
