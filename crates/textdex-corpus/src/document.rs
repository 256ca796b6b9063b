//! Tokenized document

use crate::tokenize;

/// Ordered word tokens of one sentence
pub type Sentence = Vec<String>;

/// A document split into sentences of word tokens.
///
/// The flat token stream and the sentence list come from the same
/// tokenization, so every token yielded by [`tokens`](Self::tokens) has a
/// (sentence, token) address in [`sentences`](Self::sentences).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedDocument {
    sentences: Vec<Sentence>,
}

impl TokenizedDocument {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(tokenize::sentences(text))
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// All tokens in document order
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences.iter().flatten().map(String::as_str)
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }
}
