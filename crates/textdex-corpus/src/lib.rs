//! Tokenized text corpus: document discovery, sentence/word tokenization and stopwords

mod config;
mod corpus;
mod document;
mod error;
mod stopwords;
pub mod tokenize;

pub use config::CorpusConfig;
pub use corpus::{CorpusSource, TextCorpus};
pub use document::{Sentence, TokenizedDocument};
pub use error::{CorpusError, Result};
pub use stopwords::StopwordSet;
