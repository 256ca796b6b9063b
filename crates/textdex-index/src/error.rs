//! Index error type

use textdex_corpus::CorpusError;

#[derive(thiserror::Error, Debug)]
pub enum IndexError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error("position ({sentence}, {token}) is out of range in document {document}")]
    PositionOutOfRange {
        document: String,
        sentence: usize,
        token: usize,
    },
}

pub type Result<T> = core::result::Result<T, IndexError>;
