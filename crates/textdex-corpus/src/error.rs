//! Corpus error type

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("unknown document: {0}")]
    UnknownDocument(String),

    #[error("no stopword list bundled for language '{0}'")]
    UnsupportedLanguage(String),
}

pub type Result<T> = core::result::Result<T, CorpusError>;
