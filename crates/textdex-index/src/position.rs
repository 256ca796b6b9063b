//! Token addressing within a document

use serde::Serialize;
use std::fmt;

/// Location of a token: index of its sentence in the document, then index of
/// the token within that sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub sentence: usize,
    pub token: usize,
}

impl Position {
    pub const fn new(sentence: usize, token: usize) -> Self {
        Self { sentence, token }
    }
}

impl From<(usize, usize)> for Position {
    fn from((sentence, token): (usize, usize)) -> Self {
        Self::new(sentence, token)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.sentence, self.token)
    }
}
