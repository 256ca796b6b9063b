//! Top-N frequency report rows

use crate::query::Occurrences;
use serde::Serialize;
use std::fmt;

/// One word of a frequency report, formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub word: String,
    pub count: usize,
    /// Document ids joined with `,`
    pub files: String,
    /// Rendered sentences joined with `\n`
    pub sentences: String,
}

impl ReportRow {
    pub fn new(word: &str, count: usize, occurrences: &Occurrences) -> Self {
        Self {
            word: word.to_string(),
            count,
            files: occurrences.files.join(","),
            sentences: occurrences.sentences.join("\n"),
        }
    }

    /// `word (count)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.word, self.count)
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.label(), self.files, self.sentences)
    }
}
