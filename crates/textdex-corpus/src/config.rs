//! Configuration for corpus loading

/// Corpus loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    /// File extension (without the dot) of documents to load
    pub extension: String,

    /// Stopword language
    pub language: String,

    /// Descend into subdirectories
    pub recursive: bool,
}

impl CorpusConfig {
    pub fn new() -> Self {
        Self {
            extension: "txt".to_string(),
            language: "english".to_string(),
            recursive: true,
        }
    }

    /// True if `name` carries the configured extension, compared case-sensitively
    pub fn matches(&self, name: &str) -> bool {
        match name.rsplit_once('.') {
            Some((stem, ext)) => !stem.is_empty() && ext == self.extension,
            None => false,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self::new()
    }
}
