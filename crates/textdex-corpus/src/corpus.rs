//! Corpus sources

use crate::config::CorpusConfig;
use crate::document::TokenizedDocument;
use crate::error::{CorpusError, Result};
use crate::stopwords::StopwordSet;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Read access to a set of tokenized documents and the stopwords that apply to them
pub trait CorpusSource: Sync {
    /// Document identifiers in ascending order
    fn document_ids(&self) -> Vec<&str>;

    fn document(&self, id: &str) -> Result<&TokenizedDocument>;

    fn stopwords(&self) -> &StopwordSet;
}

/// Documents loaded and tokenized up front from plain-text files
#[derive(Debug, Clone)]
pub struct TextCorpus {
    root: PathBuf,
    documents: BTreeMap<String, TokenizedDocument>,
    stopwords: StopwordSet,
}

impl TextCorpus {
    /// Load every matching file under `root`.
    ///
    /// Fails before reading anything if `root` is not a directory or the
    /// configured language has no stopword list. Any read error is returned
    /// as-is; there is no partial corpus.
    pub fn open(root: impl Into<PathBuf>, config: &CorpusConfig) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory(root));
        }
        let stopwords = StopwordSet::for_language(&config.language)?;

        let mut documents = BTreeMap::new();
        for (id, path) in discover(&root, config)? {
            let text = std::fs::read_to_string(&path).map_err(|source| CorpusError::Read {
                path: path.clone(),
                source,
            })?;
            let document = TokenizedDocument::from_text(&text);
            debug!(
                document = %id,
                sentences = document.sentences().len(),
                tokens = document.token_count(),
                "tokenized document"
            );
            documents.insert(id, document);
        }

        info!(root = %root.display(), documents = documents.len(), "loaded corpus");

        Ok(Self {
            root,
            documents,
            stopwords,
        })
    }

    /// Build a corpus from in-memory `(id, text)` pairs
    pub fn from_texts<I, K, V>(texts: I, stopwords: StopwordSet) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let documents = texts
            .into_iter()
            .map(|(id, text)| (id.into(), TokenizedDocument::from_text(text.as_ref())))
            .collect();

        Self {
            root: PathBuf::new(),
            documents,
            stopwords,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl CorpusSource for TextCorpus {
    fn document_ids(&self) -> Vec<&str> {
        self.documents.keys().map(String::as_str).collect()
    }

    fn document(&self, id: &str) -> Result<&TokenizedDocument> {
        self.documents
            .get(id)
            .ok_or_else(|| CorpusError::UnknownDocument(id.to_string()))
    }

    fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}

/// Matching files under `root` as `(id, path)`, id being the `/`-separated
/// path relative to `root`
fn discover(root: &Path, config: &CorpusConfig) -> Result<Vec<(String, PathBuf)>> {
    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let mut found = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !config.matches(name) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let id = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        found.push((id, entry.into_path()));
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_open_lists_matching_files_in_order() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "b.txt", "Second file.");
        write(temp_dir.path(), "a.txt", "First file.");
        write(temp_dir.path(), "notes.md", "Not a document.");

        let corpus = TextCorpus::open(temp_dir.path(), &CorpusConfig::new()).unwrap();
        assert_eq!(corpus.document_ids(), vec!["a.txt", "b.txt"]);
        assert_eq!(corpus.len(), 2);

        let doc = corpus.document("a.txt").unwrap();
        assert_eq!(doc.tokens().collect::<Vec<_>>(), vec!["First", "file"]);
    }

    #[test]
    fn test_open_recurses_into_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "top.txt", "Top.");
        write(temp_dir.path(), "nested/deep.txt", "Deep.");

        let corpus = TextCorpus::open(temp_dir.path(), &CorpusConfig::new()).unwrap();
        assert_eq!(corpus.document_ids(), vec!["nested/deep.txt", "top.txt"]);

        let flat = CorpusConfig {
            recursive: false,
            ..CorpusConfig::new()
        };
        let corpus = TextCorpus::open(temp_dir.path(), &flat).unwrap();
        assert_eq!(corpus.document_ids(), vec!["top.txt"]);
    }

    #[test]
    fn test_open_rejects_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = TextCorpus::open(&missing, &CorpusConfig::new()).unwrap_err();
        assert!(matches!(err, CorpusError::NotADirectory(ref p) if p == &missing));
    }

    #[test]
    fn test_open_rejects_file_path() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "doc.txt", "Text.");

        let err = TextCorpus::open(temp_dir.path().join("doc.txt"), &CorpusConfig::new())
            .unwrap_err();
        assert!(matches!(err, CorpusError::NotADirectory(_)));
    }

    #[test]
    fn test_open_rejects_unknown_language() {
        let temp_dir = TempDir::new().unwrap();
        let config = CorpusConfig {
            language: "klingon".to_string(),
            ..CorpusConfig::new()
        };

        let err = TextCorpus::open(temp_dir.path(), &config).unwrap_err();
        assert!(matches!(err, CorpusError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let err = TextCorpus::open(temp_dir.path(), &CorpusConfig::new()).unwrap_err();
        assert!(matches!(err, CorpusError::Read { .. }));
    }

    #[test]
    fn test_unknown_document() {
        let corpus = TextCorpus::from_texts([("a.txt", "Hello.")], StopwordSet::none());
        assert!(corpus.document("a.txt").is_ok());
        assert!(matches!(
            corpus.document("b.txt"),
            Err(CorpusError::UnknownDocument(_))
        ));
    }
}
