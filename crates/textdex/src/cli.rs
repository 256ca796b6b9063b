use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use textdex_corpus::CorpusConfig;
use textdex_index::{BuildStrategy, IndexConfig};

#[derive(Parser, Debug)]
#[command(name = "textdex")]
#[command(version)]
#[command(about = "Indexer for raw text files")]
pub struct Cli {
    /// Directory with the text documents
    #[arg(long = "d", value_name = "DIR", default_value = "test docs")]
    pub dir: PathBuf,

    /// Number of most frequent words to report
    #[arg(
        long = "n",
        value_name = "N",
        default_value_t = 3,
        allow_negative_numbers = true
    )]
    pub top_n: i64,

    /// Print the occurrences of WORD instead of the frequency report (repeatable)
    #[arg(long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Emit JSON instead of the pipe-separated format
    #[arg(long)]
    pub json: bool,

    /// How positions are collected per document
    #[arg(long, value_enum, default_value_t = Strategy::SinglePass)]
    pub strategy: Strategy,

    /// Index documents in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Stopword language
    #[arg(long, default_value = "english")]
    pub language: String,

    /// Marker placed around matched words
    #[arg(long, default_value = "*")]
    pub marker: String,

    /// Extension of the files to index
    #[arg(long, default_value = "txt")]
    pub extension: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Rescan each document once per word
    Scan,
    /// Single pass over each document
    SinglePass,
}

impl From<Strategy> for BuildStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Scan => BuildStrategy::Scan,
            Strategy::SinglePass => BuildStrategy::SinglePass,
        }
    }
}

impl Cli {
    /// Requested report size; zero or negative means an empty report
    pub fn top_n(&self) -> usize {
        usize::try_from(self.top_n).unwrap_or(0)
    }

    pub fn corpus_config(&self) -> CorpusConfig {
        CorpusConfig {
            extension: self.extension.trim_start_matches('.').to_string(),
            language: self.language.clone(),
            ..CorpusConfig::new()
        }
    }

    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            strategy: self.strategy.into(),
            parallel: self.parallel,
            marker: self.marker.clone(),
        }
    }
}
