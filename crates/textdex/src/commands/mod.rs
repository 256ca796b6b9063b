pub mod lookup;
pub mod report;

use crate::cli::Cli;
use anyhow::Context;
use textdex_corpus::TextCorpus;
use textdex_index::{IndexBuilder, IndexConfig, QueryEngine, WordIndex};

/// Width of the dashed line printed after every output block
pub const SEPARATOR_WIDTH: usize = 80;

/// A loaded corpus and the index built from it
pub struct Session {
    corpus: TextCorpus,
    index: WordIndex,
    config: IndexConfig,
}

impl Session {
    pub fn open(cli: &Cli) -> anyhow::Result<Self> {
        let corpus = TextCorpus::open(&cli.dir, &cli.corpus_config())
            .with_context(|| format!("cannot load documents from {}", cli.dir.display()))?;

        let config = cli.index_config();
        let index = IndexBuilder::new(config.clone())
            .build(&corpus)
            .context("failed to build index")?;

        Ok(Self {
            corpus,
            index,
            config,
        })
    }

    pub fn engine(&self) -> QueryEngine<'_, TextCorpus> {
        QueryEngine::with_config(&self.index, &self.corpus, &self.config)
    }
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}
