//! Positional inverted index over a tokenized corpus, with occurrence lookup
//! and word frequency reports

mod builder;
mod config;
mod error;
mod frequency;
mod position;
mod query;
mod report;
mod store;

pub use builder::IndexBuilder;
pub use config::{BuildStrategy, IndexConfig};
pub use error::{IndexError, Result};
pub use frequency::FrequencyTable;
pub use position::Position;
pub use query::{Occurrences, QueryEngine};
pub use report::ReportRow;
pub use store::WordIndex;
