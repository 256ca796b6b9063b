//! Configuration for index construction and rendering

/// How the builder collects positions within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildStrategy {
    /// Rescan the whole document once per distinct candidate word
    Scan,
    /// Visit every token once and append its position to its word
    #[default]
    SinglePass,
}

/// Index configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Position collection strategy
    pub strategy: BuildStrategy,

    /// Collect per-document positions on the rayon pool
    pub parallel: bool,

    /// Placed on both sides of a matched token when rendering sentences
    pub marker: String,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self {
            strategy: BuildStrategy::default(),
            parallel: false,
            marker: "*".to_string(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}
