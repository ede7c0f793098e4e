use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_tokens_per_chunk must be greater than zero")]
    ZeroBudget,

    #[error("hard_cap ({hard_cap}) must be at least max_tokens_per_chunk ({max_tokens})")]
    HardCapBelowBudget { hard_cap: usize, max_tokens: usize },
}

/// Failure of a one-shot chunking call
#[derive(Error, Debug)]
pub enum ChunkError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The extractor's own error, passed through as-is
    #[error("entity extraction failed")]
    Extractor(#[source] E),
}
