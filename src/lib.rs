// Public API exports
pub mod chunker;
pub mod config;
pub mod extractor;
pub mod labels;
pub mod pipeline;
pub mod segmenter;
pub mod summarizer;
pub mod tokens;

// Re-export main types for convenience
pub use chunker::{
    Chunk, ChunkError, ChunkerConfig, ConfigError, DEFAULT_HARD_CAP, DEFAULT_MAX_TOKENS,
    EntityChunker, SplitReason, chunk_by_entities,
};

pub use config::{AppConfig, ConfigFileError};

pub use extractor::{
    EntityExtractor, EntityTag, GazetteerExtractor, NerClient, NerError, PrefetchedTags,
};

pub use labels::{EntitySet, entity_types, normalize_label};

pub use pipeline::{DocumentSummary, summarize_chunks};

pub use segmenter::split_sentences;

pub use summarizer::{Summarizer, SummarizerClient, SummarizerError};

pub use tokens::estimate_tokens;
