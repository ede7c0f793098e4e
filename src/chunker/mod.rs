mod error;
mod similarity;
mod splitter;
mod state;
mod types;


pub use error::{ChunkError, ConfigError};
pub use similarity::jaccard_similarity;
pub use splitter::{EntityChunker, SplitReason, chunk_by_entities};
pub use types::{Chunk, ChunkerConfig};

/// Default soft token budget per chunk
pub const DEFAULT_MAX_TOKENS: usize = 2200;

/// Default hard token ceiling per chunk
pub const DEFAULT_HARD_CAP: usize = 2600;

/// Entity overlap below which a new sentence starts a new chunk
pub const TOPIC_SHIFT_THRESHOLD: f64 = 0.2;

/// Share of the budget a chunk must hold before topic shifts are considered
pub const TOPIC_GATE_RATIO: f64 = 0.6;
