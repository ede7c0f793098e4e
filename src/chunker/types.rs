use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::{DEFAULT_HARD_CAP, DEFAULT_MAX_TOKENS};
use crate::labels::EntitySet;
use crate::tokens::estimate_sentences;

/// A run of consecutive sentences summarized as one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Sentences joined by single spaces
    pub text: String,
    /// Sentences in document order
    pub sentences: Vec<String>,
    /// Sorted distinct entity types seen while the chunk was buffered
    pub entities: Vec<String>,
    /// Sum of per-sentence token estimates
    pub token_count: usize,
}

impl Chunk {
    pub(crate) fn from_sentences(sentences: Vec<String>, entities: &EntitySet) -> Self {
        debug_assert!(!sentences.is_empty(), "chunks are never empty");

        Self {
            text: sentences.join(" "),
            token_count: estimate_sentences(&sentences),
            entities: entities.iter().cloned().collect(),
            sentences,
        }
    }
}

/// Token limits for one chunking run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Soft budget; exceeding it starts a new chunk
    pub max_tokens_per_chunk: usize,
    /// Ceiling enforced by bisection
    pub hard_cap: usize,
}

impl ChunkerConfig {
    pub fn new(max_tokens_per_chunk: usize, hard_cap: usize) -> Self {
        Self {
            max_tokens_per_chunk,
            hard_cap,
        }
    }

    /// Reject limits that cannot be honoured; never clamps
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tokens_per_chunk == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        if self.hard_cap < self.max_tokens_per_chunk {
            return Err(ConfigError::HardCapBelowBudget {
                hard_cap: self.hard_cap,
                max_tokens: self.max_tokens_per_chunk,
            });
        }
        Ok(())
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS, DEFAULT_HARD_CAP)
    }
}
