use tracing::debug;

use super::error::{ChunkError, ConfigError};
use super::similarity::jaccard_similarity;
use super::state::ChunkerState;
use super::types::{Chunk, ChunkerConfig};
use super::{TOPIC_GATE_RATIO, TOPIC_SHIFT_THRESHOLD};
use crate::extractor::EntityExtractor;
use crate::labels::{EntitySet, entity_types};
use crate::segmenter::split_sentences;
use crate::tokens::estimate_tokens;

/// Why a sentence was made to open a new chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitReason {
    /// Adding the sentence would exceed the soft budget
    Budget,
    /// The sentence's entities barely overlap the buffered ones
    TopicShift,
}

/// Splits documents into entity-coherent chunks under a token budget.
///
/// Holds only its validated limits, so one instance can serve any number of
/// documents, concurrently or not.
#[derive(Debug, Clone)]
pub struct EntityChunker {
    config: ChunkerConfig,
}

impl EntityChunker {
    /// Validate the limits up front so bad settings fail before any work
    pub fn new(config: ChunkerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk `text`, tagging each sentence with `extractor` in document order.
    ///
    /// Rules, in order, for every sentence:
    /// - a non-empty buffer is emitted first if the sentence would push it past
    ///   `max_tokens_per_chunk`, or if the buffer already holds 60% of that
    ///   budget and the entity Jaccard overlap falls below 0.2
    /// - the sentence is buffered
    /// - while the buffer is over `hard_cap` and has more than one sentence,
    ///   its first half is emitted
    ///
    /// A single sentence whose own estimate exceeds `hard_cap` cannot be
    /// bisected and is emitted alone, over the cap. Callers feeding chunks to a
    /// model with a hard context limit must allow for that.
    ///
    /// Extractor errors are returned as-is; nothing emitted so far is kept.
    pub fn chunk<X>(&self, text: &str, extractor: &X) -> Result<Vec<Chunk>, X::Error>
    where
        X: EntityExtractor + ?Sized,
    {
        let sentences = split_sentences(text);
        let sentence_count = sentences.len();
        let mut chunks = Vec::new();

        let state = sentences.into_iter().try_fold(
            ChunkerState::default(),
            |state, sentence| -> Result<ChunkerState, X::Error> {
                let entities = entity_types(&extractor.extract(&sentence)?);
                Ok(self.step(state, sentence, entities, &mut chunks))
            },
        )?;
        chunks.extend(state.into_chunk());

        debug!(
            sentences = sentence_count,
            chunks = chunks.len(),
            "chunking complete"
        );
        Ok(chunks)
    }

    /// Decide whether a sentence costing `sentence_tokens` must open a new chunk
    pub fn split_reason(
        &self,
        buffered_tokens: usize,
        buffered_entities: &EntitySet,
        sentence_tokens: usize,
        sentence_entities: &EntitySet,
    ) -> Option<SplitReason> {
        if buffered_tokens + sentence_tokens > self.config.max_tokens_per_chunk {
            return Some(SplitReason::Budget);
        }

        let gate = self.config.max_tokens_per_chunk as f64 * TOPIC_GATE_RATIO;
        if buffered_tokens as f64 >= gate
            && jaccard_similarity(buffered_entities, sentence_entities) < TOPIC_SHIFT_THRESHOLD
        {
            return Some(SplitReason::TopicShift);
        }

        None
    }

    fn step(
        &self,
        state: ChunkerState,
        sentence: String,
        entities: EntitySet,
        chunks: &mut Vec<Chunk>,
    ) -> ChunkerState {
        let sentence_tokens = estimate_tokens(&sentence);

        let state = if state.is_empty() {
            state
        } else {
            match self.split_reason(state.tokens(), state.entities(), sentence_tokens, &entities) {
                Some(reason) => {
                    debug!(?reason, tokens = state.tokens(), "starting new chunk");
                    chunks.extend(state.into_chunk());
                    ChunkerState::default()
                }
                None => state,
            }
        };

        enforce_hard_cap(
            state.push(sentence, sentence_tokens, entities),
            self.config.hard_cap,
            chunks,
        )
    }
}

/// Emit leading halves until the buffer fits under `hard_cap` or is one sentence
pub(crate) fn enforce_hard_cap(
    mut state: ChunkerState,
    hard_cap: usize,
    chunks: &mut Vec<Chunk>,
) -> ChunkerState {
    while state.tokens() > hard_cap && state.len() > 1 {
        let (head, rest) = state.bisect();
        debug!(
            emitted = head.token_count,
            remaining = rest.tokens(),
            hard_cap,
            "bisected over-cap buffer"
        );
        chunks.push(head);
        state = rest;
    }
    state
}

/// One-shot chunking with explicit limits.
///
/// Limits are validated before the text is touched.
pub fn chunk_by_entities<X>(
    text: &str,
    extractor: &X,
    max_tokens_per_chunk: usize,
    hard_cap: usize,
) -> Result<Vec<Chunk>, ChunkError<X::Error>>
where
    X: EntityExtractor + ?Sized,
{
    let chunker = EntityChunker::new(ChunkerConfig::new(max_tokens_per_chunk, hard_cap))?;
    chunker.chunk(text, extractor).map_err(ChunkError::Extractor)
}
