use super::types::Chunk;
use crate::labels::EntitySet;
use crate::tokens::estimate_sentences;

/// In-progress chunk, threaded by value through the sentence fold
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct ChunkerState {
    sentences: Vec<String>,
    entities: EntitySet,
    tokens: usize,
}

impl ChunkerState {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn tokens(&self) -> usize {
        self.tokens
    }

    pub fn entities(&self) -> &EntitySet {
        &self.entities
    }

    /// Buffer one sentence with its precomputed estimate and entity types
    pub fn push(mut self, sentence: String, tokens: usize, entities: EntitySet) -> Self {
        self.sentences.push(sentence);
        self.entities.extend(entities);
        self.tokens += tokens;
        self
    }

    /// Finalize the buffer; nothing to emit when empty
    pub fn into_chunk(self) -> Option<Chunk> {
        if self.is_empty() {
            return None;
        }
        Some(Chunk::from_sentences(self.sentences, &self.entities))
    }

    /// Emit the first half of the buffer, keep the second.
    ///
    /// The emitted half carries the whole buffered entity set. The kept half
    /// keeps it too and gets its token count recomputed from scratch.
    pub fn bisect(mut self) -> (Chunk, Self) {
        debug_assert!(self.len() > 1, "bisect needs at least two sentences");

        let rest = self.sentences.split_off(self.sentences.len() / 2);
        let head = Chunk::from_sentences(self.sentences, &self.entities);
        let tokens = estimate_sentences(&rest);

        (
            head,
            Self {
                sentences: rest,
                entities: self.entities,
                tokens,
            },
        )
    }
}
