mod batcher;
mod client;
mod error;
mod gazetteer;
mod prefetch;
mod types;

#[cfg(test)]
mod tests;

pub use batcher::Batcher;
pub use client::{DEFAULT_BATCH_SIZE, NerClient};
pub use error::{GazetteerError, NerError};
pub use gazetteer::GazetteerExtractor;
pub use prefetch::PrefetchedTags;
pub use types::{EntityTag, PredictRequest, PredictResponse};

/// Tags one sentence at a time
///
/// Implementations are called once per sentence, in document order. Errors are
/// handed back to the chunker's caller untouched.
pub trait EntityExtractor {
    type Error;

    fn extract(&self, sentence: &str) -> Result<Vec<EntityTag>, Self::Error>;
}

impl<F, E> EntityExtractor for F
where
    F: Fn(&str) -> Result<Vec<EntityTag>, E>,
{
    type Error = E;

    fn extract(&self, sentence: &str) -> Result<Vec<EntityTag>, E> {
        self(sentence)
    }
}
