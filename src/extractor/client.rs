use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

use super::batcher::Batcher;
use super::error::NerError;
use super::prefetch::PrefetchedTags;
use super::types::{EntityTag, PredictRequest, PredictResponse};
use super::EntityExtractor;

/// Sentences per request when prefetching
pub const DEFAULT_BATCH_SIZE: usize = 32;

const SPECIAL_TOKENS: [&str; 2] = ["[CLS]", "[SEP]"];
const WORDPIECE_MARKER: &str = "##";

/// Blocking client for a token-classification model server
pub struct NerClient {
    http: Client,
    endpoint: String,
    batcher: Batcher,
}

impl NerClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, NerError> {
        Self::with_timeout(endpoint, Duration::from_secs(30))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, NerError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            batcher: Batcher::new(DEFAULT_BATCH_SIZE),
        })
    }

    /// Set how many sentences go into one prefetch request
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batcher = Batcher::new(size);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Tag every sentence, one request per batch, results in input order
    pub fn predict_batch(&self, sentences: &[String]) -> Result<Vec<Vec<EntityTag>>, NerError> {
        let mut results = Vec::with_capacity(sentences.len());
        for batch in self.batcher.split(sentences) {
            results.extend(self.predict(batch)?);
        }
        Ok(results)
    }

    /// Tag all sentences up front so the chunker can replay them in order
    pub fn prefetch(&self, sentences: &[String]) -> Result<PrefetchedTags, NerError> {
        let results = self.predict_batch(sentences)?;
        Ok(PrefetchedTags::from_pairs(sentences.iter().cloned().zip(results)))
    }

    fn predict(&self, sentences: &[String]) -> Result<Vec<Vec<EntityTag>>, NerError> {
        debug!(count = sentences.len(), endpoint = %self.endpoint, "requesting entity tags");

        let response = self
            .http
            .post(format!("{}/predict", self.endpoint))
            .json(&PredictRequest { sentences })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NerError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let res: PredictResponse = response.json()?;
        if res.results.len() != sentences.len() {
            return Err(NerError::ResultCountMismatch {
                expected: sentences.len(),
                got: res.results.len(),
            });
        }

        Ok(res.results.into_iter().map(clean_wordpieces).collect())
    }
}

impl EntityExtractor for NerClient {
    type Error = NerError;

    fn extract(&self, sentence: &str) -> Result<Vec<EntityTag>, NerError> {
        let mut results = self.predict(&[sentence.to_string()])?;
        Ok(results.pop().unwrap_or_default())
    }
}

/// Drop special tokens and strip continuation markers from word pieces
pub(crate) fn clean_wordpieces(tags: Vec<EntityTag>) -> Vec<EntityTag> {
    tags.into_iter()
        .filter(|tag| !SPECIAL_TOKENS.contains(&tag.surface.as_str()))
        .map(|mut tag| {
            if let Some(rest) = tag.surface.strip_prefix(WORDPIECE_MARKER) {
                tag.surface = rest.to_string();
            }
            tag
        })
        .collect()
}
