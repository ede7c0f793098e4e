use std::collections::HashMap;

use super::error::NerError;
use super::types::EntityTag;
use super::EntityExtractor;

/// Tags computed ahead of chunking, looked up by sentence text
///
/// Identical sentences always carry identical tags, so keying by text keeps
/// replay order-independent.
#[derive(Debug, Default, Clone)]
pub struct PrefetchedTags {
    tags: HashMap<String, Vec<EntityTag>>,
}

impl PrefetchedTags {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, Vec<EntityTag>)>) -> Self {
        Self {
            tags: pairs.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl EntityExtractor for PrefetchedTags {
    type Error = NerError;

    fn extract(&self, sentence: &str) -> Result<Vec<EntityTag>, NerError> {
        self.tags
            .get(sentence)
            .cloned()
            .ok_or_else(|| NerError::NotPrefetched(sentence.to_string()))
    }
}
