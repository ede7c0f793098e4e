use std::collections::HashMap;
use std::convert::Infallible;
use std::fs;
use std::path::Path;

use super::error::GazetteerError;
use super::types::EntityTag;
use super::EntityExtractor;
use crate::labels::OUTSIDE_LABEL;

/// Offline tagger backed by a surface-form lexicon
///
/// Loaded from TOML where each key is an entity type and each value lists its
/// single-token surface forms:
///
/// ```toml
/// per = ["Alice", "Bob"]
/// geo = ["Paris"]
/// ```
#[derive(Debug, Default, Clone)]
pub struct GazetteerExtractor {
    /// Surface form -> entity type
    entries: HashMap<String, String>,
}

impl GazetteerExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface form; a later insert for the same surface wins
    pub fn insert(&mut self, entity_type: impl Into<String>, surface: impl Into<String>) {
        self.entries.insert(surface.into(), entity_type.into());
    }

    pub fn from_toml_str(source: &str) -> Result<Self, GazetteerError> {
        let table: HashMap<String, Vec<String>> = toml::from_str(source)?;

        let mut gazetteer = Self::new();
        for (entity_type, surfaces) in table {
            for surface in surfaces {
                gazetteer.insert(entity_type.clone(), surface);
            }
        }
        Ok(gazetteer)
    }

    pub fn from_path(path: &Path) -> Result<Self, GazetteerError> {
        let source = fs::read_to_string(path).map_err(|source| GazetteerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntityExtractor for GazetteerExtractor {
    type Error = Infallible;

    fn extract(&self, sentence: &str) -> Result<Vec<EntityTag>, Infallible> {
        let tags = sentence
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| c.is_ascii_punctuation()))
            .filter(|token| !token.is_empty())
            .map(|token| match self.entries.get(token) {
                Some(entity_type) => EntityTag::new(format!("B-{entity_type}"), token, 1.0),
                None => EntityTag::new(OUTSIDE_LABEL, token, 1.0),
            })
            .collect();
        Ok(tags)
    }
}
