// the model server contract
use serde::{Deserialize, Serialize};

/// One tagged token or span from the NER model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTag {
    /// Raw label, possibly scheme-prefixed ("B-per") or "O"
    #[serde(rename = "entity_group", alias = "type", alias = "label")]
    pub label: String,
    /// Surface text the label was assigned to
    #[serde(rename = "word", alias = "surface")]
    pub surface: String,
    /// Model confidence in [0, 1]
    #[serde(rename = "score", alias = "confidence", default)]
    pub confidence: f32,
}

impl EntityTag {
    pub fn new(label: impl Into<String>, surface: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            surface: surface.into(),
            confidence,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub sentences: &'a [String],
}

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub results: Vec<Vec<EntityTag>>,
}
