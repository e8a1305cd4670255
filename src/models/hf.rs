use serde::{Deserialize, Serialize};

use super::Span;

/// Response from a hosted automatic-speech-recognition model.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AsrResponse {
    /// Full transcript, concatenated across chunks by the service
    pub text: String,
    /// Per-chunk timestamps, present when chunked decoding was requested.
    /// Discarded by the pipeline.
    #[serde(default)]
    pub chunks: Option<Vec<AsrChunk>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AsrChunk {
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<(Option<f64>, Option<f64>)>,
}

/// A single entity from a hosted token-classification model.
///
/// The label key depends on the aggregation mode the service ran with:
/// simple aggregation emits `entity_group` per merged mention, while
/// unaggregated output emits `entity` per token. Both shapes are accepted
/// and normalized here so downstream code never branches on label scheme.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NerEntity {
    /// Merged-mention label (aggregated output)
    #[serde(default)]
    pub entity_group: Option<String>,
    /// Per-token label (unaggregated output)
    #[serde(default)]
    pub entity: Option<String>,
    /// Surface string of the mention
    pub word: String,
    /// Model confidence (0-1)
    pub score: f64,
    /// Character offset of the mention start in the input text
    #[serde(default)]
    pub start: Option<usize>,
    /// Character offset of the mention end in the input text
    #[serde(default)]
    pub end: Option<usize>,
}

impl NerEntity {
    /// Resolve the label, preferring the aggregated key.
    pub fn label(&self) -> Option<&str> {
        self.entity_group
            .as_deref()
            .or(self.entity.as_deref())
    }

    /// Normalize into a [`Span`], or `None` when no label key is present.
    pub fn into_span(self) -> Option<Span> {
        let label = self.label()?.to_string();
        Some(Span {
            text: self.word,
            label,
        })
    }
}
