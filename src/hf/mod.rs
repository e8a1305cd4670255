pub mod client;

pub use client::*;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Span;

/// Speech-to-text capability.
///
/// Implementations must return one concatenated transcript regardless of
/// input duration, chunking internally when the audio exceeds the model's
/// native context window. Constructed by the caller and reused across
/// requests; the pipeline never instantiates one itself.
#[async_trait]
pub trait Transcriber {
    async fn transcribe(&self, audio: &[u8]) -> Result<String>;
}

/// Named-entity tagging capability.
///
/// Implementations must merge contiguous sub-word tokens belonging to the
/// same mention into one [`Span`] before returning, so callers never see
/// sub-word fragments.
#[async_trait]
pub trait Tagger {
    async fn tag(&self, transcript: &str) -> Result<Vec<Span>>;
}
