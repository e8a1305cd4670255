use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::aggregate;
use crate::hf::{Tagger, Transcriber};
use crate::models::GroupedEntities;

/// Metadata about one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    /// Unique id for this run
    pub request_id: String,
    /// Size of the uploaded audio in bytes (zero for transcript-only runs)
    pub audio_bytes: usize,
    /// Number of spans returned by the tagger
    pub spans_tagged: usize,
    /// Number of unique mentions after aggregation
    pub mentions_grouped: usize,
}

/// Result of a full pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub transcript: String,
    pub entities: GroupedEntities,
    pub metadata: RunMetadata,
}

/// Run the full pipeline: transcribe, tag, aggregate.
///
/// One uploaded recording triggers one sequential run; the adapters
/// perform the only long-running work. Adapters are borrowed, so the
/// caller controls model-client lifetime and can reuse one client across
/// runs.
pub async fn run_pipeline<T, G>(
    transcriber: &T,
    tagger: &G,
    audio: &[u8],
) -> Result<PipelineReport>
where
    T: Transcriber + ?Sized,
    G: Tagger + ?Sized,
{
    let request_id = uuid::Uuid::new_v4().to_string();
    debug!("Pipeline run {} ({} audio bytes)", request_id, audio.len());

    info!("Transcribing the audio file... this may take a minute");
    let transcript = transcriber
        .transcribe(audio)
        .await
        .context("Transcription failed")?;

    info!("Transcribed {} characters", transcript.len());

    let (entities, spans_tagged) = extract_entities(tagger, &transcript).await?;

    Ok(PipelineReport {
        metadata: RunMetadata {
            request_id,
            audio_bytes: audio.len(),
            spans_tagged,
            mentions_grouped: entities.len(),
        },
        transcript,
        entities,
    })
}

/// Run the tagging half of the pipeline against an existing transcript.
pub async fn run_tagging<G>(tagger: &G, transcript: &str) -> Result<PipelineReport>
where
    G: Tagger + ?Sized,
{
    let request_id = uuid::Uuid::new_v4().to_string();
    debug!("Tagging run {} ({} characters)", request_id, transcript.len());

    let (entities, spans_tagged) = extract_entities(tagger, transcript).await?;

    Ok(PipelineReport {
        metadata: RunMetadata {
            request_id,
            audio_bytes: 0,
            spans_tagged,
            mentions_grouped: entities.len(),
        },
        transcript: transcript.to_string(),
        entities,
    })
}

async fn extract_entities<G>(tagger: &G, transcript: &str) -> Result<(GroupedEntities, usize)>
where
    G: Tagger + ?Sized,
{
    info!("Extracting entities...");
    let spans = tagger
        .tag(transcript)
        .await
        .context("Entity tagging failed")?;

    info!("Tagger returned {} spans", spans.len());

    let entities = aggregate(&spans);
    info!(
        "Grouped {} unique mentions ({} persons, {} organizations, {} locations)",
        entities.len(),
        entities.persons.len(),
        entities.organizations.len(),
        entities.locations.len()
    );

    Ok((entities, spans.len()))
}
