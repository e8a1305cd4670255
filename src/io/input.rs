use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Error conditions for the uploaded audio file itself.
#[derive(Debug, thiserror::Error)]
pub enum AudioInputError {
    #[error("audio file is empty: {0}")]
    Empty(String),
}

/// Format details probed from a WAV header, when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

/// An uploaded audio file, read fully into memory.
#[derive(Debug, Clone)]
pub struct AudioInput {
    /// Raw file bytes, passed to the transcription adapter unchanged
    pub data: Vec<u8>,
    /// Probed WAV format, `None` when the header did not parse
    pub wav: Option<WavInfo>,
}

/// Read an uploaded audio file.
///
/// The declared upload filter expects single-channel WAV, but the format
/// is not enforced here: a file that does not parse as WAV, or a
/// multi-channel one, is passed through with a warning and left to the
/// transcription service to accept or reject.
pub fn read_audio_file(path: &Path) -> Result<AudioInput> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read audio file: {:?}", path))?;

    if data.is_empty() {
        return Err(AudioInputError::Empty(path.display().to_string()).into());
    }

    let wav = probe_wav(&data);
    match &wav {
        Some(info) => {
            debug!(
                "WAV header: {} channel(s), {} Hz, {} bits",
                info.channels, info.sample_rate, info.bits_per_sample
            );
            if info.channels != 1 {
                warn!(
                    "Expected single-channel WAV, got {} channels; passing through unchanged",
                    info.channels
                );
            }
        }
        None => {
            warn!("{:?} does not parse as WAV; passing through unchanged", path);
        }
    }

    Ok(AudioInput { data, wav })
}

/// Probe the WAV header without decoding samples.
fn probe_wav(data: &[u8]) -> Option<WavInfo> {
    let reader = hound::WavReader::new(Cursor::new(data)).ok()?;
    let spec = reader.spec();
    Some(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
    })
}

/// Read a plain-text transcript file.
pub fn read_transcript_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file: {:?}", path))
}
