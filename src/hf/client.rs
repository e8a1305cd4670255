use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Serialize;

use super::{Tagger, Transcriber};
use crate::models::{AsrResponse, NerEntity, Span};

/// Default speech-recognition model
pub const DEFAULT_ASR_MODEL: &str = "openai/whisper-tiny";
/// Default named-entity-recognition model
pub const DEFAULT_NER_MODEL: &str = "dslim/bert-base-NER";

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Configuration for the Hugging Face Inference API client
#[derive(Debug, Clone)]
pub struct HfConfig {
    /// API token (from HF_API_TOKEN env var)
    pub api_token: String,
    /// Speech-recognition model id (e.g. "openai/whisper-tiny")
    pub asr_model: String,
    /// Entity-tagging model id (e.g. "dslim/bert-base-NER")
    pub ner_model: String,
    /// Base URL of the inference endpoint
    pub base_url: String,
    /// Request timeout in seconds (model inference can be slow on cold start)
    pub timeout_secs: u64,
}

impl HfConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var("HF_API_TOKEN")
            .context("HF_API_TOKEN environment variable not set")?;

        Ok(Self {
            api_token,
            asr_model: DEFAULT_ASR_MODEL.to_string(),
            ner_model: DEFAULT_NER_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Create with custom model ids
    pub fn new(api_token: String, asr_model: String, ner_model: String) -> Self {
        Self {
            api_token,
            asr_model,
            ner_model,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Hugging Face Inference API client.
///
/// One client serves both hosted models. Construct once and reuse; the
/// underlying connection pool is shared across requests.
pub struct HfClient {
    client: Client,
    config: HfConfig,
}

impl HfClient {
    pub fn new(config: HfConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.config.base_url, model)
    }

    async fn post_json<T: Serialize>(&self, model: &str, body: &T) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(self.model_url(model))
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send request to model {}", model))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Inference API error for {}: {} - {}", model, status, body);
        }

        Ok(response)
    }
}

#[derive(Debug, Serialize)]
struct AsrRequest {
    /// Base64-encoded audio bytes
    inputs: String,
    parameters: AsrParameters,
}

#[derive(Debug, Serialize)]
struct AsrParameters {
    /// Enables chunked decoding for audio longer than the model's native
    /// 30-second window; the service concatenates the chunk texts
    return_timestamps: bool,
}

#[derive(Debug, Serialize)]
struct NerRequest {
    inputs: String,
    parameters: NerParameters,
}

#[derive(Debug, Serialize)]
struct NerParameters {
    /// Merges contiguous sub-word tokens into one entity per mention
    aggregation_strategy: String,
}

#[async_trait]
impl Transcriber for HfClient {
    async fn transcribe(&self, audio: &[u8]) -> Result<String> {
        let request = AsrRequest {
            inputs: BASE64.encode(audio),
            parameters: AsrParameters {
                return_timestamps: true,
            },
        };

        let response = self.post_json(&self.config.asr_model, &request).await?;

        let asr: AsrResponse = response
            .json()
            .await
            .context("Failed to parse speech-recognition response")?;

        Ok(asr.text)
    }
}

#[async_trait]
impl Tagger for HfClient {
    async fn tag(&self, transcript: &str) -> Result<Vec<Span>> {
        // Nothing to tag; skip the network round trip
        if transcript.trim().is_empty() {
            return Ok(vec![]);
        }

        let request = NerRequest {
            inputs: transcript.to_string(),
            parameters: NerParameters {
                aggregation_strategy: "simple".to_string(),
            },
        };

        let response = self.post_json(&self.config.ner_model, &request).await?;

        let raw: Vec<NerEntity> = response
            .json()
            .await
            .context("Failed to parse entity-tagging response")?;

        // Entities with no resolvable label key are dropped at this
        // boundary, so downstream only sees normalized spans
        Ok(raw.into_iter().filter_map(NerEntity::into_span).collect())
    }
}
