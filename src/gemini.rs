use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::models::{MarketingVideo, RealEstateTour};
use crate::prompt::{build_marketing_prompt, build_real_estate_prompt};

const GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const FALLBACK_CONTENT: &str = "Default video content";

pub const DEFAULT_MARKETING_VIDEO_URL: &str =
    "https://res.cloudinary.com/ddzbiyutc/video/upload/v1749801571/5319426-uhd_2160_3840_25fps_goz1wq.mp4";
pub const DEFAULT_REAL_ESTATE_VIDEO_URL: &str =
    "https://res.cloudinary.com/ddzbiyutc/video/upload/v1749798576/7578552-uhd_3840_2160_30fps_vtesig.mp4";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")] Http(String),
    #[error("Other: {0}")] Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    Marketing,
    RealEstate,
}

// Marketing scripts get a tighter, shorter generation; tour scripts run
// longer and more freely.
struct GenerationTuning {
    temperature: f64,
    max_output_tokens: u32,
}

impl VideoKind {
    fn tuning(self) -> GenerationTuning {
        match self {
            VideoKind::Marketing => GenerationTuning {
                temperature: 0.7,
                max_output_tokens: 2000,
            },
            VideoKind::RealEstate => GenerationTuning {
                temperature: 0.8,
                max_output_tokens: 3000,
            },
        }
    }
}

/// Outcome of one gateway invocation. `video_url` is set only on the
/// default path; `provider_error` only when a provider call failed.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub content: String,
    pub is_default: bool,
    pub video_url: Option<String>,
    pub provider_error: Option<String>,
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    default_marketing_video_url: String,
    default_real_estate_video_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let base_url = std::env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::with_base_url(api_key, base_url)
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            default_marketing_video_url: std::env::var("DEFAULT_MARKETING_VIDEO_URL")
                .unwrap_or_else(|_| DEFAULT_MARKETING_VIDEO_URL.to_string()),
            default_real_estate_video_url: std::env::var("DEFAULT_REAL_ESTATE_VIDEO_URL")
                .unwrap_or_else(|_| DEFAULT_REAL_ESTATE_VIDEO_URL.to_string()),
        }
    }

    pub async fn generate_marketing_video(&self, video: &MarketingVideo) -> GenerationResult {
        self.generate(VideoKind::Marketing, &build_marketing_prompt(video))
            .await
    }

    pub async fn generate_real_estate_video(&self, tour: &RealEstateTour) -> GenerationResult {
        self.generate(VideoKind::RealEstate, &build_real_estate_prompt(tour))
            .await
    }

    /// One provider call, no retries. Without a configured key the network is
    /// never touched; any provider failure is absorbed into the default
    /// result and never raised past this method.
    pub async fn generate(&self, kind: VideoKind, prompt: &str) -> GenerationResult {
        if self.api_key.is_empty() {
            info!("No Gemini API key configured, returning default video response");
            return self.default_result(kind, None);
        }

        match self.generate_text(prompt, kind.tuning()).await {
            Ok(content) => GenerationResult {
                content,
                is_default: false,
                video_url: None,
                provider_error: None,
            },
            Err(e) => {
                error!("❌ Content generation failed: {}", e);
                info!("🔄 Falling back to default video");
                self.default_result(kind, Some(e.to_string()))
            }
        }
    }

    fn default_result(&self, kind: VideoKind, provider_error: Option<String>) -> GenerationResult {
        let video_url = match kind {
            VideoKind::Marketing => &self.default_marketing_video_url,
            VideoKind::RealEstate => &self.default_real_estate_video_url,
        };
        GenerationResult {
            content: FALLBACK_CONTENT.to_string(),
            is_default: true,
            video_url: Some(video_url.clone()),
            provider_error,
        }
    }

    async fn generate_text(
        &self,
        prompt: &str,
        tuning: GenerationTuning,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, self.api_key
        );

        info!("🔗 Making request to: {}", url.replace(&self.api_key, "***"));

        let request_body = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "temperature": tuning.temperature,
                "topP": 0.95,
                "topK": 40,
                "maxOutputTokens": tuning.max_output_tokens,
                "candidateCount": 1
            }
        });

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GeminiError::Http(e.to_string()))?;

        let status = response.status();
        info!("📥 Response status: {}", status);

        let response_text = response
            .text()
            .await
            .map_err(|e| GeminiError::Http(e.to_string()))?;

        if !status.is_success() {
            error!("❌ API error response: {}", response_text);
            return Err(GeminiError::Http(format!(
                "status={} body={}",
                status, response_text
            )));
        }

        let parsed: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| GeminiError::Other(format!("parse error: {}", e)))?;

        if let Some(candidate) = parsed.candidates.first() {
            for part in &candidate.content.parts {
                if let Part::Text { text } = part {
                    return Ok(text.trim().to_string());
                }
            }
        }

        Err(GeminiError::Other("No text content found in response".to_string()))
    }
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    Other(serde_json::Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn offline_client() -> GeminiClient {
        GeminiClient::with_base_url(String::new(), DEFAULT_API_BASE.to_string())
    }

    #[test]
    fn tuning_is_kind_specific() {
        let marketing = VideoKind::Marketing.tuning();
        let real_estate = VideoKind::RealEstate.tuning();
        assert!(marketing.temperature < real_estate.temperature);
        assert!(marketing.max_output_tokens < real_estate.max_output_tokens);
    }

    #[tokio::test]
    async fn missing_api_key_returns_per_kind_default() {
        let client = offline_client();

        let marketing = client.generate(VideoKind::Marketing, "any prompt").await;
        assert!(marketing.is_default);
        assert_eq!(marketing.content, FALLBACK_CONTENT);
        assert_eq!(
            marketing.video_url.as_deref(),
            Some(DEFAULT_MARKETING_VIDEO_URL)
        );
        assert_eq!(marketing.provider_error, None);

        let real_estate = client.generate(VideoKind::RealEstate, "any prompt").await;
        assert_eq!(
            real_estate.video_url.as_deref(),
            Some(DEFAULT_REAL_ESTATE_VIDEO_URL)
        );
    }

    #[tokio::test]
    async fn provider_failure_falls_back_with_diagnostic() {
        // Unroutable base URL: the call fails, the caller never sees an error.
        let client = GeminiClient::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:9".to_string(),
        );
        let result = client.generate(VideoKind::Marketing, "any prompt").await;
        assert!(result.is_default);
        assert_eq!(result.content, FALLBACK_CONTENT);
        assert_eq!(
            result.video_url.as_deref(),
            Some(DEFAULT_MARKETING_VIDEO_URL)
        );
        assert!(result.provider_error.is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn response_parsing_extracts_first_text_part() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"unknownField": 1},
                        {"text": "  Scene 1: open on the kitchen.  "}
                    ]
                }
            }]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(raw).unwrap();
        let text = parsed.candidates[0]
            .content
            .parts
            .iter()
            .find_map(|part| match part {
                Part::Text { text } => Some(text.trim().to_string()),
                Part::Other(_) => None,
            });
        assert_eq!(text.as_deref(), Some("Scene 1: open on the kitchen."));
    }
}
