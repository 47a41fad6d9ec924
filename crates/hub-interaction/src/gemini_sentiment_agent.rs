//! GeminiSentimentAgent - Direct REST API sentiment classifier.
//!
//! Calls the Gemini REST API directly in JSON response mode.
//! Configuration priority: ~/.config/happiness-hub/secret.json > environment variables

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use hub_core::sentiment::SentimentCategory;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::secret::SecretStorage;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const SYSTEM_INSTRUCTION: &str = "You are a social-media sentiment classifier. \
Given the text of a single post, respond with a JSON object containing \
\"sentimentLabel\" (\"positive\", \"negative\" or \"neutral\"), \
\"sentimentScore\" (a number between -1.0 and 1.0, negative for negative \
sentiment) and \"summary\" (one sentence describing the post's sentiment). \
Respond with the JSON object only.";

/// Result of one sentiment analysis invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentVerdict {
    /// "positive", "negative", "neutral" - the service may produce others.
    pub sentiment_label: String,
    pub sentiment_score: f64,
    pub summary: String,
}

impl SentimentVerdict {
    /// Maps the service label onto the dataset's category set, if it fits.
    pub fn category(&self) -> Option<SentimentCategory> {
        match self.sentiment_label.to_lowercase().as_str() {
            "positive" => Some(SentimentCategory::Positive),
            "negative" => Some(SentimentCategory::Negative),
            "neutral" => Some(SentimentCategory::Neutral),
            "irrelevant" => Some(SentimentCategory::Irrelevant),
            _ => None,
        }
    }
}

/// Classifier seam for ad-hoc post analysis.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Classifies one post. Blank input is rejected locally before any
    /// request is made.
    async fn analyze(&self, post: &str) -> Result<SentimentVerdict, AnalysisError>;
}

/// Analyzer implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiSentimentAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiSentimentAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Loads configuration from ~/.config/happiness-hub/secret.json or
    /// environment variables.
    ///
    /// Priority:
    /// 1. ~/.config/happiness-hub/secret.json
    /// 2. Environment variables (GEMINI_API_KEY, HUB_GEMINI_MODEL)
    ///
    /// Model name defaults to `gemini-2.5-flash` if not specified.
    pub fn try_from_env() -> Result<Self, AnalysisError> {
        // Try loading from SecretStorage first
        if let Ok(storage) = SecretStorage::new() {
            if let Ok(secret_config) = storage.load() {
                if let Some(gemini_config) = secret_config.gemini {
                    let model = gemini_config
                        .model_name
                        .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
                    return Ok(Self::new(gemini_config.api_key, model));
                }
            }
        }

        // Fallback to environment variables
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            AnalysisError::Configuration(
                "GEMINI_API_KEY not found in ~/.config/happiness-hub/secret.json or environment variables"
                    .into(),
            )
        })?;

        let model = env::var("HUB_GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String, AnalysisError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| AnalysisError::Service {
                status_code: None,
                message: format!("Gemini API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
                retry_after: None,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            AnalysisError::Parse(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl SentimentAnalyzer for GeminiSentimentAgent {
    async fn analyze(&self, post: &str) -> Result<SentimentVerdict, AnalysisError> {
        if post.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "post text must not be empty".into(),
            ));
        }

        tracing::info!("analyze: classifying a {}-character post", post.len());

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: post.to_string(),
                }],
            }],
            system_instruction: Some(Content {
                role: "system".to_string(),
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            }),
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let text = self.send_request(&request).await?;
        parse_verdict(&text)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, AnalysisError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            AnalysisError::Parse("Gemini API returned no text in the response candidates".into())
        })
}

fn parse_verdict(text: &str) -> Result<SentimentVerdict, AnalysisError> {
    let body = strip_code_fences(text);
    serde_json::from_str(body)
        .map_err(|err| AnalysisError::Parse(format!("{err}; response body was: {body}")))
}

// JSON response mode notwithstanding, models occasionally wrap the object in
// a markdown fence.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> AnalysisError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    AnalysisError::Service {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
        retry_after,
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_input_rejected_without_request() {
        let agent = GeminiSentimentAgent::new("test-key", "test-model");
        let result = agent.analyze("   \n\t ").await;
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_verdict_plain_json() {
        let verdict = parse_verdict(
            r#"{"sentimentLabel":"positive","sentimentScore":0.82,"summary":"An upbeat post."}"#,
        )
        .unwrap();
        assert_eq!(verdict.sentiment_label, "positive");
        assert_eq!(verdict.sentiment_score, 0.82);
        assert_eq!(verdict.summary, "An upbeat post.");
    }

    #[test]
    fn test_parse_verdict_fenced_json() {
        let fenced = "```json\n{\"sentimentLabel\":\"negative\",\"sentimentScore\":-0.6,\"summary\":\"Frustrated.\"}\n```";
        let verdict = parse_verdict(fenced).unwrap();
        assert_eq!(verdict.sentiment_label, "negative");
        assert_eq!(verdict.sentiment_score, -0.6);
    }

    #[test]
    fn test_parse_verdict_rejects_garbage() {
        assert!(matches!(
            parse_verdict("the post seems happy"),
            Err(AnalysisError::Parse(_))
        ));
    }

    #[test]
    fn test_strip_code_fences_passthrough() {
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_category_mapping() {
        let verdict = |label: &str| SentimentVerdict {
            sentiment_label: label.to_string(),
            sentiment_score: 0.0,
            summary: String::new(),
        };
        assert_eq!(
            verdict("Positive").category(),
            Some(SentimentCategory::Positive)
        );
        assert_eq!(
            verdict("negative").category(),
            Some(SentimentCategory::Negative)
        );
        assert_eq!(verdict("mixed").category(), None);
    }

    #[test]
    fn test_map_http_error_retryable_classification() {
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, "{}".to_string(), None);
        assert!(err.is_retryable());

        let err = map_http_error(StatusCode::SERVICE_UNAVAILABLE, "{}".to_string(), None);
        assert!(err.is_retryable());

        let err = map_http_error(StatusCode::BAD_REQUEST, "{}".to_string(), None);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_map_http_error_prefers_structured_message() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            body.to_string(),
            Some(Duration::from_secs(30)),
        );
        match err {
            AnalysisError::Service {
                status_code,
                message,
                is_retryable,
                retry_after,
            } => {
                assert_eq!(status_code, Some(429));
                assert_eq!(message, "RESOURCE_EXHAUSTED: Quota exceeded");
                assert!(is_retryable);
                assert_eq!(retry_after, Some(Duration::from_secs(30)));
            }
            other => panic!("Expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        let header = HeaderValue::from_static("30");
        assert_eq!(
            parse_retry_after(Some(&header)),
            Some(Duration::from_secs(30))
        );
        let date = HeaderValue::from_static("Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(parse_retry_after(Some(&date)), None);
        assert_eq!(parse_retry_after(None), None);
    }
}
