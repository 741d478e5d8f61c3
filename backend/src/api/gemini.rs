use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request to Gemini failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("failed to parse Gemini response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("prompt blocked by Gemini safety filters: {0}")]
    Blocked(String),
}

/// One prompt in, one piece of text out.
///
/// An `Ok` with an empty string is a valid answer; callers decide what to do with it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GeminiError>;
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn build_request(prompt: &str) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
    }
}

/// Joins every text part of the first candidate. No candidates means no text.
fn extract_text(body: &str) -> Result<String, GeminiError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(GeminiError::Blocked(reason));
    }

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<String>>()
                .join("")
        })
        .unwrap_or_default();

    Ok(text)
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        // key goes in a header so it never shows up in logged URLs
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!("Gemini responded with {} bytes", body.len());
        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_generate_content_shape() {
        let value = serde_json::to_value(build_request("hello")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }]
            })
        );
    }

    #[test]
    fn text_parts_of_first_candidate_are_joined() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "Golden hour, " }, { "text": "golden vows. #Wedding" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }"#;
        assert_eq!(extract_text(body).unwrap(), "Golden hour, golden vows. #Wedding");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        assert_eq!(extract_text("{}").unwrap(), "");
        assert_eq!(extract_text(r#"{"candidates":[{}]}"#).unwrap(), "");
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        assert!(matches!(extract_text(body), Err(GeminiError::Blocked(r)) if r == "SAFETY"));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(extract_text("<html>"), Err(GeminiError::Decode(_))));
    }
}
