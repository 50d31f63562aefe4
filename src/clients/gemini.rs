//! Client for the Google Gemini `generateContent` endpoint.
//!
//! One synchronous request per document, fixed sampling configuration, no
//! retries. The only failure mode surfaced to callers is endpoint failure;
//! they substitute a placeholder body and keep rendering.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation endpoint returned {status}: {body}")]
    Endpoint { status: StatusCode, body: String },

    #[error("Generation endpoint returned no usable candidate")]
    MalformedResponse,

    #[error("Generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
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

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 8192,
            response_mime_type: "text/plain",
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(client: Client, base_url: String, model: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            model,
            api_key,
        }
    }

    /// Generate body text for a document prompt. Markdown emphasis and
    /// heading markers are stripped since the PDF target cannot render them.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let payload = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Endpoint { status, body });
        }

        let response: GenerateResponse = response
            .json()
            .await
            .map_err(|_| GenerationError::MalformedResponse)?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or(GenerationError::MalformedResponse)?;

        Ok(strip_markdown(&text))
    }
}

static HEADING_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s*").expect("valid heading regex"));

/// Remove markdown emphasis, heading, and code markers from generated text.
#[must_use]
pub fn strip_markdown(text: &str) -> String {
    let text = HEADING_MARKERS.replace_all(text, "");
    text.replace("**", "").replace(['*', '`'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emphasis_headings_and_code_markers() {
        let input = "# CONTRATO\n\n**PRIMERA.** El *arrendador* entrega `el inmueble`.";
        assert_eq!(
            strip_markdown(input),
            "CONTRATO\n\nPRIMERA. El arrendador entrega el inmueble."
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        let input = "PRIMERA. Las partes convienen el precio de Q2500.00.";
        assert_eq!(strip_markdown(input), input);
    }

    #[test]
    fn only_strips_headings_at_line_start() {
        let input = "Expediente No. 45-2024 # Sala Segunda";
        assert_eq!(strip_markdown(input), input);
    }
}
