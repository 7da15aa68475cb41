//! Text generation backends

use std::time::Duration;

use log::{debug, info};
use serde::Deserialize;
use serde_json::json;

use crate::config::ChatSettings;
use crate::error::{Error, Result};

/// Reply used when the service answers without any text.
pub const EMPTY_REPLY: &str = "No response generated.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that turns a prompt into a reply.
///
/// Calls block; [`super::ChatSession`] runs them on a worker thread.
pub trait ChatBackend: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Gemini
// ─────────────────────────────────────────────────────────────────────────────

/// Google Generative Language REST backend.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl GeminiBackend {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
            api_key_env: String::new(),
        }
    }

    /// Build from settings, reading the key from the configured env var.
    pub fn from_settings(settings: &ChatSettings) -> Self {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            info!(
                "{} is not set; chat requests will fail until it is",
                settings.api_key_env
            );
        }
        Self {
            api_key_env: settings.api_key_env.clone(),
            ..Self::new(&settings.endpoint, &settings.model, api_key)
        }
    }

    /// Full URL of the generate call.
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl ChatBackend for GeminiBackend {
    fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| Error::Chat {
            message: format!("no API key configured ({})", self.api_key_env),
            source: None,
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        debug!("POST {}", self.url());
        let response: GenerateResponse = client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&json!({ "contents": [{ "parts": [{ "text": prompt }] }] }))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.text())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Model
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, or [`EMPTY_REPLY`].
    fn text(&self) -> String {
        let text: String = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            EMPTY_REPLY.to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_url() {
        let backend = GeminiBackend::new(
            "https://generativelanguage.googleapis.com/v1beta/",
            "gemini-2.5-flash",
            None,
        );
        assert_eq!(
            backend.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"there"}],"role":"model"}}]}"#,
        );
        assert_eq!(response.text(), "Hello there");
    }

    #[test]
    fn test_response_without_text_uses_placeholder() {
        assert_eq!(parse("{}").text(), EMPTY_REPLY);
        assert_eq!(parse(r#"{"candidates":[]}"#).text(), EMPTY_REPLY);
        assert_eq!(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).text(), EMPTY_REPLY);
        assert_eq!(
            parse(r#"{"candidates":[{"content":{"parts":[{"inlineData":{}}]}}]}"#).text(),
            EMPTY_REPLY
        );
    }

    #[test]
    fn test_missing_key_is_chat_error() {
        let backend = GeminiBackend::new("http://127.0.0.1:9", "m", None);
        let result = backend.generate("hi");
        assert!(matches!(result, Err(Error::Chat { .. })));
    }
}
