//! Text-completion collaborator client.
//!
//! The intent classifier can delegate to an external chat-completion
//! service when one is configured. The abstraction is a small trait so the
//! classifier works with any provider (or a test double) while treating
//! "no client configured" as a valid, non-error state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A collaborator that turns a system instruction plus a user request into
/// free text.
///
/// Implementations may block on network I/O; the core treats the call as an
/// opaque operation with no internal retry. Any error is non-fatal to
/// callers, which fall back to local behavior.
pub trait CompletionClient: Send + Sync {
    /// Requests a completion for the given system instruction and user input.
    ///
    /// # Errors
    ///
    /// Returns transport or service errors; callers treat these as a signal
    /// to fall back, never as a user-visible failure.
    fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Connection settings for an OpenAI-compatible chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSettings {
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL of the API (defaults to the OpenAI endpoint).
    pub base_url: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum tokens in the completion.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.3,
            max_tokens: 300,
            timeout_secs: 30,
        }
    }
}

/// OpenAI-compatible chat-completion client (works with OpenAI-style and
/// OpenRouter-style endpoints).
pub struct OpenAiClient {
    settings: CompletionSettings,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl OpenAiClient {
    /// Creates a new client with the given settings and API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(settings: CompletionSettings, api_key: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            settings,
            api_key,
            client,
        })
    }

    /// Creates a client from the environment, returning `None` when the
    /// credential variable is absent or empty.
    ///
    /// An unconfigured client is a valid state: every classification request
    /// must still succeed via the local path.
    ///
    /// # Errors
    ///
    /// Returns an error only if the credential is present but the HTTP
    /// client cannot be constructed.
    pub fn from_env(settings: CompletionSettings, key_var: &str) -> Result<Option<Self>> {
        match std::env::var(key_var) {
            Ok(key) if !key.trim().is_empty() => Ok(Some(Self::new(settings, key)?)),
            _ => Ok(None),
        }
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.settings.base_url);

        let request_body = ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .context("Completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            anyhow::bail!("Completion service returned {status}: {body}");
        }

        let parsed: ChatResponse = response
            .json()
            .context("Failed to parse completion response")?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .context("Completion response contained no choices")?;

        Ok(choice.message.content)
    }
}

// OpenAI API wire types

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
