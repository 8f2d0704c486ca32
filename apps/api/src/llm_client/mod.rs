//! Completion client — the single point of entry for all LLM calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the completion provider
//! directly. All LLM interactions go through `CompletionClient`, which owns
//! the bounded acceptance-retry policy. Prompt construction lives with the
//! feature modules (`questions::prompts`, `analysis::prompts`).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod extract;

/// The model used for all completion calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4";
const MAX_TOKENS: u32 = 4096;
/// Additional attempts after the first call when the acceptance predicate
/// rejects the response text.
const RETRY_COUNT: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A single role-tagged message of a completion prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Per-call completion configuration: model, retry budget, and the acceptance
/// predicate that decides whether a response text is worth keeping.
#[derive(Clone, Copy)]
pub struct CompletionOptions {
    pub model: &'static str,
    pub retry_count: u32,
    pub acceptance: fn(&str) -> bool,
    pub debug: bool,
}

impl CompletionOptions {
    /// The policy used by both prompt shapes: retry up to 3 times while the
    /// response has 10 or fewer whitespace-delimited words.
    pub fn default_policy() -> Self {
        Self {
            model: MODEL,
            retry_count: RETRY_COUNT,
            acceptance: accepts_substantial_text,
            debug: true,
        }
    }
}

/// Accepts a response only when it carries more than 10 whitespace-delimited
/// words. A shorter response is treated as truncated or degenerate.
///
/// Known weak point: this is a proxy, not a JSON check. A long but malformed
/// response passes; a valid but terse one (e.g. a one-word comments object)
/// does not. Parse failures are a separate, unretried error class — see
/// `extract::ExtractError`.
pub fn accepts_substantial_text(text: &str) -> bool {
    text.split_whitespace().count() > 10
}

/// Capability interface over the external completion provider.
/// Implement this to swap providers without touching the orchestration code.
///
/// Carried by `CompletionClient` as `Arc<dyn CompletionBackend>`.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn generate(&self, messages: &[ChatMessage], model: &str) -> Result<String, LlmError>;
}

/// Completion client wrapping a backend with the acceptance-retry policy.
#[derive(Clone)]
pub struct CompletionClient {
    backend: Arc<dyn CompletionBackend>,
}

impl CompletionClient {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Issues the prompt, repeating the call while the acceptance predicate
    /// rejects the response and the retry budget allows.
    ///
    /// At most `retry_count + 1` backend calls are made. Returns the first
    /// accepted text, or the last text obtained when none qualifies — retry
    /// exhaustion is not distinguished from a single degenerate response.
    /// Transport and API errors propagate immediately; the retry budget
    /// covers rejected text only.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        let mut text = self.backend.generate(messages, options.model).await?;
        let mut attempt: u32 = 1;

        while !(options.acceptance)(&text) && attempt <= options.retry_count {
            if options.debug {
                debug!(
                    "completion attempt {}/{} rejected ({} words), retrying",
                    attempt,
                    options.retry_count + 1,
                    text.split_whitespace().count()
                );
            }
            text = self.backend.generate(messages, options.model).await?;
            attempt += 1;
        }

        if !(options.acceptance)(&text) && options.debug {
            warn!(
                "completion retry budget exhausted after {attempt} attempts, returning last response"
            );
        }

        Ok(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI-compatible backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Production backend over an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    api_url: String,
}

impl OpenAiBackend {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            api_url,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn generate(&self, messages: &[ChatMessage], model: &str) -> Result<String, LlmError> {
        let request_body = ChatCompletionRequest {
            model,
            max_tokens: MAX_TOKENS,
            messages,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the provider's error message
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(LlmError::Http)?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)?;

        debug!("completion call succeeded: {} chars", text.len());

        Ok(text)
    }
}
