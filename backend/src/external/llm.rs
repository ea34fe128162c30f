//! Language model client
//!
//! Speaks the OpenAI-style chat completions protocol used by Groq and
//! compatible hosts.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{describe_failure, http_client};
use crate::error::{AppError, AppResult};

/// Chat completions client
#[derive(Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// A single message in a conversation
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

impl ChatCompletionsClient {
    /// Create a new chat completions client
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: http_client(timeout),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a conversation and return the text of the first choice
    pub async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::LlmError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::LlmError(describe_failure(response).await));
        }

        let data: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::LlmError(format!("Failed to parse response: {}", e)))?;

        first_choice_text(data)
    }
}

fn first_choice_text(data: CompletionResponse) -> AppResult<String> {
    let choice = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AppError::LlmError("Response contained no choices".to_string()))?;

    choice
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| AppError::LlmError("First choice has no message content".to_string()))
}
