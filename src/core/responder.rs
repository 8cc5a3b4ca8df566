//! Remote responder: one request, one reply
//!
//! Request body: {model, messages} with the instruction prepended as a system message.
//! Reply: choices[0].message.content. No retry, no timeout.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DebateError, Result};
use crate::types::{Message, Role};
use crate::{DEFAULT_ENDPOINT, DEFAULT_MODEL, HTTP_REFERER};

/// Anything that can turn a history plus an instruction into one text reply
#[async_trait]
pub trait Responder: Send + Sync {
    async fn reply(&self, history: &[Message], instruction: &str) -> Result<String>;
}

/// Chat-completions client for OpenRouter-compatible endpoints
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Responder for OpenRouterClient {
    async fn reply(&self, history: &[Message], instruction: &str) -> Result<String> {
        let body = build_request(&self.model, history, instruction);
        debug!(
            model = %self.model,
            messages = body.messages.len(),
            instruction_chars = instruction.chars().count(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", HTTP_REFERER)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(DebateError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let reply = extract_content(&text)?;
        debug!(reply_chars = reply.chars().count(), "received chat completion");
        Ok(reply)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn build_request<'a>(
    model: &'a str,
    history: &'a [Message],
    instruction: &'a str,
) -> ChatCompletionRequest<'a> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(WireMessage {
        role: "system",
        content: instruction,
    });
    for message in history {
        messages.push(WireMessage {
            role: match message.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            },
            content: &message.content,
        });
    }
    ChatCompletionRequest { model, messages }
}

/// Pull the top choice's text out of a raw response body
fn extract_content(body: &str) -> Result<String> {
    let parsed: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| DebateError::MalformedResponse(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(DebateError::MissingContent)
}

/// A recorded call to a [`ScriptedResponder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub history_len: usize,
    pub instruction: String,
}

/// Deterministic stand-in that returns canned replies in order
#[derive(Debug, Default)]
pub struct ScriptedResponder {
    replies: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedResponder {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Replies not yet handed out
    pub fn remaining(&self) -> usize {
        self.replies.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    async fn reply(&self, history: &[Message], instruction: &str) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                history_len: history.len(),
                instruction: instruction.to_string(),
            });
        }
        self.replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .ok_or(DebateError::ScriptExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_puts_instruction_first() {
        let history = vec![Message::user("입론"), Message::assistant("반박")];
        let request = build_request("m", &history, "지시");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "model": "m",
                "messages": [
                    {"role": "system", "content": "지시"},
                    {"role": "user", "content": "입론"},
                    {"role": "assistant", "content": "반박"},
                ]
            })
        );
    }

    #[test]
    fn test_extract_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"답변"}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "답변");
    }

    #[test]
    fn test_extract_missing_content() {
        assert!(matches!(
            extract_content(r#"{"choices":[]}"#),
            Err(DebateError::MissingContent)
        ));
        assert!(matches!(
            extract_content(r#"{"choices":[{"message":{"content":null}}]}"#),
            Err(DebateError::MissingContent)
        ));
    }

    #[test]
    fn test_extract_malformed() {
        assert!(matches!(
            extract_content("<html>bad gateway</html>"),
            Err(DebateError::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_content(r#"{"error":"no choices"}"#),
            Err(DebateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_client_builder() {
        let client = OpenRouterClient::new("key").with_model("other/model");
        assert_eq!(client.model(), "other/model");
        assert_eq!(OpenRouterClient::new("key").model(), DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn test_scripted_responder_in_order() {
        let responder = ScriptedResponder::new(["one", "two"]);
        let history = vec![Message::user("x")];

        assert_eq!(responder.reply(&history, "a").await.unwrap(), "one");
        assert_eq!(responder.reply(&[], "b").await.unwrap(), "two");
        assert!(matches!(
            responder.reply(&[], "c").await,
            Err(DebateError::ScriptExhausted)
        ));

        let calls = responder.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], RecordedCall { history_len: 1, instruction: "a".into() });
        assert_eq!(responder.remaining(), 0);
    }
}
