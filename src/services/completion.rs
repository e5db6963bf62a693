//! Client for the chat-completion endpoint

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Why a completion request produced no usable response
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("completion endpoint returned status {0}")]
    Status(u16),
    #[error("failed to decode completion response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Something that turns a prompt into at most one piece of generated text.
///
/// `Ok(None)` means the endpoint answered but the first choice carried no text.
pub trait CompletionBackend: Send + Sync + 'static {
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Option<String>, CompletionError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if any and not empty
    fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
    }
}

/// HTTP client for an OpenAI-style `/v1/chat/completions` endpoint
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
    model: Option<String>,
    max_tokens: u32,
}

impl CompletionClient {
    pub fn new(endpoint: impl Into<String>, model: Option<String>, max_tokens: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model,
            max_tokens,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionBackend for CompletionClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, CompletionError> {
        let body = CompletionRequest {
            model: self.model.as_deref(),
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        debug!("Sending completion request to {}", self.endpoint);
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(CompletionError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status.as_u16()));
        }

        let parsed: CompletionResponse = resp.json().await.map_err(CompletionError::Decode)?;
        Ok(parsed.first_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_first_text_tolerates_missing_parts() {
        let parse = |v: serde_json::Value| {
            serde_json::from_value::<CompletionResponse>(v)
                .unwrap()
                .first_text()
        };
        assert_eq!(parse(json!({})), None);
        assert_eq!(parse(json!({"choices": []})), None);
        assert_eq!(parse(json!({"choices": [{}]})), None);
        assert_eq!(parse(json!({"choices": [{"message": {}}]})), None);
        assert_eq!(parse(json!({"choices": [{"message": {"content": ""}}]})), None);
        assert_eq!(
            parse(json!({"choices": [
                {"message": {"content": "first"}},
                {"message": {"content": "second"}}
            ]})),
            Some("first".to_string())
        );
    }

    #[tokio::test]
    async fn test_request_body_carries_prompt_and_token_cap() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::Json(json!({
                "messages": [{"role": "user", "content": "hello"}],
                "max_tokens": 50
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"hi"}}]}"#)
            .create_async()
            .await;

        let client = CompletionClient::new(format!("{}/v1/chat/completions", server.url()), None, 50);
        let text = client.complete("hello").await.unwrap();
        assert_eq!(text.as_deref(), Some("hi"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_model_is_forwarded_when_configured() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({"model": "llama-3"})))
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = CompletionClient::new(server.url(), Some("llama-3".to_string()), 50);
        assert_eq!(client.complete("x").await.unwrap(), None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(503)
            .create_async()
            .await;

        let client = CompletionClient::new(server.url(), None, 50);
        let err = client.complete("x").await.unwrap_err();
        assert!(matches!(err, CompletionError::Status(503)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = CompletionClient::new(server.url(), None, 50);
        let err = client.complete("x").await.unwrap_err();
        assert!(matches!(err, CompletionError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let client = CompletionClient::new("http://127.0.0.1:9/v1/chat/completions", None, 50);
        let err = client.complete("x").await.unwrap_err();
        assert!(matches!(err, CompletionError::Transport(_)));
    }
}
