// src/services/openai_client.rs
// DOCUMENTATION: OpenAI chat completions client
// PURPOSE: Send system + user prompts and return the assistant text

use crate::errors::LocationError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default base URL of the OpenAI API
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat completion model
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Output format requested from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Free form text
    Text,
    /// Strict JSON object (`response_format = {"type": "json_object"}`)
    JsonObject,
}

/// OpenAI-compatible chat completions client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatSpec>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormatSpec {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    #[allow(dead_code)]
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_OPENAI_BASE_URL.to_string(), model)
    }

    /// Create a client against a custom OpenAI-compatible endpoint
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one chat completion
    /// DOCUMENTATION: Returns the first choice's content. A null content is
    /// returned as an empty string; a response without choices is an error.
    pub async fn chat_completion(
        &self,
        system: &str,
        user: &str,
        format: ResponseFormat,
    ) -> Result<String, LocationError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: match format {
                ResponseFormat::Text => None,
                ResponseFormat::JsonObject => Some(ResponseFormatSpec {
                    kind: "json_object",
                }),
            },
        };

        log::debug!(
            "Sending chat completion to {} (model={}, format={:?})",
            self.base_url,
            self.model,
            format
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                log::error!("OpenAI API request failed: {}", e);
                LocationError::LanguageModelError(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("OpenAI API error ({}): {}", status, body);
            return Err(LocationError::LanguageModelError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse OpenAI response: {}", e);
            LocationError::LanguageModelError(format!("Parse error: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| LocationError::LanguageModelError("No choices in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::Server) -> OpenAiClient {
        OpenAiClient::with_base_url(
            "sk-test".to_string(),
            server.url(),
            DEFAULT_OPENAI_MODEL.to_string(),
        )
    }

    #[tokio::test]
    async fn test_json_mode_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "response_format": {"type": "json_object"},
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "{\"location\": \"Rome\"}"}}]}"#)
            .create_async()
            .await;

        let content = client_for(&server)
            .chat_completion("sys", "hello", ResponseFormat::JsonObject)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(content, r#"{"location": "Rome"}"#);
    }

    #[test]
    fn test_text_mode_omits_response_format() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: vec![],
            response_format: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("response_format").is_none());
    }

    #[tokio::test]
    async fn test_null_content_is_empty_string() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#)
            .create_async()
            .await;

        let content = client_for(&server)
            .chat_completion("sys", "hello", ResponseFormat::Text)
            .await
            .unwrap();
        assert_eq!(content, "");
    }

    #[tokio::test]
    async fn test_http_error_and_missing_choices() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Incorrect API key"}}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .chat_completion("sys", "hello", ResponseFormat::Text)
            .await
            .unwrap_err();
        assert!(matches!(err, LocationError::LanguageModelError(_)));
        assert!(err.to_string().contains("401"));

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .chat_completion("sys", "hello", ResponseFormat::Text)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No choices"));
    }
}
