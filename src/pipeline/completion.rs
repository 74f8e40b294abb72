//! OpenAI chat-completion client.
//!
//! Generates the localized answer from the user's query plus optional
//! reference context. Treated as optional end to end: a missing credential
//! or any request failure surfaces as an error that the orchestrator
//! converts into a fallback answer.

use std::future::Future;

use serde::{Deserialize, Serialize};

use super::PipelineError;

pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";

const COMPLETION_MODEL: &str = "gpt-3.5-turbo";
const COMPLETION_MAX_TOKENS: u32 = 500;
const COMPLETION_TEMPERATURE: f32 = 0.7;
const COMPLETION_TIMEOUT_SECS: u64 = 30;

/// Trait for answer generation within the query pipeline.
pub trait AnswerGenerate: Send + Sync {
    fn generate(
        &self,
        system: &str,
        user: &str,
    ) -> impl Future<Output = Result<String, PipelineError>> + Send;
}

/// HTTP client for the OpenAI chat completions endpoint.
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client against the public OpenAI API.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(OPENAI_API_BASE_URL, api_key)
    }

    /// Create a client against a custom base URL (proxies, test servers).
    pub fn with_base_url(base_url: &str, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(COMPLETION_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from `POST /chat/completions`.
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Pull the first choice's content out of a completion response, trimmed.
fn extract_content(response: ChatCompletionResponse) -> Result<String, PipelineError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::EmptyCompletion);
    }
    Ok(trimmed.to_string())
}

impl AnswerGenerate for OpenAiClient {
    async fn generate(&self, system: &str, user: &str) -> Result<String, PipelineError> {
        let api_key = self.api_key.as_ref().ok_or(PipelineError::MissingCredential)?;

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: COMPLETION_MODEL,
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
            max_tokens: COMPLETION_MAX_TOKENS,
            temperature: COMPLETION_TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PipelineError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    PipelineError::Timeout(COMPLETION_TIMEOUT_SECS)
                } else {
                    PipelineError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::ResponseParsing(e.to_string()))?;

        extract_content(parsed)
    }
}

/// Mock answer generator for testing — configurable response, counts calls.
pub struct MockAnswerGenerate {
    response: Option<String>,
    calls: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

impl MockAnswerGenerate {
    /// Generator that always answers with the given text.
    pub fn answering(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            calls: Default::default(),
        }
    }

    /// Generator that always fails.
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Default::default(),
        }
    }

    /// Share a counter incremented on every `generate` call.
    pub fn with_call_counter(
        mut self,
        counter: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    ) -> Self {
        self.calls = counter;
        self
    }
}

impl AnswerGenerate for MockAnswerGenerate {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, PipelineError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.response
            .clone()
            .ok_or_else(|| PipelineError::Connection("mock".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client = OpenAiClient::with_base_url("https://api.openai.com/v1/", None);
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }

    #[tokio::test]
    async fn generate_without_credential_is_an_error() {
        let client = OpenAiClient::new(None);
        let err = client.generate("system", "user").await.unwrap_err();
        assert!(matches!(err, PipelineError::MissingCredential));
    }

    #[test]
    fn request_body_carries_model_and_sampling_params() {
        let body = ChatCompletionRequest {
            model: COMPLETION_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: "स्वास्थ्य प्रश्न: बुखार",
            }],
            max_tokens: COMPLETION_MAX_TOKENS,
            temperature: COMPLETION_TEMPERATURE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn extract_content_trims_whitespace() {
        let response: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"content": "  बुखार में आराम करें।  \n"}}]
        }))
        .unwrap();
        assert_eq!(extract_content(response).unwrap(), "बुखार में आराम करें।");
    }

    #[test]
    fn extract_content_rejects_empty_and_missing() {
        let empty: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"content": "   "}}]
        }))
        .unwrap();
        assert!(matches!(extract_content(empty), Err(PipelineError::EmptyCompletion)));

        let missing: ChatCompletionResponse =
            serde_json::from_value(serde_json::json!({ "choices": [] })).unwrap();
        assert!(matches!(extract_content(missing), Err(PipelineError::EmptyCompletion)));

        let null_content: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"content": null}}]
        }))
        .unwrap();
        assert!(matches!(extract_content(null_content), Err(PipelineError::EmptyCompletion)));
    }

    #[tokio::test]
    async fn mock_returns_configured_response() {
        let mock = MockAnswerGenerate::answering("test response");
        assert_eq!(mock.generate("s", "u").await.unwrap(), "test response");
    }

    #[tokio::test]
    async fn mock_failing_errors() {
        let mock = MockAnswerGenerate::failing();
        assert!(mock.generate("s", "u").await.is_err());
    }
}
