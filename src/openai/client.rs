use std::time::Duration;

use reqwest::Client;

use super::error::CompletionError;
use super::types::{ChatRequest, ChatResponse};

pub const API_URL: &str = "https://api.openai.com/v1/chat/completions";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Anything that can answer a chat-completions request.
///
/// The interviewer is generic over this trait so tests can script the
/// service's answers without a network.
#[allow(async_fn_in_trait)]
pub trait CompletionSender {
    async fn complete(&self, req: &ChatRequest) -> Result<ChatResponse, CompletionError>;
}

pub struct OpenAiClient {
    api_key: String,
    client: Client,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Result<Self, CompletionError> {
        Self::with_base_url(api_key, API_URL.to_string(), DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client pointing at a custom endpoint (OpenAI-compatible
    /// gateways, or a mock server in tests).
    pub fn with_base_url(
        api_key: String,
        base_url: String,
        request_timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            api_key,
            client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CompletionSender for OpenAiClient {
    async fn complete(&self, req: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(req)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| secs * 1000)
                .unwrap_or(1000);
            return Err(CompletionError::RateLimited {
                retry_after_ms: retry_after,
            });
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CompletionError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json::<ChatResponse>().await?;
        if body.choices.is_empty() {
            return Err(CompletionError::MalformedResponse(
                "response contained no choices".into(),
            ));
        }
        tracing::debug!(
            model = %body.model,
            tokens = body.usage.as_ref().map(|u| u.total_tokens),
            "completion received"
        );
        Ok(body)
    }
}
