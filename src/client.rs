//! Chat-completion client
//!
//! [`ChatCompletionClient`] splits one exchange into three steps that can be
//! used and tested on their own:
//!
//! 1. [`build_request`](ChatCompletionClient::build_request): pure payload construction
//! 2. [`send`](ChatCompletionClient::send): one POST, returns status and raw body
//! 3. [`interpret`](ChatCompletionClient::interpret): status and body to content or error
//!
//! [`complete`](ChatCompletionClient::complete) chains the last two.

use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_error, log_info, log_warn};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, Completion, RawResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Instant;

/// Attached to 401 responses.
pub const UNAUTHORIZED_HINT: &str = "Possible causes:
  - insufficient balance on the account
  - the key was leaked and has been revoked by the provider
  - the account is suspended or restricted";

static HTTP_REFERER: HeaderName = HeaderName::from_static("http-referer");
static X_TITLE: HeaderName = HeaderName::from_static("x-title");

/// Client for a single chat-completion exchange.
#[derive(Debug)]
pub struct ChatCompletionClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ChatCompletionClient {
    /// Create a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: ClientConfig) -> LlmResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            LlmError::configuration_error(format!("Failed to build HTTP client: {e}"))
        })?;

        log_debug!(
            endpoint = %config.endpoint(),
            timeout_seconds = config.request_timeout.map(|t| t.as_secs()),
            "Chat completion client initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Assemble a request body.
    ///
    /// The only check is that `model` is not blank.
    pub fn build_request(
        model: &str,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> LlmResult<ChatRequest> {
        if model.trim().is_empty() {
            return Err(LlmError::invalid_request("model must not be empty"));
        }

        Ok(ChatRequest {
            model: model.to_string(),
            messages,
            max_tokens,
            temperature: None,
        })
    }

    /// Headers identifying the caller: bearer token, content type, referer, title.
    pub fn build_headers(&self, credential: &Credential) -> LlmResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", credential.expose()))
            .map_err(|e| LlmError::configuration_error(format!("Invalid API key format: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        headers.insert(
            HTTP_REFERER.clone(),
            HeaderValue::from_str(&self.config.referer)
                .map_err(|e| LlmError::configuration_error(format!("Invalid referer: {e}")))?,
        );
        headers.insert(
            X_TITLE.clone(),
            HeaderValue::from_str(&self.config.title)
                .map_err(|e| LlmError::configuration_error(format!("Invalid title: {e}")))?,
        );

        Ok(headers)
    }

    /// POST the request once and wait for the whole body.
    ///
    /// Any HTTP status is returned as-is; only transport failures are errors.
    pub async fn send(
        &self,
        request: &ChatRequest,
        credential: &Credential,
    ) -> LlmResult<RawResponse> {
        let url = self.config.endpoint();
        let headers = self.build_headers(credential)?;

        log_debug!(
            url = %url,
            model = %request.model,
            message_count = request.messages.len(),
            max_tokens = request.max_tokens,
            "Sending chat completion request"
        );

        let start_time = Instant::now();
        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status().as_u16();
        log_debug!(
            status = status,
            headers = ?response.headers(),
            "Received response headers"
        );

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        log_debug!(
            status = status,
            body_length = body.len(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Chat completion exchange finished"
        );

        Ok(RawResponse { status, body })
    }

    /// Turn a raw exchange into the first choice's content.
    ///
    /// Non-200 statuses become [`LlmError::RemoteError`] with the body kept
    /// verbatim; 401 additionally carries [`UNAUTHORIZED_HINT`].
    pub fn interpret(response: RawResponse) -> LlmResult<Completion> {
        let RawResponse { status, body } = response;

        if status != 200 {
            let hint = (status == 401).then_some(UNAUTHORIZED_HINT);
            return Err(LlmError::remote_error(status, body, hint));
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            log_error!(
                error = %e,
                raw_body = %body,
                "Failed to parse response"
            );
            LlmError::response_parsing_error(format!("Invalid response: {e}"))
        })?;

        let ChatResponse {
            choices,
            model,
            usage,
        } = parsed;

        let choice = choices.into_iter().next().ok_or_else(|| {
            LlmError::response_parsing_error("No choices in chat completion response")
        })?;

        let content = choice.message.content.trim().to_string();
        if content.is_empty() {
            log_warn!(
                finish_reason = ?choice.finish_reason,
                "Chat completion returned empty content"
            );
        } else {
            log_info!(
                content_length = content.chars().count(),
                "Chat completion returned content"
            );
        }

        Ok(Completion {
            content,
            model,
            finish_reason: choice.finish_reason,
            usage,
        })
    }

    /// [`send`](Self::send) followed by [`interpret`](Self::interpret).
    pub async fn complete(
        &self,
        request: &ChatRequest,
        credential: &Credential,
    ) -> LlmResult<Completion> {
        let response = self.send(request, credential).await?;
        Self::interpret(response)
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            let timeout_seconds = self
                .config
                .request_timeout
                .map(|t| t.as_secs())
                .unwrap_or_default();
            return LlmError::timeout(timeout_seconds);
        }

        log_error!(
            url = %url,
            error = %e,
            "HTTP request failed"
        );
        LlmError::request_failed(format!("Request failed: {e}"), Some(Box::new(e)))
    }
}
