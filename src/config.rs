//! Client configuration: endpoint, caller identification and defaults.

use std::time::Duration;

/// Host of the chat-completion API.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai";

/// Path of the chat-completion endpoint, appended to the base URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// Key looked up in the credential file and the environment.
pub const DEFAULT_KEY_NAME: &str = "OPENROUTER_API_KEY";

/// Credential file read when none is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3.1:free";

pub const DEFAULT_MAX_TOKENS: u32 = 50;

/// Sent as `HTTP-Referer` so the API can attribute traffic to this tool.
pub const DEFAULT_REFERER: &str = "https://github.com/andrewchernish1-ui/som_lit_bot";

/// Sent as `X-Title`.
pub const DEFAULT_TITLE: &str = "Literary Assistant Bot";

/// Settings for [`ChatCompletionClient`](crate::ChatCompletionClient).
///
/// Only `base_url` is expected to change in practice (tests point it at a
/// mock server); the rest identifies the caller to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub referer: String,
    pub title: String,
    /// Per-request timeout; `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ClientConfig {
    /// Full URL of the chat-completion endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}
