//! Error types for chat-completion operations.
//!
//! Every failure of a run maps onto [`LlmError`]:
//! - Credential problems (key missing, credential file unreadable)
//! - Invalid requests and configuration (empty model, unencodable headers)
//! - Transport failures (connection errors, timeouts)
//! - Response problems (malformed success body, non-200 status)
//!
//! None of these are retried. Each one is terminal for the run and carries
//! enough context (status code or message) for a human to act on it.
//!
//! # Error Handling Example
//!
//! ```rust
//! use openrouter_ping::{LlmError, error::ErrorCategory};
//!
//! fn describe(err: &LlmError) -> String {
//!     match err.category() {
//!         ErrorCategory::Client => format!("Fix your setup: {}", err.user_message()),
//!         _ => format!("Service problem: {err}"),
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// Who has to act on an error: the user, or the service.
///
/// Selects the closing advice line in [`report`](crate::report).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (remote API, network).
    External,

    /// Outcomes that fit neither side, such as a redirect status.
    Internal,

    /// Client errors the caller can fix (missing key, bad input, rejected key).
    Client,

    /// Temporary failures (timeouts, rate limits).
    ///
    /// Nothing in this crate retries them; running again later may succeed.
    Transient,
}

/// Convenient result type for chat-completion operations.
///
/// ```rust
/// use openrouter_ping::LlmResult;
///
/// fn first_word(text: &str) -> LlmResult<String> {
///     text.split_whitespace()
///         .next()
///         .map(str::to_string)
///         .ok_or_else(|| openrouter_ping::LlmError::response_parsing_error("Empty content"))
/// }
/// ```
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while loading a credential or performing an exchange.
///
/// | Variant | Category |
/// |---------|----------|
/// | `CredentialMissing` | Client |
/// | `CredentialUnreadable` | Client |
/// | `ConfigurationError` | Client |
/// | `InvalidRequest` | Client |
/// | `RequestFailed` | External |
/// | `Timeout` | Transient |
/// | `ResponseParsingError` | External |
/// | `RemoteError` | Client for 4xx, Transient for 429, External for 5xx |
///
/// Use the constructor methods, which log the error as it is created.
#[derive(Error, Debug)]
pub enum LlmError {
    /// The credential key was not found.
    ///
    /// Covers both a missing credential file and a file without the key.
    /// This is a normal terminal state, not a bug.
    #[error("Credential {key} not found ({searched})")]
    CredentialMissing {
        /// Name of the key that was looked up.
        key: String,
        /// Where the lookup happened, e.g. the file path or "environment".
        searched: String,
    },

    /// The credential file exists but could not be read.
    #[error("Failed to read credential file {path}: {message}")]
    CredentialUnreadable {
        /// Path of the credential file.
        path: String,
        /// Description of the I/O failure.
        message: String,
        /// The underlying error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Client configuration is unusable (bad header values, HTTP client setup).
    #[error("Client configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The request could not be built.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Why the request was rejected.
        message: String,
    },

    /// The HTTP exchange failed at the transport level.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No response arrived within the configured timeout.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout that was exceeded.
        timeout_seconds: u64,
    },

    /// A 200 response whose body is not the expected JSON.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// The API answered with a non-200 status.
    #[error("API error {status}: {body}")]
    RemoteError {
        /// HTTP status code.
        status: u16,
        /// Raw response body, untouched.
        body: String,
        /// Remediation guidance; only set for 401.
        hint: Option<&'static str>,
    },
}

impl LlmError {
    /// Get the error category, used to pick the advice shown to the user.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CredentialMissing { .. } => ErrorCategory::Client,
            Self::CredentialUnreadable { .. } => ErrorCategory::Client,
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::InvalidRequest { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::Timeout { .. } => ErrorCategory::Transient,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::RemoteError { status, .. } => match status {
                429 => ErrorCategory::Transient,
                400..=499 => ErrorCategory::Client,
                500..=599 => ErrorCategory::External,
                _ => ErrorCategory::Internal,
            },
        }
    }

    /// Remediation text to show alongside the error, if any.
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::CredentialMissing { key, .. } => Some(format!(
                "Add a line `{key}=<your key>` to your .env file or export {key} in the environment"
            )),
            Self::RemoteError { hint, .. } => hint.map(str::to_string),
            _ => None,
        }
    }

    /// Convert to a short message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::CredentialMissing { key, .. } => format!("API key {key} is not configured"),
            Self::CredentialUnreadable { path, .. } => {
                format!("Could not read credential file {path}")
            }
            Self::ConfigurationError { .. } => {
                "Client configuration issue. Please check your settings".to_string()
            }
            Self::InvalidRequest { message } => format!("Invalid request: {message}"),
            Self::RequestFailed { .. } => "Network error while contacting the API".to_string(),
            Self::Timeout { timeout_seconds } => {
                format!("No response from the API within {timeout_seconds} seconds")
            }
            Self::ResponseParsingError { .. } => {
                "Received an invalid response from the API".to_string()
            }
            Self::RemoteError { status, .. } => format!("The API rejected the request ({status})"),
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn credential_missing(key: impl Into<String>, searched: impl Into<String>) -> Self {
        let key = key.into();
        let searched = searched.into();
        log_warn!(
            error_type = "credential_missing",
            key = %key,
            searched = %searched,
            "Credential lookup found nothing"
        );
        Self::CredentialMissing { key, searched }
    }

    pub fn credential_unreadable(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let path = path.into();
        let message = message.into();
        log_error!(
            error_type = "credential_unreadable",
            path = %path,
            message = %message,
            "Credential file could not be read"
        );
        Self::CredentialUnreadable {
            path,
            message,
            source,
        }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Client configuration invalid"
        );
        Self::ConfigurationError { message }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "invalid_request",
            message = %message,
            "Chat request rejected before sending"
        );
        Self::InvalidRequest { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Chat request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "Chat request timed out"
        );
        Self::Timeout { timeout_seconds }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "Chat response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn remote_error(status: u16, body: impl Into<String>, hint: Option<&'static str>) -> Self {
        let body = body.into();
        log_error!(
            error_type = "remote_error",
            status = status,
            body = %body,
            has_hint = hint.is_some(),
            "API returned an error status"
        );
        Self::RemoteError { status, body, hint }
    }
}
