//! # openrouter-ping
//!
//! Single-shot client for the OpenRouter chat-completion API, used to check
//! that an API key works.
//!
//! One run loads a key from a `.env` file, sends one request and reports the
//! first choice's content or the error:
//!
//! ```rust,no_run
//! use openrouter_ping::{
//!     credential, ChatCompletionClient, ChatMessage, ClientConfig, LlmResult,
//! };
//!
//! # async fn example() -> LlmResult<()> {
//! let key = credential::load_credential(".env", "OPENROUTER_API_KEY")?;
//! let client = ChatCompletionClient::new(ClientConfig::default())?;
//! let request = ChatCompletionClient::build_request(
//!     "deepseek/deepseek-chat-v3.1:free",
//!     vec![ChatMessage::user("Hello!")],
//!     50,
//! )?;
//!
//! let raw = client.send(&request, &key).await?;
//! let completion = ChatCompletionClient::interpret(raw)?;
//! println!("{}", completion.content);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod logging;

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod report;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{ChatCompletionClient, UNAUTHORIZED_HINT};
pub use config::ClientConfig;
pub use credential::Credential;
pub use error::{LlmError, LlmResult};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Completion, RawResponse, Role, Usage};
