//! Console rendering of an exchange outcome.
//!
//! The lines are meant for people, not for parsing.

use crate::error::{ErrorCategory, LlmError, LlmResult};
use crate::types::Completion;

/// Human-readable lines describing the outcome of one exchange.
pub fn render_outcome(outcome: &LlmResult<Completion>) -> Vec<String> {
    match outcome {
        Ok(completion) => render_completion(completion),
        Err(err) => render_error(err),
    }
}

fn render_completion(completion: &Completion) -> Vec<String> {
    let mut lines = vec!["SUCCESS: the API responded correctly".to_string()];

    if completion.content.is_empty() {
        lines.push("Response: <empty>".to_string());
    } else {
        lines.push(format!("Response: {}", completion.content));
    }

    if let Some(model) = &completion.model {
        lines.push(format!("Served by: {model}"));
    }
    if let Some(usage) = &completion.usage {
        lines.push(format!(
            "Token usage: {} input + {} output = {} total",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        ));
    }

    lines
}

/// Human-readable lines for a failed run, including any remediation.
pub fn render_error(err: &LlmError) -> Vec<String> {
    let mut lines = match err {
        LlmError::RemoteError { status, body, .. } => vec![
            format!("ERROR: the API returned status {status}"),
            format!("Server response: {body}"),
        ],
        LlmError::ResponseParsingError { message } => {
            vec![format!("ERROR: could not parse the response: {message}")]
        }
        LlmError::RequestFailed { message, .. } => {
            vec![format!("ERROR: network failure: {message}")]
        }
        LlmError::Timeout { .. } => vec![format!("ERROR: {}", err.user_message())],
        LlmError::CredentialMissing { searched, .. } => vec![
            format!("ERROR: {}", err.user_message()),
            format!("Searched: {searched}"),
        ],
        _ => vec![format!("ERROR: {err}")],
    };

    if let Some(remediation) = err.remediation() {
        lines.extend(remediation.lines().map(str::to_string));
    }

    lines.push(next_step(err.category()).to_string());
    lines
}

fn next_step(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::Client => "Next step: fix your key or settings, then run again",
        ErrorCategory::Transient => "Next step: the service is busy or slow, run again later",
        ErrorCategory::External => {
            "Next step: the service or network failed, check the provider status and run again"
        }
        ErrorCategory::Internal => {
            "Next step: unexpected response, run again with --verbose and inspect the logs"
        }
    }
}
