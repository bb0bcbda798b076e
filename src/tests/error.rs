// Unit Tests for Error Handling
//
// UNIT UNDER TEST: LlmError
//
// BUSINESS RESPONSIBILITY:
//   - Categorizes failures so the user knows whether to fix setup or wait
//   - Attaches remediation to missing credentials and rejected keys
//   - Produces short user-facing messages
//
// TEST COVERAGE:
//   - Category mapping, including status-dependent remote errors
//   - Remediation text presence
//   - Display output keeps status and body

use crate::client::UNAUTHORIZED_HINT;
use crate::error::{ErrorCategory, LlmError};

#[cfg(test)]
mod categorization_tests {
    use super::*;

    #[test]
    fn test_credential_errors_are_client_side() {
        let missing = LlmError::credential_missing("OPENROUTER_API_KEY", ".env");
        let unreadable = LlmError::credential_unreadable(".env", "permission denied", None);

        assert_eq!(missing.category(), ErrorCategory::Client);
        assert_eq!(unreadable.category(), ErrorCategory::Client);
    }

    #[test]
    fn test_transport_failures_are_not_client_side() {
        let failed = LlmError::request_failed("connection refused", None);
        let timeout = LlmError::timeout(30);

        assert_eq!(failed.category(), ErrorCategory::External);
        assert_eq!(timeout.category(), ErrorCategory::Transient);
    }

    #[test]
    fn test_remote_error_category_follows_status() {
        assert_eq!(
            LlmError::remote_error(401, "{}", Some(UNAUTHORIZED_HINT)).category(),
            ErrorCategory::Client
        );
        assert_eq!(
            LlmError::remote_error(429, "{}", None).category(),
            ErrorCategory::Transient
        );
        assert_eq!(
            LlmError::remote_error(503, "{}", None).category(),
            ErrorCategory::External
        );
        assert_eq!(
            LlmError::remote_error(302, "", None).category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn test_parse_error_is_external() {
        let error = LlmError::response_parsing_error("expected value at line 1");

        assert_eq!(error.category(), ErrorCategory::External);
    }
}

#[cfg(test)]
mod message_tests {
    use super::*;

    #[test]
    fn test_credential_missing_has_remediation() {
        let error = LlmError::credential_missing("OPENROUTER_API_KEY", ".env");

        let remediation = error.remediation().unwrap();

        assert!(remediation.contains("OPENROUTER_API_KEY="));
        assert_eq!(error.user_message(), "API key OPENROUTER_API_KEY is not configured");
    }

    #[test]
    fn test_remote_error_remediation_is_the_hint() {
        let with_hint = LlmError::remote_error(401, "unauthorized", Some(UNAUTHORIZED_HINT));
        let without_hint = LlmError::remote_error(500, "oops", None);

        assert_eq!(with_hint.remediation().as_deref(), Some(UNAUTHORIZED_HINT));
        assert!(without_hint.remediation().is_none());
    }

    #[test]
    fn test_remote_error_display_keeps_status_and_body() {
        let error = LlmError::remote_error(402, r#"{"error":"Insufficient credits"}"#, None);

        assert_eq!(
            error.to_string(),
            r#"API error 402: {"error":"Insufficient credits"}"#
        );
    }

    #[test]
    fn test_timeout_user_message_mentions_duration() {
        let error = LlmError::timeout(30);

        assert!(error.user_message().contains("30 seconds"));
    }
}
