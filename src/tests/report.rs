// Unit Tests for Console Reporting
//
// UNIT UNDER TEST: render_outcome, render_error
//
// BUSINESS RESPONSIBILITY:
//   - Shows the model's answer on success
//   - Shows status and raw body for API errors
//   - Shows remediation for 401 and missing credentials only
//
// TEST COVERAGE:
//   - Success lines with and without usage
//   - 401 vs 500 hint presence
//   - Transport, parse and credential failures
//   - Closing next-step line follows the error category

use crate::client::UNAUTHORIZED_HINT;
use crate::error::LlmError;
use crate::report::{render_error, render_outcome};
use crate::types::{Completion, Usage};

fn completion(content: &str, usage: Option<Usage>) -> Completion {
    Completion {
        content: content.to_string(),
        model: None,
        finish_reason: Some("stop".to_string()),
        usage,
    }
}

#[cfg(test)]
mod success_report_tests {
    use super::*;

    #[test]
    fn test_success_shows_content() {
        let lines = render_outcome(&Ok(completion("Привет!", None)));

        assert!(lines[0].starts_with("SUCCESS"));
        assert!(lines.iter().any(|l| l == "Response: Привет!"));
        assert!(!lines.iter().any(|l| l.starts_with("Token usage")));
    }

    #[test]
    fn test_success_shows_usage_when_reported() {
        let usage = Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        };

        let lines = render_outcome(&Ok(completion("ok", Some(usage))));

        assert!(lines
            .iter()
            .any(|l| l == "Token usage: 10 input + 5 output = 15 total"));
    }
}

#[cfg(test)]
mod error_report_tests {
    use super::*;

    #[test]
    fn test_401_report_includes_hint() {
        let err = LlmError::remote_error(401, "No auth credentials found", Some(UNAUTHORIZED_HINT));

        let lines = render_error(&err);

        assert_eq!(lines[0], "ERROR: the API returned status 401");
        assert_eq!(lines[1], "Server response: No auth credentials found");
        assert!(lines.iter().any(|l| l.contains("insufficient balance")));
        assert!(lines.iter().any(|l| l.contains("leaked")));
        assert!(lines.iter().any(|l| l.contains("account")));
    }

    #[test]
    fn test_500_report_has_no_hint() {
        let err = LlmError::remote_error(500, "upstream failure", None);

        let lines = render_error(&err);

        assert_eq!(lines.len(), 3);
        assert!(!lines.iter().any(|l| l.contains("insufficient balance")));
    }

    #[test]
    fn test_network_failure_report() {
        let err = LlmError::request_failed("connection refused", None);

        let lines = render_outcome(&Err(err));

        assert_eq!(
            lines,
            vec![
                "ERROR: network failure: connection refused",
                "Next step: the service or network failed, check the provider status and run again",
            ]
        );
    }

    #[test]
    fn test_parse_failure_report() {
        let err = LlmError::response_parsing_error("expected value at line 1 column 1");

        let lines = render_error(&err);

        assert!(lines[0].starts_with("ERROR: could not parse the response"));
    }

    #[test]
    fn test_missing_credential_report_includes_remediation() {
        let err = LlmError::credential_missing("OPENROUTER_API_KEY", ".env, environment");

        let lines = render_error(&err);

        assert_eq!(lines[0], "ERROR: API key OPENROUTER_API_KEY is not configured");
        assert_eq!(lines[1], "Searched: .env, environment");
        assert!(lines[2].contains("OPENROUTER_API_KEY=<your key>"));
    }

    #[test]
    fn test_unreadable_credential_report() {
        let err = LlmError::credential_unreadable(".env", "Is a directory (os error 21)", None);

        let lines = render_error(&err);

        assert!(lines[0].starts_with("ERROR: Failed to read credential file .env"));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Next step: fix your key or settings, then run again")
        );
    }
}

#[cfg(test)]
mod next_step_tests {
    use super::*;

    fn last_line(err: LlmError) -> String {
        render_error(&err).pop().unwrap()
    }

    #[test]
    fn test_rejected_key_asks_user_to_fix_setup() {
        let line = last_line(LlmError::remote_error(401, "", Some(UNAUTHORIZED_HINT)));

        assert!(line.contains("fix your key or settings"));
    }

    #[test]
    fn test_rate_limit_and_timeout_suggest_waiting() {
        assert!(last_line(LlmError::remote_error(429, "", None)).contains("run again later"));
        assert!(last_line(LlmError::timeout(30)).contains("run again later"));
    }

    #[test]
    fn test_server_error_points_at_the_service() {
        let line = last_line(LlmError::remote_error(502, "", None));

        assert!(line.contains("service or network failed"));
    }

    #[test]
    fn test_unexpected_status_suggests_verbose_run() {
        let line = last_line(LlmError::remote_error(302, "", None));

        assert!(line.contains("--verbose"));
    }
}
