//! API key loading.
//!
//! The key lives in a `.env`-style file of `KEY=VALUE` lines, with the
//! process environment as a fallback. A key that cannot be found is a normal
//! outcome reported as [`LlmError::CredentialMissing`]; a file that exists but
//! cannot be read is [`LlmError::CredentialUnreadable`].

use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_warn};
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

/// Bearer token used to authenticate against the API.
///
/// `Debug` never prints the token; use [`Credential::expose`] where the raw
/// value is really needed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, trimming surrounding whitespace.
    ///
    /// Returns `None` for an empty or blank token.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Read the credential from the process environment.
    pub fn from_env(key: &str) -> LlmResult<Self> {
        std::env::var(key)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| LlmError::credential_missing(key, "environment"))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Look up `key` in the `KEY=VALUE` file at `path`.
///
/// The value is taken literally: everything after the first `=`, trimmed.
/// No quote removal, comment stripping or `$VAR` expansion happens, so the
/// token sent is exactly the token in the file. When the key occurs more than
/// once the last occurrence wins. Lines are decoded one at a time; a line that
/// is not valid UTF-8 is skipped with a warning so it cannot hide the key.
///
/// A missing file is not an I/O failure here: it yields
/// [`LlmError::CredentialMissing`] just like a missing key.
pub fn load_credential(path: impl AsRef<Path>, key: &str) -> LlmResult<Credential> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let contents = match std::fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log_debug!(path = %display_path, "Credential file not found");
            return Err(LlmError::credential_missing(key, display_path));
        }
        Err(e) => {
            return Err(LlmError::credential_unreadable(
                display_path,
                e.to_string(),
                Some(Box::new(e)),
            ))
        }
    };

    let mut found = None;
    for (index, raw_line) in contents.split(|&b| b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw_line) else {
            log_warn!(
                path = %display_path,
                line = index + 1,
                "Skipping line that is not valid UTF-8"
            );
            continue;
        };
        if let Some(value) = value_for_key(line, key) {
            found = Some(value);
        }
    }

    found
        .and_then(Credential::new)
        .ok_or_else(|| LlmError::credential_missing(key, display_path))
}

/// The trimmed text after the first `=` when the line's name is `key`.
fn value_for_key<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let (name, value) = line.split_once('=')?;
    (name.trim_start_matches('\u{feff}').trim() == key).then(|| value.trim())
}

/// Look up `key` in the file at `path`, then in the process environment.
///
/// An unreadable file is reported as-is rather than masked by the fallback.
pub fn resolve_credential(path: impl AsRef<Path>, key: &str) -> LlmResult<Credential> {
    let path = path.as_ref();
    match load_credential(path, key) {
        Err(LlmError::CredentialMissing { .. }) => {
            log_debug!(key = %key, "Falling back to environment for credential");
            Credential::from_env(key).map_err(|_| {
                LlmError::credential_missing(key, format!("{}, environment", path.display()))
            })
        }
        other => other,
    }
}
