// crates/client/src/error.rs
//! Uniform error type for all API operations.

use thiserror::Error;

/// Errors surfaced by [`crate::FinanceClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected before any network call (e.g. a non-`.csv` upload).
    #[error("invalid file {name:?}: expected a .csv extension")]
    InvalidFile { name: String },

    /// Connect, timeout, or body/deserialization failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Local file read failure (upload-from-path helper).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-2xx response; `message` is extracted from the backend body.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// Status code for API errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// DRF bodies vary: field errors (`{"file": ["..."]}`), `{"message": ...}`,
/// `{"detail": ...}`, `{"error": ...}`, or plain text. Precedence follows
/// what the backend actually emits, most specific first.
pub(crate) fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value
            .get("file")
            .and_then(|f| f.as_array())
            .and_then(|a| a.first())
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
        for key in ["message", "detail", "error"] {
            if let Some(msg) = value.get(key).and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no error detail provided".to_string();
    }
    // Raw fallback, truncated so HTML error pages stay loggable.
    let mut message: String = trimmed.chars().take(200).collect();
    if message.len() < trimmed.len() {
        message.push('…');
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_errors_win_over_detail() {
        let body = r#"{"file": ["Arquivo CSV inválido"], "detail": "Bad request"}"#;
        assert_eq!(extract_error_message(body), "Arquivo CSV inválido");
    }

    #[test]
    fn message_then_detail_then_error() {
        assert_eq!(extract_error_message(r#"{"message": "m"}"#), "m");
        assert_eq!(extract_error_message(r#"{"detail": "d"}"#), "d");
        assert_eq!(extract_error_message(r#"{"error": "e"}"#), "e");
    }

    #[test]
    fn raw_body_is_truncated() {
        let long = "x".repeat(500);
        let message = extract_error_message(&long);
        assert!(message.chars().count() <= 201);
        assert!(message.ends_with('…'));
    }

    #[test]
    fn empty_body_gets_a_placeholder() {
        assert_eq!(extract_error_message(""), "no error detail provided");
    }
}
