//! Error taxonomy
//!
//! Nothing here is recovered from: every variant aborts the session.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DebateError {
    #[error("request to chat endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed chat response: {0}")]
    MalformedResponse(String),

    #[error("chat response has no message content")]
    MissingContent,

    #[error("scripted input exhausted")]
    ScriptExhausted,

    #[error("console input closed")]
    InputClosed,

    #[error("cancelled by user")]
    Cancelled,

    #[error("no topic accepted after {attempts} suggestions")]
    TopicsExhausted { attempts: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DebateError {
    /// Stable code string (for diagnostics)
    pub fn code(&self) -> &'static str {
        match self {
            Self::Http(_) => "E101_HTTP",
            Self::Status { .. } => "E102_STATUS",
            Self::MalformedResponse(_) => "E103_MALFORMED_RESPONSE",
            Self::MissingContent => "E104_MISSING_CONTENT",
            Self::ScriptExhausted => "E201_SCRIPT_EXHAUSTED",
            Self::InputClosed => "E202_INPUT_CLOSED",
            Self::Cancelled => "E203_CANCELLED",
            Self::TopicsExhausted { .. } => "E204_TOPICS_EXHAUSTED",
            Self::Io(_) => "E301_IO",
            Self::Json(_) => "E302_JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, DebateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            DebateError::Status { status: 500, body: String::new() },
            DebateError::MalformedResponse(String::new()),
            DebateError::MissingContent,
            DebateError::ScriptExhausted,
            DebateError::InputClosed,
            DebateError::Cancelled,
            DebateError::TopicsExhausted { attempts: 3 },
            DebateError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_status_display() {
        let err = DebateError::Status { status: 429, body: "rate limited".into() };
        assert_eq!(err.to_string(), "chat endpoint returned HTTP 429: rate limited");
    }
}
