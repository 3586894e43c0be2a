//! Error types for inference calls

use thiserror::Error;

/// Maximum number of characters kept from a response body in diagnostics
pub const DIAGNOSTIC_LIMIT: usize = 200;

/// Coarse classification of a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidRequest,
    Transport,
    Timeout,
    Http,
    Parse,
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Client configuration error: {0}")]
    Config(String),

    #[error("Transport error calling {endpoint}: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: String },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Parse error: {reason}")]
    Parse { status: Option<u16>, reason: String },

    #[error("All candidate models failed (tried: {})", .attempted.join(", "))]
    AllCandidatesFailed { attempted: Vec<String> },
}

impl InferenceError {
    /// HTTP status received before the failure, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Parse { status, .. } => *status,
            _ => None,
        }
    }

    /// Short human-readable diagnostic, never longer than [`DIAGNOSTIC_LIMIT`]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Http { body, .. } => truncate_diagnostic(body),
            Self::Parse { reason, .. } => truncate_diagnostic(reason),
            Self::Transport { reason, .. } => truncate_diagnostic(reason),
            other => truncate_diagnostic(&other.to_string()),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidRequest(_) | Self::Config(_) | Self::AllCandidatesFailed { .. } => {
                FailureKind::InvalidRequest
            }
            Self::Transport { .. } => FailureKind::Transport,
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::Http { .. } => FailureKind::Http,
            Self::Parse { .. } => FailureKind::Parse,
        }
    }
}

/// Keep the first [`DIAGNOSTIC_LIMIT`] characters of `text`
pub fn truncate_diagnostic(text: &str) -> String {
    text.chars().take(DIAGNOSTIC_LIMIT).collect()
}

pub type Result<T> = std::result::Result<T, InferenceError>;
