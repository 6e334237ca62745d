use std::fmt;
use std::io;

use finder_core::{QueryOutcome, SubmissionId, ValidationError, FALLBACK_ERROR_MESSAGE};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    QueryCompleted {
        submission_id: SubmissionId,
        outcome: QueryOutcome,
    },
}

/// Everything that can go wrong with a single query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("service responded {status}: {detail}")]
    Service { status: u16, detail: String },
    #[error("{kind}: {message}")]
    Transport { kind: FailureKind, message: String },
}

impl QueryError {
    pub(crate) fn transport(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }

    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            QueryError::Validation(err) => err.to_string(),
            QueryError::Service { detail, .. } => detail.clone(),
            QueryError::Transport { .. } => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<QueryError> for QueryOutcome {
    fn from(err: QueryError) -> Self {
        QueryOutcome::Failure(err.user_message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedRequest,
    MalformedResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedRequest => write!(f, "malformed request"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failures while wiring up the client; these stop the app before any query.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    HttpClient(String),
    #[error("failed to start engine: {0}")]
    Runtime(#[from] io::Error),
}
