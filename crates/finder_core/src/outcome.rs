use serde_json::Value;

/// Shown when a remote failure carries no usable detail.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Parsed success body of a similarity query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPayload {
    pub algorithm_used: String,
    pub target: Option<String>,
    pub results: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryOutcome {
    #[default]
    Idle,
    Success(ResultPayload),
    Failure(String),
}

impl QueryOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryOutcome::Idle)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            QueryOutcome::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn payload(&self) -> Option<&ResultPayload> {
        match self {
            QueryOutcome::Success(payload) => Some(payload),
            _ => None,
        }
    }
}
