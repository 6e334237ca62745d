use finder_core::{QueryRequest, ResultPayload};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body of `POST /find_similar_items/`. `generate_graph` travels in the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarityRequestBody<'a> {
    pub target_item: &'a str,
    pub algorithm: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,
}

impl<'a> From<&'a QueryRequest> for SimilarityRequestBody<'a> {
    fn from(request: &'a QueryRequest) -> Self {
        Self {
            target_item: &request.target_item,
            algorithm: request.algorithm.value(),
            start_index: request.start_index,
            end_index: request.end_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimilarityResponseBody {
    pub algorithm_used: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub results: Value,
}

impl From<SimilarityResponseBody> for ResultPayload {
    fn from(body: SimilarityResponseBody) -> Self {
        Self {
            algorithm_used: body.algorithm_used,
            target: body.target,
            results: body.results,
        }
    }
}

/// Error body of a non-2xx response. `detail` is free-form on the service side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// The detail text when it is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}
