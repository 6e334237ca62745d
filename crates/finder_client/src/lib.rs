//! Similarity finder client: request dispatch, response reconciliation and the background engine.
mod controller;
mod engine;
mod service;
mod types;
mod wire;

pub use controller::QueryController;
pub use engine::EngineHandle;
pub use service::{ClientSettings, ReqwestSimilarityService, SimilarityService, FIND_SIMILAR_PATH};
pub use types::{EngineEvent, FailureKind, QueryError, SetupError};
pub use wire::{ErrorBody, SimilarityRequestBody, SimilarityResponseBody};
