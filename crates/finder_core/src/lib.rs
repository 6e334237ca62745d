//! Similarity finder core: pure form state machine, request validation and view-model helpers.
mod algorithm;
mod draft;
mod effect;
mod msg;
mod outcome;
mod state;
mod update;
mod view_model;

pub use algorithm::{Algorithm, AlgorithmOption, ALGORITHM_OPTIONS};
pub use draft::{build_request, IndexField, QueryDraft, QueryRequest, ValidationError};
pub use effect::Effect;
pub use msg::Msg;
pub use outcome::{QueryOutcome, ResultPayload, FALLBACK_ERROR_MESSAGE};
pub use state::{AppState, SubmissionId};
pub use update::update;
pub use view_model::{AppViewModel, OutcomeView};
