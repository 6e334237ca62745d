use crate::{Algorithm, QueryOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub target_item: String,
    pub algorithm: Option<Algorithm>,
    pub start_index: String,
    pub end_index: String,
    pub generate_graph: bool,
    pub submitting: bool,
    pub outcome: OutcomeView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutcomeView {
    #[default]
    Idle,
    Results {
        algorithm_used: String,
        target: Option<String>,
        /// `results` rendered as indented JSON.
        pretty: String,
    },
    Error(String),
}

impl From<&QueryOutcome> for OutcomeView {
    fn from(outcome: &QueryOutcome) -> Self {
        match outcome {
            QueryOutcome::Idle => OutcomeView::Idle,
            QueryOutcome::Success(payload) => OutcomeView::Results {
                algorithm_used: payload.algorithm_used.clone(),
                target: payload.target.clone(),
                pretty: serde_json::to_string_pretty(&payload.results)
                    .unwrap_or_else(|_| payload.results.to_string()),
            },
            QueryOutcome::Failure(message) => OutcomeView::Error(message.clone()),
        }
    }
}
