use std::sync::Arc;

use finder_core::{build_request, QueryDraft, QueryOutcome, QueryRequest};
use finder_logging::{finder_info, finder_warn};

use crate::{ClientSettings, QueryError, ReqwestSimilarityService, SetupError, SimilarityService};

/// Validates drafts, dispatches them and reconciles the response into an outcome.
///
/// Holds no per-query state; every call produces a fresh outcome.
#[derive(Clone)]
pub struct QueryController {
    service: Arc<dyn SimilarityService>,
}

impl QueryController {
    pub fn new(service: Arc<dyn SimilarityService>) -> Self {
        Self { service }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, SetupError> {
        let service = ReqwestSimilarityService::new(settings)?;
        Ok(Self::new(Arc::new(service)))
    }

    /// Full submission: validation gate, then dispatch. Never fails; errors become `Failure`.
    pub async fn submit(&self, draft: &QueryDraft) -> QueryOutcome {
        match build_request(draft) {
            Ok(request) => self.dispatch(&request).await,
            Err(err) => QueryError::from(err).into(),
        }
    }

    /// Sends an already validated request.
    pub async fn dispatch(&self, request: &QueryRequest) -> QueryOutcome {
        match self.service.find_similar_items(request).await {
            Ok(payload) => {
                finder_info!(
                    "Query for algorithm={} settled: algorithm_used={}",
                    request.algorithm.value(),
                    payload.algorithm_used
                );
                QueryOutcome::Success(payload)
            }
            Err(err) => {
                finder_warn!("Query for algorithm={} failed: {}", request.algorithm.value(), err);
                err.into()
            }
        }
    }
}
