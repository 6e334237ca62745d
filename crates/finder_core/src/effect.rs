use crate::{QueryRequest, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendQuery {
        submission_id: SubmissionId,
        request: QueryRequest,
    },
}
