use crate::{Algorithm, QueryOutcome, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the target item box.
    TargetItemChanged(String),
    /// User picked an algorithm (or cleared the picker).
    AlgorithmSelected(Option<Algorithm>),
    /// User edited the optional start index box (raw text).
    StartIndexChanged(String),
    /// User edited the optional end index box (raw text).
    EndIndexChanged(String),
    /// User flipped the graph-generation toggle.
    GenerateGraphToggled(bool),
    /// User pressed Search.
    SubmitClicked,
    /// Engine finished a dispatched query.
    QueryCompleted {
        submission_id: SubmissionId,
        outcome: QueryOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
