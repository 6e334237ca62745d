use crate::view_model::{AppViewModel, OutcomeView};
use crate::{Algorithm, QueryDraft, QueryOutcome};

pub type SubmissionId = u64;

/// Owns the draft and the last outcome. Setters replace exactly one field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    draft: QueryDraft,
    outcome: QueryOutcome,
    in_flight: Option<SubmissionId>,
    last_submission_id: SubmissionId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &QueryDraft {
        &self.draft
    }

    pub fn outcome(&self) -> &QueryOutcome {
        &self.outcome
    }

    pub fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn set_target_item(&mut self, value: impl Into<String>) {
        self.draft.target_item = value.into();
        self.mark_dirty();
    }

    pub fn set_algorithm(&mut self, value: Option<Algorithm>) {
        self.draft.algorithm = value;
        self.mark_dirty();
    }

    pub fn set_start_index(&mut self, value: impl Into<String>) {
        self.draft.start_index = value.into();
        self.mark_dirty();
    }

    pub fn set_end_index(&mut self, value: impl Into<String>) {
        self.draft.end_index = value.into();
        self.mark_dirty();
    }

    pub fn set_generate_graph(&mut self, value: bool) {
        self.draft.generate_graph = value;
        self.mark_dirty();
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            target_item: self.draft.target_item.clone(),
            algorithm: self.draft.algorithm,
            start_index: self.draft.start_index.clone(),
            end_index: self.draft.end_index.clone(),
            generate_graph: self.draft.generate_graph,
            submitting: self.is_submitting(),
            outcome: OutcomeView::from(&self.outcome),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_outcome(&mut self, outcome: QueryOutcome) {
        self.outcome = outcome;
        self.mark_dirty();
    }

    /// Clears the previous outcome and records a new submission as in flight.
    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.last_submission_id += 1;
        self.in_flight = Some(self.last_submission_id);
        self.outcome = QueryOutcome::Idle;
        self.mark_dirty();
        self.last_submission_id
    }

    /// Settles the in-flight submission. Returns false for stale ids.
    pub(crate) fn complete_submission(
        &mut self,
        submission_id: SubmissionId,
        outcome: QueryOutcome,
    ) -> bool {
        if self.in_flight != Some(submission_id) {
            return false;
        }
        self.in_flight = None;
        self.set_outcome(outcome);
        true
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
