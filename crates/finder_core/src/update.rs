use finder_logging::{finder_debug, finder_info};

use crate::{build_request, AppState, Effect, Msg, QueryOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TargetItemChanged(text) => {
            state.set_target_item(text);
            Vec::new()
        }
        Msg::AlgorithmSelected(algorithm) => {
            state.set_algorithm(algorithm);
            Vec::new()
        }
        Msg::StartIndexChanged(text) => {
            state.set_start_index(text);
            Vec::new()
        }
        Msg::EndIndexChanged(text) => {
            state.set_end_index(text);
            Vec::new()
        }
        Msg::GenerateGraphToggled(enabled) => {
            state.set_generate_graph(enabled);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if let Some(pending) = state.in_flight() {
                finder_debug!("Submit ignored: submission {} still in flight", pending);
                return (state, Vec::new());
            }
            match build_request(state.draft()) {
                Ok(request) => {
                    let submission_id = state.begin_submission();
                    finder_info!(
                        "Submitting #{} algorithm={} start={:?} end={:?} graph={}",
                        submission_id,
                        request.algorithm.value(),
                        request.start_index,
                        request.end_index,
                        request.generate_graph
                    );
                    vec![Effect::SendQuery {
                        submission_id,
                        request,
                    }]
                }
                Err(err) => {
                    finder_debug!("Submission rejected locally: {}", err);
                    state.set_outcome(QueryOutcome::Failure(err.to_string()));
                    Vec::new()
                }
            }
        }
        Msg::QueryCompleted {
            submission_id,
            outcome,
        } => {
            if !state.complete_submission(submission_id, outcome) {
                finder_debug!("Discarding stale completion #{}", submission_id);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
