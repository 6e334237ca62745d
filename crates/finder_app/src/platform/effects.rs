use finder_client::{ClientSettings, EngineEvent, EngineHandle, SetupError};
use finder_core::{Effect, Msg};
use finder_logging::finder_info;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: &ClientSettings) -> Result<Self, SetupError> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendQuery {
                    submission_id,
                    request,
                } => {
                    finder_info!(
                        "SendQuery #{} target_len={} algorithm={}",
                        submission_id,
                        request.target_item.len(),
                        request.algorithm.value()
                    );
                    self.engine.submit(submission_id, request);
                }
            }
        }
    }

    /// Engine events received since the last call, mapped to messages.
    pub fn drain_messages(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::QueryCompleted {
                    submission_id,
                    outcome,
                } => inbox.push(Msg::QueryCompleted {
                    submission_id,
                    outcome,
                }),
            }
        }
        inbox
    }
}
