use std::sync::mpsc;
use std::thread;

use finder_core::{QueryRequest, SubmissionId};

use crate::{ClientSettings, EngineEvent, QueryController, SetupError};

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        request: QueryRequest,
    },
}

/// Runs queries on a background tokio runtime so the UI loop never blocks.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: &ClientSettings) -> Result<Self, SetupError> {
        Self::with_controller(QueryController::from_settings(settings)?)
    }

    pub fn with_controller(controller: QueryController) -> Result<Self, SetupError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("finder-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let controller = controller.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(&controller, command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, submission_id: SubmissionId, request: QueryRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            submission_id,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    controller: &QueryController,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            submission_id,
            request,
        } => {
            let outcome = controller.dispatch(&request).await;
            let _ = event_tx.send(EngineEvent::QueryCompleted {
                submission_id,
                outcome,
            });
        }
    }
}
