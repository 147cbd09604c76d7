use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{ClientSettings, HttpRecommendClient, RecommendClient};
use crate::{DispatchId, EngineEvent, RecommendRequest};

enum EngineCommand {
    Dispatch {
        dispatch_id: DispatchId,
        request: RecommendRequest,
    },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(HttpRecommendClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                // Spawned, not awaited: a later dispatch may overlap an
                // unresolved earlier one.
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn dispatch(&self, dispatch_id: DispatchId, request: RecommendRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Dispatch {
            dispatch_id,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn RecommendClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Dispatch {
            dispatch_id,
            request,
        } => {
            let result = client.recommend(&request).await;
            if let Err(err) = &result {
                log::warn!("dispatch {dispatch_id} failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::DispatchCompleted {
                dispatch_id,
                result,
            });
        }
    }
}
