use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use engine_logging::{engine_error, engine_warn};
use thiserror::Error;

use crate::{
    ClassifyError, ClassifyRequest, ClassifySettings, Classifier, EngineEvent, ReqwestClassifier,
    RequestId,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build classifier: {0}")]
    Classifier(#[from] ClassifyError),
}

enum EngineCommand {
    Classify {
        request_id: RequestId,
        request: ClassifyRequest,
    },
}

/// Runs classification requests on a background tokio runtime.
///
/// Requests are never cancelled; each one produces exactly one
/// [`EngineEvent::Completed`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ClassifySettings) -> Result<Self, EngineError> {
        let classifier = ReqwestClassifier::new(settings)?;
        Self::with_classifier(Arc::new(classifier))
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let classifier = classifier.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(classifier.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn classify(&self, request_id: RequestId, request: ClassifyRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Classify {
                request_id,
                request,
            })
            .is_err()
        {
            engine_error!("Engine worker gone; request {} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        let rx = self.event_rx.lock().ok()?;
        rx.try_recv().ok()
    }
}

async fn handle_command(
    classifier: &dyn Classifier,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Classify {
            request_id,
            request,
        } => {
            let result = classifier.classify(&request).await;
            if let Err(err) = &result {
                engine_warn!("Request {} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::Completed { request_id, result });
        }
    }
}
