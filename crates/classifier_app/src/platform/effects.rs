use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use classifier_core::{ClassificationResult, Effect, Msg};
use classifier_engine::{
    ClassifyError, ClassifyOutput, ClassifyRequest, ClassifySettings, EngineError, EngineEvent,
    EngineHandle, RequestId,
};
use engine_logging::{engine_debug, engine_info, engine_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    /// Starts the engine. Invalid classifier settings fall back to the defaults.
    pub fn new(settings: ClassifySettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let engine = match EngineHandle::new(settings) {
            Ok(engine) => engine,
            Err(EngineError::Classifier(err)) => {
                engine_warn!("Invalid classifier settings ({}); using defaults", err);
                EngineHandle::new(ClassifySettings::default())?
            }
            Err(err) => return Err(err),
        };
        Ok(Self::with_engine(engine, msg_tx))
    }

    pub fn with_engine(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Classify {
                    request_id,
                    request,
                } => {
                    engine_info!(
                        "Classify request_id={} description_len={} list={:?}",
                        request_id,
                        request.description.len(),
                        request.list
                    );
                    self.engine.classify(
                        request_id,
                        ClassifyRequest {
                            description: request.description,
                            list: request.list,
                        },
                    );
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::Completed { request_id, result } => {
                        let msg = Msg::ClassificationDone {
                            request_id,
                            result: map_result(request_id, result),
                        };
                        if msg_tx.send(msg).is_err() {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_result(
    request_id: RequestId,
    result: Result<ClassifyOutput, ClassifyError>,
) -> ClassificationResult {
    match result {
        Ok(output) => ClassificationResult::Category(output.category),
        Err(err) => {
            engine_debug!(
                "Request {} mapped to failure ({}): {}",
                request_id,
                err.kind,
                err.message
            );
            ClassificationResult::Failed
        }
    }
}
