use std::sync::Arc;
use std::time::{Duration, Instant};

use classifier_engine::{
    ClassifyError, ClassifyOutput, ClassifyRequest, Classifier, EngineEvent, EngineHandle,
    FailureKind,
};
use pretty_assertions::assert_eq;

/// Answers with the description echoed back as the category, or fails for "boom".
struct EchoClassifier;

#[async_trait::async_trait]
impl Classifier for EchoClassifier {
    async fn classify(&self, request: &ClassifyRequest) -> Result<ClassifyOutput, ClassifyError> {
        if request.description == "boom" {
            return Err(ClassifyError {
                kind: FailureKind::Network,
                message: "connection refused".to_string(),
            });
        }
        Ok(ClassifyOutput {
            category: Some(request.description.to_uppercase()),
            status: 200,
            byte_len: 0,
        })
    }
}

fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for engine event");
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn request(description: &str) -> ClassifyRequest {
    ClassifyRequest {
        description: description.to_string(),
        list: Some("Mercancías Chubb Carga".to_string()),
    }
}

#[test]
fn engine_reports_success_with_request_id() {
    engine_logging::initialize_for_tests();
    let engine = EngineHandle::with_classifier(Arc::new(EchoClassifier)).expect("engine");

    engine.classify(7, request("sillas"));

    assert_eq!(
        wait_for_event(&engine),
        EngineEvent::Completed {
            request_id: 7,
            result: Ok(ClassifyOutput {
                category: Some("SILLAS".to_string()),
                status: 200,
                byte_len: 0,
            }),
        }
    );
    assert_eq!(engine.try_recv(), None);
}

#[test]
fn engine_reports_failure() {
    engine_logging::initialize_for_tests();
    let engine = EngineHandle::with_classifier(Arc::new(EchoClassifier)).expect("engine");

    engine.classify(3, request("boom"));

    match wait_for_event(&engine) {
        EngineEvent::Completed { request_id, result } => {
            assert_eq!(request_id, 3);
            assert_eq!(result.unwrap_err().kind, FailureKind::Network);
        }
    }
}

#[test]
fn cloned_handles_share_event_stream() {
    engine_logging::initialize_for_tests();
    let engine = EngineHandle::with_classifier(Arc::new(EchoClassifier)).expect("engine");
    let reader = engine.clone();

    engine.classify(1, request("mesas"));

    let EngineEvent::Completed { request_id, .. } = wait_for_event(&reader);
    assert_eq!(request_id, 1);
}
