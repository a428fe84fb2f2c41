//! Classifier engine: remote classification client and background execution.
mod classify;
mod engine;
mod types;
mod wire;

pub use classify::{ClassifySettings, Classifier, ReqwestClassifier, DEFAULT_ENDPOINT};
pub use engine::{EngineError, EngineHandle};
pub use types::{
    ClassifyError, ClassifyOutput, ClassifyRequest, EngineEvent, FailureKind, RequestId,
};
pub use wire::{category_from_body, ClassifyBody};
