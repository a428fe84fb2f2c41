//! Classifier core: pure form state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{ClassificationRequest, Effect};
pub use msg::{ClassificationResult, Msg};
pub use state::{
    FormError, FormState, ProductList, RequestId, SubmitPhase, ValidationError, FALLBACK_LABEL,
    MIN_DESCRIPTION_CHARS, TRANSPORT_ERROR_MESSAGE, VALIDATION_ERROR_MESSAGE,
};
pub use update::update;
pub use view_model::{FormViewModel, Screen};
