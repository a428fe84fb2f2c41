use crate::RequestId;

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one classification request to the remote endpoint.
    Classify {
        request_id: RequestId,
        request: ClassificationRequest,
    },
}

/// Payload of a single submission, built fresh each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    pub description: String,
    /// Wire label of the selected product list.
    pub list: Option<String>,
}
