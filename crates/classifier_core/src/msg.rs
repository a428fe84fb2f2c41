use crate::{ProductList, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a product list.
    ListSelected(ProductList),
    /// User edited the description box (full new text).
    DescriptionChanged(String),
    /// User clicked "Cambiar producto".
    ResetClicked,
    /// User asked to classify the current description.
    SubmitClicked,
    /// Engine finished a classification request.
    ClassificationDone {
        request_id: RequestId,
        result: ClassificationResult,
    },
}

/// Outcome of one outbound request as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationResult {
    /// The endpoint answered; the category may be absent.
    Category(Option<String>),
    /// Transport, status, or parse failure. Not distinguished further.
    Failed,
}
