use std::fmt;

use crate::view_model::{FormViewModel, Screen};
use crate::ClassificationRequest;

pub type RequestId = u64;

/// Minimum description length, in characters, before a submit is allowed.
pub const MIN_DESCRIPTION_CHARS: usize = 3;

/// Shown when the endpoint answers without a usable category.
pub const FALLBACK_LABEL: &str = "Sin coincidencias claras";

pub const VALIDATION_ERROR_MESSAGE: &str =
    "Debes seleccionar un producto y escribir una descripción válida.";

pub const TRANSPORT_ERROR_MESSAGE: &str = "Error al clasificar o conectar con el servidor.";

/// The fixed set of product lists the endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductList {
    ZuruMax,
    HdiGlobal,
    ChubbCarga,
}

impl ProductList {
    pub const ALL: [ProductList; 3] = [
        ProductList::ZuruMax,
        ProductList::HdiGlobal,
        ProductList::ChubbCarga,
    ];

    /// Display label, also sent verbatim as the `lista` field.
    pub fn label(self) -> &'static str {
        match self {
            ProductList::ZuruMax => "Mercancías Zuru Max",
            ProductList::HdiGlobal => "Mercancías HDI Global",
            ProductList::ChubbCarga => "Mercancías Chubb Carga",
        }
    }
}

impl fmt::Display for ProductList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingList,
    DescriptionTooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// Local guard rejected the submit; nothing was sent.
    Validation(ValidationError),
    /// The outbound request failed in any way.
    Transport,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            FormError::Validation(_) => VALIDATION_ERROR_MESSAGE,
            FormError::Transport => TRANSPORT_ERROR_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting {
        request_id: RequestId,
        /// Set when the form was reset after dispatch; the result is dropped.
        stale: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    selected_list: Option<ProductList>,
    description: String,
    phase: SubmitPhase,
    result_label: Option<String>,
    error: Option<FormError>,
    last_request_id: RequestId,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> FormViewModel {
        let screen = match self.selected_list {
            Some(list) => Screen::Describe { list },
            None => Screen::ChooseList,
        };
        FormViewModel {
            screen,
            lists: ProductList::ALL.to_vec(),
            description: self.description.clone(),
            submitting: self.is_submitting(),
            submit_enabled: !self.is_submitting() && self.description_long_enough(),
            result_label: self.result_label.clone(),
            error_message: self.error.map(|err| err.message().to_string()),
            dirty: self.dirty,
        }
    }

    pub fn selected_list(&self) -> Option<ProductList> {
        self.selected_list
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    pub fn result_label(&self) -> Option<&str> {
        self.result_label.as_deref()
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    /// Returns whether the state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn select_list(&mut self, list: ProductList) {
        self.selected_list = Some(list);
        self.result_label = None;
        self.error = None;
        self.dirty = true;
    }

    pub(crate) fn set_description(&mut self, text: String) {
        if self.description != text {
            self.description = text;
            self.dirty = true;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.selected_list = None;
        self.description.clear();
        self.result_label = None;
        self.error = None;
        if let SubmitPhase::Submitting { stale, .. } = &mut self.phase {
            *stale = true;
        }
        self.dirty = true;
    }

    pub(crate) fn validate(&self) -> Result<ProductList, ValidationError> {
        let list = self.selected_list.ok_or(ValidationError::MissingList)?;
        if !self.description_long_enough() {
            return Err(ValidationError::DescriptionTooShort);
        }
        Ok(list)
    }

    pub(crate) fn reject(&mut self, err: ValidationError) {
        self.error = Some(FormError::Validation(err));
        self.dirty = true;
    }

    /// Moves to `Submitting` and builds the outbound request.
    pub(crate) fn begin_submit(&mut self, list: ProductList) -> (RequestId, ClassificationRequest) {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.phase = SubmitPhase::Submitting {
            request_id,
            stale: false,
        };
        self.dirty = true;
        let request = ClassificationRequest {
            description: self.description.clone(),
            list: Some(list.label().to_string()),
        };
        (request_id, request)
    }

    /// Applies a completion. Completions for anything but the in-flight request are ignored.
    pub(crate) fn finish_submit(&mut self, request_id: RequestId, result: crate::ClassificationResult) {
        let stale = match self.phase {
            SubmitPhase::Submitting {
                request_id: current,
                stale,
            } if current == request_id => stale,
            _ => return,
        };
        self.phase = SubmitPhase::Idle;
        self.dirty = true;
        if stale {
            return;
        }

        match result {
            crate::ClassificationResult::Category(label) => {
                let label = label
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| FALLBACK_LABEL.to_string());
                self.result_label = Some(label);
                self.error = None;
            }
            crate::ClassificationResult::Failed => {
                self.result_label = None;
                self.error = Some(FormError::Transport);
            }
        }
    }

    fn description_long_enough(&self) -> bool {
        self.description.chars().count() >= MIN_DESCRIPTION_CHARS
    }
}
