use crate::ProductList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// No list chosen yet; only the picker is shown.
    #[default]
    ChooseList,
    Describe {
        list: ProductList,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub screen: Screen,
    pub lists: Vec<ProductList>,
    pub description: String,
    pub submitting: bool,
    /// False while submitting or while the description is too short.
    pub submit_enabled: bool,
    pub result_label: Option<String>,
    pub error_message: Option<String>,
    pub dirty: bool,
}
