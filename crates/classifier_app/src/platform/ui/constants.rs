pub const TITLE: &str = "Clasificador de mercancías (IA)";
pub const CHOOSE_LIST_PROMPT: &str = "Selecciona tu producto:";
pub const CHOOSE_LIST_PLACEHOLDER: &str = "-- Elegir producto --";
pub const SELECTED_LIST_PREFIX: &str = "Producto seleccionado: ";
pub const DESCRIPTION_TITLE: &str = "Descripción";
pub const DESCRIPTION_PLACEHOLDER: &str = "Describe tu mercancía...";
pub const SUBMIT_LABEL: &str = "Clasificar con IA";
pub const SUBMITTING_LABEL: &str = "Clasificando...";
pub const RESULT_TITLE: &str = "Respuesta de la IA:";

pub const HINTS_CHOOSE_LIST: &str = "↑/↓ o 1-3: elegir · Enter: confirmar · Esc/q: salir";
pub const HINTS_DESCRIBE: &str = "Enter: clasificar · Esc: cambiar producto · Ctrl+C: salir";

/// Widest the form grows, in columns.
pub const MAX_FORM_WIDTH: u16 = 72;
