//! Core application state

use crate::schema::FormSchema;
use crate::state::DynamicForm;

/// Top-level state for the form page
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live editing state built from the schema
    pub form: DynamicForm,
    /// Whether the key-hint bar is rendered
    pub show_help_bar: bool,
}

impl AppState {
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            form: DynamicForm::from_schema(schema),
            show_help_bar: true,
        }
    }
}
