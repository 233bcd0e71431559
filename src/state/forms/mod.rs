//! Form state module

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{DynamicForm, Form};
