//! Form state management

use super::field::FormField;
use crate::schema::FormSchema;
use std::collections::HashMap;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// A form whose fields come from a schema, in schema order
#[derive(Debug, Clone)]
pub struct DynamicForm {
    title: String,
    fields: Vec<FormField>,
    active_field_index: usize,
}

impl DynamicForm {
    /// Build an empty form from a schema. Assumes a validated schema
    /// (at least one field, unique names).
    pub fn from_schema(schema: &FormSchema) -> Self {
        Self {
            title: schema.form_title.clone(),
            fields: schema.fields.iter().cloned().map(FormField::new).collect(),
            active_field_index: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Snapshot of current values keyed by field name
    #[allow(dead_code)]
    pub fn values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name().to_string(), f.value().to_string()))
            .collect()
    }
}

impl Form for DynamicForm {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.active_field_index]
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
