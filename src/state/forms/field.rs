//! Form field value objects

use crate::schema::FieldDescriptor;

/// Character shown in place of each typed character in masked fields
const MASK_CHAR: char = '•';

/// A single live form field: its descriptor plus the current typed value
#[derive(Debug, Clone)]
pub struct FormField {
    descriptor: FieldDescriptor,
    value: String,
}

impl FormField {
    /// Create an empty field from a schema descriptor
    pub fn new(descriptor: FieldDescriptor) -> Self {
        Self {
            descriptor,
            value: String::new(),
        }
    }

    /// Logical key within the form
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Display string shown on the input's border
    pub fn label(&self) -> &str {
        &self.descriptor.label
    }

    /// Display string shown inside an empty input
    pub fn placeholder(&self) -> &str {
        &self.descriptor.placeholder
    }

    /// The raw typed value
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering (masked for password fields)
    pub fn display_value(&self) -> String {
        if self.descriptor.kind.masks_input() {
            self.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.value.clone()
        }
    }
}
