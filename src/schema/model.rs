//! Form schema data model
//!
//! A FormSchema is immutable configuration data: a title plus an ordered
//! sequence of field descriptors. Field order determines render order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Structural errors detected by [`FormSchema::validate`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema has no fields")]
    NoFields,
    #[error("field at index {0} has an empty name")]
    EmptyName(usize),
    #[error("duplicate field name: {0}")]
    DuplicateName(String),
}

/// Input kind tag for a field
///
/// Open enumeration: tags this version does not know about are preserved
/// as `Other` so newer schema files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Other(String),
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "password" => FieldKind::Password,
            _ => FieldKind::Other(tag),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FieldKind {
    /// The wire tag for this kind
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Other(tag) => tag,
        }
    }

    /// Whether this version recognizes the tag
    pub fn is_known(&self) -> bool {
        !matches!(self, FieldKind::Other(_))
    }

    /// Whether typed characters are masked when displayed
    pub fn masks_input(&self) -> bool {
        matches!(self, FieldKind::Password)
    }
}

/// Describes a single input: kind, logical key, and display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub name: String,
    pub label: String,
    pub placeholder: String,
}

impl FieldDescriptor {
    pub fn new(kind: FieldKind, name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
        }
    }
}

/// A form's structure: title plus ordered field descriptors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub form_title: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    /// Check structural invariants: at least one field, non-empty names,
    /// names unique within the schema
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::NoFields);
        }

        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyName(index));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }
        }

        Ok(())
    }
}

/// The built-in "User Registration" schema rendered when no schema file
/// is configured
pub fn registration_schema() -> FormSchema {
    FormSchema {
        form_title: "User Registration".to_string(),
        fields: vec![
            FieldDescriptor::new(
                FieldKind::Text,
                "firstName",
                "First Name",
                "Enter your first name",
            ),
            FieldDescriptor::new(
                FieldKind::Email,
                "email",
                "Email Address",
                "Enter your email",
            ),
            FieldDescriptor::new(
                FieldKind::Password,
                "password",
                "Password",
                "Enter your password",
            ),
        ],
    }
}
