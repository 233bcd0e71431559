//! Schema file loading

use super::model::FormSchema;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load and validate a schema from a JSON file
pub fn load_schema(path: impl AsRef<Path>) -> Result<FormSchema> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let schema: FormSchema = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse schema file {}", path.display()))?;
    schema.validate()?;

    // Unknown tags still render (as plain text inputs), but are worth flagging
    for field in &schema.fields {
        if !field.kind.is_known() {
            tracing::warn!(
                name = %field.name,
                kind = %field.kind.as_str(),
                "unknown field type, rendering as text input"
            );
        }
    }

    Ok(schema)
}
