//! Form schema module

mod loader;
mod model;

pub use loader::load_schema;
pub use model::{registration_schema, FieldDescriptor, FieldKind, FormSchema, SchemaError};
