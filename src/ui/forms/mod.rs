//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `dynamic_form`: Whole-form rendering driven by schema order

mod dynamic_form;
mod field_renderer;

pub use dynamic_form::draw_dynamic_form;
