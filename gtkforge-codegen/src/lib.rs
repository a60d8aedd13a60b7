//! # gtkforge Codegen
//!
//! Code generation for gtk-rs composite-template widget subclasses.
//!
//! This crate provides:
//! - Property field, constructor and builder generation
//! - Signal registry and emit/connect helper generation
//! - Template child and template callback generation
//! - Forwarding `*Impl` blocks for every ancestor class
//! - Assembly of all blocks into one source document

pub mod document;
pub mod error;
pub mod generator;
pub mod rust;

pub use document::{DocumentTemplate, WIDGET_TEMPLATE};
pub use error::GenerationError;
pub use generator::{Generator, GeneratorBuilder};

use gtkforge_schema::GenerationRequest;

/// Generates the source document for a widget subclass.
///
/// Uses the built-in gtk4/libadwaita parent table for hierarchy lookups.
/// Build a [`Generator`] for a custom lookup or template.
///
/// # Arguments
/// * `request` - Class name, parent class and raw declarations
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `GenerationError` if the class name or any declaration is
/// malformed.
pub fn generate_code(request: &GenerationRequest) -> Result<String, GenerationError> {
    Generator::new().generate(request)
}
