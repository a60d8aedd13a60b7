//! # gtkforge
//!
//! Generates gtk-rs composite-template widget subclasses from compact
//! property, signal and template declarations.
//!
//! ## Quick Start
//!
//! ```
//! use gtkforge::prelude::*;
//!
//! let request = GenerationRequest::new("Counter", "gtk::Box")
//!     .properties(["count:i32 # Current value"])
//!     .signals(["value-changed(value:i32)"])
//!     .template_file("counter.ui");
//!
//! let code = generate_code(&request)?;
//! assert!(code.contains("impl BoxImpl for Counter"));
//! # Ok::<(), GenerationError>(())
//! ```
//!
//! ## Declaration grammar
//!
//! - Property: `name:type[?] [# doc]`, e.g. `label:string? # Shown text`
//! - Signal: `name[(param:type, ...)] [-> type]`, e.g. `moved(x:i32, y:i32) -> bool`
//! - Template child: `name:Type`, e.g. `button:gtk::Button`
//! - Template callback: a signal declaration, or a literal method
//!
//! ## Crate Organization
//!
//! - [`schema`] - Declaration grammar, type vocabulary and class hierarchy
//! - [`codegen`] - Code block generation and document assembly
//! - [`output`] - Output file naming and writing

pub mod output;
pub mod prelude;

/// Declaration grammar, type vocabulary and class hierarchy.
pub mod schema {
    pub use gtkforge_schema::*;
}

/// Code block generation and document assembly.
pub mod codegen {
    pub use gtkforge_codegen::*;
}

// Re-export commonly used items at the crate root
pub use gtkforge_codegen::{GenerationError, Generator, GeneratorBuilder, generate_code};
pub use gtkforge_schema::{GenerationRequest, GrammarError, ParentTable};
pub use output::{output_path, write_output};
