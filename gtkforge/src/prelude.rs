//! Prelude module for convenient imports.
//!
//! ```ignore
//! use gtkforge::prelude::*;
//! ```

// Requests and errors
pub use gtkforge_codegen::{GenerationError, generate_code};
pub use gtkforge_schema::{GenerationRequest, GrammarError, HierarchyError};

// Generator configuration
pub use gtkforge_codegen::{DocumentTemplate, Generator, GeneratorBuilder};
pub use gtkforge_schema::{AncestorLookup, ClassKey, ParentTable};

// Output
pub use crate::output::{output_path, write_output};
