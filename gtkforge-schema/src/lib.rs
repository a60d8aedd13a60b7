//! # gtkforge Schema
//!
//! Declaration grammar and intermediate representation for gtkforge.
//!
//! This crate provides:
//! - Class-name and identifier validation
//! - Parsing of property, signal, template child and template callback
//!   declarations
//! - The type vocabulary mapping declaration types to gtk-rs types
//! - Class hierarchy lookup and ancestor chain resolution

pub mod decl;
pub mod error;
pub mod hierarchy;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use decl::{CallbackDecl, PropertyDecl, SignalDecl, SignalParam, TemplateChildDecl};
pub use error::{DeclKind, GrammarError, HierarchyError, Rule};
pub use hierarchy::{
    AncestorChain, AncestorLookup, ClassKey, HierarchyResolver, ParentTable, target_path,
};
pub use ir::{ClassIr, GenerationRequest};
pub use parser::{parse_property, parse_signal, parse_template_callback, parse_template_child};
pub use types::{BuiltinType, TargetType};
pub use validation::{is_valid_class_name, is_valid_identifier, method_safe_name};
