//! Parsed member declarations.
//!
//! These records are the intermediate representation consumed by the code
//! generator. They are built by [`crate::parser`] and are only ever produced
//! in a validated state.

use crate::types::TargetType;
use crate::validation::method_safe_name;

/// A data property of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    /// Property name as registered with the type system (hyphens allowed).
    pub name: String,
    /// Resolved property type.
    pub target_type: TargetType,
    /// Whether the property was declared with a trailing `?`.
    pub nullable: bool,
    /// Default value expression.
    pub default_value: String,
    /// Documentation text from a trailing `# doc` comment.
    pub doc: Option<String>,
}

impl PropertyDecl {
    /// Creates a property, deriving its default value expression.
    #[must_use]
    pub fn new(name: impl Into<String>, target_type: TargetType, nullable: bool) -> Self {
        let default_value = if nullable {
            "None".to_string()
        } else {
            target_type.default_value()
        };
        Self {
            name: name.into(),
            target_type,
            nullable,
            default_value,
            doc: None,
        }
    }

    /// Sets the documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Returns the struct field and constructor parameter name.
    #[must_use]
    pub fn field_name(&self) -> String {
        method_safe_name(&self.name)
    }

    /// Returns the property value type (`Option<T>` when nullable).
    #[must_use]
    pub fn rust_type(&self) -> String {
        let inner = self.target_type.rust_type();
        if self.nullable {
            format!("Option<{inner}>")
        } else {
            inner.to_string()
        }
    }

    /// Returns the type stored inside the field's `RefCell`.
    ///
    /// Nullable and object-like properties get exactly one `Option` layer.
    #[must_use]
    pub fn storage_type(&self) -> String {
        let inner = self.target_type.rust_type();
        if self.nullable || self.target_type.is_object_like() {
            format!("Option<{inner}>")
        } else {
            inner.to_string()
        }
    }
}

/// A typed signal parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalParam {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TargetType,
}

impl SignalParam {
    /// Creates a parameter, resolving its type through the vocabulary.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: &str) -> Self {
        Self {
            name: name.into(),
            ty: TargetType::resolve(ty),
        }
    }

    /// Returns the parameter name used in generated Rust code.
    #[must_use]
    pub fn binding_name(&self) -> String {
        method_safe_name(&self.name)
    }
}

/// A signal of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalDecl {
    /// Wire name (hyphens allowed).
    pub name: String,
    /// Parameters in declaration order.
    pub params: Vec<SignalParam>,
    /// Return type, `None` for void signals.
    pub return_type: Option<TargetType>,
}

impl SignalDecl {
    /// Returns the name used for generated methods.
    #[must_use]
    pub fn method_name(&self) -> String {
        method_safe_name(&self.name)
    }

    /// Returns true if the signal declares a return type.
    #[must_use]
    pub const fn returns_value(&self) -> bool {
        self.return_type.is_some()
    }

    /// Returns the Rust return type, `()` for void signals.
    #[must_use]
    pub fn rust_return_type(&self) -> &str {
        self.return_type.as_ref().map_or("()", TargetType::rust_type)
    }
}

/// A widget bound from the composite template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateChildDecl {
    /// Child id in the template.
    pub name: String,
    /// Child type expression, kept verbatim.
    pub type_expr: String,
}

impl TemplateChildDecl {
    /// Returns the struct field name.
    #[must_use]
    pub fn field_name(&self) -> String {
        method_safe_name(&self.name)
    }
}

/// A template callback.
///
/// Callbacks written in the signal grammar become method stubs; anything else
/// is passed through as ready-made code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackDecl {
    /// Declarative callback shape.
    Parsed(SignalDecl),
    /// Literal code fragment.
    Literal(String),
}

impl CallbackDecl {
    /// Returns true for literal fallbacks.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}
