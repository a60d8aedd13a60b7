//! Error types for declaration parsing and hierarchy lookup.

use std::fmt;
use thiserror::Error;

/// Kind of declaration being parsed, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// Property declaration (`name:type[?] [# doc]`).
    Property,
    /// Signal declaration (`name[(param:type,...)] [-> type]`).
    Signal,
    /// Template child declaration (`name:type`).
    TemplateChild,
    /// Template callback declaration (signal grammar or literal code).
    TemplateCallback,
}

impl DeclKind {
    /// Returns the expected grammar for this declaration kind.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Property => "name:type[?] [# doc]",
            Self::Signal | Self::TemplateCallback => "name(param:type,...) -> return_type' or 'name",
            Self::TemplateChild => "name:type",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Property => "property",
            Self::Signal => "signal",
            Self::TemplateChild => "template child",
            Self::TemplateCallback => "template callback",
        };
        f.write_str(name)
    }
}

/// Grammar rule violated by a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rule {
    /// The `:` separating name from type is missing.
    #[error("missing ':' between name and type")]
    MissingSeparator,

    /// The member name does not match the identifier grammar.
    #[error("invalid name '{name}'")]
    InvalidName {
        /// Offending name.
        name: String,
    },

    /// The type part is empty.
    #[error("empty type for '{name}'")]
    EmptyType {
        /// Member name.
        name: String,
    },

    /// A signal parameter has no `:` separator.
    #[error("invalid parameter format '{param}'")]
    InvalidParameter {
        /// Offending parameter text.
        param: String,
    },

    /// A signal parameter name does not match the identifier grammar.
    #[error("invalid parameter name '{name}'")]
    InvalidParameterName {
        /// Offending parameter name.
        name: String,
    },

    /// A signal declares the same parameter name twice.
    #[error("duplicate parameter name '{name}'")]
    DuplicateParameter {
        /// Duplicated parameter name.
        name: String,
    },

    /// Two properties map to the same struct field.
    #[error("duplicate property name '{name}'")]
    DuplicateProperty {
        /// Field name shared by both declarations.
        name: String,
    },

    /// Two signals map to the same `emit_*`/`connect_*` helpers.
    #[error("duplicate signal name '{name}'")]
    DuplicateSignal {
        /// Method name shared by both declarations.
        name: String,
    },

    /// A template child field is already taken by a property or another child.
    #[error("duplicate field name '{name}'")]
    DuplicateField {
        /// Field name.
        name: String,
    },

    /// The method-safe form of a signal name is not a valid identifier.
    #[error("invalid signal name (after converting hyphens): '{name}'")]
    InvalidMethodName {
        /// Raw signal name.
        name: String,
    },
}

/// Error raised when input violates the class-name or declaration grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Class name is not `UpperAlpha (Alnum)*`.
    #[error("invalid class name '{name}': expected an uppercase letter followed by letters or digits")]
    InvalidClassName {
        /// Offending class name.
        name: String,
    },

    /// A member declaration could not be parsed.
    #[error("invalid {kind} format, expected '{expected}', got '{raw}': {rule}", expected = .kind.expected())]
    Declaration {
        /// Declaration kind.
        kind: DeclKind,
        /// Raw declaration string as supplied.
        raw: String,
        /// Violated rule.
        rule: Rule,
    },
}

impl GrammarError {
    /// Creates an invalid class name error.
    pub fn class_name(name: impl Into<String>) -> Self {
        Self::InvalidClassName { name: name.into() }
    }

    /// Creates a declaration error for the given raw string.
    pub fn declaration(kind: DeclKind, raw: impl Into<String>, rule: Rule) -> Self {
        Self::Declaration {
            kind,
            raw: raw.into(),
            rule,
        }
    }

    /// Returns the raw offending string.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::InvalidClassName { name } => name,
            Self::Declaration { raw, .. } => raw,
        }
    }

    /// Returns the violated declaration rule, if any.
    #[must_use]
    pub fn rule(&self) -> Option<&Rule> {
        match self {
            Self::InvalidClassName { .. } => None,
            Self::Declaration { rule, .. } => Some(rule),
        }
    }
}

/// Error type for class hierarchy lookups.
///
/// These never abort generation; the resolver logs them and falls back to
/// the supplied designator.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// Designator has no namespace part.
    #[error("class designator '{designator}' has no namespace")]
    MissingNamespace {
        /// Supplied designator.
        designator: String,
    },

    /// Class is not known to the lookup.
    #[error("class '{class}' not found")]
    NotFound {
        /// Lookup key that missed.
        class: String,
    },

    /// Parent links loop back on themselves.
    #[error("cycle in class hierarchy: {path}")]
    Cycle {
        /// Visited path, ` -> ` separated.
        path: String,
    },

    /// Lookup returned no ancestors.
    #[error("empty ancestor chain for '{class}'")]
    Empty {
        /// Lookup key.
        class: String,
    },

    /// Manifest JSON could not be decoded.
    #[error("invalid hierarchy manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Manifest entry key or value is not a `Namespace.Name` pair.
    #[error("invalid manifest entry '{entry}'")]
    InvalidEntry {
        /// Offending entry.
        entry: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_error_names_raw_string() {
        let err = GrammarError::declaration(DeclKind::Property, "badprop", Rule::MissingSeparator);
        let msg = err.to_string();
        assert!(msg.contains("'badprop'"));
        assert!(msg.contains("missing ':'"));
        assert!(msg.contains("name:type[?] [# doc]"));
        assert_eq!(err.raw(), "badprop");
        assert_eq!(err.rule(), Some(&Rule::MissingSeparator));
    }

    #[test]
    fn test_class_name_error() {
        let err = GrammarError::class_name("my_widget");
        assert_eq!(err.raw(), "my_widget");
        assert!(err.rule().is_none());
        assert!(err.to_string().contains("'my_widget'"));
    }

    #[test]
    fn test_decl_kind_display() {
        assert_eq!(DeclKind::Property.to_string(), "property");
        assert_eq!(DeclKind::TemplateChild.to_string(), "template child");
        assert_eq!(DeclKind::Signal.expected(), DeclKind::TemplateCallback.expected());
    }
}
