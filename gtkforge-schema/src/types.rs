//! Type vocabulary.
//!
//! Maps the short type names accepted in declarations onto gtk-rs types.
//! Lookup is case-insensitive; names outside the vocabulary are kept verbatim
//! as custom types.

/// Built-in declaration types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    /// `string` / `str`.
    String,
    /// `i32`.
    Int32,
    /// `u32`.
    Uint32,
    /// `i64`.
    Int64,
    /// `u64`.
    Uint64,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
    /// `bool` / `boolean`.
    Bool,
    /// `object`.
    Object,
}

impl BuiltinType {
    /// Looks up a declaration type name, ignoring ASCII case.
    #[must_use]
    pub fn from_decl_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "string" | "str" => Some(Self::String),
            "i32" => Some(Self::Int32),
            "u32" => Some(Self::Uint32),
            "i64" => Some(Self::Int64),
            "u64" => Some(Self::Uint64),
            "f32" => Some(Self::Float),
            "f64" => Some(Self::Double),
            "bool" | "boolean" => Some(Self::Bool),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    /// Returns the Rust type.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int32 => "i32",
            Self::Uint32 => "u32",
            Self::Int64 => "i64",
            Self::Uint64 => "u64",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Bool => "bool",
            Self::Object => "glib::Object",
        }
    }

    /// Returns the zero-equivalent value expression.
    #[must_use]
    pub const fn zero_value(self) -> &'static str {
        match self {
            Self::String => "String::new()",
            Self::Int32 | Self::Uint32 | Self::Int64 | Self::Uint64 => "0",
            Self::Float | Self::Double => "0.0",
            Self::Bool => "false",
            Self::Object => "glib::Object::new::<glib::Object>()",
        }
    }
}

/// A resolved declaration type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// Type from the built-in vocabulary.
    Builtin(BuiltinType),
    /// Opaque custom type, kept as written.
    Custom(String),
}

impl TargetType {
    /// Resolves a declaration type name.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        BuiltinType::from_decl_name(name).map_or_else(|| Self::Custom(name.to_string()), Self::Builtin)
    }

    /// Returns the Rust type.
    #[must_use]
    pub fn rust_type(&self) -> &str {
        match self {
            Self::Builtin(b) => b.rust_type(),
            Self::Custom(name) => name,
        }
    }

    /// Returns true for object references and custom types.
    ///
    /// Object-like properties are stored as `Option<T>` in the generated struct.
    #[must_use]
    pub const fn is_object_like(&self) -> bool {
        matches!(self, Self::Builtin(BuiltinType::Object) | Self::Custom(_))
    }

    /// Returns the default value expression for a non-nullable value.
    #[must_use]
    pub fn default_value(&self) -> String {
        match self {
            Self::Builtin(b) => b.zero_value().to_string(),
            Self::Custom(name) => format!("{name}::default()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_is_case_insensitive() {
        assert_eq!(BuiltinType::from_decl_name("String"), Some(BuiltinType::String));
        assert_eq!(BuiltinType::from_decl_name("STR"), Some(BuiltinType::String));
        assert_eq!(BuiltinType::from_decl_name("Boolean"), Some(BuiltinType::Bool));
        assert_eq!(BuiltinType::from_decl_name("OBJECT"), Some(BuiltinType::Object));
        assert_eq!(BuiltinType::from_decl_name("i8"), None);
    }

    #[test]
    fn test_builtin_rust_types() {
        assert_eq!(BuiltinType::String.rust_type(), "String");
        assert_eq!(BuiltinType::Uint64.rust_type(), "u64");
        assert_eq!(BuiltinType::Double.rust_type(), "f64");
        assert_eq!(BuiltinType::Object.rust_type(), "glib::Object");
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(BuiltinType::Int32.zero_value(), "0");
        assert_eq!(BuiltinType::Float.zero_value(), "0.0");
        assert_eq!(BuiltinType::Bool.zero_value(), "false");
        assert_eq!(BuiltinType::String.zero_value(), "String::new()");
    }

    #[test]
    fn test_resolve_custom_type() {
        let ty = TargetType::resolve("gtk::Adjustment");
        assert_eq!(ty, TargetType::Custom("gtk::Adjustment".to_string()));
        assert_eq!(ty.rust_type(), "gtk::Adjustment");
        assert!(ty.is_object_like());
        assert_eq!(ty.default_value(), "gtk::Adjustment::default()");
    }

    #[test]
    fn test_object_like() {
        assert!(TargetType::resolve("object").is_object_like());
        assert!(!TargetType::resolve("i32").is_object_like());
        assert!(!TargetType::resolve("string").is_object_like());
    }
}
