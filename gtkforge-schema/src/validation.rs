//! Identifier and class-name grammar.
//!
//! - Class names: `UpperAlpha (Alnum)*`
//! - Identifiers: `Alpha (Alnum | '_' | '-')*`
//!
//! Signal and property names may carry hyphens on the wire; the names used
//! for generated Rust items replace them with underscores.

use crate::error::GrammarError;

/// Returns true if `s` is a valid class name.
#[must_use]
pub fn is_valid_class_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Returns true if `s` is a valid member identifier.
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

/// Converts a wire name into the name used for generated Rust items.
#[must_use]
pub fn method_safe_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Validates a class name.
///
/// # Errors
/// Returns `GrammarError::InvalidClassName` carrying the offending name.
pub fn validate_class_name(name: &str) -> Result<(), GrammarError> {
    if is_valid_class_name(name) {
        Ok(())
    } else {
        Err(GrammarError::class_name(name))
    }
}
