//! Declaration parser.
//!
//! Turns the compact declaration strings accepted on the command line into
//! [`crate::decl`] records:
//!
//! - property: `name:type[?] [# doc]`
//! - signal: `name[(param:type, ...)] [-> return_type]`
//! - template child: `name:type` (split on the first `:` only)
//! - template callback: signal grammar, or any literal code fragment

use crate::decl::{CallbackDecl, PropertyDecl, SignalDecl, SignalParam, TemplateChildDecl};
use crate::error::{DeclKind, GrammarError, Rule};
use crate::types::TargetType;
use crate::validation::{is_valid_identifier, method_safe_name};
use std::collections::HashSet;

/// Parses a property declaration.
///
/// # Arguments
/// * `raw` - Declaration such as `count:i32`, `label:string?` or
///   `title:string # Window title`
///
/// # Errors
/// Returns `GrammarError::Declaration` if the `:` separator is missing, the
/// name is not a valid identifier or the type is empty.
pub fn parse_property(raw: &str) -> Result<PropertyDecl, GrammarError> {
    let fail = |rule| GrammarError::declaration(DeclKind::Property, raw, rule);

    let (body, doc) = match raw.split_once('#') {
        Some((body, doc)) => (body, Some(doc.trim()).filter(|d| !d.is_empty())),
        None => (raw, None),
    };

    let (name, type_str) = body.split_once(':').ok_or_else(|| fail(Rule::MissingSeparator))?;
    let name = name.trim();
    if !is_valid_identifier(name) {
        return Err(fail(Rule::InvalidName { name: name.to_string() }));
    }

    let type_str = type_str.trim();
    let (type_str, nullable) = match type_str.strip_suffix('?') {
        Some(inner) => (inner.trim_end(), true),
        None => (type_str, false),
    };
    if type_str.is_empty() {
        return Err(fail(Rule::EmptyType { name: name.to_string() }));
    }

    let mut prop = PropertyDecl::new(name, TargetType::resolve(type_str), nullable);
    prop.doc = doc.map(str::to_string);

    tracing::debug!(
        name = %prop.name,
        ty = %prop.rust_type(),
        nullable = prop.nullable,
        "parsed property"
    );
    Ok(prop)
}

/// Parses a signal declaration.
///
/// # Arguments
/// * `raw` - Declaration such as `clicked`, `value-changed(value:f64)` or
///   `activate(x:i32, y:i32) -> bool`
///
/// # Errors
/// Returns `GrammarError::Declaration` if a parameter is malformed, a
/// parameter name repeats, or the method-safe signal name is not a valid
/// identifier.
pub fn parse_signal(raw: &str) -> Result<SignalDecl, GrammarError> {
    parse_signal_as(raw, DeclKind::Signal)
}

/// Parses a template child declaration.
///
/// Only the first `:` separates the name, so the type expression may contain
/// paths such as `gtk::Button`.
///
/// # Errors
/// Returns `GrammarError::Declaration` if the separator is missing, the name
/// is invalid or the type is empty.
pub fn parse_template_child(raw: &str) -> Result<TemplateChildDecl, GrammarError> {
    let fail = |rule| GrammarError::declaration(DeclKind::TemplateChild, raw, rule);

    let (name, type_expr) = raw.split_once(':').ok_or_else(|| fail(Rule::MissingSeparator))?;
    let name = name.trim();
    if !is_valid_identifier(name) {
        return Err(fail(Rule::InvalidName { name: name.to_string() }));
    }
    let type_expr = type_expr.trim();
    if type_expr.is_empty() {
        return Err(fail(Rule::EmptyType { name: name.to_string() }));
    }

    Ok(TemplateChildDecl {
        name: name.to_string(),
        type_expr: type_expr.to_string(),
    })
}

/// Parses a template callback.
///
/// Strings matching the signal grammar become [`CallbackDecl::Parsed`];
/// anything else is kept as a [`CallbackDecl::Literal`] code fragment. This
/// never fails.
#[must_use]
pub fn parse_template_callback(raw: &str) -> CallbackDecl {
    match parse_signal_as(raw, DeclKind::TemplateCallback) {
        Ok(signal) => CallbackDecl::Parsed(signal),
        Err(e) => {
            tracing::debug!(callback = raw, reason = %e, "keeping template callback as literal code");
            CallbackDecl::Literal(raw.to_string())
        }
    }
}

/// Parses the signal grammar, reporting errors as `kind`.
fn parse_signal_as(raw: &str, kind: DeclKind) -> Result<SignalDecl, GrammarError> {
    let fail = |rule| GrammarError::declaration(kind, raw, rule);

    let (body, return_type) = match raw.split_once("->") {
        Some((body, ret)) => {
            let ret = ret.trim();
            (body, (!ret.is_empty()).then(|| TargetType::resolve(ret)))
        }
        None => (raw, None),
    };

    let (name, params) = match body.split_once('(') {
        Some((name, params_str)) => {
            let params_str = params_str.trim().trim_end_matches(')');
            (name.trim(), parse_params(params_str).map_err(fail)?)
        }
        None => (body.trim(), Vec::new()),
    };

    if !is_valid_identifier(&method_safe_name(name)) {
        return Err(fail(Rule::InvalidMethodName { name: name.to_string() }));
    }

    let signal = SignalDecl {
        name: name.to_string(),
        params,
        return_type,
    };
    tracing::debug!(
        name = %signal.name,
        params = signal.params.len(),
        returns = signal.rust_return_type(),
        "parsed {kind}"
    );
    Ok(signal)
}

/// Parses a comma-separated `name:type` parameter list.
fn parse_params(params_str: &str) -> Result<Vec<SignalParam>, Rule> {
    let mut params = Vec::new();
    let mut seen = HashSet::new();

    for param in params_str.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (name, ty) = param.split_once(':').ok_or_else(|| Rule::InvalidParameter {
            param: param.to_string(),
        })?;
        let name = name.trim();
        let ty = ty.trim();
        if !is_valid_identifier(name) {
            return Err(Rule::InvalidParameterName {
                name: name.to_string(),
            });
        }
        if ty.is_empty() {
            return Err(Rule::InvalidParameter {
                param: param.to_string(),
            });
        }
        if !seen.insert(method_safe_name(name)) {
            return Err(Rule::DuplicateParameter {
                name: name.to_string(),
            });
        }
        params.push(SignalParam::new(name, ty));
    }

    Ok(params)
}
