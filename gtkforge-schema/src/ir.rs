//! Intermediate representation for code generation.
//!
//! A [`GenerationRequest`] holds the raw strings for one class; [`ClassIr`]
//! is the validated form the generator renders from.

use crate::decl::{CallbackDecl, PropertyDecl, SignalDecl, TemplateChildDecl};
use crate::error::{DeclKind, GrammarError, Rule};
use crate::parser::{parse_property, parse_signal, parse_template_callback, parse_template_child};
use crate::validation::validate_class_name;
use std::collections::HashSet;

/// Raw input for generating one class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Class name in PascalCase.
    pub class_name: String,
    /// Parent class designator, e.g. `gtk::Box`.
    pub parent_class: String,
    /// Property declarations.
    pub properties: Vec<String>,
    /// Signal declarations.
    pub signals: Vec<String>,
    /// Template child declarations.
    pub template_children: Vec<String>,
    /// Template callback declarations.
    pub template_callbacks: Vec<String>,
    /// Path of the `.ui` template file.
    pub template_file: Option<String>,
    /// Extra `use` lines copied into the output.
    pub additional_imports: Vec<String>,
}

impl GenerationRequest {
    /// Creates a request with no member declarations.
    #[must_use]
    pub fn new(class_name: impl Into<String>, parent_class: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            parent_class: parent_class.into(),
            ..Self::default()
        }
    }

    /// Sets the property declarations.
    #[must_use]
    pub fn properties<I, S>(mut self, decls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = decls.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the signal declarations.
    #[must_use]
    pub fn signals<I, S>(mut self, decls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signals = decls.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the template child declarations.
    #[must_use]
    pub fn template_children<I, S>(mut self, decls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template_children = decls.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the template callback declarations.
    #[must_use]
    pub fn template_callbacks<I, S>(mut self, decls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template_callbacks = decls.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the template file path.
    #[must_use]
    pub fn template_file(mut self, path: impl Into<String>) -> Self {
        self.template_file = Some(path.into());
        self
    }

    /// Sets the additional import lines.
    #[must_use]
    pub fn additional_imports<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_imports = lines.into_iter().map(Into::into).collect();
        self
    }
}

/// Validated class description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassIr {
    /// Class name.
    pub class_name: String,
    /// Parent class designator as supplied.
    pub parent_class: String,
    /// Parsed properties in declaration order.
    pub properties: Vec<PropertyDecl>,
    /// Parsed signals in declaration order.
    pub signals: Vec<SignalDecl>,
    /// Parsed template children.
    pub template_children: Vec<TemplateChildDecl>,
    /// Template callbacks.
    pub template_callbacks: Vec<CallbackDecl>,
    /// Template file path, unescaped.
    pub template_file: Option<String>,
    /// Additional import lines.
    pub additional_imports: Vec<String>,
}

impl ClassIr {
    /// Validates and parses a request.
    ///
    /// The class name is checked first; the first malformed declaration
    /// aborts parsing. Names are compared in their generated form, so
    /// `icon-name` and `icon_name` collide. Properties and template children
    /// share the struct's field namespace.
    ///
    /// # Errors
    /// Returns `GrammarError` for an invalid class name or declaration.
    pub fn from_request(request: &GenerationRequest) -> Result<Self, GrammarError> {
        validate_class_name(&request.class_name)?;

        let properties = request
            .properties
            .iter()
            .map(|p| parse_property(p))
            .collect::<Result<Vec<_>, _>>()?;
        let mut fields = HashSet::new();
        for (raw, prop) in request.properties.iter().zip(&properties) {
            let name = prop.field_name();
            if !fields.insert(name.clone()) {
                return Err(GrammarError::declaration(
                    DeclKind::Property,
                    raw,
                    Rule::DuplicateProperty { name },
                ));
            }
        }

        let signals = request
            .signals
            .iter()
            .map(|s| parse_signal(s))
            .collect::<Result<Vec<_>, _>>()?;
        let mut methods = HashSet::new();
        for (raw, signal) in request.signals.iter().zip(&signals) {
            let name = signal.method_name();
            if !methods.insert(name.clone()) {
                return Err(GrammarError::declaration(
                    DeclKind::Signal,
                    raw,
                    Rule::DuplicateSignal { name },
                ));
            }
        }

        let template_children = request
            .template_children
            .iter()
            .map(|c| parse_template_child(c))
            .collect::<Result<Vec<_>, _>>()?;
        for (raw, child) in request.template_children.iter().zip(&template_children) {
            let name = child.field_name();
            if !fields.insert(name.clone()) {
                return Err(GrammarError::declaration(
                    DeclKind::TemplateChild,
                    raw,
                    Rule::DuplicateField { name },
                ));
            }
        }

        let template_callbacks = request
            .template_callbacks
            .iter()
            .map(|c| parse_template_callback(c))
            .collect();

        Ok(Self {
            class_name: request.class_name.clone(),
            parent_class: request.parent_class.clone(),
            properties,
            signals,
            template_children,
            template_callbacks,
            template_file: request.template_file.clone(),
            additional_imports: request.additional_imports.clone(),
        })
    }
}
