//! Document generation.
//!
//! [`Generator`] runs the full pipeline for one [`GenerationRequest`]: it
//! parses the declarations into a [`ClassIr`], resolves the ancestor chain,
//! renders every block and substitutes them into the document template.

use crate::document::{DocumentTemplate, Slots};
use crate::error::GenerationError;
use crate::rust::{ParentImplGenerator, PropertyGenerator, SignalGenerator, TemplateGenerator};
use gtkforge_schema::{
    AncestorLookup, ClassIr, GenerationRequest, HierarchyResolver, ParentTable, target_path,
};

/// Default first line of every generated document.
pub const DEFAULT_BANNER: &str = "// Generated by gtkforge";

/// Ancestor whose impl is written out in the document template.
pub const DEFAULT_HAND_WRITTEN: &str = "gtk::Widget";

/// Code generator for gtk-rs widget subclasses.
pub struct Generator {
    lookup: Box<dyn AncestorLookup>,
    hand_written: Vec<String>,
    banner: String,
    template: DocumentTemplate,
}

impl Generator {
    /// Creates a generator backed by the built-in parent table.
    #[must_use]
    pub fn new() -> Self {
        GeneratorBuilder::new().build()
    }

    /// Returns a builder for a customized generator.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Generates the document for a request.
    ///
    /// # Errors
    /// Returns `GenerationError` if the class name or any declaration is
    /// malformed, or if the document template cannot be filled.
    pub fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let ir = ClassIr::from_request(request)?;
        self.render(&ir)
    }

    /// Renders an already parsed class.
    ///
    /// # Errors
    /// Returns `GenerationError` if the document template cannot be filled.
    pub fn render(&self, ir: &ClassIr) -> Result<String, GenerationError> {
        let resolver = HierarchyResolver::new(self.lookup.as_ref());
        let chain = resolver.resolve(&ir.parent_class);

        let properties = PropertyGenerator::new(&ir.properties);
        let signals = SignalGenerator::new(&ir.signals);
        let template = TemplateGenerator::new(&ir.template_children, &ir.template_callbacks);
        let parents = ParentImplGenerator::new(&chain, &ir.class_name, &self.hand_written);

        let template_file = ir
            .template_file
            .as_deref()
            .map(escape_literal)
            .unwrap_or_default();
        tracing::debug!(class = %ir.class_name, template = %template_file, "rendering document");

        let mut slots = Slots::new();
        slots.insert("banner", self.banner.clone());
        slots.insert("additional_imports", ir.additional_imports.join("\n"));
        slots.insert("class_name", ir.class_name.clone());
        slots.insert("template_file", template_file);
        slots.insert("properties", properties.generate_fields());
        slots.insert("template_children", template.generate_children());
        slots.insert("signals", signals.generate_registry());
        slots.insert("parent_class", target_path(&ir.parent_class));
        slots.insert("parent_impls", parents.generate());
        slots.insert("template_callbacks", template.generate_callbacks());
        slots.insert("parent_hierarchy", chain.to_extends_list());
        slots.insert("constructor_params", properties.generate_constructor_params());
        slots.insert("property_builders", properties.generate_builder_calls());
        slots.insert("additional_methods", signals.generate_helpers());

        self.template.render(&slots)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes a value for use inside a Rust string literal.
fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Builder for configuring a [`Generator`].
pub struct GeneratorBuilder {
    lookup: Option<Box<dyn AncestorLookup>>,
    hand_written: Vec<String>,
    banner: String,
    template: DocumentTemplate,
}

impl GeneratorBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lookup: None,
            hand_written: vec![DEFAULT_HAND_WRITTEN.to_string()],
            banner: DEFAULT_BANNER.to_string(),
            template: DocumentTemplate::default(),
        }
    }

    /// Sets the hierarchy lookup.
    #[must_use]
    pub fn lookup(mut self, lookup: impl AncestorLookup + 'static) -> Self {
        self.lookup = Some(Box::new(lookup));
        self
    }

    /// Sets the ancestors whose impls are already part of the template.
    #[must_use]
    pub fn hand_written_impls<I, S>(mut self, ancestors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hand_written = ancestors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the banner line.
    #[must_use]
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Sets the document template.
    #[must_use]
    pub fn document_template(mut self, template: DocumentTemplate) -> Self {
        self.template = template;
        self
    }

    /// Builds the generator.
    #[must_use]
    pub fn build(self) -> Generator {
        Generator {
            lookup: self
                .lookup
                .unwrap_or_else(|| Box::new(ParentTable::builtin())),
            hand_written: self.hand_written,
            banner: self.banner,
            template: self.template,
        }
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtkforge_schema::{ClassKey, HierarchyError};

    fn counter_request() -> GenerationRequest {
        GenerationRequest::new("Counter", "gtk::Box")
            .properties(["count:i32 # Current value", "label:string?"])
            .signals(["value-changed(value:i32)"])
            .template_file("counter.ui")
    }

    #[test]
    fn test_generate_counter() {
        let doc = Generator::new()
            .generate(&counter_request())
            .expect("Failed to generate");

        assert!(doc.starts_with("// Generated by gtkforge\n"));
        assert!(doc.contains("pub struct Counter {"));
        assert!(doc.contains("#[template(file = \"counter.ui\")]"));
        assert!(doc.contains("        count: RefCell<i32>,"));
        assert!(doc.contains("        label: RefCell<Option<String>>,"));
        assert!(doc.contains("type ParentType = gtk::Box;"));
        assert!(doc.contains("@extends gtk::Box, gtk::Widget,"));
        assert!(doc.contains("impl BoxImpl for Counter {"));
        assert!(!doc.contains("impl WidgetImpl for Counter {\n        // Default"));
        assert!(doc.contains("pub fn new_with_params(count: i32, label: Option<String>) -> Self {"));
        assert!(doc.contains(
            "            .property(\"count\", count)\n            .property(\"label\", label)\n            .build()"
        ));
        assert!(doc.contains("pub fn emit_value_changed(&self, value: i32) {"));
        assert!(doc.contains("pub fn connect_value_changed<F: Fn(&Self, i32) + 'static>"));
    }

    #[test]
    fn test_empty_blocks_use_placeholders() {
        let doc = Generator::new()
            .generate(&GenerationRequest::new("Blank", "gtk::Widget"))
            .expect("Failed to generate");
        assert!(doc.contains("        // No properties defined"));
        assert!(doc.contains("        // No template children defined"));
        assert!(doc.contains("                // No signals defined"));
        assert!(doc.contains("        // No template callbacks defined"));
        assert!(doc.contains("#[template(file = \"\")]"));
        assert!(doc.contains("    pub fn new_with_params() -> Self {\n        glib::Object::builder()\n            .build()"));
        assert!(!doc.contains("// Default implementations that forward to parent"));
    }

    #[test]
    fn test_invalid_class_name_fails_fast() {
        let request = GenerationRequest::new("counter", "gtk::Box").properties(["badprop"]);
        let err = Generator::new().generate(&request).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("generation failed: "));
        assert!(msg.contains("counter"));
        assert!(!msg.contains("badprop"));
    }

    #[test]
    fn test_bad_declaration_names_raw_string() {
        let request = GenerationRequest::new("Counter", "gtk::Box").properties(["count:i32", "badprop"]);
        let err = Generator::new().generate(&request).unwrap_err();
        assert!(err.to_string().contains("'badprop'"));
        assert!(err.grammar().is_some());
    }

    #[test]
    fn test_unknown_parent_degrades() {
        let doc = Generator::new()
            .generate(&GenerationRequest::new("Fancy", "mylib::FancyBase"))
            .expect("Failed to generate");
        assert!(doc.contains("@extends mylib::FancyBase,"));
        assert!(doc.contains("impl FancyBaseImpl for Fancy {"));
    }

    #[test]
    fn test_custom_lookup_and_banner() {
        let lookup = |class: &ClassKey| {
            Ok::<_, HierarchyError>(vec![
                class.clone(),
                ClassKey::new("Gtk", "Widget"),
                ClassKey::new("Gtk", "Widget"),
            ])
        };
        let generator = Generator::builder()
            .lookup(lookup)
            .banner("// custom banner")
            .build();
        let doc = generator
            .generate(&GenerationRequest::new("Pane", "Adw.Bin"))
            .expect("Failed to generate");
        assert!(doc.starts_with("// custom banner\n"));
        assert!(doc.contains("@extends adw::Bin, gtk::Widget,"));
        assert!(doc.contains("type ParentType = adw::Bin;"));
    }

    #[test]
    fn test_dotted_parent_matches_extends() {
        let doc = Generator::new()
            .generate(&GenerationRequest::new("Pane", "Adw.Bin"))
            .expect("Failed to generate");
        assert!(doc.contains("type ParentType = adw::Bin;"));
        assert!(doc.contains("@extends adw::Bin, gtk::Widget,"));
        assert!(!doc.contains("Adw.Bin"));

        let doc = Generator::new()
            .generate(&GenerationRequest::new("Pane", "Adw.Unlisted"))
            .expect("Failed to generate");
        assert!(doc.contains("type ParentType = adw::Unlisted;"));
        assert!(doc.contains("@extends adw::Unlisted,"));
        assert!(doc.contains("impl UnlistedImpl for Pane {"));
    }

    #[test]
    fn test_hand_written_impls_override() {
        let generator = Generator::builder().hand_written_impls(Vec::<String>::new()).build();
        let doc = generator
            .generate(&GenerationRequest::new("Pane", "gtk::Box"))
            .expect("Failed to generate");
        assert!(doc.contains("impl WidgetImpl for Pane {\n        // Default implementations"));
    }

    #[test]
    fn test_template_path_escaped() {
        let request = GenerationRequest::new("Pane", "gtk::Box").template_file(r#"C:\ui\"pane".ui"#);
        let doc = Generator::new().generate(&request).expect("Failed to generate");
        assert!(doc.contains(r#"#[template(file = "C:\\ui\\\"pane\".ui")]"#));
    }

    #[test]
    fn test_additional_imports() {
        let request = GenerationRequest::new("Pane", "gtk::Box")
            .additional_imports(["use crate::model::Item;", "use std::rc::Rc;"]);
        let doc = Generator::new().generate(&request).expect("Failed to generate");
        assert!(doc.contains("use std::sync::OnceLock;\nuse crate::model::Item;\nuse std::rc::Rc;\n"));
    }

    #[test]
    fn test_custom_document_template() {
        let generator = Generator::builder()
            .document_template(DocumentTemplate::new("{{class_name}} : {{parent_hierarchy}}"))
            .build();
        let doc = generator
            .generate(&GenerationRequest::new("Pane", "gtk::Box"))
            .expect("Failed to generate");
        assert_eq!(doc, "Pane : gtk::Box, gtk::Widget");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = Generator::new();
        let first = generator.generate(&counter_request()).expect("Failed to generate");
        let second = generator.generate(&counter_request()).expect("Failed to generate");
        assert_eq!(first, second);
    }
}
