//! Property code generation.
//!
//! Renders the struct fields, the `new_with_params` parameter list and the
//! matching `glib::Object::builder()` calls. Parameters and builder calls are
//! emitted in declaration order so they stay index-aligned.

use gtkforge_schema::PropertyDecl;

/// Generator for property-derived blocks.
pub struct PropertyGenerator<'a> {
    properties: &'a [PropertyDecl],
}

impl<'a> PropertyGenerator<'a> {
    /// Creates a new property generator.
    #[must_use]
    pub fn new(properties: &'a [PropertyDecl]) -> Self {
        Self { properties }
    }

    /// Generates the `#[property]` struct fields.
    #[must_use]
    pub fn generate_fields(&self) -> String {
        if self.properties.is_empty() {
            return "        // No properties defined".to_string();
        }

        let mut lines = Vec::with_capacity(self.properties.len() * 3);
        for prop in self.properties {
            if let Some(doc) = &prop.doc {
                lines.push(format!("        /// {doc}"));
            }
            let attr = if prop.nullable {
                "#[property(get, set, nullable)]"
            } else {
                "#[property(get, set)]"
            };
            lines.push(format!("        {attr}"));
            lines.push(format!(
                "        {}: RefCell<{}>,",
                prop.field_name(),
                prop.storage_type()
            ));
        }
        lines.join("\n")
    }

    /// Generates the `new_with_params` parameter list.
    #[must_use]
    pub fn generate_constructor_params(&self) -> String {
        self.properties
            .iter()
            .map(|p| format!("{}: {}", p.field_name(), p.rust_type()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Generates the builder `.property(..)` calls, one line each.
    #[must_use]
    pub fn generate_builder_calls(&self) -> String {
        let mut output = String::new();
        for prop in self.properties {
            output.push_str(&format!(
                "            .property(\"{}\", {})\n",
                prop.name,
                prop.field_name()
            ));
        }
        output
    }
}
