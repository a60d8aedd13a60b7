//! Output document template.
//!
//! The generated file is a fixed skeleton with named `{{slot}}` insertion
//! points, rendered with handlebars. Slot values are inserted verbatim.

use crate::error::GenerationError;
use handlebars::{Handlebars, no_escape};
use std::collections::BTreeMap;

/// Name the template source is registered under.
const DOCUMENT: &str = "document";

/// Default skeleton for a gtk-rs composite-template widget subclass.
pub const WIDGET_TEMPLATE: &str = r#"{{banner}}
// This file is licensed under the same terms as the project it belongs to

use gtk::{glib, prelude::*, subclass::prelude::*};
use adw::subclass::prelude::*;
use glib::subclass::Signal;
use glib::Properties;
use std::cell::RefCell;
use std::sync::OnceLock;
{{additional_imports}}

mod imp {
    use super::*;

    #[derive(Properties, Default, gtk::CompositeTemplate)]
    #[properties(wrapper_type = super::{{class_name}})]
    #[template(file = "{{template_file}}")]
    pub struct {{class_name}} {
{{properties}}
{{template_children}}
    }

    #[glib::derived_properties]
    impl ObjectImpl for {{class_name}} {
        fn constructed(&self) {
            self.parent_constructed();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<Vec<Signal>> = OnceLock::new();
            SIGNALS.get_or_init(|| vec![
{{signals}}
            ])
        }
    }

    #[glib::object_subclass]
    impl ObjectSubclass for {{class_name}} {
        const NAME: &'static str = "{{class_name}}";
        type Type = super::{{class_name}};
        type ParentType = {{parent_class}};

        fn class_init(klass: &mut Self::Class) {
            klass.bind_template();
            klass.bind_template_callbacks();
        }

        fn instance_init(obj: &glib::subclass::InitializingObject<Self>) {
            obj.init_template();
        }
    }

    impl WidgetImpl for {{class_name}} {
        fn size_allocate(&self, width: i32, height: i32, baseline: i32) {
            self.parent_size_allocate(width, height, baseline);
        }

        fn snapshot(&self, snapshot: &gtk::Snapshot) {
            self.parent_snapshot(snapshot);
        }
    }

{{parent_impls}}

    #[gtk::template_callbacks]
    impl {{class_name}} {
{{template_callbacks}}
    }
}

glib::wrapper! {
    pub struct {{class_name}}(ObjectSubclass<imp::{{class_name}}>)
        @extends {{parent_hierarchy}},
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl {{class_name}} {
    pub fn new() -> Self {
        glib::Object::new()
    }

    pub fn new_with_params({{constructor_params}}) -> Self {
        glib::Object::builder()
{{property_builders}}            .build()
    }

{{additional_methods}}
}
"#;

/// Named blocks substituted into a [`DocumentTemplate`].
pub type Slots = BTreeMap<&'static str, String>;

/// A document skeleton with named insertion points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    source: String,
}

impl DocumentTemplate {
    /// Creates a template from its source text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the template source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitutes every `{{slot}}` with its rendered block.
    ///
    /// Rendering is strict: a slot missing from `slots` is an error rather
    /// than an empty string.
    ///
    /// # Errors
    /// Returns `GenerationError::Template` if the source is not a valid
    /// template, or `GenerationError::Render` if a slot is missing.
    pub fn render(&self, slots: &Slots) -> Result<String, GenerationError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);
        registry
            .register_template_string(DOCUMENT, &self.source)
            .map_err(Box::new)?;
        Ok(registry.render(DOCUMENT, slots)?)
    }
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self::new(WIDGET_TEMPLATE)
    }
}
