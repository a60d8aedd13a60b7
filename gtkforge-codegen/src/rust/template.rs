//! Composite template code generation.

use gtkforge_schema::{CallbackDecl, SignalDecl, TemplateChildDecl};

/// Generator for `#[template_child]` fields and `#[template_callback]` methods.
pub struct TemplateGenerator<'a> {
    children: &'a [TemplateChildDecl],
    callbacks: &'a [CallbackDecl],
}

impl<'a> TemplateGenerator<'a> {
    /// Creates a new template generator.
    #[must_use]
    pub fn new(children: &'a [TemplateChildDecl], callbacks: &'a [CallbackDecl]) -> Self {
        Self {
            children,
            callbacks,
        }
    }

    /// Generates the template child fields.
    #[must_use]
    pub fn generate_children(&self) -> String {
        if self.children.is_empty() {
            return "        // No template children defined".to_string();
        }

        self.children
            .iter()
            .map(|child| {
                format!(
                    "        #[template_child]\n        pub {}: TemplateChild<{}>,",
                    child.field_name(),
                    child.type_expr
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generates the template callback methods.
    #[must_use]
    pub fn generate_callbacks(&self) -> String {
        if self.callbacks.is_empty() {
            return "        // No template callbacks defined".to_string();
        }

        self.callbacks
            .iter()
            .map(|callback| match callback {
                CallbackDecl::Parsed(signal) => generate_stub(signal),
                CallbackDecl::Literal(code) => format!("        #[template_callback]\n        {code}"),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Generates a callback method stub with a `todo!()` body.
fn generate_stub(signal: &SignalDecl) -> String {
    let params: String = signal
        .params
        .iter()
        .map(|p| format!(", {}: {}", p.binding_name(), p.ty.rust_type()))
        .collect();
    let ret = signal
        .return_type
        .as_ref()
        .map(|ty| format!(" -> {}", ty.rust_type()))
        .unwrap_or_default();

    let mut output = String::from("        #[template_callback]\n");
    output.push_str(&format!(
        "        fn {}(&self{params}){ret} {{\n",
        signal.method_name()
    ));
    output.push_str("            todo!()\n");
    output.push_str("        }");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtkforge_schema::{parse_template_callback, parse_template_child};

    #[test]
    fn test_empty_placeholders() {
        let generator = TemplateGenerator::new(&[], &[]);
        assert_eq!(generator.generate_children(), "        // No template children defined");
        assert_eq!(generator.generate_callbacks(), "        // No template callbacks defined");
    }

    #[test]
    fn test_children() {
        let children = vec![
            parse_template_child("button:gtk::Button").expect("Failed to parse"),
            parse_template_child("list-view:gtk::ListView").expect("Failed to parse"),
        ];
        let out = TemplateGenerator::new(&children, &[]).generate_children();
        assert_eq!(
            out,
            "        #[template_child]\n        pub button: TemplateChild<gtk::Button>,\n\
             \x20       #[template_child]\n        pub list_view: TemplateChild<gtk::ListView>,"
        );
    }

    #[test]
    fn test_parsed_callback_stub() {
        let callbacks = vec![parse_template_callback("on-toggled(button:gtk::ToggleButton) -> bool")];
        let out = TemplateGenerator::new(&[], &callbacks).generate_callbacks();
        assert_eq!(
            out,
            "        #[template_callback]\n\
             \x20       fn on_toggled(&self, button: gtk::ToggleButton) -> bool {\n\
             \x20           todo!()\n\
             \x20       }"
        );
    }

    #[test]
    fn test_parameterless_callback_stub() {
        let callbacks = vec![parse_template_callback("on_activate")];
        let out = TemplateGenerator::new(&[], &callbacks).generate_callbacks();
        assert!(out.contains("fn on_activate(&self) {\n"));
    }

    #[test]
    fn test_literal_callback_passthrough() {
        let raw = "fn on_close(&self) { self.obj().close(); }";
        let callbacks = vec![parse_template_callback(raw), parse_template_callback("on_open")];
        let out = TemplateGenerator::new(&[], &callbacks).generate_callbacks();
        assert!(out.starts_with(&format!("        #[template_callback]\n        {raw}\n\n")));
        assert!(out.contains("fn on_open(&self)"));
        assert!(!out.contains("fn on_close(&self) {\n"));
    }
}
