//! End-to-end generation tests.

use gtkforge::prelude::*;

fn window_request() -> GenerationRequest {
    GenerationRequest::new("MainWindow", "adw::ApplicationWindow")
        .properties([
            "title-text:string # Window title",
            "subtitle:string?",
            "item-count:u32",
            "ratio:f64",
            "model:gio::ListModel",
        ])
        .signals(["refresh", "item-selected(index:u32, name:string)", "close-request -> bool"])
        .template_file("resources/ui/main_window.ui")
        .template_children(["header:adw::HeaderBar", "list:gtk::ListView"])
        .template_callbacks([
            "on-refresh-clicked(button:gtk::Button)",
            "fn on_custom(&self) { println!(\"custom\"); }",
        ])
        .additional_imports(["use crate::model::Item;"])
}

#[test]
fn test_full_document() {
    let code = generate_code(&window_request()).expect("Failed to generate");

    // struct body
    assert!(code.contains("    pub struct MainWindow {"));
    assert!(code.contains("        /// Window title\n        #[property(get, set)]\n        title_text: RefCell<String>,"));
    assert!(code.contains("        #[property(get, set, nullable)]\n        subtitle: RefCell<Option<String>>,"));
    assert!(code.contains("        item_count: RefCell<u32>,"));
    assert!(code.contains("        ratio: RefCell<f64>,"));
    assert!(code.contains("        model: RefCell<Option<gio::ListModel>>,"));
    assert!(code.contains("        #[template_child]\n        pub header: TemplateChild<adw::HeaderBar>,"));

    // signals
    assert!(code.contains("Signal::builder(\"item-selected\")\n                    .param_types([u32::static_type(), String::static_type()])"));
    assert!(code.contains("Signal::builder(\"close-request\")\n                    .return_type::<bool>()"));
    assert!(code.contains("pub fn emit_refresh(&self) {"));
    assert!(code.contains("pub fn emit_close_request(&self) -> bool {"));
    assert!(code.contains("pub fn connect_item_selected<F: Fn(&Self, u32, String) + 'static>"));

    // hierarchy
    assert!(code.contains("type ParentType = adw::ApplicationWindow;"));
    assert!(code.contains(
        "@extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,"
    ));
    assert!(code.contains("impl AdwApplicationWindowImpl for MainWindow {"));
    assert!(code.contains("impl ApplicationWindowImpl for MainWindow {"));
    assert!(code.contains("impl WindowImpl for MainWindow {"));
    assert_eq!(code.matches("impl WidgetImpl for MainWindow").count(), 1);

    // callbacks
    assert!(code.contains("fn on_refresh_clicked(&self, button: gtk::Button) {\n            todo!()\n        }"));
    assert!(code.contains("        #[template_callback]\n        fn on_custom(&self) { println!(\"custom\"); }"));

    // constructors
    assert!(code.contains(
        "pub fn new_with_params(title_text: String, subtitle: Option<String>, item_count: u32, ratio: f64, model: gio::ListModel) -> Self {"
    ));
    assert!(code.contains(
        "            .property(\"title-text\", title_text)\n\
         \x20           .property(\"subtitle\", subtitle)\n\
         \x20           .property(\"item-count\", item_count)\n\
         \x20           .property(\"ratio\", ratio)\n\
         \x20           .property(\"model\", model)\n\
         \x20           .build()"
    ));

    assert!(code.contains("use std::sync::OnceLock;\nuse crate::model::Item;\n"));
    assert!(code.contains("#[template(file = \"resources/ui/main_window.ui\")]"));
}

#[test]
fn test_no_unfilled_slots() {
    let code = generate_code(&window_request()).expect("Failed to generate");
    assert!(!code.contains("{{"));
    assert!(!code.contains("}}"));
    assert_eq!(code.matches('{').count(), code.matches('}').count());
}

#[test]
fn test_unknown_parent_keeps_designator() {
    let request = GenerationRequest::new("Card", "widgets::Card");
    let code = generate_code(&request).expect("Failed to generate");
    assert!(code.contains("@extends widgets::Card,"));
    assert!(code.contains("type ParentType = widgets::Card;"));
}

#[test]
fn test_manifest_extends_hierarchy() {
    let mut table = ParentTable::builtin();
    table.extend(
        ParentTable::from_json(r#"{"Widgets.Card": "Adw.Bin"}"#).expect("Failed to parse manifest"),
    );
    let generator = Generator::builder().lookup(table).build();

    let code = generator
        .generate(&GenerationRequest::new("FancyCard", "Widgets.Card"))
        .expect("Failed to generate");
    assert!(code.contains("@extends Widgets::Card, adw::Bin, gtk::Widget,"));
    assert!(code.contains("impl CardImpl for FancyCard {"));
    assert!(code.contains("impl BinImpl for FancyCard {"));
}

#[test]
fn test_grammar_failures_are_wrapped() {
    let cases = [
        GenerationRequest::new("Bad_Name", "gtk::Box"),
        GenerationRequest::new("Good", "gtk::Box").properties(["badprop"]),
        GenerationRequest::new("Good", "gtk::Box").signals(["1-click"]),
        GenerationRequest::new("Good", "gtk::Box").signals(["moved(x:i32, x:i32)"]),
        GenerationRequest::new("Good", "gtk::Box").template_children(["9lives:gtk::Label"]),
        GenerationRequest::new("Good", "gtk::Box").signals(["moved(a-b:i32, a_b:i32)"]),
        GenerationRequest::new("Good", "gtk::Box").properties(["icon-name:string", "icon_name:string"]),
        GenerationRequest::new("Good", "gtk::Box").properties(["count:i32", "count:i32"]),
    ];

    for request in cases {
        let err = generate_code(&request).unwrap_err();
        assert!(err.to_string().starts_with("generation failed: "), "{err}");
        assert!(err.grammar().is_some());
    }
}

#[test]
fn test_callback_fallback_never_fails() {
    let request = GenerationRequest::new("Good", "gtk::Box").template_callbacks(["not a (valid: signal"]);
    let code = generate_code(&request).expect("Failed to generate");
    assert!(code.contains("        #[template_callback]\n        not a (valid: signal"));
}

#[test]
fn test_write_generated_document() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let code = generate_code(&window_request()).expect("Failed to generate");

    let path = write_output(&dir.path().join("src"), "MainWindow", &code).expect("Failed to write");

    assert!(path.ends_with("src/mainwindow.rs"));
    assert_eq!(std::fs::read_to_string(path).expect("Failed to read"), code);
}
