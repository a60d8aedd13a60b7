//! Per-ancestor forwarding impl generation.
//!
//! gtk-rs requires an `*Impl` trait impl for every class in the parent chain.
//! Ancestors already implemented by hand in the document skeleton (the widget
//! base by default) are skipped.

use gtkforge_schema::AncestorChain;
use std::collections::HashMap;

/// Generator for empty `*Impl` blocks.
pub struct ParentImplGenerator<'a> {
    chain: &'a AncestorChain,
    class_name: &'a str,
    hand_written: &'a [String],
}

impl<'a> ParentImplGenerator<'a> {
    /// Creates a new parent impl generator.
    #[must_use]
    pub fn new(chain: &'a AncestorChain, class_name: &'a str, hand_written: &'a [String]) -> Self {
        Self {
            chain,
            class_name,
            hand_written,
        }
    }

    /// Generates one empty impl block per ancestor.
    #[must_use]
    pub fn generate(&self) -> String {
        let ancestors: Vec<&str> = self
            .chain
            .iter()
            .filter(|a| !self.hand_written.iter().any(|h| h == a))
            .collect();
        let counts = self.chain_type_names();

        ancestors
            .iter()
            .map(|ancestor| {
                format!(
                    "    impl {} for {} {{\n        // Default implementations that forward to parent\n    }}",
                    impl_trait_name(ancestor, &counts),
                    self.class_name
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Counts how often each bare type name appears in the chain.
    fn chain_type_names(&self) -> HashMap<&'a str, usize> {
        let mut counts = HashMap::new();
        for ancestor in self.chain.iter() {
            *counts.entry(type_name(ancestor)).or_insert(0) += 1;
        }
        counts
    }
}

/// Returns the last path segment of a Rust path.
fn type_name(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Returns the subclass trait name for an ancestor.
///
/// When two crates in the chain export the same type name (`adw::Window` and
/// `gtk::Window`), the non-gtk trait is prefixed with its crate name, matching
/// the `AdwWindowImpl` naming used by the bindings.
fn impl_trait_name(ancestor: &str, counts: &HashMap<&str, usize>) -> String {
    let name = type_name(ancestor);
    let krate = ancestor.strip_suffix(name).and_then(|p| p.strip_suffix("::"));

    match krate {
        Some(krate) if krate != "gtk" && counts.get(name).copied().unwrap_or(0) > 1 => {
            let mut chars = krate.chars();
            let prefix: String = chars
                .next()
                .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
                .unwrap_or_default();
            format!("{prefix}{name}Impl")
        }
        _ => format!("{name}Impl"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_only() -> Vec<String> {
        vec!["gtk::Widget".to_string()]
    }

    #[test]
    fn test_skips_widget() {
        let chain = AncestorChain::from_paths(["gtk::Box", "gtk::Widget"]);
        let hand_written = widget_only();
        let out = ParentImplGenerator::new(&chain, "Counter", &hand_written).generate();
        assert_eq!(
            out,
            "    impl BoxImpl for Counter {\n        // Default implementations that forward to parent\n    }"
        );
    }

    #[test]
    fn test_one_block_per_ancestor() {
        let chain = AncestorChain::from_paths(["gtk::Scale", "gtk::Range", "gtk::Widget"]);
        let hand_written = widget_only();
        let out = ParentImplGenerator::new(&chain, "Dial", &hand_written).generate();
        assert!(out.contains("impl ScaleImpl for Dial {"));
        assert!(out.contains("impl RangeImpl for Dial {"));
        assert!(!out.contains("WidgetImpl"));
        assert_eq!(out.matches("impl ").count(), 2);
    }

    #[test]
    fn test_widget_only_chain_is_empty() {
        let chain = AncestorChain::single("gtk::Widget");
        let hand_written = widget_only();
        assert_eq!(ParentImplGenerator::new(&chain, "Blank", &hand_written).generate(), "");
    }

    #[test]
    fn test_colliding_names_prefixed() {
        let chain = AncestorChain::from_paths([
            "adw::ApplicationWindow",
            "gtk::ApplicationWindow",
            "gtk::Window",
            "gtk::Widget",
        ]);
        let hand_written = widget_only();
        let out = ParentImplGenerator::new(&chain, "MainWindow", &hand_written).generate();
        assert!(out.contains("impl AdwApplicationWindowImpl for MainWindow {"));
        assert!(out.contains("impl ApplicationWindowImpl for MainWindow {"));
        assert!(out.contains("impl WindowImpl for MainWindow {"));
    }

    #[test]
    fn test_unqualified_fallback_entry() {
        let chain = AncestorChain::single("MyBase");
        let out = ParentImplGenerator::new(&chain, "Thing", &[]).generate();
        assert!(out.contains("impl MyBaseImpl for Thing {"));
    }

    #[test]
    fn test_impl_trait_name() {
        let counts = HashMap::from([("Bin", 1)]);
        assert_eq!(impl_trait_name("adw::Bin", &counts), "BinImpl");
        assert_eq!(type_name("gtk::Box"), "Box");
        assert_eq!(type_name("Box"), "Box");
    }
}
