//! Class hierarchy lookup.
//!
//! The generator needs the ancestor chain of the parent class to fill the
//! `@extends` list and the per-ancestor `*Impl` blocks. Where the chain comes
//! from is abstracted behind [`AncestorLookup`]; [`ParentTable`] is the
//! built-in implementation and [`HierarchyResolver`] turns lookups into
//! deduplicated chains in Rust path form.

pub mod resolver;
pub mod table;

pub use resolver::{AncestorChain, HierarchyResolver};
pub use table::ParentTable;

use crate::error::HierarchyError;
use std::fmt;

/// Canonical lookup key: a GObject-introspection namespace and class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassKey {
    /// Introspection namespace, e.g. `Gtk`.
    pub namespace: String,
    /// Class name, e.g. `Box`.
    pub name: String,
}

impl ClassKey {
    /// Creates a key.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parses the dotted `Namespace.Name` form.
    #[must_use]
    pub fn parse_dotted(s: &str) -> Option<Self> {
        let (namespace, name) = s.trim().split_once('.')?;
        let (namespace, name) = (namespace.trim(), name.trim());
        if namespace.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(namespace, name))
    }

    /// Normalizes a designator into a lookup key.
    ///
    /// Accepts Rust paths (`gtk::Box`, crate aliases mapped to their
    /// introspection namespace) and dotted names (`Gtk.Box`).
    ///
    /// # Errors
    /// Returns `HierarchyError::MissingNamespace` for bare names.
    pub fn from_designator(designator: &str) -> Result<Self, HierarchyError> {
        let missing = || HierarchyError::MissingNamespace {
            designator: designator.to_string(),
        };
        let trimmed = designator.trim();

        if let Some((krate, name)) = trimmed.split_once("::") {
            let (krate, name) = (krate.trim(), name.trim());
            if krate.is_empty() || name.is_empty() {
                return Err(missing());
            }
            let namespace = gi_namespace(krate).unwrap_or(krate);
            return Ok(Self::new(namespace, name));
        }

        Self::parse_dotted(trimmed).ok_or_else(missing)
    }

    /// Returns the Rust path form, e.g. `gtk::Box` for `Gtk.Box`.
    ///
    /// Unknown namespaces are used as written.
    #[must_use]
    pub fn rust_path(&self) -> String {
        let krate = rust_crate(&self.namespace).unwrap_or(&self.namespace);
        format!("{}::{}", krate, self.name)
    }

    /// Returns true for the classes the ancestor walk stops at.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.namespace == "GObject" && matches!(self.name.as_str(), "InitiallyUnowned" | "Object")
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Source of class ancestry.
///
/// `ancestors_of` returns the chain starting with `class` itself, nearest
/// first, up to but excluding the root (`GObject.InitiallyUnowned` /
/// `GObject.Object`). Implementations may fail; callers treat the result as
/// advisory.
pub trait AncestorLookup {
    /// Returns the ancestor chain of `class`.
    ///
    /// # Errors
    /// Returns `HierarchyError` when the class is unknown or the data is
    /// inconsistent.
    fn ancestors_of(&self, class: &ClassKey) -> Result<Vec<ClassKey>, HierarchyError>;
}

impl<F> AncestorLookup for F
where
    F: Fn(&ClassKey) -> Result<Vec<ClassKey>, HierarchyError>,
{
    fn ancestors_of(&self, class: &ClassKey) -> Result<Vec<ClassKey>, HierarchyError> {
        self(class)
    }
}

/// Returns the Rust path form of a designator.
///
/// `Adw.Bin` and `adw::Bin` both give `adw::Bin`. A designator without a
/// namespace is returned as written.
#[must_use]
pub fn target_path(designator: &str) -> String {
    ClassKey::from_designator(designator)
        .map_or_else(|_| designator.trim().to_string(), |key| key.rust_path())
}

/// Maps a Rust crate name to its introspection namespace.
#[must_use]
pub fn gi_namespace(krate: &str) -> Option<&'static str> {
    match krate.to_ascii_lowercase().as_str() {
        "gtk" | "gtk4" => Some("Gtk"),
        "glib" | "gobject" => Some("GObject"),
        "gio" => Some("Gio"),
        "gdk" | "gdk4" => Some("Gdk"),
        "gsk" | "gsk4" => Some("Gsk"),
        "pango" => Some("Pango"),
        "cairo" => Some("cairo"),
        "adw" | "libadwaita" => Some("Adw"),
        _ => None,
    }
}

/// Maps an introspection namespace to the Rust crate that binds it.
#[must_use]
pub fn rust_crate(namespace: &str) -> Option<&'static str> {
    match namespace {
        "Gtk" => Some("gtk"),
        "GObject" | "GLib" => Some("glib"),
        "Gio" => Some("gio"),
        "Gdk" => Some("gdk"),
        "Gsk" => Some("gsk"),
        "Pango" => Some("pango"),
        "cairo" => Some("cairo"),
        "Adw" => Some("adw"),
        _ => None,
    }
}
