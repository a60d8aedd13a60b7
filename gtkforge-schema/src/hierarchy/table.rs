//! Static parent table.
//!
//! A child → parent map of GObject classes. The built-in table covers the
//! commonly subclassed gtk4 and libadwaita classes; a JSON manifest of the
//! form `{"Gtk.Box": "Gtk.Widget"}` can add or override entries.

use super::{AncestorLookup, ClassKey};
use crate::error::HierarchyError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

const GTK_PARENTS: &[(&str, &str)] = &[
    ("Gtk.Widget", "GObject.InitiallyUnowned"),
    ("Gtk.Window", "Gtk.Widget"),
    ("Gtk.ApplicationWindow", "Gtk.Window"),
    ("Gtk.Dialog", "Gtk.Window"),
    ("Gtk.AboutDialog", "Gtk.Window"),
    ("Gtk.ShortcutsWindow", "Gtk.Window"),
    ("Gtk.Box", "Gtk.Widget"),
    ("Gtk.CenterBox", "Gtk.Widget"),
    ("Gtk.Grid", "Gtk.Widget"),
    ("Gtk.Fixed", "Gtk.Widget"),
    ("Gtk.Frame", "Gtk.Widget"),
    ("Gtk.AspectFrame", "Gtk.Widget"),
    ("Gtk.Paned", "Gtk.Widget"),
    ("Gtk.Overlay", "Gtk.Widget"),
    ("Gtk.Revealer", "Gtk.Widget"),
    ("Gtk.Expander", "Gtk.Widget"),
    ("Gtk.Stack", "Gtk.Widget"),
    ("Gtk.StackSwitcher", "Gtk.Widget"),
    ("Gtk.StackSidebar", "Gtk.Widget"),
    ("Gtk.Notebook", "Gtk.Widget"),
    ("Gtk.ScrolledWindow", "Gtk.Widget"),
    ("Gtk.Viewport", "Gtk.Widget"),
    ("Gtk.HeaderBar", "Gtk.Widget"),
    ("Gtk.ActionBar", "Gtk.Widget"),
    ("Gtk.SearchBar", "Gtk.Widget"),
    ("Gtk.InfoBar", "Gtk.Widget"),
    ("Gtk.Label", "Gtk.Widget"),
    ("Gtk.Image", "Gtk.Widget"),
    ("Gtk.Picture", "Gtk.Widget"),
    ("Gtk.Video", "Gtk.Widget"),
    ("Gtk.Spinner", "Gtk.Widget"),
    ("Gtk.Separator", "Gtk.Widget"),
    ("Gtk.ProgressBar", "Gtk.Widget"),
    ("Gtk.LevelBar", "Gtk.Widget"),
    ("Gtk.Calendar", "Gtk.Widget"),
    ("Gtk.DrawingArea", "Gtk.Widget"),
    ("Gtk.GLArea", "Gtk.Widget"),
    ("Gtk.Button", "Gtk.Widget"),
    ("Gtk.ToggleButton", "Gtk.Button"),
    ("Gtk.LinkButton", "Gtk.Button"),
    ("Gtk.LockButton", "Gtk.Button"),
    ("Gtk.CheckButton", "Gtk.Widget"),
    ("Gtk.MenuButton", "Gtk.Widget"),
    ("Gtk.Switch", "Gtk.Widget"),
    ("Gtk.Range", "Gtk.Widget"),
    ("Gtk.Scale", "Gtk.Range"),
    ("Gtk.Scrollbar", "Gtk.Widget"),
    ("Gtk.SpinButton", "Gtk.Widget"),
    ("Gtk.Entry", "Gtk.Widget"),
    ("Gtk.SearchEntry", "Gtk.Widget"),
    ("Gtk.PasswordEntry", "Gtk.Widget"),
    ("Gtk.EditableLabel", "Gtk.Widget"),
    ("Gtk.Text", "Gtk.Widget"),
    ("Gtk.TextView", "Gtk.Widget"),
    ("Gtk.DropDown", "Gtk.Widget"),
    ("Gtk.ComboBox", "Gtk.Widget"),
    ("Gtk.ComboBoxText", "Gtk.ComboBox"),
    ("Gtk.Popover", "Gtk.Widget"),
    ("Gtk.PopoverMenu", "Gtk.Popover"),
    ("Gtk.EmojiChooser", "Gtk.Popover"),
    ("Gtk.ListBox", "Gtk.Widget"),
    ("Gtk.ListBoxRow", "Gtk.Widget"),
    ("Gtk.FlowBox", "Gtk.Widget"),
    ("Gtk.FlowBoxChild", "Gtk.Widget"),
    ("Gtk.ListBase", "Gtk.Widget"),
    ("Gtk.ListView", "Gtk.ListBase"),
    ("Gtk.GridView", "Gtk.ListBase"),
    ("Gtk.ColumnView", "Gtk.Widget"),
];

const ADW_PARENTS: &[(&str, &str)] = &[
    ("Adw.Bin", "Gtk.Widget"),
    ("Adw.Window", "Gtk.Window"),
    ("Adw.ApplicationWindow", "Gtk.ApplicationWindow"),
    ("Adw.PreferencesWindow", "Adw.Window"),
    ("Adw.AboutWindow", "Adw.Window"),
    ("Adw.Dialog", "Gtk.Widget"),
    ("Adw.AlertDialog", "Adw.Dialog"),
    ("Adw.PreferencesDialog", "Adw.Dialog"),
    ("Adw.AboutDialog", "Adw.Dialog"),
    ("Adw.HeaderBar", "Gtk.Widget"),
    ("Adw.ToolbarView", "Gtk.Widget"),
    ("Adw.Clamp", "Gtk.Widget"),
    ("Adw.StatusPage", "Gtk.Widget"),
    ("Adw.Avatar", "Gtk.Widget"),
    ("Adw.Carousel", "Gtk.Widget"),
    ("Adw.ToastOverlay", "Gtk.Widget"),
    ("Adw.SplitButton", "Gtk.Widget"),
    ("Adw.ButtonContent", "Gtk.Widget"),
    ("Adw.ViewStack", "Gtk.Widget"),
    ("Adw.ViewSwitcher", "Gtk.Widget"),
    ("Adw.TabView", "Gtk.Widget"),
    ("Adw.TabBar", "Gtk.Widget"),
    ("Adw.NavigationPage", "Gtk.Widget"),
    ("Adw.NavigationView", "Gtk.Widget"),
    ("Adw.NavigationSplitView", "Gtk.Widget"),
    ("Adw.OverlaySplitView", "Gtk.Widget"),
    ("Adw.PreferencesPage", "Gtk.Widget"),
    ("Adw.PreferencesGroup", "Gtk.Widget"),
    ("Adw.PreferencesRow", "Gtk.ListBoxRow"),
    ("Adw.ActionRow", "Adw.PreferencesRow"),
    ("Adw.ExpanderRow", "Adw.PreferencesRow"),
    ("Adw.EntryRow", "Adw.PreferencesRow"),
    ("Adw.PasswordEntryRow", "Adw.EntryRow"),
    ("Adw.ComboRow", "Adw.ActionRow"),
    ("Adw.SwitchRow", "Adw.ActionRow"),
    ("Adw.SpinRow", "Adw.ActionRow"),
];

/// JSON manifest: child class → parent class, both `Namespace.Name`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct Manifest(BTreeMap<String, String>);

/// Child → parent map implementing [`AncestorLookup`].
#[derive(Debug, Clone, Default)]
pub struct ParentTable {
    parents: HashMap<ClassKey, ClassKey>,
}

impl ParentTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the gtk4 and libadwaita classes.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (child, parent) in GTK_PARENTS.iter().chain(ADW_PARENTS) {
            if let (Some(child), Some(parent)) =
                (ClassKey::parse_dotted(child), ClassKey::parse_dotted(parent))
            {
                table.insert(child, parent);
            }
        }
        table
    }

    /// Parses a JSON manifest.
    ///
    /// # Errors
    /// Returns `HierarchyError` if the JSON is malformed or an entry is not a
    /// `Namespace.Name` pair.
    pub fn from_json(json: &str) -> Result<Self, HierarchyError> {
        let Manifest(entries) = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (child, parent) in &entries {
            let child_key = ClassKey::parse_dotted(child).ok_or_else(|| HierarchyError::InvalidEntry {
                entry: child.clone(),
            })?;
            let parent_key = ClassKey::parse_dotted(parent).ok_or_else(|| {
                HierarchyError::InvalidEntry {
                    entry: format!("{child}: {parent}"),
                }
            })?;
            table.insert(child_key, parent_key);
        }
        Ok(table)
    }

    /// Reads a JSON manifest from a file.
    ///
    /// # Errors
    /// Returns `HierarchyError` if reading or parsing fails.
    pub fn from_file(path: &Path) -> Result<Self, HierarchyError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Records the parent of a class, replacing any previous entry.
    pub fn insert(&mut self, child: ClassKey, parent: ClassKey) {
        self.parents.insert(child, parent);
    }

    /// Adds every entry of `other`, overriding existing ones.
    pub fn extend(&mut self, other: Self) {
        self.parents.extend(other.parents);
    }

    /// Returns the recorded parent of a class.
    #[must_use]
    pub fn parent_of(&self, class: &ClassKey) -> Option<&ClassKey> {
        self.parents.get(class)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl AncestorLookup for ParentTable {
    fn ancestors_of(&self, class: &ClassKey) -> Result<Vec<ClassKey>, HierarchyError> {
        if !self.parents.contains_key(class) {
            return Err(HierarchyError::NotFound {
                class: class.to_string(),
            });
        }

        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(class);

        while let Some(key) = current.filter(|k| !k.is_root()) {
            if !visited.insert(key) {
                let mut path: Vec<String> = chain.iter().map(ToString::to_string).collect();
                path.push(key.to_string());
                return Err(HierarchyError::Cycle {
                    path: path.join(" -> "),
                });
            }
            chain.push(key.clone());
            current = self.parents.get(key);
        }

        Ok(chain)
    }
}
