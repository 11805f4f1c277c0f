//! Node types: WidgetId, WidgetData.

use std::collections::HashMap;

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a widget node. Copy, lightweight (u64).
    pub struct WidgetId;
}

/// Data associated with a single widget node.
///
/// Ids and classes are what selectors match against. Conventionally a widget
/// carries at most one id, but the id set is not restricted to one: a step
/// like `#a#b` is satisfied only by a node carrying both ids (subset match).
#[derive(Debug, Clone, Default)]
pub struct WidgetData {
    /// Widget type name (e.g. "Button", "Container").
    pub widget_type: String,
    /// Ids (CSS `#id` selector). Ordered, deduplicated.
    pub ids: Vec<String>,
    /// CSS classes (for `.class` selector). Ordered, deduplicated.
    pub classes: Vec<String>,
    /// Optional text content.
    pub text: Option<String>,
    /// Free-form string attributes attached by the application.
    pub data: HashMap<String, String>,
}

impl WidgetData {
    /// Create a new `WidgetData` with the given widget type and no ids/classes.
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            ..Self::default()
        }
    }

    /// Add an id (builder). No-op if already present.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
        self
    }

    /// Add a single CSS class (builder). No-op if already present.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add multiple CSS classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            self = self.with_class(class);
        }
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check whether this node carries a given id.
    pub fn has_id(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Check whether this node has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a CSS class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a CSS class: add if absent, remove if present.
    pub fn toggle_class(&mut self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }
}
