//! Selector AST: Step, Selector.

use std::fmt;

use crate::tree::WidgetData;

/// One selector segment: the ids and classes a node must carry to satisfy it.
///
/// Matching is subset matching, not equality: `.foo` matches a node with
/// classes `{foo, bar}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    /// Required ids (`#name` fragments).
    pub ids: Vec<String>,
    /// Required classes (`.name` fragments).
    pub classes: Vec<String>,
}

impl Step {
    /// Create an empty step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required id. No-op if already present.
    pub fn push_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Add a required class. No-op if already present.
    pub fn push_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// `true` if this step carries no requirement at all.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.classes.is_empty()
    }

    /// Subset match: every required id and class must be present on the node.
    pub fn matches(&self, data: &WidgetData) -> bool {
        self.ids.iter().all(|id| data.has_id(id))
            && self.classes.iter().all(|class| data.has_class(class))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in &self.ids {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// A parsed selector: an ordered chain of descendant [`Step`]s.
///
/// `#header .title` is two steps; a node satisfies the selector when an
/// ancestor chain satisfies every step in order (descendant, not
/// direct-child, relationships).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub steps: Vec<Step>,
}

impl Selector {
    /// Create an empty selector (matches nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if this selector has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Selector {
    /// Canonical form: steps joined by a single space, each step's id
    /// fragments before its class fragments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
