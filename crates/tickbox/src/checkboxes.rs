use std::collections::BTreeMap;

/// Access to the checkboxes of a page, addressed by element id.
///
/// All operations are total over absent identifiers: an id with no matching
/// checkbox reads as `None` and writes to it are ignored. Callers never need
/// to pre-check existence.
///
/// On the web this is implemented over the DOM (the `web` module).
/// Tests and native embedders use [`MemoryCheckboxes`].
pub trait Checkboxes {
    /// Is there a checkbox with the given id?
    fn contains(&self, id: &str) -> bool {
        self.checked(id).is_some()
    }

    /// The checked state of the given checkbox, or `None` if there is none.
    fn checked(&self, id: &str) -> Option<bool>;

    /// Set the checked state of the given checkbox, if there is one.
    fn set_checked(&mut self, id: &str, checked: bool);
}

/// A set of pretend checkboxes backed by a map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryCheckboxes {
    checkboxes: BTreeMap<String, bool>,
}

impl MemoryCheckboxes {
    /// Add a checkbox, as if it appeared in the page markup.
    pub fn insert(&mut self, id: impl Into<String>, checked: bool) {
        self.checkboxes.insert(id.into(), checked);
    }

    /// Remove a checkbox, as if it left the page.
    pub fn remove(&mut self, id: &str) {
        self.checkboxes.remove(id);
    }
}

impl Checkboxes for MemoryCheckboxes {
    fn checked(&self, id: &str) -> Option<bool> {
        self.checkboxes.get(id).copied()
    }

    fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(state) = self.checkboxes.get_mut(id) {
            *state = checked;
        }
    }
}
