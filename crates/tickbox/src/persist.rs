use crate::{Checkboxes, Storage, get_bool, set_bool};

// ----------------------------------------------------------------------------

/// Persist the current state of one checkbox under its id.
///
/// If there is no checkbox with that id, nothing is written.
pub fn save_state(storage: &mut dyn Storage, checkboxes: &dyn Checkboxes, id: &str) {
    match checkboxes.checked(id) {
        Some(checked) => set_bool(storage, id, checked),
        None => log::debug!("Not saving {id:?}: no such checkbox"),
    }
}

/// Restore one checkbox from its stored state.
///
/// A key that is absent (never saved) or holds a malformed value counts as
/// unchecked. If there is no checkbox with that id, nothing happens.
pub fn load_state(storage: &dyn Storage, checkboxes: &mut dyn Checkboxes, id: &str) {
    let checked = get_bool(storage, id).unwrap_or(false);
    checkboxes.set_checked(id, checked);
}

// ----------------------------------------------------------------------------

/// Which checkboxes to persist, in order.
///
/// This is the whole configuration of the crate: an explicit list of element
/// ids, passed in by the embedder rather than baked into a global.
///
/// ```
/// use tickbox::CheckboxPersistence;
///
/// let persistence = CheckboxPersistence::new(["task1", "task2", "task3"]);
/// assert_eq!(persistence.ids().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckboxPersistence {
    ids: Vec<String>,
}

impl CheckboxPersistence {
    pub fn new(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured checkbox ids, in restore order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Restore every configured checkbox to its last saved state.
    ///
    /// Checkboxes that were never saved come out unchecked.
    pub fn restore_all(&self, storage: &dyn Storage, checkboxes: &mut dyn Checkboxes) {
        for id in &self.ids {
            load_state(storage, checkboxes, id);
        }
    }

    /// Persist every configured checkbox that is present, then flush.
    ///
    /// Saving normally happens one checkbox at a time as they change;
    /// this is for wholesale snapshots, e.g. on `pagehide` or blur.
    pub fn save_all(&self, storage: &mut dyn Storage, checkboxes: &dyn Checkboxes) {
        for id in &self.ids {
            save_state(storage, checkboxes, id);
        }
        storage.flush();
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryCheckboxes, MemoryStorage};

    #[test]
    fn round_trip() {
        let mut storage = MemoryStorage::default();
        let mut page = MemoryCheckboxes::default();
        page.insert("task1", false);

        for checked in [true, false] {
            page.set_checked("task1", checked);
            save_state(&mut storage, &page, "task1");

            page.set_checked("task1", !checked); // scramble
            load_state(&storage, &mut page, "task1");
            assert_eq!(page.checked("task1"), Some(checked));
        }
    }

    #[test]
    fn saving_twice_is_idempotent() {
        let mut storage = MemoryStorage::default();
        let mut page = MemoryCheckboxes::default();
        page.insert("task1", true);

        save_state(&mut storage, &page, "task1");
        let once = storage.get_string("task1");
        save_state(&mut storage, &page, "task1");
        assert_eq!(storage.get_string("task1"), once);
        assert_eq!(once.as_deref(), Some("true"));
    }

    #[test]
    fn never_saved_loads_unchecked() {
        let storage = MemoryStorage::default();
        let mut page = MemoryCheckboxes::default();
        page.insert("task1", true);

        load_state(&storage, &mut page, "task1");
        assert_eq!(page.checked("task1"), Some(false));
    }

    #[test]
    fn malformed_value_loads_unchecked() {
        let mut storage = MemoryStorage::default();
        storage.set_string("task1", "checked!".to_owned());
        let mut page = MemoryCheckboxes::default();
        page.insert("task1", true);

        load_state(&storage, &mut page, "task1");
        assert_eq!(page.checked("task1"), Some(false));
    }

    #[test]
    fn missing_checkbox_is_a_no_op() {
        let mut storage = MemoryStorage::default();
        let mut page = MemoryCheckboxes::default();

        save_state(&mut storage, &page, "task1");
        assert_eq!(storage.get_string("task1"), None);
        assert!(!storage.is_dirty());

        storage.set_string("task1", "true".to_owned());
        load_state(&storage, &mut page, "task1");
        assert_eq!(page, MemoryCheckboxes::default());
    }

    /// Three task checkboxes; the user touches two of them, then reloads.
    #[test]
    fn task_list_scenario() {
        let mut storage = MemoryStorage::default();
        let persistence = CheckboxPersistence::new(["task1", "task2", "task3"]);

        let mut page = MemoryCheckboxes::default();
        for id in persistence.ids() {
            page.insert(id.clone(), false);
        }

        // The user checks task1…
        page.set_checked("task1", true);
        save_state(&mut storage, &page, "task1");
        // …toggles task2 on and off again…
        page.set_checked("task2", true);
        save_state(&mut storage, &page, "task2");
        page.set_checked("task2", false);
        save_state(&mut storage, &page, "task2");
        // …and never touches task3.

        assert_eq!(storage.get_string("task1").as_deref(), Some("true"));
        assert_eq!(storage.get_string("task2").as_deref(), Some("false"));
        assert_eq!(storage.get_string("task3"), None);

        // Reload: a fresh page, everything unchecked by default.
        let mut reloaded = MemoryCheckboxes::default();
        for id in persistence.ids() {
            reloaded.insert(id.clone(), false);
        }
        persistence.restore_all(&storage, &mut reloaded);

        assert_eq!(reloaded.checked("task1"), Some(true));
        assert_eq!(reloaded.checked("task2"), Some(false));
        assert_eq!(reloaded.checked("task3"), Some(false));
    }

    #[test]
    fn restore_all_skips_missing_checkboxes() {
        let mut storage = MemoryStorage::default();
        storage.set_string("task1", "true".to_owned());
        storage.set_string("task2", "true".to_owned());

        let persistence = CheckboxPersistence::new(["task1", "task2"]);
        let mut page = MemoryCheckboxes::default();
        page.insert("task1", false);
        // No task2 in this page.

        persistence.restore_all(&storage, &mut page);
        assert_eq!(page.checked("task1"), Some(true));
        assert_eq!(page.checked("task2"), None);
    }

    #[test]
    fn save_all_saves_whats_there_and_flushes() {
        let mut storage = MemoryStorage::default();
        let persistence = CheckboxPersistence::new(["task1", "task2"]);

        let mut page = MemoryCheckboxes::default();
        page.insert("task1", true);
        // No task2 in this page.

        persistence.save_all(&mut storage, &page);
        assert_eq!(storage.get_string("task1").as_deref(), Some("true"));
        assert_eq!(storage.get_string("task2"), None);
        assert!(!storage.is_dirty());
    }
}
