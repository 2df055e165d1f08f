use std::collections::HashMap;

// ----------------------------------------------------------------------------

/// A place where checkbox state survives page reloads.
///
/// On the web this is backed by
/// [local storage](https://developer.mozilla.org/en-US/docs/Web/API/Window/localStorage)
/// (the `web` module). Tests and native embedders use [`MemoryStorage`].
pub trait Storage {
    /// Get the value for the given key.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Set the value for the given key.
    fn set_string(&mut self, key: &str, value: String);

    /// Write-to-disk or similar.
    fn flush(&mut self);
}

/// A [`Storage`] backed by a plain hash map.
///
/// Nothing outlives the process; this exists for tests and for embedders
/// that bring their own persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    kv: HashMap<String, String>,
    dirty: bool,
}

impl MemoryStorage {
    /// Has anything changed since the last [`Storage::flush`]?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.kv.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        if self.kv.get(key) != Some(&value) {
            self.kv.insert(key.to_owned(), value);
            self.dirty = true;
        }
    }

    fn flush(&mut self) {
        self.dirty = false;
    }
}

// ----------------------------------------------------------------------------

/// Decode the checked state stored at the given key.
///
/// Only the literal strings `"true"` and `"false"` mean anything.
/// Anything else is logged and treated as if the key were absent.
pub fn get_bool(storage: &dyn Storage, key: &str) -> Option<bool> {
    match storage.get_string(key)?.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        other => {
            log::debug!("Ignoring malformed value {other:?} stored for {key:?}");
            None
        }
    }
}

/// Store a checked state under the given key, as `"true"` or `"false"`.
pub fn set_bool(storage: &mut dyn Storage, key: &str, value: bool) {
    storage.set_string(key, value.to_string());
}

// ----------------------------------------------------------------------------
