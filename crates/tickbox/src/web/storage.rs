use crate::Storage;

use super::string_from_js_value;

/// `window.localStorage`, if the browser lets us touch it.
///
/// Private browsing modes and per-site settings can make it unavailable,
/// in which case everything here degrades to a no-op.
pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn local_storage_get(key: &str) -> Option<String> {
    local_storage().map(|storage| storage.get_item(key).ok())??
}

pub fn local_storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(err) = storage.set_item(key, value) {
            // Quota exceeded, most likely.
            log::warn!(
                "Failed to store {key:?}: {}",
                string_from_js_value(&err)
            );
        }
    } else {
        log::warn!("Saving disabled: no access to local storage");
    }
}

// ----------------------------------------------------------------------------

/// A [`Storage`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage {}

impl Storage for LocalStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        local_storage_get(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        local_storage_set(key, &value);
    }

    fn flush(&mut self) {
        // Local storage writes are synchronous; there is nothing to defer.
    }
}
