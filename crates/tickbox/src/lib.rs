//! `tickbox`: remember your checkboxes.
//!
//! `tickbox` persists the state of a fixed set of checkboxes to the browser's
//! [local storage](https://developer.mozilla.org/en-US/docs/Web/API/Window/localStorage)
//! and restores it on the next page load. Each checkbox is addressed by its
//! element id, and its state is stored under that id as the string `"true"`
//! or `"false"`.
//!
//! The core is platform-agnostic: the page is reached through the
//! [`Checkboxes`] trait and the store through the [`Storage`] trait, so
//! everything except the thin `web` module runs (and is tested) natively.
//!
//! ## Usage, web:
//! ``` no_run
//! #[cfg(target_arch = "wasm32")]
//! use wasm_bindgen::prelude::*;
//!
//! /// Call this once from the HTML.
//! #[cfg(target_arch = "wasm32")]
//! #[wasm_bindgen]
//! pub fn start() -> Result<(), wasm_bindgen::JsValue> {
//!     tickbox::web::WebLogger::init(log::LevelFilter::Debug).ok();
//!
//!     let persistence = tickbox::CheckboxPersistence::new(["task1", "task2", "task3"]);
//!     tickbox::web::WebRunner::new(persistence).start()
//! }
//! ```
//!
//! The runner waits for `DOMContentLoaded` if necessary, restores every
//! configured checkbox, and installs a `change` listener on each one that
//! writes its new state back to local storage.
//!
//! ## Usage, outside the browser:
//! ```
//! use tickbox::{Checkboxes as _, CheckboxPersistence, MemoryCheckboxes, MemoryStorage, Storage as _};
//!
//! let mut page = MemoryCheckboxes::default();
//! page.insert("task1", false);
//!
//! let mut storage = MemoryStorage::default();
//! storage.set_string("task1", "true".to_owned());
//!
//! let persistence = CheckboxPersistence::new(["task1"]);
//! persistence.restore_all(&storage, &mut page);
//! assert_eq!(page.checked("task1"), Some(true));
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod checkboxes;
mod persist;
mod storage;

pub use checkboxes::{Checkboxes, MemoryCheckboxes};
pub use persist::{CheckboxPersistence, load_state, save_state};
pub use storage::{MemoryStorage, Storage, get_bool, set_bool};

// ----------------------------------------------------------------------------
// When compiling for web

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use wasm_bindgen;

#[cfg(target_arch = "wasm32")]
pub use web_sys;
