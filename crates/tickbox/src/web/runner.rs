use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::prelude::*;

use crate::{CheckboxPersistence, save_state};

use super::{DomCheckboxes, checkbox_element, storage::LocalStorage, string_from_js_value};

// ----------------------------------------------------------------------------

/// Wires the configured checkboxes to local storage.
///
/// [`start`](Self::start) restores every configured checkbox once the
/// document is ready, then installs a `change` listener on each one that
/// writes its new state back as it is toggled.
///
/// This is cheap to clone. The installed listeners keep the runner alive, so
/// the handle can be dropped once started; call [`destroy`](Self::destroy)
/// to undo everything.
#[derive(Clone)]
pub struct WebRunner {
    persistence: Rc<CheckboxPersistence>,

    /// In case we are destroyed, unsubscribe these.
    events_to_unsubscribe: Rc<RefCell<Vec<TargetEvent>>>,
}

impl WebRunner {
    pub fn new(persistence: CheckboxPersistence) -> Self {
        Self {
            persistence: Rc::new(persistence),
            events_to_unsubscribe: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The configured checkbox ids.
    pub fn persistence(&self) -> &CheckboxPersistence {
        &self.persistence
    }

    /// Restore the configured checkboxes and start tracking their changes.
    ///
    /// If the document is still being parsed this waits for
    /// `DOMContentLoaded`, so it is safe to call from a script in `<head>`.
    ///
    /// # Errors
    /// Failing to reach the document, or failure to install an event listener.
    pub fn start(&self) -> Result<(), JsValue> {
        let document = document()?;
        if document.ready_state() == "loading" {
            let options = web_sys::AddEventListenerOptions::new();
            options.set_once(true);
            self.add_event_listener_ex(
                &document,
                "DOMContentLoaded",
                &options,
                |_: web_sys::Event, runner| {
                    if let Err(err) = runner.attach() {
                        log::error!(
                            "Failed to attach to the document: {}",
                            string_from_js_value(&err)
                        );
                    }
                },
            )
        } else {
            self.attach()
        }
    }

    /// Restore all configured checkboxes, then install their change listeners.
    fn attach(&self) -> Result<(), JsValue> {
        self.persistence
            .restore_all(&LocalStorage::default(), &mut DomCheckboxes::default());

        for id in self.persistence.ids() {
            let Some(checkbox) = checkbox_element(id) else {
                log::debug!("Not tracking {id:?}: no such checkbox");
                continue;
            };
            let id = id.clone();
            self.add_event_listener(&checkbox, "change", move |_: web_sys::Event, runner| {
                runner.save(&id);
            })?;
        }
        Ok(())
    }

    /// Persist the current state of one checkbox.
    pub fn save(&self, id: &str) {
        save_state(&mut LocalStorage::default(), &DomCheckboxes::default(), id);
    }

    /// Persist every configured checkbox that is present.
    ///
    /// The change listeners make this redundant in normal operation; it is
    /// for embedders that want a wholesale snapshot, e.g. on `pagehide`.
    pub fn save_all(&self) {
        self.persistence
            .save_all(&mut LocalStorage::default(), &DomCheckboxes::default());
    }

    /// Unsubscribe from all installed event listeners.
    ///
    /// After this the page keeps whatever state it shows, and nothing is
    /// saved or restored anymore.
    pub fn destroy(&self) {
        let events_to_unsubscribe = self.events_to_unsubscribe.take();
        if !events_to_unsubscribe.is_empty() {
            log::debug!("Unsubscribing from {} events", events_to_unsubscribe.len());
        }
        for event in events_to_unsubscribe {
            if let Err(err) = event.unsubscribe() {
                log::warn!(
                    "Failed to unsubscribe from event: {}",
                    string_from_js_value(&err)
                );
            }
        }
    }

    /// Convenience function to reduce boilerplate and ensure that all event
    /// handlers are dealt with in the same way.
    ///
    /// All events added with this method will be unsubscribed in
    /// [`Self::destroy`].
    ///
    /// # Errors
    /// Failure to install the listener on the target.
    pub fn add_event_listener<E: JsCast>(
        &self,
        target: &web_sys::EventTarget,
        event_name: &'static str,
        closure: impl FnMut(E, &Self) + 'static,
    ) -> Result<(), JsValue> {
        let options = web_sys::AddEventListenerOptions::new();
        self.add_event_listener_ex(target, event_name, &options, closure)
    }

    fn add_event_listener_ex<E: JsCast>(
        &self,
        target: &web_sys::EventTarget,
        event_name: &'static str,
        options: &web_sys::AddEventListenerOptions,
        mut closure: impl FnMut(E, &Self) + 'static,
    ) -> Result<(), JsValue> {
        let runner = self.clone();

        // Create a JS closure based on the FnMut provided:
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            // Cast the event to the expected event type:
            let event = event.unchecked_into::<E>();
            closure(event, &runner);
        }) as Box<dyn FnMut(web_sys::Event)>);

        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_name,
            closure.as_ref().unchecked_ref(),
            options,
        )?;

        // Remember it so we can unsubscribe in `destroy`:
        self.events_to_unsubscribe
            .borrow_mut()
            .push(TargetEvent {
                target: target.clone(),
                event_name: event_name.to_owned(),
                closure,
            });

        Ok(())
    }
}

// ----------------------------------------------------------------------------

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("tickbox: no window.document to attach to"))
}

struct TargetEvent {
    target: web_sys::EventTarget,
    event_name: String,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl TargetEvent {
    fn unsubscribe(self) -> Result<(), JsValue> {
        self.target.remove_event_listener_with_callback(
            &self.event_name,
            self.closure.as_ref().unchecked_ref(),
        )
    }
}
