use wasm_bindgen::JsCast as _;

use crate::Checkboxes;

/// Find the checkbox `<input>` with the given element id.
///
/// Returns `None` both when there is no such element and when the element
/// is not an `<input>`.
pub fn checkbox_element(id: &str) -> Option<web_sys::HtmlInputElement> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    element.dyn_into::<web_sys::HtmlInputElement>().ok()
}

/// The checkboxes of the current page, looked up in the DOM by element id.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomCheckboxes {}

impl Checkboxes for DomCheckboxes {
    fn checked(&self, id: &str) -> Option<bool> {
        checkbox_element(id).map(|checkbox| checkbox.checked())
    }

    fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(checkbox) = checkbox_element(id) {
            checkbox.set_checked(checked);
        }
    }
}
