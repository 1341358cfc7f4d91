use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement};

use crate::error::ModalError;

/// The browser document, or `ModalError::NoDocument` outside a browser.
pub fn document() -> Result<Document, ModalError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ModalError::NoDocument)
}

/// A modal root element resolved once at mount time.
///
/// Visibility is a class toggle on the root: the modal is hidden while the
/// configured hidden class is present. The handle never creates or removes
/// the element, it only flips that class.
#[derive(Clone)]
pub struct ModalHandle {
    element: HtmlElement,
    hidden_class: String,
}

impl ModalHandle {
    pub fn resolve(
        document: &Document,
        id: &str,
        hidden_class: &str,
    ) -> Result<Self, ModalError> {
        let element = document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| ModalError::ElementNotFound { id: id.to_string() })?;

        Ok(Self {
            element,
            hidden_class: hidden_class.to_string(),
        })
    }

    /// Idempotent: showing an already-visible modal is a no-op.
    pub fn show(&self) {
        let _ = self.element.class_list().remove_1(&self.hidden_class);
    }

    /// Idempotent: hiding an already-hidden modal is a no-op.
    pub fn hide(&self) {
        let _ = self.element.class_list().add_1(&self.hidden_class);
    }

    pub fn is_visible(&self) -> bool {
        !self.element.class_list().contains(&self.hidden_class)
    }

    /// Whether `event` landed exactly on the modal root (the dimmed
    /// backdrop), as opposed to a descendant inside the modal content.
    pub fn is_event_target(&self, event: &Event) -> bool {
        let root: &EventTarget = self.element.as_ref();
        event.target().as_ref() == Some(root)
    }
}

/// Page-level scroll lock, applied through the body's inline overflow style.
#[derive(Clone)]
pub struct ScrollLock {
    body: HtmlElement,
}

impl ScrollLock {
    pub fn resolve(document: &Document) -> Result<Self, ModalError> {
        let body = document.body().ok_or(ModalError::MissingBody)?;
        Ok(Self { body })
    }

    pub fn set_locked(&self, locked: bool) {
        let overflow = if locked { "hidden" } else { "auto" };
        let _ = self.body.style().set_property("overflow", overflow);
    }

    pub fn is_locked(&self) -> bool {
        self.body
            .style()
            .get_property_value("overflow")
            .map(|value| value == "hidden")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn insert_modal(id: &str, hidden: bool) -> HtmlElement {
        let document = document().unwrap();
        let element: HtmlElement = document
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        element.set_id(id);
        if hidden {
            element.class_list().add_1("hidden").unwrap();
        }
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn resolve_fails_for_missing_id() {
        let document = document().unwrap();
        let result = ModalHandle::resolve(&document, "no-such-modal", "hidden");
        assert!(matches!(
            result,
            Err(ModalError::ElementNotFound { id }) if id == "no-such-modal"
        ));
    }

    #[wasm_bindgen_test]
    fn show_and_hide_toggle_the_hidden_class() {
        let element = insert_modal("dom-test-toggle", true);
        let document = document().unwrap();
        let handle = ModalHandle::resolve(&document, "dom-test-toggle", "hidden").unwrap();

        assert!(!handle.is_visible());
        handle.show();
        assert!(handle.is_visible());
        handle.hide();
        assert!(!handle.is_visible());

        element.remove();
    }

    #[wasm_bindgen_test]
    fn show_twice_is_idempotent() {
        let element = insert_modal("dom-test-idempotent", true);
        let document = document().unwrap();
        let handle =
            ModalHandle::resolve(&document, "dom-test-idempotent", "hidden").unwrap();

        handle.show();
        handle.show();
        assert!(handle.is_visible());
        handle.hide();
        handle.hide();
        assert!(!handle.is_visible());

        element.remove();
    }

    #[wasm_bindgen_test]
    fn scroll_lock_writes_body_overflow() {
        let document = document().unwrap();
        let lock = ScrollLock::resolve(&document).unwrap();

        lock.set_locked(true);
        assert!(lock.is_locked());
        lock.set_locked(false);
        assert!(!lock.is_locked());
    }
}
