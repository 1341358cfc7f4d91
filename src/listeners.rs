use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, MouseEvent};

use crate::controller::ControllerState;
use crate::error::ModalError;

/// The two document-level dismissal listeners, registered once at mount and
/// removed symmetrically when the controller is dropped.
///
/// The closures hold weak references to the controller state, so a fired
/// event after teardown is a no-op rather than a use of stale state.
pub(crate) struct DismissListeners {
    document: Document,
    on_click: Closure<dyn FnMut(MouseEvent)>,
    on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

impl DismissListeners {
    pub(crate) fn attach(
        document: &Document,
        state: &Rc<RefCell<ControllerState>>,
    ) -> Result<Self, ModalError> {
        let on_click = {
            let state = Rc::downgrade(state);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                if let Some(state) = state.upgrade() {
                    state.borrow_mut().dismiss_backdrop(&event);
                }
            }) as Box<dyn FnMut(_)>)
        };

        let on_keydown = {
            let state = Rc::downgrade(state);
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() != "Escape" {
                    return;
                }
                if let Some(state) = state.upgrade() {
                    state.borrow_mut().dismiss_visible();
                }
            }) as Box<dyn FnMut(_)>)
        };

        document
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|err| ModalError::Listener(format!("{err:?}")))?;

        if let Err(err) =
            document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        {
            let _ = document
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            return Err(ModalError::Listener(format!("{err:?}")));
        }

        Ok(Self {
            document: document.clone(),
            on_click,
            on_keydown,
        })
    }
}

impl Drop for DismissListeners {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        let _ = self.document.remove_event_listener_with_callback(
            "keydown",
            self.on_keydown.as_ref().unchecked_ref(),
        );
    }
}
