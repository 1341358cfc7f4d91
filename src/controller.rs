use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use web_sys::Event;

use crate::config::ModalConfig;
use crate::dom::{self, ModalHandle, ScrollLock};
use crate::error::ModalError;
use crate::listeners::DismissListeners;
use crate::services::logging::Logger;

const COMPONENT: &str = "modal-controller";

/// The two modals of the authentication flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    Register,
}

impl ModalKind {
    pub const BOTH: [ModalKind; 2] = [ModalKind::Login, ModalKind::Register];

    pub fn other(self) -> Self {
        match self {
            ModalKind::Login => ModalKind::Register,
            ModalKind::Register => ModalKind::Login,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ModalKind::Login => "login",
            ModalKind::Register => "register",
        }
    }
}

/// All mutable controller state, funneled through one `Rc<RefCell<_>>` owner
/// so the dismissal listeners and the switch timer share it with the public
/// handle.
pub(crate) struct ControllerState {
    login: ModalHandle,
    register: ModalHandle,
    scroll_lock: ScrollLock,
    active: Option<ModalKind>,
    pending_switch: Option<Timeout>,
    switch_delay_ms: u32,
}

impl ControllerState {
    fn handle(&self, kind: ModalKind) -> &ModalHandle {
        match kind {
            ModalKind::Login => &self.login,
            ModalKind::Register => &self.register,
        }
    }

    fn show(&mut self, kind: ModalKind) {
        // The pair is mutually exclusive: opening one hides the other.
        if let Some(open) = self.active {
            if open != kind {
                self.handle(open).hide();
            }
        }
        self.handle(kind).show();
        self.active = Some(kind);
        self.apply_scroll_lock();
    }

    fn hide(&mut self, kind: ModalKind) {
        self.handle(kind).hide();
        if self.active == Some(kind) {
            self.active = None;
        }
        self.apply_scroll_lock();
    }

    // Scroll lock is derived from the active state, never set ad hoc:
    // locked exactly while a modal is open.
    fn apply_scroll_lock(&self) {
        self.scroll_lock.set_locked(self.active.is_some());
    }

    /// Backdrop-click dismissal: close a modal when the click landed exactly
    /// on its root element rather than on content inside it.
    pub(crate) fn dismiss_backdrop(&mut self, event: &Event) {
        for kind in ModalKind::BOTH {
            if self.handle(kind).is_event_target(event) {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("backdrop click, closing {} modal", kind.name()),
                );
                self.hide(kind);
            }
        }
    }

    /// Escape dismissal: close every currently-visible modal of the pair.
    /// A no-op when none is visible.
    pub(crate) fn dismiss_visible(&mut self) {
        for kind in ModalKind::BOTH {
            if self.handle(kind).is_visible() {
                self.hide(kind);
            }
        }
    }
}

/// Owns the login/register modal pair for the lifetime of the page view.
///
/// `mount` resolves both modal elements and the body once and attaches the
/// document-level dismissal listeners; dropping the controller detaches the
/// listeners and cancels any switch still pending.
pub struct ModalController {
    state: Rc<RefCell<ControllerState>>,
    _listeners: DismissListeners,
}

impl ModalController {
    pub fn mount(config: ModalConfig) -> Result<Self, ModalError> {
        let document = dom::document()?;
        let login = ModalHandle::resolve(&document, &config.login_id, &config.hidden_class)?;
        let register =
            ModalHandle::resolve(&document, &config.register_id, &config.hidden_class)?;
        let scroll_lock = ScrollLock::resolve(&document)?;

        let state = Rc::new(RefCell::new(ControllerState {
            login,
            register,
            scroll_lock,
            active: None,
            pending_switch: None,
            switch_delay_ms: config.switch_delay_ms,
        }));
        let listeners = DismissListeners::attach(&document, &state)?;

        Logger::debug_with_component(COMPONENT, "mounted login/register modal pair");
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    /// Show `kind` and lock page scroll. Idempotent; if the other modal was
    /// open it is hidden first.
    pub fn open(&self, kind: ModalKind) {
        self.state.borrow_mut().show(kind);
    }

    /// Hide `kind`. Page scroll unlocks only when the active modal closes;
    /// closing the already-hidden other modal leaves the lock untouched.
    pub fn close(&self, kind: ModalKind) {
        self.state.borrow_mut().hide(kind);
    }

    /// Close the login modal now, open the register modal after the
    /// configured delay.
    pub fn switch_to_register(&self) {
        self.switch(ModalKind::Register);
    }

    /// Close the register modal now, open the login modal after the
    /// configured delay.
    pub fn switch_to_login(&self) {
        self.switch(ModalKind::Login);
    }

    fn switch(&self, target: ModalKind) {
        let mut state = self.state.borrow_mut();

        // Replacing the handle cancels any switch still in flight, so two
        // rapid switches schedule exactly one delayed open.
        state.pending_switch = None;
        state.hide(target.other());

        Logger::debug_with_component(
            COMPONENT,
            &format!(
                "switching to {} modal in {}ms",
                target.name(),
                state.switch_delay_ms
            ),
        );

        let weak = Rc::downgrade(&self.state);
        state.pending_switch = Some(Timeout::new(state.switch_delay_ms, move || {
            finish_switch(weak, target);
        }));
    }

    pub fn active(&self) -> Option<ModalKind> {
        self.state.borrow().active
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.state.borrow().handle(kind).is_visible()
    }

    pub fn is_switch_pending(&self) -> bool {
        self.state.borrow().pending_switch.is_some()
    }
}

fn finish_switch(state: Weak<RefCell<ControllerState>>, target: ModalKind) {
    // The controller may have been dropped while the timer was pending.
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = state.borrow_mut();
    // The timer has fired; drop the spent handle.
    state.pending_switch = None;
    state.show(target);
}
