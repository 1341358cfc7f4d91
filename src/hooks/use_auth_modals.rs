use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::ModalConfig;
use crate::controller::{ModalController, ModalKind};
use crate::services::logging::Logger;

/// Result from the auth modals hook: one callback per modal operation,
/// ready to wire to the page's trigger elements.
#[derive(Clone, PartialEq)]
pub struct UseAuthModalsHandle {
    pub open_login: Callback<()>,
    pub open_register: Callback<()>,
    pub close_login: Callback<()>,
    pub close_register: Callback<()>,
    pub switch_to_login: Callback<()>,
    pub switch_to_register: Callback<()>,
    /// Set when mounting failed (a configured modal id was missing from the
    /// document); the callbacks are no-ops in that case.
    pub mount_error: Option<String>,
}

/// Hook owning a [`ModalController`] for the lifetime of the component.
///
/// Mounts the controller on first render, remounts if the config changes,
/// and drops it (detaching the document listeners and cancelling any pending
/// switch) when the component unmounts.
#[hook]
pub fn use_auth_modals(config: Option<ModalConfig>) -> UseAuthModalsHandle {
    let config = config.unwrap_or_default();

    let controller = use_mut_ref(|| Option::<ModalController>::None);
    let mount_error = use_state(|| Option::<String>::None);

    {
        let controller = controller.clone();
        let mount_error = mount_error.clone();

        use_effect_with(config, move |config| {
            match ModalController::mount(config.clone()) {
                Ok(mounted) => {
                    *controller.borrow_mut() = Some(mounted);
                    mount_error.set(None);
                }
                Err(err) => {
                    Logger::error_with_component(
                        "use-auth-modals",
                        &format!("failed to mount modal controller: {err}"),
                    );
                    mount_error.set(Some(err.to_string()));
                }
            }

            move || {
                controller.borrow_mut().take();
            }
        });
    }

    fn action(
        controller: &Rc<RefCell<Option<ModalController>>>,
        operation: impl Fn(&ModalController) + 'static,
    ) -> Callback<()> {
        let controller = controller.clone();
        Callback::from(move |_| {
            if let Some(controller) = controller.borrow().as_ref() {
                operation(controller);
            }
        })
    }

    UseAuthModalsHandle {
        open_login: action(&controller, |c| c.open(ModalKind::Login)),
        open_register: action(&controller, |c| c.open(ModalKind::Register)),
        close_login: action(&controller, |c| c.close(ModalKind::Login)),
        close_register: action(&controller, |c| c.close(ModalKind::Register)),
        switch_to_login: action(&controller, |c| c.switch_to_login()),
        switch_to_register: action(&controller, |c| c.switch_to_register()),
        mount_error: (*mount_error).clone(),
    }
}

/// Convenience variant using the default ids, class, and switch delay.
#[hook]
pub fn use_auth_modals_default() -> UseAuthModalsHandle {
    use_auth_modals(None)
}
