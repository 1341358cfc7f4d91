use gloo::console;

/// Component-tagged console logging for the frontend.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::tag(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::tag(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::tag(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::tag(component, message));
    }

    fn tag(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}
