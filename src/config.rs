/// Configuration for the login/register modal pair.
///
/// The defaults match the ids and class convention used by the page
/// templates; override them when mounting against different markup.
#[derive(Clone, PartialEq)]
pub struct ModalConfig {
    /// Element id of the login modal root (the dimmed backdrop element).
    pub login_id: String,
    /// Element id of the register modal root.
    pub register_id: String,
    /// Class whose presence hides a modal.
    pub hidden_class: String,
    /// Delay between closing one modal and opening the other during a
    /// switch, leaving room for the CSS fade-out.
    pub switch_delay_ms: u32,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            login_id: "loginModal".to_string(),
            register_id: "registerModal".to_string(),
            hidden_class: "hidden".to_string(),
            switch_delay_ms: 300,
        }
    }
}
