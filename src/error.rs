use thiserror::Error;

/// Failures that can occur while mounting the modal controller.
///
/// All element lookups happen once, at mount time. After a successful mount
/// the fixed pair of modal handles is held by the controller, so the
/// open/close/switch operations themselves cannot fail.
#[derive(Debug, Error)]
pub enum ModalError {
    #[error("no window/document available in this environment")]
    NoDocument,

    #[error("modal element with id `{id}` not found in document")]
    ElementNotFound { id: String },

    #[error("document has no <body> element to scroll-lock")]
    MissingBody,

    #[error("failed to attach document listener: {0}")]
    Listener(String),
}
