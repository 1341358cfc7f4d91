//! Visibility control for the site's login/register modal pair.
//!
//! The host page owns the markup: two overlay elements reachable by stable
//! ids, hidden while a configurable class is present, plus a stylesheet that
//! gives the body's `overflow` property its meaning. This crate resolves
//! those elements once at mount time and then owns all visibility state:
//! open/close, the delayed login↔register switch, backdrop-click and Escape
//! dismissal, and the page scroll lock derived from "a modal is open".
//!
//! Use [`ModalController`] directly, or [`hooks::use_auth_modals`] from a
//! Yew component.

pub mod config;
pub mod controller;
mod dom;
pub mod error;
pub mod hooks;
mod listeners;
pub mod services;

pub use config::ModalConfig;
pub use controller::{ModalController, ModalKind};
pub use error::ModalError;
pub use hooks::use_auth_modals::{use_auth_modals, use_auth_modals_default, UseAuthModalsHandle};
