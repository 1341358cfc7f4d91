pub mod use_auth_modals;
