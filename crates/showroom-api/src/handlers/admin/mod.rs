//! Admin endpoints: panel pages, login, share links, template visibility.

pub mod auth;
pub mod links;
pub mod panel;
pub mod templates;
