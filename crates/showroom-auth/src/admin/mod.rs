//! Admin login and credentials.

pub mod authenticator;
pub mod password;

pub use authenticator::{ADMIN_COOKIE, AdminAuthenticator};
pub use password::PasswordHasher;
