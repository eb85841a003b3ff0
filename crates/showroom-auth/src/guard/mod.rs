//! The request-time access gate.

pub mod decision;
pub mod path;

pub use decision::{
    ADMIN_LOGIN_PATH, AccessGuard, Credentials, GuardDecision, GuardOutcome, SHOWROOM_ROOT_PATH, Viewer,
};
pub use path::{PathClass, classify};
