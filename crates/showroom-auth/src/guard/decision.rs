//! Per-request allow/deny decisions.

use std::sync::Arc;

use tracing::debug;

use super::path::{PathClass, classify};
use crate::admin::AdminAuthenticator;
use crate::session::SessionIssuer;
use crate::token::{AdminClaims, SessionClaims};

/// Where unauthenticated admin requests are sent.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Where template requests without a matching session are sent.
pub const SHOWROOM_ROOT_PATH: &str = "/";

/// Who the guard let through. Handlers use it to filter what they show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// An authenticated administrator; unrestricted.
    Admin(AdminClaims),
    /// A share-session holder; restricted to the session's grant.
    Session(SessionClaims),
}

impl Viewer {
    /// Returns `true` for administrators.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(_))
    }

    /// Returns `true` if the viewer may see template `slug`.
    pub fn allows(&self, slug: &str) -> bool {
        match self {
            Self::Admin(_) => true,
            Self::Session(session) => session.allows(slug),
        }
    }
}

/// Raw cookie values presented with a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Credentials<'a> {
    /// `admin-session` cookie value.
    pub admin: Option<&'a str>,
    /// `share-session` cookie value.
    pub session: Option<&'a str>,
}

/// What to do with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Pass the request through, with the identified viewer if any.
    Allow(Option<Viewer>),
    /// Serve the blocked view in place of the page, status 200, URL unchanged.
    RewriteBlocked,
    /// Redirect the browser.
    Redirect(&'static str),
}

/// A decision plus any cookie housekeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardOutcome {
    /// The decision.
    pub decision: GuardDecision,
    /// Remove the admin cookie from the browser.
    pub clear_admin_cookie: bool,
}

impl GuardOutcome {
    fn decide(decision: GuardDecision) -> Self {
        Self {
            decision,
            clear_admin_cookie: false,
        }
    }
}

/// The request gate. Malformed or expired credentials count as absent;
/// the guard never fails a request with an error.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    admin: Arc<AdminAuthenticator>,
    sessions: Arc<SessionIssuer>,
}

impl AccessGuard {
    /// Creates a guard over the admin and session verifiers.
    pub fn new(admin: Arc<AdminAuthenticator>, sessions: Arc<SessionIssuer>) -> Self {
        Self { admin, sessions }
    }

    /// Decides what happens to a request for `path`.
    pub fn evaluate(&self, path: &str, credentials: Credentials<'_>) -> GuardOutcome {
        let class = classify(path);
        let outcome = match &class {
            PathClass::StaticAsset | PathClass::AdminLogin | PathClass::Other => {
                GuardOutcome::decide(GuardDecision::Allow(None))
            }
            PathClass::Admin => self.admin_page(credentials),
            PathClass::Root => self.root_page(credentials),
            PathClass::Template(slug) => self.template_page(slug.as_deref(), credentials),
        };
        debug!(path = %path, class = ?class, decision = ?outcome.decision, "Access guard decision");
        outcome
    }

    fn admin_page(&self, credentials: Credentials<'_>) -> GuardOutcome {
        match credentials.admin.map(|token| self.admin.verify(token)) {
            Some(Ok(claims)) => {
                GuardOutcome::decide(GuardDecision::Allow(Some(Viewer::Admin(claims))))
            }
            Some(Err(reason)) => {
                debug!(%reason, "Rejected admin credential");
                GuardOutcome {
                    decision: GuardDecision::Redirect(ADMIN_LOGIN_PATH),
                    clear_admin_cookie: true,
                }
            }
            None => GuardOutcome::decide(GuardDecision::Redirect(ADMIN_LOGIN_PATH)),
        }
    }

    fn root_page(&self, credentials: Credentials<'_>) -> GuardOutcome {
        match self.viewer(credentials) {
            Some(viewer) => GuardOutcome::decide(GuardDecision::Allow(Some(viewer))),
            None => GuardOutcome::decide(GuardDecision::RewriteBlocked),
        }
    }

    fn template_page(&self, slug: Option<&str>, credentials: Credentials<'_>) -> GuardOutcome {
        match (self.viewer(credentials), slug) {
            (Some(viewer @ Viewer::Admin(_)), _) => {
                GuardOutcome::decide(GuardDecision::Allow(Some(viewer)))
            }
            (Some(viewer), Some(slug)) if viewer.allows(slug) => {
                GuardOutcome::decide(GuardDecision::Allow(Some(viewer)))
            }
            _ => GuardOutcome::decide(GuardDecision::Redirect(SHOWROOM_ROOT_PATH)),
        }
    }

    /// Admin credential first, then any decodable session.
    fn viewer(&self, credentials: Credentials<'_>) -> Option<Viewer> {
        if let Some(claims) = credentials.admin.and_then(|t| self.admin.verify(t).ok()) {
            return Some(Viewer::Admin(claims));
        }
        credentials
            .session
            .and_then(|t| self.sessions.verify(t).ok())
            .map(Viewer::Session)
    }
}
