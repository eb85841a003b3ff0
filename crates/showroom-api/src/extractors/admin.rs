//! `AdminUser` extractor: verifies the admin credential cookie for JSON endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use showroom_auth::admin::ADMIN_COOKIE;
use showroom_auth::token::AdminClaims;
use showroom_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// An authenticated administrator.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AdminClaims);

impl AdminUser {
    /// The admin username.
    pub fn username(&self) -> &str {
        self.0.username()
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(ADMIN_COOKIE)
            .ok_or_else(|| AppError::unauthorized("Admin login required"))?;

        let claims = state.admin.verify(token.value()).map_err(|reason| {
            debug!(%reason, "Rejected admin credential");
            AppError::unauthorized("Admin login required")
        })?;

        Ok(AdminUser(claims))
    }
}
