//! Admin auth handlers: login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use showroom_auth::admin::ADMIN_COOKIE;
use showroom_auth::token::TokenClaims;

use crate::cookies;
use crate::dto::request::LoginRequest;
use crate::dto::response::{AdminIdentityResponse, ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Response> {
    req.validate()?;

    let issued = state.admin.login(&req.username, &req.password)?;
    let jar = jar.add(cookies::admin_cookie(&issued, state.secure_cookies()));

    Ok((
        jar,
        Json(ApiResponse::ok(AdminIdentityResponse {
            username: req.username,
            expires_at: issued.expires_at,
        })),
    )
        .into_response())
}

/// POST /api/admin/logout
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(cookies::removal(ADMIN_COOKIE)),
        Json(ApiResponse::ok(MessageResponse::new("Logged out successfully"))),
    )
}

/// GET /api/admin/me
pub async fn me(admin: AdminUser) -> Json<ApiResponse<AdminIdentityResponse>> {
    Json(ApiResponse::ok(AdminIdentityResponse {
        username: admin.username().to_string(),
        expires_at: admin.0.expires_at(),
    }))
}
