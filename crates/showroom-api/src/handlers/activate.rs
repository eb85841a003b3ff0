//! Activation endpoint: turns a share token into a session before the
//! visitor reaches the share page.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use showroom_auth::token::ShareClaims;

use crate::cookies;
use crate::dto::request::ActivateParams;
use crate::state::AppState;

/// Where failed activations land.
const BLOCKED_PATH: &str = "/blocked";

/// GET /api/activate?token=<signed-token>
///
/// Never answers with an error body: any failure redirects to the blocked
/// page without setting a cookie.
pub async fn activate(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<ActivateParams>,
) -> Response {
    let Some(token) = params.token.filter(|t| !t.is_empty()) else {
        return Redirect::temporary(BLOCKED_PATH).into_response();
    };

    let claims: ShareClaims = match state.codec.decode(&token) {
        Ok(claims) => claims,
        Err(reason) => {
            debug!(%reason, "Activation token rejected");
            return Redirect::temporary(BLOCKED_PATH).into_response();
        }
    };

    let issued = match state
        .sessions
        .issue(&claims.sub, &claims.slugs, claims.name.as_deref())
    {
        Ok(issued) => issued,
        Err(e) => {
            warn!(error = %e, "Failed to issue share session");
            return Redirect::temporary(BLOCKED_PATH).into_response();
        }
    };

    let jar = jar.add(cookies::session_cookie(&issued, state.secure_cookies()));
    (jar, Redirect::temporary(&format!("/s/{token}"))).into_response()
}
