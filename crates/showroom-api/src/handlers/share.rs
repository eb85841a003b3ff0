//! Share page: resolves a signed token or legacy link id.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use showroom_auth::resolver::Resolution;

use crate::cookies;
use crate::dto::response::{ApiResponse, SharePageResponse};
use crate::error::{ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// GET /s/{token}
///
/// A granted reference (re)issues the share session, so legacy ids get one
/// too. Every rejection reads the same to the visitor.
pub async fn share_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(token): Path<String>,
) -> ApiResult<Response> {
    let grant = match state.resolver.resolve_raw(&token).await {
        Resolution::Granted(grant) => grant,
        Resolution::Invalid(rejection) => {
            debug!(%rejection, "Share page rejected");
            return Ok(link_invalid());
        }
    };

    let templates = state.catalog_service.visible_for(&grant.slugs).await?;
    let issued = state.sessions.issue_for(&grant)?;
    let jar = jar.add(cookies::session_cookie(&issued, state.secure_cookies()));

    Ok((
        jar,
        Json(ApiResponse::ok(SharePageResponse {
            name: grant.display_name,
            templates,
        })),
    )
        .into_response())
}

fn link_invalid() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse::new(
            "LINK_INVALID",
            "This link is invalid or has expired",
        )),
    )
        .into_response()
}
