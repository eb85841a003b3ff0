//! Visit/click tracking endpoint.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use showroom_service::tracking::TrackEvent;

use crate::cookies;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/track
pub async fn track(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(event): Json<TrackEvent>,
) -> ApiResult<Response> {
    let body = Json(ApiResponse::ok(MessageResponse::new("Event recorded")));

    match state.tracking_service.record(&event)? {
        Some(issued) => {
            let jar = jar.add(cookies::session_cookie(&issued, state.secure_cookies()));
            Ok((jar, body).into_response())
        }
        None => Ok(body.into_response()),
    }
}
