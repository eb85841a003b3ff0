//! Admin panel page stubs behind the access guard.

use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use showroom_auth::guard::Viewer;

use crate::dto::response::ApiResponse;
use crate::error::ApiErrorResponse;
use crate::extractors::CurrentViewer;

/// GET /admin/login
pub async fn login_page() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::ok(json!({
        "page": "login",
        "action": "/api/admin/login",
    })))
}

/// GET /admin
pub async fn dashboard(viewer: CurrentViewer) -> Response {
    panel(viewer, String::new())
}

/// GET /admin/{*section}
pub async fn section(viewer: CurrentViewer, Path(section): Path<String>) -> Response {
    panel(viewer, section)
}

/// Only an admin viewer gets a panel page. Asset-suffixed paths pass the
/// guard without one.
fn panel(CurrentViewer(viewer): CurrentViewer, section: String) -> Response {
    let Some(Viewer::Admin(claims)) = viewer else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiErrorResponse::new("NOT_FOUND", "Resource not found")),
        )
            .into_response();
    };
    Json(ApiResponse::ok(json!({
        "page": "admin",
        "section": section,
        "username": claims.sub,
    })))
    .into_response()
}
