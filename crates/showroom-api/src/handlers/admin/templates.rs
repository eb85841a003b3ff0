//! Admin template visibility handlers.

use axum::Json;
use axum::extract::{Path, State};

use showroom_service::catalog::TemplateView;

use crate::dto::request::VisibilityRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/admin/templates
pub async fn list_templates(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<Vec<TemplateView>>>> {
    let templates = state.catalog_service.list_all().await?;
    Ok(Json(ApiResponse::ok(templates)))
}

/// PUT /api/admin/templates/{branch}/{name}/visibility
pub async fn set_visibility(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((branch, name)): Path<(String, String)>,
    Json(req): Json<VisibilityRequest>,
) -> ApiResult<Json<ApiResponse<TemplateView>>> {
    let view = state
        .catalog_service
        .set_visibility(&format!("{branch}/{name}"), req.visible)
        .await?;
    Ok(Json(ApiResponse::ok(view)))
}
