//! Admin share link handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;
use validator::Validate;

use showroom_service::link::{CreatedLink, MintedToken};

use crate::dto::request::{LinkCreateRequest, LinkUpdateRequest};
use crate::dto::response::{ApiResponse, LinkResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/admin/links
pub async fn list_links(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<Vec<LinkResponse>>>> {
    let links = state.link_service.list().await?;
    Ok(Json(ApiResponse::ok(
        links.into_iter().map(LinkResponse::from).collect(),
    )))
}

/// POST /api/admin/links
pub async fn create_link(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<LinkCreateRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedLink>>)> {
    req.validate()?;
    let created = state.link_service.create(req.into()).await?;
    info!(admin = %admin.username(), link_id = %created.link.id, "Admin created share link");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// GET /api/admin/links/{id}
pub async fn get_link(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<LinkResponse>>> {
    let link = state.link_service.get(&id).await?;
    Ok(Json(ApiResponse::ok(link.into())))
}

/// PUT /api/admin/links/{id}
pub async fn update_link(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    Json(req): Json<LinkUpdateRequest>,
) -> ApiResult<Json<ApiResponse<LinkResponse>>> {
    req.validate()?;
    let link = state.link_service.update(&id, req.into()).await?;
    info!(admin = %admin.username(), link_id = %id, "Admin updated share link");
    Ok(Json(ApiResponse::ok(link.into())))
}

/// DELETE /api/admin/links/{id}
pub async fn delete_link(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.link_service.delete(&id).await?;
    info!(admin = %admin.username(), link_id = %id, "Admin deleted share link");
    Ok(Json(ApiResponse::ok(MessageResponse::new("Share link deleted"))))
}

/// GET /api/admin/links/{id}/token
pub async fn link_token(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MintedToken>>> {
    let minted = state.link_service.reissue_token(&id).await?;
    Ok(Json(ApiResponse::ok(minted)))
}
