//! Route definitions for the showroom HTTP surface.
//!
//! Page routes live at the root, JSON routes under `/api`. The access guard
//! wraps every route and the fallback, so unknown admin and template paths
//! are gated the same way as known ones.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post, put},
};

use crate::error::ApiErrorResponse;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .nest("/api", api_routes())
        .fallback(not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::guard::access_guard,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Showroom, share, template and admin panel pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::root))
        .route("/blocked", get(handlers::pages::blocked))
        .route("/s/{token}", get(handlers::share::share_page))
        .route("/templates/{branch}/{name}", get(handlers::pages::template))
        .route(
            "/templates/{branch}/{name}/{*page}",
            get(handlers::pages::template_subpage),
        )
        .route("/admin", get(handlers::admin::panel::dashboard))
        .route("/admin/login", get(handlers::admin::panel::login_page))
        .route("/admin/{*section}", get(handlers::admin::panel::section))
}

/// JSON endpoints
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/activate", get(handlers::activate::activate))
        .route("/track", post(handlers::track::track))
        .merge(admin_routes())
}

/// Admin JSON endpoints; each handler requires `AdminUser` except login
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(handlers::admin::auth::login))
        .route("/admin/logout", post(handlers::admin::auth::logout))
        .route("/admin/me", get(handlers::admin::auth::me))
        .route(
            "/admin/links",
            get(handlers::admin::links::list_links).post(handlers::admin::links::create_link),
        )
        .route(
            "/admin/links/{id}",
            get(handlers::admin::links::get_link)
                .put(handlers::admin::links::update_link)
                .delete(handlers::admin::links::delete_link),
        )
        .route(
            "/admin/links/{id}/token",
            get(handlers::admin::links::link_token),
        )
        .route(
            "/admin/templates",
            get(handlers::admin::templates::list_templates),
        )
        .route(
            "/admin/templates/{branch}/{name}/visibility",
            put(handlers::admin::templates::set_visibility),
        )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse::new("NOT_FOUND", "Resource not found")),
    )
}
