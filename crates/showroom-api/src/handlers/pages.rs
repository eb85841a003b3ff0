//! Guarded page endpoints: showroom root, blocked view, template pages.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::warn;

use showroom_auth::guard::{SHOWROOM_ROOT_PATH, Viewer};
use showroom_service::catalog::TemplateView;

use crate::dto::response::{ApiResponse, ShowroomResponse, TemplatePageResponse};
use crate::error::ApiErrorResponse;
use crate::extractors::CurrentViewer;
use crate::state::AppState;

const BLOCKED_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="robots" content="noindex">
  <title>Showroom</title>
</head>
<body>
  <main>
    <h1>This showroom is private</h1>
    <p>Open the personal link you received to browse the templates shared with you.</p>
  </main>
</body>
</html>
"#;

/// The blocked informational view, served with status 200.
pub fn blocked_page() -> (StatusCode, Html<&'static str>) {
    (StatusCode::OK, Html(BLOCKED_HTML))
}

/// GET /blocked
pub async fn blocked() -> impl IntoResponse {
    blocked_page()
}

/// GET /
///
/// Admins see the full catalog with visibility; session holders see their
/// grant filtered by visibility.
pub async fn root(State(state): State<AppState>, CurrentViewer(viewer): CurrentViewer) -> Response {
    let listing = match viewer {
        Some(Viewer::Admin(_)) => state
            .catalog_service
            .list_all()
            .await
            .map(|templates| ShowroomResponse {
                viewer: "admin",
                name: None,
                templates,
            }),
        Some(Viewer::Session(session)) => state
            .catalog_service
            .visible_for(&session.slugs)
            .await
            .map(|entries| ShowroomResponse {
                viewer: "session",
                name: session.name.clone(),
                templates: entries
                    .into_iter()
                    .map(|entry| TemplateView {
                        slug: entry.slug(),
                        entry,
                        visible: true,
                    })
                    .collect(),
            }),
        None => return blocked_page().into_response(),
    };

    match listing {
        Ok(listing) => Json(ApiResponse::ok(listing)).into_response(),
        Err(e) => {
            warn!(error = %e, "Visibility lookup failed; showing blocked view");
            blocked_page().into_response()
        }
    }
}

/// GET /templates/{branch}/{name}
///
/// Hidden templates are only reachable by admins.
pub async fn template(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
    Path((branch, name)): Path<(String, String)>,
) -> Response {
    template_page(&state, viewer, &branch, &name, None).await
}

/// GET /templates/{branch}/{name}/{*page}
pub async fn template_subpage(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
    Path((branch, name, page)): Path<(String, String, String)>,
) -> Response {
    template_page(&state, viewer, &branch, &name, Some(page)).await
}

async fn template_page(
    state: &AppState,
    viewer: Option<Viewer>,
    branch: &str,
    name: &str,
    page: Option<String>,
) -> Response {
    let slug = format!("{branch}/{name}");

    // Asset-suffixed paths pass the guard without a viewer; no page is served for them.
    let Some(viewer) = viewer.filter(|viewer| viewer.allows(&slug)) else {
        return template_not_found();
    };

    let view = match state.catalog_service.find(&slug).await {
        Ok(view) => view.filter(|view| view.visible || viewer.is_admin()),
        Err(e) => {
            warn!(error = %e, slug = %slug, "Visibility lookup failed; redirecting to the showroom");
            return Redirect::temporary(SHOWROOM_ROOT_PATH).into_response();
        }
    };

    let Some(view) = view else {
        return template_not_found();
    };

    Json(ApiResponse::ok(TemplatePageResponse {
        slug: view.slug,
        entry: view.entry,
        page,
    }))
    .into_response()
}

fn template_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse::new("NOT_FOUND", "Template not found")),
    )
        .into_response()
}
