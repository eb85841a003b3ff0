//! Access guard middleware for page paths.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use showroom_auth::admin::ADMIN_COOKIE;
use showroom_auth::guard::{Credentials, GuardDecision};
use showroom_auth::session::SESSION_COOKIE;

use crate::cookies;
use crate::handlers::pages::blocked_page;
use crate::state::AppState;

/// Applies the guard decision for the request path. Allowed requests carry
/// the identified [`Viewer`](showroom_auth::guard::Viewer) in their
/// extensions.
pub async fn access_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let outcome = state.guard.evaluate(
        request.uri().path(),
        Credentials {
            admin: jar.get(ADMIN_COOKIE).map(Cookie::value),
            session: jar.get(SESSION_COOKIE).map(Cookie::value),
        },
    );

    let response = match outcome.decision {
        GuardDecision::Allow(viewer) => {
            if let Some(viewer) = viewer {
                request.extensions_mut().insert(viewer);
            }
            next.run(request).await
        }
        GuardDecision::RewriteBlocked => blocked_page().into_response(),
        GuardDecision::Redirect(location) => Redirect::temporary(location).into_response(),
    };

    if outcome.clear_admin_cookie {
        (jar.remove(cookies::removal(ADMIN_COOKIE)), response).into_response()
    } else {
        response
    }
}
