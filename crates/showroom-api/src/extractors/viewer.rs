//! `CurrentViewer` extractor: the identity the access guard attached.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use showroom_auth::guard::Viewer;

/// The viewer identified by the access guard, if any.
#[derive(Debug, Clone)]
pub struct CurrentViewer(pub Option<Viewer>);

impl<S: Send + Sync> FromRequestParts<S> for CurrentViewer {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentViewer(parts.extensions.get::<Viewer>().cloned()))
    }
}
