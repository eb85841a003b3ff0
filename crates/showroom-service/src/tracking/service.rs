//! Visit/click events from share pages.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use showroom_auth::session::{IssuedCredential, SessionIssuer};
use showroom_auth::token::{ShareClaims, TokenCodec};
use showroom_core::result::AppResult;

/// Kind of tracked interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackEventType {
    /// A share page was opened.
    Visit,
    /// A template was clicked from a share page.
    Click,
}

/// One tracked interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackEvent {
    /// Interaction kind.
    #[serde(rename = "type")]
    pub event_type: TrackEventType,
    /// Share token (or legacy id) of the page the event came from.
    pub token: String,
    /// Clicked template, for click events.
    #[serde(default)]
    pub template_slug: Option<String>,
}

/// Records tracking events. Visits carrying a signed share token also
/// yield a share session, whether or not the event itself is kept.
#[derive(Debug, Clone)]
pub struct TrackingService {
    codec: TokenCodec,
    sessions: Arc<SessionIssuer>,
}

impl TrackingService {
    /// Creates a new tracking service.
    pub fn new(codec: TokenCodec, sessions: Arc<SessionIssuer>) -> Self {
        Self { codec, sessions }
    }

    /// Logs `event` and returns a session to set when the event is a visit
    /// with a decodable share token.
    pub fn record(&self, event: &TrackEvent) -> AppResult<Option<IssuedCredential>> {
        let claims = self.codec.decode::<ShareClaims>(&event.token);
        let link_id = claims.as_ref().map(|c| c.sub.as_str()).unwrap_or("unknown");

        info!(
            event = ?event.event_type,
            link_id = %link_id,
            template = event.template_slug.as_deref().unwrap_or("-"),
            "Share link event"
        );

        match (event.event_type, claims) {
            (TrackEventType::Visit, Ok(claims)) => {
                let issued = self
                    .sessions
                    .issue(&claims.sub, &claims.slugs, claims.name.as_deref())?;
                Ok(Some(issued))
            }
            (TrackEventType::Visit, Err(reason)) => {
                debug!(%reason, "Visit without a decodable share token");
                Ok(None)
            }
            (TrackEventType::Click, _) => Ok(None),
        }
    }
}
