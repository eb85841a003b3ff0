//! Resolves link references into slug grants.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use showroom_database::registry::LinkRegistry;
use showroom_entity::share::{LinkStatus, SlugGrant};
use showroom_entity::template::TemplateCatalog;

use super::reference::LinkReference;
use crate::token::TokenCodec;

/// Why a registry link could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkRejection {
    /// No record with that id.
    #[error("share link not found")]
    NotFound,
    /// The link's expiry has passed.
    #[error("share link is no longer active")]
    Inactive,
    /// The admin kill switch is off.
    #[error("share link was deactivated")]
    Deactivated,
    /// The registry could not be reached.
    #[error("link registry unavailable")]
    Unavailable,
}

/// A definitive access grant for a link reference.
///
/// This is the grant, not the final visible set; callers still intersect
/// it with template visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedGrant {
    /// Link id the grant belongs to.
    pub link_id: String,
    /// Granted slugs.
    pub slugs: SlugGrant,
    /// Link display name, when known.
    pub display_name: Option<String>,
}

/// Outcome of resolving a link reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The reference grants access.
    Granted(ResolvedGrant),
    /// The reference grants nothing.
    Invalid(LinkRejection),
}

impl Resolution {
    /// Returns the grant, if any.
    pub fn grant(&self) -> Option<&ResolvedGrant> {
        match self {
            Self::Granted(grant) => Some(grant),
            Self::Invalid(_) => None,
        }
    }
}

/// Orchestrates the token codec, link registry and catalog.
#[derive(Clone)]
pub struct LinkResolver {
    codec: TokenCodec,
    registry: Arc<dyn LinkRegistry>,
    catalog: Arc<TemplateCatalog>,
}

impl std::fmt::Debug for LinkResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkResolver")
            .field("catalog_size", &self.catalog.len())
            .finish()
    }
}

impl LinkResolver {
    /// Creates a new resolver.
    pub fn new(
        codec: TokenCodec,
        registry: Arc<dyn LinkRegistry>,
        catalog: Arc<TemplateCatalog>,
    ) -> Self {
        Self {
            codec,
            registry,
            catalog,
        }
    }

    /// Classifies `raw` as a signed token or legacy id.
    pub fn parse(&self, raw: &str) -> LinkReference {
        LinkReference::parse(&self.codec, raw)
    }

    /// Parses and resolves `raw` in one step.
    pub async fn resolve_raw(&self, raw: &str) -> Resolution {
        self.resolve(self.parse(raw)).await
    }

    /// Resolves a classified reference.
    ///
    /// Signed tokens are authoritative and never touch the registry. Legacy
    /// ids are looked up and must be active and unexpired.
    pub async fn resolve(&self, reference: LinkReference) -> Resolution {
        match reference {
            LinkReference::SignedToken(claims) => Resolution::Granted(ResolvedGrant {
                link_id: claims.sub,
                slugs: claims.slugs,
                display_name: claims.name,
            }),
            LinkReference::LegacyId(id) => match self.resolve_legacy(&id).await {
                Ok(grant) => Resolution::Granted(grant),
                Err(rejection) => {
                    debug!(link_id = %id, %rejection, "Legacy share link rejected");
                    Resolution::Invalid(rejection)
                }
            },
        }
    }

    async fn resolve_legacy(&self, id: &str) -> Result<ResolvedGrant, LinkRejection> {
        let link = self
            .registry
            .find_by_id(id)
            .await
            .map_err(|e| {
                warn!(link_id = %id, error = %e, "Link registry lookup failed");
                LinkRejection::Unavailable
            })?
            .ok_or(LinkRejection::NotFound)?;

        match link.status_at(Utc::now()) {
            LinkStatus::Active => {}
            LinkStatus::Deactivated => return Err(LinkRejection::Deactivated),
            LinkStatus::Expired => return Err(LinkRejection::Inactive),
        }

        Ok(ResolvedGrant {
            slugs: SlugGrant::Only(self.catalog.resolve_link(&link)),
            display_name: Some(link.name),
            link_id: link.id,
        })
    }
}
