//! Share link CRUD and share token minting.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use showroom_auth::token::{ShareClaims, TokenClaims, TokenCodec};
use showroom_core::config::app::ServerConfig;
use showroom_core::config::auth::AuthConfig;
use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_database::registry::LinkRegistry;
use showroom_entity::share::{CreateShareLink, LinkFilters, ShareLink, SlugGrant, UpdateShareLink};
use showroom_entity::template::TemplateCatalog;

/// Length of generated link ids, in hex characters.
const LINK_ID_LEN: usize = 12;

/// Request to create a new share link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// Display label.
    pub name: String,
    /// Branch/type criteria.
    pub filters: Option<LinkFilters>,
    /// Explicit slug allow-list; overrides `filters` when non-empty.
    pub allowed_slugs: Option<Vec<String>>,
    /// Expiry time (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}

/// A signed share token and where it lands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintedToken {
    /// The signed token.
    pub token: String,
    /// Canonical share URL embedding the token.
    pub share_url: String,
    /// When the token stops working.
    pub expires_at: DateTime<Utc>,
}

/// A freshly created link together with its first share token.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedLink {
    /// The stored record.
    pub link: ShareLink,
    /// Token minted at creation time.
    #[serde(flatten)]
    pub token: MintedToken,
}

/// Manages share link records and mints their tokens.
#[derive(Clone)]
pub struct LinkService {
    registry: Arc<dyn LinkRegistry>,
    catalog: Arc<TemplateCatalog>,
    codec: TokenCodec,
    share_ttl: Duration,
    server: ServerConfig,
}

impl std::fmt::Debug for LinkService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkService")
            .field("share_ttl", &self.share_ttl)
            .field("public_base_url", &self.server.public_base_url)
            .finish()
    }
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        registry: Arc<dyn LinkRegistry>,
        catalog: Arc<TemplateCatalog>,
        codec: TokenCodec,
        auth: &AuthConfig,
        server: &ServerConfig,
    ) -> Self {
        Self {
            registry,
            catalog,
            codec,
            share_ttl: Duration::days(auth.share_token_ttl_days as i64),
            server: server.clone(),
        }
    }

    /// Lists every link, newest first.
    pub async fn list(&self) -> AppResult<Vec<ShareLink>> {
        self.registry.list().await
    }

    /// Fetches one link.
    pub async fn get(&self, id: &str) -> AppResult<ShareLink> {
        self.registry
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Share link '{id}' not found")))
    }

    /// Creates a link and mints its first share token.
    pub async fn create(&self, req: CreateLinkRequest) -> AppResult<CreatedLink> {
        let now = Utc::now();
        self.validate_name(&req.name)?;
        self.validate_slugs(req.allowed_slugs.as_deref())?;
        if req.expires_at.is_some_and(|at| at <= now) {
            return Err(AppError::validation("expiresAt must be in the future"));
        }

        let link = CreateShareLink {
            id: generate_link_id(),
            name: req.name.trim().to_string(),
            filters: req.filters,
            allowed_slugs: req.allowed_slugs,
            expires_at: req.expires_at,
        }
        .into_link(now);

        self.registry.create(&link).await?;
        let token = self.mint(&link)?;

        info!(link_id = %link.id, name = %link.name, "Share link created");
        Ok(CreatedLink { link, token })
    }

    /// Applies a partial update. Last write wins.
    pub async fn update(&self, id: &str, changes: UpdateShareLink) -> AppResult<ShareLink> {
        if let Some(name) = &changes.name {
            self.validate_name(name)?;
        }
        if let Some(allowed) = &changes.allowed_slugs {
            self.validate_slugs(allowed.as_deref())?;
        }

        let mut link = self.get(id).await?;
        changes.apply(&mut link);
        link.name = link.name.trim().to_string();
        self.registry.update(&link).await?;

        info!(link_id = %id, is_active = link.is_active, "Share link updated");
        Ok(link)
    }

    /// Deletes a link.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.registry.delete(id).await? {
            return Err(AppError::not_found(format!("Share link '{id}' not found")));
        }
        info!(link_id = %id, "Share link deleted");
        Ok(())
    }

    /// Mints a fresh share token from the current state of link `id`.
    pub async fn reissue_token(&self, id: &str) -> AppResult<MintedToken> {
        let link = self.get(id).await?;
        if !link.is_valid() {
            return Err(AppError::conflict(format!(
                "Share link '{id}' is deactivated or expired"
            )));
        }
        self.mint(&link)
    }

    /// Signs a share token carrying the link's slugs as resolved right now.
    ///
    /// The token expires with the link, or after the configured share TTL
    /// for links that never expire.
    pub fn mint(&self, link: &ShareLink) -> AppResult<MintedToken> {
        let expires_at = link
            .expires_at
            .unwrap_or_else(|| Utc::now() + self.share_ttl);
        let claims = ShareClaims::new(
            &link.id,
            SlugGrant::Only(self.catalog.resolve_link(link)),
            Some(link.name.clone()),
            expires_at,
        );
        let token = self.codec.encode(&claims)?;

        Ok(MintedToken {
            share_url: self.server.share_url(&token),
            expires_at: claims.expires_at(),
            token,
        })
    }

    fn validate_name(&self, name: &str) -> AppResult<()> {
        let len = name.trim().chars().count();
        if !(1..=120).contains(&len) {
            return Err(AppError::validation(
                "name must be between 1 and 120 characters",
            ));
        }
        Ok(())
    }

    fn validate_slugs(&self, slugs: Option<&[String]>) -> AppResult<()> {
        let unknown: Vec<&str> = slugs
            .unwrap_or_default()
            .iter()
            .filter(|slug| !self.catalog.contains(slug))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::validation(format!(
                "Unknown template slugs: {}",
                unknown.join(", ")
            )));
        }
        Ok(())
    }
}

/// Generates a short lowercase hex link id.
fn generate_link_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(LINK_ID_LEN);
    id
}
