//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use showroom_entity::share::{LinkFilters, UpdateShareLink};
use showroom_service::link::CreateLinkRequest;

/// Admin login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create share link request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LinkCreateRequest {
    /// Display label.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Branch/type criteria.
    #[serde(default)]
    pub filters: Option<LinkFilters>,
    /// Explicit slug allow-list.
    #[serde(default)]
    pub allowed_slugs: Option<Vec<String>>,
    /// Expiry time.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<LinkCreateRequest> for CreateLinkRequest {
    fn from(req: LinkCreateRequest) -> Self {
        Self {
            name: req.name,
            filters: req.filters,
            allowed_slugs: req.allowed_slugs,
            expires_at: req.expires_at,
        }
    }
}

/// Partial share link update. An explicit `null` clears a nullable field;
/// an absent field is left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LinkUpdateRequest {
    /// New display label.
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    /// New criteria.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub filters: Option<Option<LinkFilters>>,
    /// New allow-list.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub allowed_slugs: Option<Option<Vec<String>>>,
    /// New expiry.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub expires_at: Option<Option<DateTime<Utc>>>,
    /// Kill switch.
    pub is_active: Option<bool>,
}

impl From<LinkUpdateRequest> for UpdateShareLink {
    fn from(req: LinkUpdateRequest) -> Self {
        Self {
            name: req.name,
            filters: req.filters,
            allowed_slugs: req.allowed_slugs,
            expires_at: req.expires_at,
            is_active: req.is_active,
        }
    }
}

/// Template visibility toggle body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityRequest {
    /// Whether visitors may see the template.
    pub visible: bool,
}

/// Query string of the activation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivateParams {
    /// Signed share token.
    #[serde(default)]
    pub token: Option<String>,
}

/// Maps a present field (even `null`) to `Some`, so absent and `null` differ.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
