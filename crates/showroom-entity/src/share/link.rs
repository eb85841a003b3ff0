//! Share link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Branch/type criteria a link uses when it has no explicit slug list.
///
/// A template matches when (branches is empty OR its branch is listed) AND
/// (types is empty OR its type is listed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkFilters {
    /// Accepted template branches.
    #[serde(default)]
    pub branches: Vec<String>,
    /// Accepted template types.
    #[serde(default)]
    pub types: Vec<String>,
}

impl LinkFilters {
    /// Returns `true` if both criteria are empty, which matches everything.
    pub fn is_unrestricted(&self) -> bool {
        self.branches.is_empty() && self.types.is_empty()
    }

    /// Checks a single catalog classification against the criteria.
    pub fn matches(&self, branch: &str, kind: &str) -> bool {
        let branch_ok = self.branches.is_empty() || self.branches.iter().any(|b| b == branch);
        let type_ok = self.types.is_empty() || self.types.iter().any(|t| t == kind);
        branch_ok && type_ok
    }
}

/// Validity of a link at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// Active and not past its expiry.
    Active,
    /// The admin kill switch is off.
    Deactivated,
    /// `expires_at` has passed.
    Expired,
}

/// A named, admin-created grant of access to a subset of templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    /// Opaque unique identifier; doubles as a legacy bare token.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Branch/type criteria.
    #[serde(default)]
    pub filters: Option<LinkFilters>,
    /// Explicit slug allow-list; takes precedence over `filters` when non-empty.
    #[serde(default)]
    pub allowed_slugs: Option<Vec<String>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Expiry time; `None` never expires.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Kill switch, independent of expiry.
    pub is_active: bool,
}

impl ShareLink {
    /// Computes the link's status at `now`. Deactivation wins over expiry.
    pub fn status_at(&self, now: DateTime<Utc>) -> LinkStatus {
        if !self.is_active {
            return LinkStatus::Deactivated;
        }
        match self.expires_at {
            Some(expires_at) if expires_at <= now => LinkStatus::Expired,
            _ => LinkStatus::Active,
        }
    }

    /// Check if the link is currently valid.
    pub fn is_valid(&self) -> bool {
        self.status_at(Utc::now()) == LinkStatus::Active
    }

    /// Returns the explicit allow-list when it is present and non-empty.
    pub fn explicit_slugs(&self) -> Option<&[String]> {
        self.allowed_slugs
            .as_deref()
            .filter(|slugs| !slugs.is_empty())
    }
}

/// Data required to create a new share link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareLink {
    /// Identifier assigned by the caller.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Branch/type criteria.
    pub filters: Option<LinkFilters>,
    /// Explicit slug allow-list.
    pub allowed_slugs: Option<Vec<String>>,
    /// Expiry time (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateShareLink {
    /// Materializes the record as stored, active from `now`.
    pub fn into_link(self, now: DateTime<Utc>) -> ShareLink {
        ShareLink {
            id: self.id,
            name: self.name,
            filters: self.filters,
            allowed_slugs: self.allowed_slugs,
            created_at: now,
            expires_at: self.expires_at,
            is_active: true,
        }
    }
}

/// Partial update of a share link. `None` leaves a field untouched; the
/// nested options allow clearing nullable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShareLink {
    /// New display label.
    pub name: Option<String>,
    /// New criteria, or `Some(None)` to clear.
    pub filters: Option<Option<LinkFilters>>,
    /// New allow-list, or `Some(None)` to clear.
    pub allowed_slugs: Option<Option<Vec<String>>>,
    /// New expiry, or `Some(None)` to make the link permanent.
    pub expires_at: Option<Option<DateTime<Utc>>>,
    /// New kill-switch state.
    pub is_active: Option<bool>,
}

impl UpdateShareLink {
    /// Applies the changes onto `link` in place.
    pub fn apply(self, link: &mut ShareLink) {
        if let Some(name) = self.name {
            link.name = name;
        }
        if let Some(filters) = self.filters {
            link.filters = filters;
        }
        if let Some(allowed_slugs) = self.allowed_slugs {
            link.allowed_slugs = allowed_slugs;
        }
        if let Some(expires_at) = self.expires_at {
            link.expires_at = expires_at;
        }
        if let Some(is_active) = self.is_active {
            link.is_active = is_active;
        }
    }
}
