//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use showroom_entity::share::{LinkStatus, ShareLink};
use showroom_entity::template::TemplateEntry;
use showroom_service::catalog::TemplateView;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// The logged-in admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminIdentityResponse {
    /// Admin username.
    pub username: String,
    /// When the admin credential expires.
    pub expires_at: DateTime<Utc>,
}

/// A share link with its effective status.
#[derive(Debug, Clone, Serialize)]
pub struct LinkResponse {
    /// The stored record.
    #[serde(flatten)]
    pub link: ShareLink,
    /// Status right now.
    pub status: LinkStatus,
}

impl From<ShareLink> for LinkResponse {
    fn from(link: ShareLink) -> Self {
        Self {
            status: link.status_at(Utc::now()),
            link,
        }
    }
}

/// Template listing for the showroom root.
#[derive(Debug, Clone, Serialize)]
pub struct ShowroomResponse {
    /// `admin` or `session`.
    pub viewer: &'static str,
    /// Display name of the link the session came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Templates the viewer may open, in catalog order.
    pub templates: Vec<TemplateView>,
}

/// The resolved share page.
#[derive(Debug, Clone, Serialize)]
pub struct SharePageResponse {
    /// Link display name.
    pub name: Option<String>,
    /// Allowed and visible templates, in catalog order.
    pub templates: Vec<TemplateEntry>,
}

/// Descriptor for a template page request.
#[derive(Debug, Clone, Serialize)]
pub struct TemplatePageResponse {
    /// `branch/name`.
    pub slug: String,
    /// The catalog entry.
    #[serde(flatten)]
    pub entry: TemplateEntry,
    /// Sub-page within the template demo, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}
