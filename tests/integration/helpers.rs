//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Duration, Utc};
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use showroom_api::AppState;
use showroom_auth::admin::PasswordHasher;
use showroom_auth::token::{ShareClaims, TokenCodec};
use showroom_core::config::AppConfig;
use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_core::secret::SigningSecret;
use showroom_database::memory::{MemoryLinkRegistry, MemoryVisibilityStore};
use showroom_database::registry::LinkRegistry;
use showroom_database::visibility::VisibilityStore;
use showroom_entity::share::{LinkFilters, ShareLink, SlugGrant};
use showroom_service::catalog::parse_catalog;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret-0123456789";
/// Admin account of every test app.
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

const CATALOG: &str = r#"[
    {"branch": "fashion", "name": "elegance", "type": "shop"},
    {"branch": "fashion", "name": "jewelry", "type": "shop"},
    {"branch": "gastro", "name": "saveur", "type": "restaurant"},
    {"branch": "sport", "name": "peak", "type": "shop"}
]"#;

/// Visibility store whose backend is down
pub struct UnavailableVisibilityStore;

#[async_trait]
impl VisibilityStore for UnavailableVisibilityStore {
    async fn hidden_slugs(&self) -> AppResult<HashSet<String>> {
        Err(AppError::service_unavailable("visibility store offline"))
    }

    async fn set_visible(&self, _slug: &str, _visible: bool) -> AppResult<()> {
        Err(AppError::service_unavailable("visibility store offline"))
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state behind the router
    pub state: AppState,
    /// Link registry shared with the router
    pub registry: Arc<MemoryLinkRegistry>,
    /// Visibility store shared with the router
    pub visibility: Arc<MemoryVisibilityStore>,
}

impl TestApp {
    /// Create a new test application on in-memory backends
    pub fn new() -> Self {
        let visibility = Arc::new(MemoryVisibilityStore::new());
        Self::build(Arc::clone(&visibility) as Arc<dyn VisibilityStore>, visibility)
    }

    /// Create a test application whose visibility store always fails
    pub fn with_unavailable_visibility() -> Self {
        Self::build(
            Arc::new(UnavailableVisibilityStore),
            Arc::new(MemoryVisibilityStore::new()),
        )
    }

    fn build(
        visibility_store: Arc<dyn VisibilityStore>,
        visibility: Arc<MemoryVisibilityStore>,
    ) -> Self {
        let mut config = AppConfig::default();
        config.server.public_base_url = "http://showroom.test".to_string();
        config.auth.admin_username = ADMIN_USER.to_string();
        config.auth.admin_password_hash = PasswordHasher::new()
            .hash_password(ADMIN_PASSWORD)
            .expect("Failed to hash password");

        let secret = SigningSecret::new(TEST_SECRET).expect("Invalid test secret");
        let catalog = parse_catalog(CATALOG).expect("Invalid test catalog");
        let registry = Arc::new(MemoryLinkRegistry::new());

        let state = AppState::new(
            config,
            &secret,
            catalog,
            Arc::clone(&registry) as Arc<dyn LinkRegistry>,
            visibility_store,
        );
        let router = showroom_api::build_app(state.clone());

        Self {
            router,
            state,
            registry,
            visibility,
        }
    }

    /// Codec bound to the test secret
    pub fn codec(&self) -> &TokenCodec {
        &self.state.codec
    }

    /// Signs a share token directly
    pub fn share_token(&self, link_id: &str, slugs: SlugGrant, expires_at: DateTime<Utc>) -> String {
        let claims = ShareClaims::new(link_id, slugs, Some("Test link".to_string()), expires_at);
        self.codec().encode(&claims).expect("Failed to sign share token")
    }

    /// Signs a share token for `slugs`, valid for a day
    pub fn share_token_for(&self, link_id: &str, slugs: &[&str]) -> String {
        self.share_token(
            link_id,
            SlugGrant::Only(slugs.iter().map(|s| s.to_string()).collect()),
            Utc::now() + Duration::days(1),
        )
    }

    /// Mints a share-session cookie value for `slugs`
    pub fn session_for(&self, slugs: &[&str]) -> String {
        let grant = SlugGrant::Only(slugs.iter().map(|s| s.to_string()).collect());
        self.state
            .sessions
            .issue("test-link", &grant, None)
            .expect("Failed to issue session")
            .token
    }

    /// Logs in through the API and returns the admin cookie value
    pub async fn admin_cookie(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/admin/login",
                Some(serde_json::json!({
                    "username": ADMIN_USER,
                    "password": ADMIN_PASSWORD,
                })),
                &[],
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response
            .cookie("admin-session")
            .expect("No admin-session cookie in login response")
    }

    /// Stores a registry link
    pub async fn seed_link(&self, link: ShareLink) {
        self.registry
            .create(&link)
            .await
            .expect("Failed to seed link");
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookies: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if !cookies.is_empty() {
            let header_value = cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            req = req.header(header::COOKIE, header_value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect();

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            text,
            location,
            set_cookies,
        }
    }
}

/// Builds a registry link active from now.
pub fn link(id: &str, filters: Option<LinkFilters>, allowed_slugs: Option<Vec<&str>>) -> ShareLink {
    ShareLink {
        id: id.to_string(),
        name: format!("Link {id}"),
        filters,
        allowed_slugs: allowed_slugs.map(|s| s.into_iter().map(String::from).collect()),
        created_at: Utc::now(),
        expires_at: None,
        is_active: true,
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Body parsed as JSON (`Null` when not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
    /// `Location` header
    pub location: Option<String>,
    /// Every `Set-Cookie` header
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// The value set for cookie `name`, if any.
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.set_cookie_header(name).and_then(|header| {
            header
                .split(';')
                .next()
                .and_then(|pair| pair.split_once('='))
                .map(|(_, value)| value.to_string())
        })
    }

    /// The full `Set-Cookie` header for cookie `name`, if any.
    pub fn set_cookie_header(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}=");
        self.set_cookies
            .iter()
            .find(|h| h.starts_with(&prefix))
            .map(String::as_str)
    }

    /// Template slugs listed under `data.templates`.
    pub fn template_slugs(&self) -> Vec<String> {
        self.body["data"]["templates"]
            .as_array()
            .map(|templates| {
                templates
                    .iter()
                    .filter_map(|t| {
                        let branch = t["branch"].as_str()?;
                        let name = t["name"].as_str()?;
                        Some(format!("{branch}/{name}"))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
