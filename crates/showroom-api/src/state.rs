//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use showroom_auth::admin::AdminAuthenticator;
use showroom_auth::guard::AccessGuard;
use showroom_auth::resolver::LinkResolver;
use showroom_auth::session::SessionIssuer;
use showroom_auth::token::TokenCodec;
use showroom_core::config::AppConfig;
use showroom_core::secret::SigningSecret;
use showroom_database::registry::LinkRegistry;
use showroom_database::visibility::VisibilityStore;
use showroom_entity::template::TemplateCatalog;
use showroom_service::catalog::CatalogService;
use showroom_service::link::LinkService;
use showroom_service::tracking::TrackingService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Access control ───────────────────────────────────────
    /// Token codec bound to the signing secret
    pub codec: TokenCodec,
    /// Share token / legacy id resolution
    pub resolver: Arc<LinkResolver>,
    /// Share session minting and verification
    pub sessions: Arc<SessionIssuer>,
    /// Admin login and credential verification
    pub admin: Arc<AdminAuthenticator>,
    /// Per-request access decisions
    pub guard: Arc<AccessGuard>,

    // ── Services ─────────────────────────────────────────────
    /// Catalog with visibility
    pub catalog_service: Arc<CatalogService>,
    /// Share link management
    pub link_service: Arc<LinkService>,
    /// Visit/click tracking
    pub tracking_service: Arc<TrackingService>,
}

impl AppState {
    /// Wires every component from configuration, the loaded secret and
    /// catalog, and the selected storage backends.
    pub fn new(
        config: AppConfig,
        secret: &SigningSecret,
        catalog: TemplateCatalog,
        registry: Arc<dyn LinkRegistry>,
        visibility: Arc<dyn VisibilityStore>,
    ) -> Self {
        let codec = TokenCodec::new(secret);
        let catalog = Arc::new(catalog);

        let resolver = Arc::new(LinkResolver::new(
            codec.clone(),
            Arc::clone(&registry),
            Arc::clone(&catalog),
        ));
        let sessions = Arc::new(SessionIssuer::new(codec.clone(), &config.session));
        let admin = Arc::new(AdminAuthenticator::new(codec.clone(), &config.auth));
        let guard = Arc::new(AccessGuard::new(Arc::clone(&admin), Arc::clone(&sessions)));

        let catalog_service = Arc::new(CatalogService::new(Arc::clone(&catalog), visibility));
        let link_service = Arc::new(LinkService::new(
            registry,
            catalog,
            codec.clone(),
            &config.auth,
            &config.server,
        ));
        let tracking_service = Arc::new(TrackingService::new(codec.clone(), Arc::clone(&sessions)));

        Self {
            config: Arc::new(config),
            codec,
            resolver,
            sessions,
            admin,
            guard,
            catalog_service,
            link_service,
            tracking_service,
        }
    }

    /// Whether credential cookies carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.config.session.secure_cookies
    }
}
