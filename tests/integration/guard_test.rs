//! Integration tests for the access guard on page paths.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;

use showroom_auth::token::SessionClaims;
use showroom_entity::share::SlugGrant;

#[tokio::test]
async fn test_root_without_cookies_serves_blocked_view() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.location.is_none());
    assert!(response.text.contains("This showroom is private"));
    assert!(response.set_cookies.is_empty());
}

#[tokio::test]
async fn test_blocked_page_matches_root_rewrite() {
    let app = helpers::TestApp::new();

    let blocked = app.request("GET", "/blocked", None, &[]).await;
    let root = app.request("GET", "/", None, &[]).await;

    assert_eq!(blocked.status, StatusCode::OK);
    assert_eq!(blocked.text, root.text);
}

#[tokio::test]
async fn test_root_with_any_session_lists_its_templates() {
    let app = helpers::TestApp::new();
    let session = app.session_for(&["sport/peak"]);

    let response = app
        .request("GET", "/", None, &[("share-session", session.as_str())])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["viewer"], "session");
    assert_eq!(response.template_slugs(), vec!["sport/peak"]);
}

#[tokio::test]
async fn test_root_with_empty_grant_still_allowed() {
    let app = helpers::TestApp::new();
    let session = app.session_for(&[]);

    let response = app
        .request("GET", "/", None, &[("share-session", session.as_str())])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.template_slugs().is_empty());
}

#[tokio::test]
async fn test_root_with_expired_session_is_blocked() {
    let app = helpers::TestApp::new();
    let mut claims = SessionClaims::new("abc123", SlugGrant::All, None, Duration::days(30));
    claims.exp = Utc::now().timestamp() - 60;
    let expired = app.codec().encode(&claims).unwrap();

    let response = app
        .request("GET", "/", None, &[("share-session", expired.as_str())])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("This showroom is private"));
}

#[tokio::test]
async fn test_template_outside_session_scope_redirects_to_root() {
    let app = helpers::TestApp::new();
    let session = app.session_for(&["sport/peak"]);

    let response = app
        .request(
            "GET",
            "/templates/fashion/elegance/cart",
            None,
            &[("share-session", session.as_str())],
        )
        .await;

    assert!(response.status.is_redirection());
    assert_eq!(response.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_template_inside_session_scope_allowed() {
    let app = helpers::TestApp::new();
    let session = app.session_for(&["sport/peak"]);

    let response = app
        .request(
            "GET",
            "/templates/sport/peak/shop",
            None,
            &[("share-session", session.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["slug"], "sport/peak");
    assert_eq!(response.body["data"]["page"], "shop");
}

#[tokio::test]
async fn test_template_without_session_redirects_to_root() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/templates/sport/peak", None, &[])
        .await;

    assert!(response.status.is_redirection());
    assert_eq!(response.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_template_with_forged_session_redirects_to_root() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "GET",
            "/templates/sport/peak",
            None,
            &[("share-session", "eyJhbGciOiJIUzI1NiJ9.e30.forged")],
        )
        .await;

    assert_eq!(response.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_static_asset_needs_no_credential() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/templates/fashion/elegance/hero.png", None, &[])
        .await;

    assert!(!response.status.is_redirection());
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn test_asset_suffix_does_not_expose_template_page() {
    let app = helpers::TestApp::new();

    let plain = app
        .request("GET", "/templates/fashion/elegance/cart", None, &[])
        .await;
    assert_eq!(plain.location.as_deref(), Some("/"));

    let suffixed = app
        .request("GET", "/templates/fashion/elegance/cart.json", None, &[])
        .await;
    assert_eq!(suffixed.location.as_deref(), Some("/"));

    let styled = app
        .request("GET", "/templates/fashion/elegance/cart.css", None, &[])
        .await;
    assert_eq!(styled.status, StatusCode::NOT_FOUND);
    assert!(!styled.text.contains("fashion/elegance"));
}

#[tokio::test]
async fn test_asset_suffix_does_not_expose_admin_panel() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/admin/links.css", None, &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn test_template_redirects_home_when_visibility_unavailable() {
    let app = helpers::TestApp::with_unavailable_visibility();
    let session = app
        .state
        .sessions
        .issue("test-link", &SlugGrant::All, None)
        .unwrap()
        .token;

    let response = app
        .request(
            "GET",
            "/templates/fashion/elegance",
            None,
            &[("share-session", session.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location.as_deref(), Some("/"));
    assert!(!response.text.contains("SERVICE_UNAVAILABLE"));
}

#[tokio::test]
async fn test_root_blocked_when_visibility_unavailable() {
    let app = helpers::TestApp::with_unavailable_visibility();
    let session = app.session_for(&["sport/peak"]);

    let response = app
        .request("GET", "/", None, &[("share-session", session.as_str())])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("This showroom is private"));
}

#[tokio::test]
async fn test_admin_path_without_cookie_redirects_to_login() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/admin/links", None, &[]).await;

    assert!(response.status.is_redirection());
    assert_eq!(response.location.as_deref(), Some("/admin/login"));
    assert!(response.set_cookie_header("admin-session").is_none());
}

#[tokio::test]
async fn test_admin_path_with_bad_cookie_clears_it() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/admin/links", None, &[("admin-session", "garbage")])
        .await;

    assert_eq!(response.location.as_deref(), Some("/admin/login"));
    assert_eq!(response.cookie("admin-session").as_deref(), Some(""));
}

#[tokio::test]
async fn test_session_cookie_does_not_open_admin() {
    let app = helpers::TestApp::new();
    let session = app.session_for(&["sport/peak"]);

    let response = app
        .request("GET", "/admin", None, &[("share-session", session.as_str())])
        .await;

    assert_eq!(response.location.as_deref(), Some("/admin/login"));
}

#[tokio::test]
async fn test_admin_login_page_always_open() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/admin/login", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_cookie_opens_admin_and_every_template() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;

    let panel = app
        .request("GET", "/admin/links", None, &[("admin-session", admin.as_str())])
        .await;
    assert_eq!(panel.status, StatusCode::OK);
    assert_eq!(panel.body["data"]["username"], "admin");

    let template = app
        .request(
            "GET",
            "/templates/gastro/saveur",
            None,
            &[("admin-session", admin.as_str())],
        )
        .await;
    assert_eq!(template.status, StatusCode::OK);
}

#[tokio::test]
async fn test_root_as_admin_lists_catalog_with_visibility() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;
    app.state
        .catalog_service
        .set_visibility("gastro/saveur", false)
        .await
        .unwrap();

    let response = app
        .request("GET", "/", None, &[("admin-session", admin.as_str())])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["viewer"], "admin");
    let templates = response.body["data"]["templates"].as_array().unwrap();
    assert_eq!(templates.len(), 4);
    let saveur = templates
        .iter()
        .find(|t| t["slug"] == "gastro/saveur")
        .unwrap();
    assert_eq!(saveur["visible"], false);
}

#[tokio::test]
async fn test_other_paths_unrestricted() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
