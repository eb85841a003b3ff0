//! Integration tests for the activation endpoint.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;

use showroom_auth::token::{ShareClaims, TokenCodec};
use showroom_core::secret::SigningSecret;
use showroom_entity::share::SlugGrant;

#[tokio::test]
async fn test_valid_token_sets_session_and_redirects_to_share_page() {
    let app = helpers::TestApp::new();
    let token = app.share_token_for("abc123", &["sport/peak"]);

    let response = app
        .request("GET", &format!("/api/activate?token={token}"), None, &[])
        .await;

    assert!(response.status.is_redirection());
    assert_eq!(response.location, Some(format!("/s/{token}")));

    let header = response
        .set_cookie_header("share-session")
        .expect("share-session cookie not set");
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));
    assert!(header.contains("Path=/"));
    assert!(header.contains("Max-Age=2592000"));
}

#[tokio::test]
async fn test_activated_session_carries_token_grant() {
    let app = helpers::TestApp::new();
    let token = app.share_token_for("abc123", &["sport/peak"]);

    let response = app
        .request("GET", &format!("/api/activate?token={token}"), None, &[])
        .await;
    let session = response.cookie("share-session").unwrap();

    let allowed = app
        .request(
            "GET",
            "/templates/sport/peak",
            None,
            &[("share-session", session.as_str())],
        )
        .await;
    assert_eq!(allowed.status, StatusCode::OK);

    let denied = app
        .request(
            "GET",
            "/templates/fashion/elegance",
            None,
            &[("share-session", session.as_str())],
        )
        .await;
    assert_eq!(denied.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_expired_token_redirects_to_blocked_without_cookie() {
    let app = helpers::TestApp::new();
    let token = app.share_token(
        "abc123",
        SlugGrant::Only(vec!["sport/peak".into()]),
        Utc::now() - Duration::minutes(5),
    );

    let response = app
        .request("GET", &format!("/api/activate?token={token}"), None, &[])
        .await;

    assert!(response.status.is_redirection());
    assert_eq!(response.location.as_deref(), Some("/blocked"));
    assert!(response.set_cookies.is_empty());
}

#[tokio::test]
async fn test_garbage_token_redirects_to_blocked() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/activate?token=not-a-token", None, &[])
        .await;

    assert_eq!(response.location.as_deref(), Some("/blocked"));
    assert!(response.set_cookies.is_empty());
    assert!(response.text.is_empty());
}

#[tokio::test]
async fn test_missing_token_redirects_to_blocked() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/activate", None, &[]).await;

    assert_eq!(response.location.as_deref(), Some("/blocked"));
    assert!(response.set_cookies.is_empty());
}

#[tokio::test]
async fn test_token_from_another_secret_redirects_to_blocked() {
    let app = helpers::TestApp::new();
    let foreign = TokenCodec::new(&SigningSecret::new("some-other-deployment-secret-xyz").unwrap());
    let claims = ShareClaims::new(
        "abc123",
        SlugGrant::All,
        None,
        Utc::now() + Duration::days(1),
    );
    let token = foreign.encode(&claims).unwrap();

    let response = app
        .request("GET", &format!("/api/activate?token={token}"), None, &[])
        .await;

    assert_eq!(response.location.as_deref(), Some("/blocked"));
    assert!(response.set_cookies.is_empty());
}

#[tokio::test]
async fn test_session_cookie_cannot_activate() {
    let app = helpers::TestApp::new();
    let session = app.session_for(&["sport/peak"]);

    let response = app
        .request("GET", &format!("/api/activate?token={session}"), None, &[])
        .await;

    assert_eq!(response.location.as_deref(), Some("/blocked"));
}

#[tokio::test]
async fn test_track_visit_mints_session() {
    let app = helpers::TestApp::new();
    let token = app.share_token_for("abc123", &["fashion/jewelry"]);

    let response = app
        .request(
            "POST",
            "/api/track",
            Some(serde_json::json!({ "type": "visit", "token": token })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let session = response.cookie("share-session").unwrap();
    let claims = app.state.sessions.verify(&session).unwrap();
    assert!(claims.allows("fashion/jewelry"));
    assert!(!claims.allows("sport/peak"));
}

#[tokio::test]
async fn test_track_click_sets_no_cookie() {
    let app = helpers::TestApp::new();
    let token = app.share_token_for("abc123", &["fashion/jewelry"]);

    let response = app
        .request(
            "POST",
            "/api/track",
            Some(serde_json::json!({
                "type": "click",
                "token": token,
                "template_slug": "fashion/jewelry",
            })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookies.is_empty());
}
