//! Integration tests for the share page and link resolution.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;

use showroom_entity::share::{LinkFilters, SlugGrant};

fn fashion_filters() -> Option<LinkFilters> {
    Some(LinkFilters {
        branches: vec!["fashion".into()],
        types: vec![],
    })
}

fn assert_link_invalid(response: &helpers::TestResponse) {
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "LINK_INVALID");
    assert!(response.set_cookies.is_empty());
}

#[tokio::test]
async fn test_signed_token_renders_exact_slugs_and_sets_session() {
    let app = helpers::TestApp::new();
    let token = app.share_token_for("abc123", &["sport/peak", "gastro/saveur"]);

    let response = app.request("GET", &format!("/s/{token}"), None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Test link");
    // Catalog order, not token order.
    assert_eq!(response.template_slugs(), vec!["gastro/saveur", "sport/peak"]);
    assert!(response.cookie("share-session").is_some());
}

#[tokio::test]
async fn test_signed_token_needs_no_registry_record() {
    let app = helpers::TestApp::new();
    let token = app.share_token_for("never-stored", &["fashion/elegance"]);

    let response = app.request("GET", &format!("/s/{token}"), None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.template_slugs(), vec!["fashion/elegance"]);
}

#[tokio::test]
async fn test_signed_token_with_empty_list_grants_nothing() {
    let app = helpers::TestApp::new();
    let token = app.share_token("abc123", SlugGrant::Only(vec![]), Utc::now() + Duration::days(1));

    let response = app.request("GET", &format!("/s/{token}"), None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.template_slugs().is_empty());
}

#[tokio::test]
async fn test_legacy_id_resolves_filters() {
    let app = helpers::TestApp::new();
    app.seed_link(helpers::link("abc123", fashion_filters(), None))
        .await;

    let response = app.request("GET", "/s/abc123", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.template_slugs(),
        vec!["fashion/elegance", "fashion/jewelry"]
    );
    assert_eq!(response.body["data"]["name"], "Link abc123");

    let session = response.cookie("share-session").unwrap();
    let claims = app.state.sessions.verify(&session).unwrap();
    assert_eq!(claims.sub, "abc123");
    assert!(claims.allows("fashion/jewelry"));
    assert!(!claims.allows("gastro/saveur"));
}

#[tokio::test]
async fn test_legacy_allow_list_overrides_filters() {
    let app = helpers::TestApp::new();
    app.seed_link(helpers::link(
        "abc123",
        fashion_filters(),
        Some(vec!["gastro/saveur"]),
    ))
    .await;

    let response = app.request("GET", "/s/abc123", None, &[]).await;

    assert_eq!(response.template_slugs(), vec!["gastro/saveur"]);
}

#[tokio::test]
async fn test_legacy_without_filters_grants_whole_catalog() {
    let app = helpers::TestApp::new();
    app.seed_link(helpers::link("open01", Some(LinkFilters::default()), None))
        .await;

    let response = app.request("GET", "/s/open01", None, &[]).await;

    assert_eq!(response.template_slugs().len(), 4);
}

#[tokio::test]
async fn test_deactivated_legacy_link_invalid() {
    let app = helpers::TestApp::new();
    let mut link = helpers::link("abc123", None, Some(vec!["sport/peak"]));
    link.is_active = false;
    app.seed_link(link).await;

    let response = app.request("GET", "/s/abc123", None, &[]).await;

    assert_link_invalid(&response);
}

#[tokio::test]
async fn test_expired_legacy_link_invalid() {
    let app = helpers::TestApp::new();
    let mut link = helpers::link("abc123", fashion_filters(), None);
    link.expires_at = Some(Utc::now() - Duration::hours(1));
    app.seed_link(link).await;

    let response = app.request("GET", "/s/abc123", None, &[]).await;

    assert_link_invalid(&response);
}

#[tokio::test]
async fn test_unknown_reference_invalid() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/s/doesnotexist", None, &[]).await;

    assert_link_invalid(&response);
}

#[tokio::test]
async fn test_expired_token_falls_back_and_fails() {
    let app = helpers::TestApp::new();
    let token = app.share_token(
        "abc123",
        SlugGrant::All,
        Utc::now() - Duration::minutes(1),
    );

    let response = app.request("GET", &format!("/s/{token}"), None, &[]).await;

    assert_link_invalid(&response);
}

#[tokio::test]
async fn test_rejections_share_one_message() {
    let app = helpers::TestApp::new();
    let mut link = helpers::link("off001", None, None);
    link.is_active = false;
    app.seed_link(link).await;

    let deactivated = app.request("GET", "/s/off001", None, &[]).await;
    let unknown = app.request("GET", "/s/nope", None, &[]).await;

    assert_eq!(deactivated.body, unknown.body);
}

#[tokio::test]
async fn test_hidden_template_filtered_from_share_page() {
    let app = helpers::TestApp::new();
    app.state
        .catalog_service
        .set_visibility("fashion/jewelry", false)
        .await
        .unwrap();
    let token = app.share_token_for("abc123", &["fashion/elegance", "fashion/jewelry"]);

    let response = app.request("GET", &format!("/s/{token}"), None, &[]).await;

    assert_eq!(response.template_slugs(), vec!["fashion/elegance"]);
}

#[tokio::test]
async fn test_hidden_template_page_not_found_for_session() {
    let app = helpers::TestApp::new();
    app.state
        .catalog_service
        .set_visibility("sport/peak", false)
        .await
        .unwrap();
    let session = app.session_for(&["sport/peak"]);

    let response = app
        .request(
            "GET",
            "/templates/sport/peak",
            None,
            &[("share-session", session.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
