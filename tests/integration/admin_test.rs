//! Integration tests for admin login and share link management.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "username": "admin", "password": "nope" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert!(response.set_cookies.is_empty());
}

#[tokio::test]
async fn test_login_empty_username_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "username": "", "password": "x" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_sets_cookie_and_me_reports_identity() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;

    let response = app
        .request("GET", "/api/admin/me", None, &[("admin-session", admin.as_str())])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "admin");
}

#[tokio::test]
async fn test_admin_api_without_cookie_unauthorized_json() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/admin/links", None, &[]).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_session_cookie_not_accepted_as_admin() {
    let app = helpers::TestApp::new();
    let session = app.session_for(&[]);

    let response = app
        .request("GET", "/api/admin/me", None, &[("admin-session", session.as_str())])
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;

    let response = app
        .request(
            "POST",
            "/api/admin/logout",
            None,
            &[("admin-session", admin.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.cookie("admin-session").as_deref(), Some(""));
}

#[tokio::test]
async fn test_created_link_token_resolves_on_share_page() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;

    let created = app
        .request(
            "POST",
            "/api/admin/links",
            Some(json!({
                "name": "Fashion prospects",
                "filters": { "branches": ["fashion"], "types": [] },
            })),
            &[("admin-session", admin.as_str())],
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let id = created.body["data"]["link"]["id"].as_str().unwrap().to_string();
    let token = created.body["data"]["token"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 12);
    assert_eq!(
        created.body["data"]["shareUrl"],
        format!("http://showroom.test/s/{token}")
    );

    let by_token = app.request("GET", &format!("/s/{token}"), None, &[]).await;
    assert_eq!(
        by_token.template_slugs(),
        vec!["fashion/elegance", "fashion/jewelry"]
    );

    let by_id = app.request("GET", &format!("/s/{id}"), None, &[]).await;
    assert_eq!(by_id.template_slugs(), by_token.template_slugs());
}

#[tokio::test]
async fn test_create_link_with_unknown_slug_rejected() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;

    let response = app
        .request(
            "POST",
            "/api/admin/links",
            Some(json!({ "name": "Broken", "allowedSlugs": ["ghost/site"] })),
            &[("admin-session", admin.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_link_name_too_long_rejected() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;

    let response = app
        .request(
            "POST",
            "/api/admin/links",
            Some(json!({ "name": "x".repeat(121) })),
            &[("admin-session", admin.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deactivation_kills_legacy_id_but_not_signed_token() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;
    let cookies = [("admin-session", admin.as_str())];

    let created = app
        .request(
            "POST",
            "/api/admin/links",
            Some(json!({ "name": "Sport", "allowedSlugs": ["sport/peak"] })),
            &cookies,
        )
        .await;
    let id = created.body["data"]["link"]["id"].as_str().unwrap().to_string();
    let token = created.body["data"]["token"].as_str().unwrap().to_string();

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/links/{id}"),
            Some(json!({ "isActive": false })),
            &cookies,
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["status"], "deactivated");

    let by_id = app.request("GET", &format!("/s/{id}"), None, &[]).await;
    assert_eq!(by_id.body["error"], "LINK_INVALID");

    let by_token = app.request("GET", &format!("/s/{token}"), None, &[]).await;
    assert_eq!(by_token.status, StatusCode::OK);
    assert_eq!(by_token.template_slugs(), vec!["sport/peak"]);

    let reissue = app
        .request(
            "GET",
            &format!("/api/admin/links/{id}/token"),
            None,
            &cookies,
        )
        .await;
    assert_eq!(reissue.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_get_delete_link() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;
    let cookies = [("admin-session", admin.as_str())];

    let created = app
        .request(
            "POST",
            "/api/admin/links",
            Some(json!({ "name": "Everything" })),
            &cookies,
        )
        .await;
    let id = created.body["data"]["link"]["id"].as_str().unwrap().to_string();

    let list = app.request("GET", "/api/admin/links", None, &cookies).await;
    assert_eq!(list.body["data"].as_array().unwrap().len(), 1);

    let fetched = app
        .request("GET", &format!("/api/admin/links/{id}"), None, &cookies)
        .await;
    assert_eq!(fetched.body["data"]["name"], "Everything");
    assert_eq!(fetched.body["data"]["status"], "active");

    let deleted = app
        .request("DELETE", &format!("/api/admin/links/{id}"), None, &cookies)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let missing = app
        .request("GET", &format!("/api/admin/links/{id}"), None, &cookies)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_visibility_toggle_round_trip() {
    let app = helpers::TestApp::new();
    let admin = app.admin_cookie().await;
    let cookies = [("admin-session", admin.as_str())];

    let hidden = app
        .request(
            "PUT",
            "/api/admin/templates/gastro/saveur/visibility",
            Some(json!({ "visible": false })),
            &cookies,
        )
        .await;
    assert_eq!(hidden.status, StatusCode::OK);
    assert_eq!(hidden.body["data"]["visible"], false);

    let listed = app.request("GET", "/api/admin/templates", None, &cookies).await;
    let saveur = listed.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["slug"] == "gastro/saveur")
        .cloned()
        .unwrap();
    assert_eq!(saveur["visible"], false);

    let unknown = app
        .request(
            "PUT",
            "/api/admin/templates/ghost/site/visibility",
            Some(json!({ "visible": false })),
            &cookies,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}
