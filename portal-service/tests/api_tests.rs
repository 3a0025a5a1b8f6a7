mod common;

use auth::Domain;
use auth::LegacySha256Hasher;
use auth::PasswordHasher;
use common::credential;
use common::TestApp;
use common::ADMIN_PASSWORD;
use common::ADMIN_USERNAME;
use common::PENDING_PASSWORD;
use common::PENDING_USERNAME;
use common::REGISTRANT_PASSWORD;
use common::REGISTRANT_USERNAME;
use portal_service::account::models::AccountStatus;
use portal_service::account::models::Role;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_login_success() {
    let app = TestApp::spawn().await;

    let response = app
        .login(Domain::Admin, ADMIN_USERNAME, ADMIN_PASSWORD)
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 200);
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["user"]["username"], ADMIN_USERNAME);
    assert_eq!(body["data"]["user"]["domain"], "admin");
    assert_eq!(body["data"]["user"]["id"], app.admin_id.to_string());
    assert!(body["data"]["user"].get("password_digest").is_none());
}

#[tokio::test]
async fn test_admin_login_token_carries_identity() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let claims = app
        .authenticator
        .validate_token(&token)
        .expect("Issued token should validate");

    assert!(claims.identity().is_admin());
    assert_eq!(claims.identity().id(), app.admin_id);
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_identical() {
    let app = TestApp::spawn().await;

    let wrong_password = app
        .login(Domain::Admin, ADMIN_USERNAME, "not-the-password")
        .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();

    let unknown_user = app.login(Domain::Admin, "nobody", ADMIN_PASSWORD).await;
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    let unknown_user: serde_json::Value = unknown_user.json().await.unwrap();

    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["status_code"], 401);
    assert!(wrong_password["data"]["message"].is_string());
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::spawn().await;

    for body in [
        json!({ "username": ADMIN_USERNAME }),
        json!({ "password": ADMIN_PASSWORD }),
        json!({ "username": "", "password": ADMIN_PASSWORD }),
        json!({}),
    ] {
        let response = app
            .post("/api/admin/auth/login")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_login_malformed_json() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_session_end_to_end() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let response = app
        .get_authenticated("/api/admin/session", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], ADMIN_USERNAME);
    assert_eq!(body["data"]["level"], 1);
}

#[tokio::test]
async fn test_altered_token_is_rejected() {
    let app = TestApp::spawn().await;
    let mut token = app.admin_token().await;

    let last = token.pop().unwrap();
    token.push(if last == 'A' { 'B' } else { 'A' });

    let response = app
        .get_authenticated("/api/admin/session", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_or_malformed_authorization_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get("/api/admin/session")
        .header("authorization", "Token xyz")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_registrant_cannot_reach_admin_routes() {
    let app = TestApp::spawn().await;
    let token = app.registrant_token().await;

    let response = app
        .get_authenticated("/api/admin/session", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .post_authenticated("/api/admin/codes", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_me_returns_token_identity() {
    let app = TestApp::spawn().await;
    let token = app.registrant_token().await;

    let response = app
        .get_authenticated("/api/auth/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], app.registrant_id.to_string());
    assert_eq!(body["data"]["domain"], "registrant");
    assert_eq!(body["data"]["account_type"], "personal");
}

#[tokio::test]
async fn test_profile_reflects_store() {
    let app = TestApp::spawn().await;
    let token = app.registrant_token().await;

    let response = app
        .get_authenticated("/api/auth/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], REGISTRANT_USERNAME);
    assert_eq!(body["data"]["status"], "active");

    app.store
        .remove(Domain::Registrant, app.registrant_id)
        .await
        .expect("Registrant should exist");

    let response = app
        .get_authenticated("/api/auth/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The token itself stays valid until it expires.
    let response = app
        .get_authenticated("/api/auth/me", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_wrong_old_password() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let response = app
        .put_authenticated("/api/auth/password", &token)
        .json(&json!({
            "old_password": "not-the-password",
            "new_password": "brand-new-secret"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Old credentials still work.
    let response = app
        .login(Domain::Admin, ADMIN_USERNAME, ADMIN_PASSWORD)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_success() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let response = app
        .put_authenticated("/api/auth/password", &token)
        .json(&json!({
            "old_password": ADMIN_PASSWORD,
            "new_password": "brand-new-secret"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .login(Domain::Admin, ADMIN_USERNAME, ADMIN_PASSWORD)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .login(Domain::Admin, ADMIN_USERNAME, "brand-new-secret")
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_missing_field() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let response = app
        .put_authenticated("/api/auth/password", &token)
        .json(&json!({ "old_password": ADMIN_PASSWORD }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_code() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let response = app
        .post_authenticated("/api/admin/codes", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let code = body["data"]["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);

    let response = app
        .post_authenticated("/api/admin/codes?length=20", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let code = body["data"]["code"].as_str().unwrap();
    assert_eq!(code.len(), 20);
    assert!(code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[tokio::test]
async fn test_generate_code_rejects_bad_length() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    for query in ["length=0", "length=65", "length=abc"] {
        let response = app
            .post_authenticated(&format!("/api/admin/codes?{query}"), &token)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_domains_are_isolated() {
    let app = TestApp::spawn().await;

    // Admin credentials mean nothing on the registrant endpoint.
    let response = app
        .login(Domain::Registrant, ADMIN_USERNAME, ADMIN_PASSWORD)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .login(Domain::Admin, REGISTRANT_USERNAME, REGISTRANT_PASSWORD)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_inactive_account_cannot_log_in() {
    let app = TestApp::spawn().await;

    let inactive = app
        .login(Domain::Registrant, PENDING_USERNAME, PENDING_PASSWORD)
        .await;
    assert_eq!(inactive.status(), StatusCode::UNAUTHORIZED);
    let inactive: serde_json::Value = inactive.json().await.unwrap();

    let wrong_password = app
        .login(Domain::Registrant, PENDING_USERNAME, "not-the-password")
        .await;
    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();

    assert_eq!(inactive, wrong_password);
}

#[tokio::test]
async fn test_login_with_unconventional_usernames() {
    let app = TestApp::spawn().await;
    let hasher = LegacySha256Hasher::new();

    for username in ["john.doe", "jo", "ops@portal.id"] {
        app.store
            .insert(credential(
                username,
                hasher.hash("pw-for-dotted").unwrap(),
                Role::Admin { level: 2 },
                AccountStatus::Active,
            ))
            .await
            .expect("Failed to seed admin");

        let response = app.login(Domain::Admin, username, "pw-for-dotted").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["data"]["user"]["username"], username);
    }
}

#[tokio::test]
async fn test_login_blank_username() {
    let app = TestApp::spawn().await;

    let response = app.login(Domain::Admin, "   ", ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
