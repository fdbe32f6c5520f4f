//! Session lifecycle against a mocked backend.
//!
//! Covers startup validation of a persisted token, login/signup persisting the
//! issued token, failure messages, and logout.

use anyhow::Result;
use edu_client::{
    ApiClient, AuthState, ClientConfig, ClientError, GuardDecision, MemoryTokenStore, SessionManager, TokenStore, require_auth, session::login_error_message
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate, matchers::{body_json, header, method, path}
};

fn manager(server: &MockServer, store: MemoryTokenStore) -> Result<SessionManager<MemoryTokenStore>> {
    let config = ClientConfig::new(&server.uri())?;
    Ok(SessionManager::new(ApiClient::new(&config), store))
}

#[tokio::test]
async fn no_persisted_token_starts_anonymous_without_calling_backend() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(path("/api/auth/validate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = manager(&server, MemoryTokenStore::new())?.restore().await;

    assert_eq!(state, AuthState::anonymous());
    assert_eq!(require_auth(&state), GuardDecision::Redirect("/login"));
    Ok(())
}

#[tokio::test]
async fn session_is_unsettled_until_restore_finishes() -> Result<()> {
    let server = MockServer::start().await;

    let initial = AuthState::default();
    assert!(!initial.is_settled());
    assert_eq!(require_auth(&initial), GuardDecision::Pending);

    let restored = manager(&server, MemoryTokenStore::new())?.restore().await;
    assert!(restored.is_settled());
    Ok(())
}

#[tokio::test]
async fn valid_persisted_token_restores_user() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/validate"))
        .and(header("Authorization", "Bearer good-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "username": "ada",
            "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("good-token");
    let state = manager(&server, store.clone())?.restore().await;

    assert!(!state.loading);
    assert_eq!(state.username(), Some("ada"));
    assert_eq!(state.user.as_ref().and_then(|u| u.email.as_deref()), Some("ada@example.com"));
    assert_eq!(store.load().as_deref(), Some("good-token"));
    assert_eq!(require_auth(&state), GuardDecision::Allow);
    Ok(())
}

#[tokio::test]
async fn rejected_persisted_token_is_cleared() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/validate"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expired" })))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("stale-token");
    let state = manager(&server, store.clone())?.restore().await;

    assert_eq!(state, AuthState::anonymous());
    assert_eq!(store.load(), None);
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_on_startup_clears_token() -> Result<()> {
    // Nothing listens on the mock server's address once it is dropped.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let store = MemoryTokenStore::with_token("some-token");
    let session = SessionManager::new(ApiClient::new(&ClientConfig::new(&uri)?), store.clone());

    assert_eq!(session.restore().await, AuthState::anonymous());
    assert_eq!(store.load(), None);
    Ok(())
}

#[tokio::test]
async fn login_persists_token_and_populates_user() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "ada", "password": "lovelace" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "username": "ada",
            "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::new();
    let session = manager(&server, store.clone())?;
    let state = session.login("ada", "lovelace").await?;

    assert_eq!(state.username(), Some("ada"));
    assert!(state.user.as_ref().is_some_and(|u| !u.extra.contains_key("token")));
    assert_eq!(store.load().as_deref(), Some("fresh-token"));
    assert_eq!(session.api().bearer(), Some("fresh-token"));
    Ok(())
}

#[tokio::test]
async fn failed_login_reports_server_message_and_persists_nothing() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid username or password" })))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::new();
    let err = manager(&server, store.clone())?.login("ada", "wrong").await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized { .. }));
    assert_eq!(login_error_message(&err), "Invalid username or password");
    assert_eq!(store.load(), None);
    Ok(())
}

#[tokio::test]
async fn failed_login_without_message_uses_fallback() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = manager(&server, MemoryTokenStore::new())?.login("ada", "x").await.unwrap_err();

    assert_eq!(err, ClientError::Server { status: 500, message: None });
    assert_eq!(login_error_message(&err), "Login failed");
    Ok(())
}

#[tokio::test]
async fn signup_persists_token_and_populates_user() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(json!({ "username": "grace", "email": "grace@example.com", "password": "cobol" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "signup-token",
            "username": "grace",
            "email": "grace@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::new();
    let state = manager(&server, store.clone())?
        .signup("grace", "grace@example.com", "cobol")
        .await?;

    assert_eq!(state.username(), Some("grace"));
    assert_eq!(store.load().as_deref(), Some("signup-token"));
    Ok(())
}

#[tokio::test]
async fn signup_conflict_surfaces_message() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Username is already taken" })))
        .mount(&server)
        .await;

    let err = manager(&server, MemoryTokenStore::new())?
        .signup("ada", "ada@example.com", "x")
        .await
        .unwrap_err();

    assert_eq!(edu_client::session::signup_error_message(&err), "Username is already taken");
    Ok(())
}

#[tokio::test]
async fn logout_clears_token_and_session() -> Result<()> {
    let server = MockServer::start().await;
    let store = MemoryTokenStore::with_token("t");
    let session = manager(&server, store.clone())?;

    let state = session.logout();

    assert_eq!(state, AuthState::anonymous());
    assert_eq!(store.load(), None);
    assert_eq!(session.api().bearer(), None);
    Ok(())
}
