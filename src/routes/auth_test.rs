use super::*;

use axum::extract::FromRequestParts;

use crate::state::test_helpers::{logged_in_app_state, test_app_state};

fn login_req(email: &str, password: &str) -> Json<LoginRequest> {
    Json(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

async fn extract_auth(state: &crate::state::AppState) -> Result<AuthUser, StatusCode> {
    let (mut parts, ()) = axum::http::Request::builder()
        .uri("/api/auth/me")
        .body(())
        .unwrap()
        .into_parts();
    AuthUser::from_request_parts(&mut parts, state).await
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_succeeds_with_any_credentials() {
    let state = test_app_state();
    let response = login(State(state.clone()), login_req("alice@example.com", "x")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.session.is_authenticated());
}

#[tokio::test]
async fn login_trims_identifier() {
    let state = test_app_state();
    login(State(state.clone()), login_req("  alice@example.com  ", "x")).await;
    assert_eq!(state.session.current_user().unwrap().email, "alice@example.com");
}

#[tokio::test]
async fn login_rejects_empty_email() {
    let state = test_app_state();
    let response = login(State(state.clone()), login_req("   ", "x")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!state.session.is_authenticated());
}

#[tokio::test]
async fn login_rejects_empty_password() {
    let state = test_app_state();
    let response = login(State(state.clone()), login_req("alice@example.com", "")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!state.session.is_authenticated());
}

// =============================================================================
// logout
// =============================================================================

#[tokio::test]
async fn logout_clears_session() {
    let state = logged_in_app_state();
    assert_eq!(logout(State(state.clone())).await, StatusCode::NO_CONTENT);
    assert!(!state.session.is_authenticated());
}

#[tokio::test]
async fn logout_when_logged_out_is_noop() {
    let state = test_app_state();
    assert_eq!(logout(State(state.clone())).await, StatusCode::NO_CONTENT);
    assert!(!state.session.is_authenticated());
}

// =============================================================================
// AuthUser extractor
// =============================================================================

#[tokio::test]
async fn extractor_rejects_logged_out() {
    let state = test_app_state();
    assert_eq!(extract_auth(&state).await.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn extractor_yields_current_user() {
    let state = logged_in_app_state();
    let auth = extract_auth(&state).await.unwrap();
    assert_eq!(auth.user.name, "alice");
    assert_eq!(auth.user.email, "alice@example.com");
}

#[tokio::test]
async fn me_returns_session_user() {
    let state = logged_in_app_state();
    let auth = extract_auth(&state).await.unwrap();
    let Json(user) = me(auth).await;
    assert_eq!(user, state.session.current_user().unwrap());
}
