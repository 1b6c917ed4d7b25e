//! Auth routes — mock login, logout, current user.
//!
//! The login endpoint accepts any non-empty credentials by design; the only
//! rejection is the form-level "required field" check. Real verification
//! would plug in behind `SessionGuard::login`.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use crate::services::session::UserRecord;
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user pulled from the process-wide session guard.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: UserRecord,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(_parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let user = app_state
            .session
            .current_user()
            .ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` — mock login; any non-empty credentials succeed.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, "email and password are required").into_response();
    }

    let user = state.session.login(req.email.trim(), &req.password);
    Json(user).into_response()
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<UserRecord> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — clear the session. Idempotent, so no auth
/// required: logging out while logged out is a no-op.
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.session.logout();
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
