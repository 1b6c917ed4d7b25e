//! Settings routes — profile, API, notification preferences, password.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use super::auth::AuthUser;
use crate::services::settings::{self, ApiSettings, NotificationPrefs, Profile, SettingsView};
use crate::state::AppState;

/// `GET /api/settings`
pub async fn get_settings(State(state): State<AppState>, auth: AuthUser) -> Json<SettingsView> {
    Json(state.settings.view(&auth.user.name, &auth.user.email))
}

/// `PUT /api/settings/profile`
pub async fn update_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(profile): Json<Profile>,
) -> StatusCode {
    state.settings.update_profile(profile);
    StatusCode::NO_CONTENT
}

/// `PUT /api/settings/api`
pub async fn update_api(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(api): Json<ApiSettings>,
) -> StatusCode {
    state.settings.update_api(api);
    StatusCode::NO_CONTENT
}

/// `PUT /api/settings/notifications`
pub async fn update_notifications(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(prefs): Json<NotificationPrefs>,
) -> StatusCode {
    state.settings.update_notifications(prefs);
    StatusCode::NO_CONTENT
}

/// `POST /api/settings/api-key` — mint a new key; the old one is gone.
pub async fn regenerate_api_key(State(state): State<AppState>, _auth: AuthUser) -> Json<serde_json::Value> {
    let key = state.settings.regenerate_api_key();
    Json(serde_json::json!({ "api_key": key }))
}

#[derive(Deserialize)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// `POST /api/settings/password` — mock change: validate only.
pub async fn change_password(_auth: AuthUser, Json(req): Json<PasswordChangeRequest>) -> Response {
    match settings::validate_password_change(&req.current_password, &req.new_password, &req.confirm_password) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
