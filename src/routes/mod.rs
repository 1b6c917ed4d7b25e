//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves both halves of the product: the JSON API the
//! dashboard consumes (session-guarded via the `AuthUser` extractor) and the
//! static marketing site as the fallback. The guard lives in the extractor so
//! handlers never carry presentation concerns.

pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod notifications;
pub mod settings;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/dashboard/summary", get(dashboard::summary))
        .route("/api/dashboard/activity", get(dashboard::activity))
        .route("/api/monitoring/summary", get(dashboard::monitoring_summary))
        .route("/api/monitoring/captchas", get(dashboard::monitoring_captchas))
        .route("/api/usage/summary", get(dashboard::usage_summary))
        .route("/api/usage/calls", get(dashboard::usage_calls))
        .route("/api/analytics/security", get(dashboard::security_summary))
        .route("/api/notifications", get(notifications::list))
        .route("/api/notifications/{id}/read", post(notifications::mark_read))
        .route("/api/notifications/read-all", post(notifications::mark_all_read))
        .route("/api/settings", get(settings::get_settings))
        .route("/api/settings/profile", put(settings::update_profile))
        .route("/api/settings/api", put(settings::update_api))
        .route("/api/settings/notifications", put(settings::update_notifications))
        .route("/api/settings/api-key", post(settings::regenerate_api_key))
        .route("/api/settings/password", post(settings::change_password))
        .route("/api/contact", post(contact::submit))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the path to the marketing website directory.
fn website_dir() -> PathBuf {
    std::env::var("WEBSITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("website"))
}

/// Full application: JSON API plus the static marketing site at `/`.
pub fn app(state: AppState) -> Router {
    let website_service = ServeDir::new(website_dir()).append_index_html_on_directories(true);
    api_routes(state).fallback_service(website_service)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
