//! Notification routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use super::auth::AuthUser;
use crate::services::notifications::Notification;
use crate::state::AppState;

#[derive(Serialize)]
pub struct NotificationList {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

/// `GET /api/notifications`
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> Json<NotificationList> {
    Json(NotificationList {
        notifications: state.notifications.list(),
        unread_count: state.notifications.unread_count(),
    })
}

/// `POST /api/notifications/{id}/read`
pub async fn mark_read(State(state): State<AppState>, _auth: AuthUser, Path(id): Path<u32>) -> StatusCode {
    if state.notifications.mark_read(id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// `POST /api/notifications/read-all`
pub async fn mark_all_read(State(state): State<AppState>, _auth: AuthUser) -> StatusCode {
    state.notifications.mark_all_read();
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[path = "notifications_test.rs"]
mod tests;
