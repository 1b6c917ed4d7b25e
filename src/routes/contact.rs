//! Contact form route. Public: the marketing site posts here without a
//! session.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::services::contact::{self, ContactForm};

/// `POST /api/contact` — validate and acknowledge a submission.
pub async fn submit(Json(form): Json<ContactForm>) -> Response {
    match contact::submit(&form) {
        Ok(ticket) => (StatusCode::ACCEPTED, Json(serde_json::json!({ "ticket": ticket }))).into_response(),
        Err(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
