//! Contact form intake for the marketing site.
//!
//! Submissions are validated, assigned a ticket id, logged, and dropped —
//! there is no mailbox or CRM behind the demo.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("email is invalid")]
    InvalidEmail,
    #[error("message is required")]
    MissingMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    #[serde(default)]
    pub company: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

/// Validate and "accept" a submission, returning its ticket id.
///
/// # Errors
///
/// Returns a `ValidationError` when a required field is missing or the email
/// does not look like an address.
pub fn submit(form: &ContactForm) -> Result<Uuid, ValidationError> {
    validate(form)?;
    let ticket = Uuid::new_v4();
    tracing::info!(%ticket, email = %form.email, subject = %form.subject, "contact form accepted");
    Ok(ticket)
}

fn validate(form: &ContactForm) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if form.email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !looks_like_email(form.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if form.message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}

/// Loose shape check: non-empty local part, an `@`, and a dot somewhere in
/// the domain. Deliberately not RFC-grade.
fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.split('.').filter(|part| !part.is_empty()).count() >= 2
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
