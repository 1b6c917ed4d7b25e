//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session state, mock datasets, and form validation so
//! route handlers stay focused on request/response translation and the auth
//! gate.

pub mod contact;
pub mod metrics;
pub mod notifications;
pub mod session;
pub mod settings;
