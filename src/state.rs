//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! owns the single process-wide session guard plus the in-memory notification
//! and settings services. There is exactly one logical user per process, so
//! the services need no per-user keying.

use std::sync::Arc;

use crate::services::notifications::NotificationCenter;
use crate::services::session::SessionGuard;
use crate::services::settings::SettingsService;
use crate::store::KvStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionGuard>,
    pub notifications: Arc<NotificationCenter>,
    pub settings: Arc<SettingsService>,
}

impl AppState {
    /// Build the state on top of an opened store, restoring any persisted
    /// session along the way.
    #[must_use]
    pub fn new(store: KvStore) -> Self {
        Self {
            session: Arc::new(SessionGuard::initialize(store)),
            notifications: Arc::new(NotificationCenter::new()),
            settings: Arc::new(SettingsService::new()),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
