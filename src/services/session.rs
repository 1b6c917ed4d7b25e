//! Session guard — the single source of truth for "is the caller logged in".
//!
//! ARCHITECTURE
//! ============
//! One process-wide session, persisted as two entries in the local key-value
//! store: a serialized `UserRecord` plus a literal validity flag. Login is a
//! mock — any non-empty credentials succeed and the user record is derived
//! deterministically from the identifier, matching the hosted dashboard it
//! replaces.
//!
//! TRADE-OFFS
//! ==========
//! Store failures never surface to callers; the worst case is a session that
//! does not survive a restart. Real credential checking would add an
//! `AuthError` at the `login` seam.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::store::KvStore;

/// Store key holding the serialized `UserRecord`.
pub(crate) const USER_KEY: &str = "kronos_user";
/// Store key holding the session validity flag.
pub(crate) const AUTH_KEY: &str = "kronos_auth";
/// Literal value marking the persisted session as valid.
pub(crate) const AUTH_VALID: &str = "true";

/// The authenticated user, as presented to routes and views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar_url: String,
}

impl UserRecord {
    /// Derive the mock user from a login identifier: the display name is the
    /// local part of the email (or the whole identifier when there is no `@`).
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        let name = identifier.split('@').next().unwrap_or(identifier).to_owned();
        let avatar_url = format!("https://ui-avatars.com/api/?name={name}&background=random");
        Self {
            id: "1".to_owned(),
            name,
            email: identifier.to_owned(),
            role: "Admin".to_owned(),
            avatar_url,
        }
    }
}

/// Process-wide session owner. `user == None` means logged out; the
/// "authenticated iff user present" invariant holds by construction.
pub struct SessionGuard {
    store: KvStore,
    user: RwLock<Option<UserRecord>>,
}

impl SessionGuard {
    /// Create a guard in the `LoggedOut` state, then attempt to restore a
    /// previously persisted session. Missing or malformed persisted state
    /// degrades to `LoggedOut` without error.
    #[must_use]
    pub fn initialize(store: KvStore) -> Self {
        let restored = read_persisted(&store);
        if let Some(user) = &restored {
            tracing::info!(user = %user.name, "restored persisted session");
        }
        Self { store, user: RwLock::new(restored) }
    }

    /// Mock login: accepts any non-empty credentials, derives the user from
    /// the identifier, and persists the session. Cannot fail by design.
    pub fn login(&self, identifier: &str, _secret: &str) -> UserRecord {
        let user = UserRecord::from_identifier(identifier);

        match serde_json::to_string(&user) {
            Ok(raw) => {
                self.store.set(USER_KEY, &raw);
                self.store.set(AUTH_KEY, AUTH_VALID);
            }
            Err(e) => {
                tracing::warn!(error = %e, "session persist failed, login is memory-only");
            }
        }

        *self.write() = Some(user.clone());
        tracing::info!(user = %user.name, "logged in");
        user
    }

    /// Clear the session and remove the persisted entries. Idempotent.
    pub fn logout(&self) {
        let mut user = self.write();
        if user.is_none() {
            return;
        }
        *user = None;
        self.store.remove(USER_KEY);
        self.store.remove(AUTH_KEY);
        tracing::info!("logged out");
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<UserRecord> {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<UserRecord>> {
        self.user
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<UserRecord>> {
        self.user
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Read the persisted session. Valid only when the flag is the exact literal
/// and the user record parses; every other shape is treated as logged out.
fn read_persisted(store: &KvStore) -> Option<UserRecord> {
    if store.get(AUTH_KEY).as_deref() != Some(AUTH_VALID) {
        return None;
    }
    let raw = store.get(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "persisted user record malformed, ignoring session");
            None
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
