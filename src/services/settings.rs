//! Account settings — profile, API, notification preferences, billing.
//!
//! All state is per-process and seeded with the hosted dashboard's mock
//! defaults. "Generate new key" only produces a fresh random string; there is
//! no key lifecycle behind it, and the password change validates its inputs
//! without storing anything.

use std::sync::RwLock;

use rand::Rng;
use serde::{Deserialize, Serialize};

const API_KEY_PREFIX: &str = "kr-prod-";
const API_KEY_RANDOM_LEN: usize = 13;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PasswordChangeError {
    #[error("current password is required")]
    MissingCurrent,
    #[error("new password is required")]
    MissingNew,
    #[error("password confirmation does not match")]
    ConfirmationMismatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub api_key: String,
    pub environment: String,
    pub ip_whitelist: String,
    pub rate_limit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email_alerts: bool,
    pub security_alerts: bool,
    pub usage_alerts: bool,
    pub marketing_emails: bool,
    pub api_changes: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillingInfo {
    pub plan: &'static str,
    pub next_billing: &'static str,
    pub payment_method: &'static str,
    pub auto_renew: bool,
}

/// Everything the settings page shows, in one payload.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub profile: Profile,
    pub api: ApiSettings,
    pub notifications: NotificationPrefs,
    pub billing: BillingInfo,
}

struct SettingsInner {
    profile: Profile,
    api: ApiSettings,
    notifications: NotificationPrefs,
}

pub struct SettingsService {
    inner: RwLock<SettingsInner>,
}

impl SettingsService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SettingsInner {
                profile: Profile {
                    name: String::new(),
                    email: String::new(),
                    company: "My Company Ltd.".to_owned(),
                    phone: "+55 (11) 98765-4321".to_owned(),
                    role: "Admin".to_owned(),
                },
                api: ApiSettings {
                    api_key: "kr-prod-a1b2c3d4e5f6g7h8i9j0".to_owned(),
                    environment: "production".to_owned(),
                    ip_whitelist: "192.168.1.1, 192.168.1.2".to_owned(),
                    rate_limit: "100".to_owned(),
                },
                notifications: NotificationPrefs {
                    email_alerts: true,
                    security_alerts: true,
                    usage_alerts: true,
                    marketing_emails: false,
                    api_changes: true,
                },
            }),
        }
    }

    /// Full settings snapshot. Empty profile name/email are overlaid with the
    /// session user so a fresh login sees their own identity pre-filled.
    #[must_use]
    pub fn view(&self, session_name: &str, session_email: &str) -> SettingsView {
        let inner = self.read();
        let mut profile = inner.profile.clone();
        if profile.name.is_empty() {
            profile.name = session_name.to_owned();
        }
        if profile.email.is_empty() {
            profile.email = session_email.to_owned();
        }
        SettingsView {
            profile,
            api: inner.api.clone(),
            notifications: inner.notifications,
            billing: billing_info(),
        }
    }

    pub fn update_profile(&self, profile: Profile) {
        self.write().profile = profile;
    }

    pub fn update_api(&self, api: ApiSettings) {
        self.write().api = api;
    }

    pub fn update_notifications(&self, prefs: NotificationPrefs) {
        self.write().notifications = prefs;
    }

    /// Replace the API key with a freshly generated one and return it.
    pub fn regenerate_api_key(&self) -> String {
        let key = generate_api_key();
        self.write().api.api_key = key.clone();
        tracing::info!("api key regenerated");
        key
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SettingsInner> {
        self.inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SettingsInner> {
        self.inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use]
fn billing_info() -> BillingInfo {
    BillingInfo {
        plan: "Professional",
        next_billing: "15/07/2023",
        payment_method: "Visa ending in 4242",
        auto_renew: true,
    }
}

/// `kr-prod-` plus 13 random base36 characters, matching the shape the
/// hosted dashboard generated.
#[must_use]
pub fn generate_api_key() -> String {
    let mut rng = rand::rng();
    let mut key = String::with_capacity(API_KEY_PREFIX.len() + API_KEY_RANDOM_LEN);
    key.push_str(API_KEY_PREFIX);
    for _ in 0..API_KEY_RANDOM_LEN {
        let idx = rng.random_range(0..BASE36.len());
        key.push(BASE36[idx] as char);
    }
    key
}

/// Mock password change: validates the form fields, stores nothing.
///
/// # Errors
///
/// Returns a `PasswordChangeError` when a field is blank or the confirmation
/// does not match.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), PasswordChangeError> {
    if current.trim().is_empty() {
        return Err(PasswordChangeError::MissingCurrent);
    }
    if new.trim().is_empty() {
        return Err(PasswordChangeError::MissingNew);
    }
    if new != confirm {
        return Err(PasswordChangeError::ConfirmationMismatch);
    }
    Ok(())
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
