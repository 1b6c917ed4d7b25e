//! Dashboard notification center.
//!
//! Seeded with the same three mock notifications the hosted dashboard shows;
//! the only state that moves is the read/unread flag.

use std::sync::RwLock;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub time: String,
}

pub struct NotificationCenter {
    entries: RwLock<Vec<Notification>>,
}

impl NotificationCenter {
    /// Seed the mock notification list.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: RwLock::new(seed()) }
    }

    #[must_use]
    pub fn list(&self) -> Vec<Notification> {
        self.read().clone()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.read().iter().filter(|n| !n.read).count()
    }

    /// Mark one notification as read. Returns false for unknown ids.
    pub fn mark_read(&self, id: u32) -> bool {
        let mut entries = self.write();
        match entries.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&self) {
        for notification in self.write().iter_mut() {
            notification.read = true;
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Notification>> {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Notification>> {
        self.entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

fn seed() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "Usage Alert".to_owned(),
            message: "You have reached 80% of your monthly captcha limit.".to_owned(),
            read: false,
            time: "10 min ago".to_owned(),
        },
        Notification {
            id: 2,
            title: "New Update".to_owned(),
            message: "New API version available with Turnstile support.".to_owned(),
            read: false,
            time: "1 hour ago".to_owned(),
        },
        Notification {
            id: 3,
            title: "Scheduled Maintenance".to_owned(),
            message: "Maintenance scheduled for 15/06 at 03:00 UTC.".to_owned(),
            read: true,
            time: "3 hours ago".to_owned(),
        },
    ]
}

#[cfg(test)]
#[path = "notifications_test.rs"]
mod tests;
