//! Session persistence in browser localStorage/sessionStorage

use gloo_storage::{LocalStorage, SessionStorage, Storage};

use crate::config::StorageKeys;
use crate::models::User;

/// Persists the signed-in user under the configured storage keys.
///
/// A remembered session lives in localStorage, anything else in
/// sessionStorage so it ends with the tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    keys: StorageKeys,
}

impl SessionStore {
    pub fn new(keys: StorageKeys) -> Self {
        Self { keys }
    }

    /// Store the user, replacing any previous session
    pub fn save(&self, user: &User, remember: bool) {
        self.clear();

        let stored = if remember {
            LocalStorage::set(&self.keys.user, user)
        } else {
            SessionStorage::set(&self.keys.user, user)
        };
        if let Err(e) = stored {
            log::warn!("Failed to store session: {}", e);
        }
        if let Err(e) = LocalStorage::set(&self.keys.remember, remember) {
            log::warn!("Failed to store remember flag: {}", e);
        }
    }

    /// Load the stored user, if any
    pub fn load(&self) -> Option<User> {
        if self.remembered() {
            LocalStorage::get(&self.keys.user).ok()
        } else {
            SessionStorage::get(&self.keys.user).ok()
        }
    }

    /// Whether the last login asked to be remembered
    pub fn remembered(&self) -> bool {
        LocalStorage::get(&self.keys.remember).unwrap_or(false)
    }

    /// Remove the session from both storages
    pub fn clear(&self) {
        LocalStorage::delete(&self.keys.user);
        SessionStorage::delete(&self.keys.user);
        LocalStorage::delete(&self.keys.remember);
    }
}
