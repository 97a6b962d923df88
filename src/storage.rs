//! Local Persistence
//!
//! Key-value storage behind a trait so session and theme persistence can
//! run against `localStorage` in the browser and a map in tests.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key for the signed-in user
pub const USER_INFO_KEY: &str = "userInfo";
/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`; failures are logged and otherwise ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let stored = Self::storage().map(|s| s.set_item(key, value).is_ok());
        if stored != Some(true) {
            log::warn!("[STORAGE] could not write {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Read a JSON value; unreadable entries are removed
pub fn load_json<T: DeserializeOwned>(storage: &impl KeyValueStorage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[STORAGE] discarding corrupt {}: {}", key, e);
            storage.remove(key);
            None
        }
    }
}

pub fn save_json<T: Serialize>(storage: &impl KeyValueStorage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => storage.set(key, &json),
        Err(e) => log::warn!("[STORAGE] could not encode {}: {}", key, e),
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;
