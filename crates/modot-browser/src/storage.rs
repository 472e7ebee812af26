//! `window.localStorage` backed store.
//!
//! Keys are flattened to `"{namespace}:{key}"`. Every failure (no window,
//! storage disabled, quota exceeded, security errors) is swallowed here.

use modot_core::{KeyValueStore, flat_key};

/// Production store over the page's localStorage.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    /// Open localStorage. If it is unavailable the store reads nothing and
    /// drops every write.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::debug!("localStorage unavailable: {:?}", e);
                None
            }
        });
        Self { storage }
    }

    /// Whether a backing storage area was found.
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, namespace: &str, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(&flat_key(namespace, key)) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(namespace, key, "localStorage read failed: {:?}", e);
                None
            }
        }
    }

    fn set(&self, namespace: &str, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.set_item(&flat_key(namespace, key), value) {
            tracing::debug!(namespace, key, "localStorage write failed: {:?}", e);
        }
    }
}
