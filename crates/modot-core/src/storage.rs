//! Namespaced key-value persistence.
//!
//! The store contract is deliberately infallible: a backend that cannot read
//! returns `None`, one that cannot write drops the value. Nothing above this
//! module handles storage errors.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::{ModotConfig, StorageKeys};
use crate::layout::SplitRatio;
use crate::mode::ViewMode;

/// A string store addressed by `(namespace, key)`.
///
/// Methods take `&self`; implementations use interior mutability. The editor
/// runs on a single UI thread, so no `Sync` bound is required.
pub trait KeyValueStore {
    fn get(&self, namespace: &str, key: &str) -> Option<String>;
    fn set(&self, namespace: &str, key: &str, value: &str);
}

impl<T: KeyValueStore> KeyValueStore for &T {
    fn get(&self, namespace: &str, key: &str) -> Option<String> {
        (*self).get(namespace, key)
    }

    fn set(&self, namespace: &str, key: &str, value: &str) {
        (*self).set(namespace, key, value)
    }
}

impl<T: KeyValueStore> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, namespace: &str, key: &str) -> Option<String> {
        (**self).get(namespace, key)
    }

    fn set(&self, namespace: &str, key: &str, value: &str) {
        (**self).set(namespace, key, value)
    }
}

/// Flat key used by backends that have a single key space, e.g. localStorage.
pub fn flat_key(namespace: &str, key: &str) -> String {
    format!("{}:{}", namespace, key)
}

/// In-memory store for tests and hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, namespace: &str, key: &str) -> Option<String> {
        self.entries.borrow().get(&flat_key(namespace, key)).cloned()
    }

    fn set(&self, namespace: &str, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(flat_key(namespace, key), value.to_owned());
    }
}

/// Typed accessors for the editor's three persisted values.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    namespace: String,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, config: &ModotConfig) -> Self {
        Self {
            store,
            namespace: config.namespace.clone(),
            keys: config.keys.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Last saved document, if any. An empty string is a saved document.
    pub fn load_content(&self) -> Option<String> {
        self.store.get(&self.namespace, &self.keys.content)
    }

    pub fn save_content(&self, text: &str) {
        self.store.set(&self.namespace, &self.keys.content, text);
    }

    /// Stored split ratio, or an even split if absent or invalid.
    pub fn load_ratio(&self) -> SplitRatio {
        let stored = self.store.get(&self.namespace, &self.keys.split_ratio);
        SplitRatio::parse_or_even(stored.as_deref())
    }

    pub fn save_ratio(&self, ratio: SplitRatio) {
        tracing::debug!(%ratio, "saving split ratio");
        self.store
            .set(&self.namespace, &self.keys.split_ratio, &ratio.to_string());
    }

    /// Stored view mode, if present and recognized.
    pub fn load_view_mode(&self) -> Option<ViewMode> {
        self.store
            .get(&self.namespace, &self.keys.view_mode)?
            .parse()
            .ok()
    }

    pub fn save_view_mode(&self, mode: ViewMode) {
        self.store
            .set(&self.namespace, &self.keys.view_mode, mode.as_str());
    }
}
