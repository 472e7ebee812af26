//! Editor configuration.
//!
//! Everything here has a sensible default, so hosts only pass the fields they
//! want to change. Deserialized from the JS options object at mount time.

use serde::Deserialize;

/// Storage namespace shared by every persisted key.
pub const DEFAULT_NAMESPACE: &str = "com.markdownlivepreview";

/// Tunables for the layout and session controller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModotConfig {
    /// Namespace all storage keys live under.
    pub namespace: String,
    /// Storage keys for the three persisted values.
    pub keys: StorageKeys,
    /// Minimum width in pixels either pane keeps in side-by-side mode.
    pub min_pane_width: f64,
    /// Divider width to assume when the divider measures zero wide.
    pub fallback_divider_width: f64,
    /// Export filename used when the filename field is blank.
    pub default_filename: String,
}

impl Default for ModotConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            keys: StorageKeys::default(),
            min_pane_width: 120.0,
            fallback_divider_width: 4.0,
            default_filename: "Untitled.md".to_owned(),
        }
    }
}

/// Keys (within the namespace) for each piece of persisted state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    pub content: String,
    pub split_ratio: String,
    pub view_mode: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            content: "last_state".to_owned(),
            split_ratio: "split_ratio".to_owned(),
            view_mode: "view_mode".to_owned(),
        }
    }
}
