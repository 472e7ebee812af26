//! Browser DOM layer for the modot markdown editor.
//!
//! This crate implements the `modot-core` platform traits on top of the DOM.
//! It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `app`: mounting, startup order and `dispose()`
//! - `dom`: element lookup and the `View` implementation
//! - `events`: pointer, button, resize and keyboard listeners
//! - `monaco`: Monaco bindings implementing `EditorWidget`
//! - `download`: blob + anchor file export
//! - `storage`: localStorage-backed `KeyValueStore`
//!
//! # Re-exports
//!
//! This crate re-exports `modot-core` for convenience, so consumers only need
//! to depend on `modot-browser`.

// Re-export core crate
pub use modot_core;
pub use modot_core::*;

pub mod app;
pub mod dom;
pub mod download;
pub mod events;
pub mod monaco;
pub mod storage;

pub use app::{App, MountOptions};
pub use dom::{DomView, ElementIds, EventTargets};
pub use download::BrowserDownloader;
pub use events::{
    BrowserController, Listeners, SharedController, attach_dom, key_chord, with_controller,
};
pub use monaco::{ChangeSubscription, MonacoWidget};
pub use storage::LocalStore;
