//! modot-core: Pure Rust editor-shell logic without browser dependencies.
//!
//! This crate provides:
//! - `Controller` - the layout and session controller sequencing every user action
//! - `View`, `EditorWidget`, `Downloader` - platform traits it drives
//! - `KeyValueStore` / `Persistence` - namespaced, infallible persistence
//! - `SplitLayout` - pane width math for the draggable divider
//! - `ViewMode` - the edit / preview / side-by-side state machine
//! - `MarkdownRenderer` - markdown to sanitized HTML

pub mod config;
pub mod export;
pub mod keymap;
pub mod layout;
pub mod mode;
pub mod platform;
pub mod render;
pub mod sample;
pub mod session;
pub mod storage;

pub use config::{DEFAULT_NAMESPACE, ModotConfig, StorageKeys};
pub use export::{ExportFile, MARKDOWN_EXTENSION, MARKDOWN_MIME, normalize_filename};
pub use keymap::{KeyChord, Shortcut};
pub use layout::{ContainerMetrics, InvalidRatio, PaneWidths, SplitLayout, SplitRatio};
pub use mode::{MODE_CLASSES, ModePresentation, UnknownViewMode, ViewMode};
pub use platform::{Downloader, EditorWidget, PlatformError, View};
pub use render::{MarkdownRenderer, default_md_options};
pub use sample::welcome_document;
pub use session::{Controller, SessionState};
pub use storage::{KeyValueStore, MemoryStore, Persistence, flat_key};
