//! View-mode state machine.

use std::fmt;
use std::str::FromStr;

/// Which pane(s) are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Source pane only.
    Edit,
    /// Rendered pane only.
    Preview,
    /// Both panes, split by the divider.
    #[default]
    SideBySide,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Edit, ViewMode::Preview, ViewMode::SideBySide];

    /// Stored/serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Edit => "edit",
            ViewMode::Preview => "preview",
            ViewMode::SideBySide => "side-by-side",
        }
    }

    /// Target of the toggle button (and the Ctrl/Cmd+M shortcut).
    ///
    /// Side-by-side always toggles to edit, never to preview.
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Preview => ViewMode::Edit,
            ViewMode::Edit => ViewMode::Preview,
            ViewMode::SideBySide => ViewMode::Edit,
        }
    }

    /// How this mode shows up in the DOM.
    pub fn presentation(self) -> ModePresentation {
        match self {
            ViewMode::Edit => ModePresentation {
                wrapper_class: Some(MODE_EDIT_CLASS),
                toggle_label: "Preview",
                side_by_side_active: false,
            },
            ViewMode::Preview => ModePresentation {
                wrapper_class: Some(MODE_PREVIEW_CLASS),
                toggle_label: "Edit",
                side_by_side_active: false,
            },
            ViewMode::SideBySide => ModePresentation {
                wrapper_class: None,
                toggle_label: "Edit",
                side_by_side_active: true,
            },
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view mode: {0:?}")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(ViewMode::Edit),
            "preview" => Ok(ViewMode::Preview),
            "side-by-side" => Ok(ViewMode::SideBySide),
            other => Err(UnknownViewMode(other.to_owned())),
        }
    }
}

/// Wrapper class hiding the preview pane.
pub const MODE_EDIT_CLASS: &str = "mode-edit";
/// Wrapper class hiding the edit pane.
pub const MODE_PREVIEW_CLASS: &str = "mode-preview";
/// Every mode class; all are cleared before a new one is applied.
pub const MODE_CLASSES: [&str; 2] = [MODE_EDIT_CLASS, MODE_PREVIEW_CLASS];

/// DOM-facing state for one view mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModePresentation {
    /// Class added to the wrapper, if any.
    pub wrapper_class: Option<&'static str>,
    /// Text of the toggle button.
    pub toggle_label: &'static str,
    /// Whether the side-by-side button carries the `active` class.
    pub side_by_side_active: bool,
}
