//! Split-pane geometry.
//!
//! Converts a split ratio into concrete pane widths and a pointer position
//! back into a ratio. All values are CSS pixels.

use std::fmt;
use std::str::FromStr;

/// Fraction of the available width given to the edit pane.
///
/// Always inside the open interval (0, 1).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SplitRatio(f64);

impl SplitRatio {
    /// The even split used when nothing valid is stored.
    pub const EVEN: SplitRatio = SplitRatio(0.5);

    /// Create a ratio, rejecting NaN, infinities and anything outside (0, 1).
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0 && value < 1.0).then_some(Self(value))
    }

    /// Parse a stored ratio, falling back to [`SplitRatio::EVEN`].
    pub fn parse_or_even(stored: Option<&str>) -> Self {
        stored.and_then(|s| s.parse().ok()).unwrap_or(Self::EVEN)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self::EVEN
    }
}

impl fmt::Display for SplitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a valid split ratio.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a split ratio in (0, 1): {0:?}")]
pub struct InvalidRatio(pub String);

impl FromStr for SplitRatio {
    type Err = InvalidRatio;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(SplitRatio::new)
            .ok_or_else(|| InvalidRatio(s.to_owned()))
    }
}

/// Measured dimensions of the split container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerMetrics {
    /// Left edge of the wrapper in viewport coordinates.
    pub left: f64,
    /// Full wrapper width, divider included.
    pub width: f64,
    /// Divider width as measured; zero if it could not be measured.
    pub divider_width: f64,
}

/// Pane widths to apply to the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaneWidths {
    pub edit: f64,
    pub preview: f64,
}

/// Width-to-ratio rules for a given minimum pane width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitLayout {
    pub min_pane_width: f64,
    pub fallback_divider_width: f64,
}

impl SplitLayout {
    pub fn new(min_pane_width: f64, fallback_divider_width: f64) -> Self {
        Self {
            min_pane_width,
            fallback_divider_width,
        }
    }

    /// Width left for the two panes once the divider is taken out. Never negative.
    pub fn available(&self, metrics: &ContainerMetrics) -> f64 {
        let divider = if metrics.divider_width > 0.0 {
            metrics.divider_width
        } else {
            self.fallback_divider_width
        };
        (metrics.width - divider).max(0.0)
    }

    /// Clamp an edit-pane width so both panes keep the minimum where possible.
    ///
    /// The upper bound is applied before the lower bound, so when the container
    /// is narrower than two minimum panes the edit pane keeps its minimum and the
    /// preview shrinks. The result is finally pinned to `0..=available`.
    fn clamp_left(&self, left: f64, available: f64) -> f64 {
        // f64::clamp panics when the bounds invert, which they do on narrow containers.
        let left = left
            .min(available - self.min_pane_width)
            .max(self.min_pane_width);
        left.max(0.0).min(available)
    }

    /// Pane widths for `ratio` in the given container.
    pub fn pane_widths(&self, ratio: SplitRatio, metrics: &ContainerMetrics) -> PaneWidths {
        let available = self.available(metrics);
        let edit = self.clamp_left(ratio.get() * available, available);
        PaneWidths {
            edit,
            preview: available - edit,
        }
    }

    /// Ratio for a divider dragged to `pointer_x` (viewport coordinates).
    ///
    /// Returns `None` when there is no room to split or the clamped position
    /// does not describe a ratio strictly between 0 and 1.
    pub fn ratio_at(&self, pointer_x: f64, metrics: &ContainerMetrics) -> Option<SplitRatio> {
        let available = self.available(metrics);
        if available <= 0.0 {
            return None;
        }
        let left = self.clamp_left(pointer_x - metrics.left, available);
        SplitRatio::new(left / available)
    }
}
