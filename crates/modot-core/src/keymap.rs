//! Window-level keyboard shortcuts.

/// The parts of a keyboard event shortcut matching looks at.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct KeyChord {
    /// `KeyboardEvent.key` as reported by the browser.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>, ctrl: bool, meta: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            meta,
        }
    }
}

/// Actions reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+M: same as the toggle button.
    ToggleView,
}

impl Shortcut {
    /// Match a chord. Ctrl and Cmd are interchangeable; the key must be
    /// lowercase `m`, so Shift+Ctrl+M does not fire.
    pub fn from_chord(chord: &KeyChord) -> Option<Shortcut> {
        if !(chord.ctrl || chord.meta) {
            return None;
        }
        match chord.key.as_str() {
            "m" => Some(Shortcut::ToggleView),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_chords() {
        assert_eq!(
            Shortcut::from_chord(&KeyChord::new("m", true, false)),
            Some(Shortcut::ToggleView)
        );
        assert_eq!(
            Shortcut::from_chord(&KeyChord::new("m", false, true)),
            Some(Shortcut::ToggleView)
        );
    }

    #[test]
    fn test_non_shortcuts() {
        assert_eq!(Shortcut::from_chord(&KeyChord::new("m", false, false)), None);
        assert_eq!(Shortcut::from_chord(&KeyChord::new("M", true, false)), None);
        assert_eq!(Shortcut::from_chord(&KeyChord::new("n", true, false)), None);
    }
}
