use serde::{Deserialize, Serialize};

/// Mouse button that clicked an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickButton {
    /// Left click: next culprit.
    Primary,
    /// Right click: previous culprit.
    Secondary,
}

impl ClickButton {
    pub fn direction(self) -> i64 {
        match self {
            ClickButton::Primary => 1,
            ClickButton::Secondary => -1,
        }
    }
}

/// `value mod modulus`, always in `[0, modulus)`. `modulus` must be non-zero.
pub fn positive_mod(value: i64, modulus: usize) -> usize {
    debug_assert!(modulus > 0, "positive_mod with zero modulus");
    value.rem_euclid(modulus as i64) as usize
}

/// Position in an alert's culprit list, kept across clicks.
///
/// The cursor is a free-running integer; it only becomes an index when a
/// click resolves it against the culprit count of that moment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCursor(i64);

impl CycleCursor {
    pub fn value(self) -> i64 {
        self.0
    }

    /// Step in `button`'s direction and return the index into a list of
    /// `count` entries. `None` (and no step) when the list is empty.
    pub fn advance(&mut self, button: ClickButton, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        self.0 = self.0.wrapping_add(button.direction());
        Some(positive_mod(self.0, count))
    }
}
