#![forbid(unsafe_code)]

//! Stack anchoring and the dismissal axis derived from it.
//!
//! A stack anchored to the bottom of the screen is dismissed by dragging
//! further down (`TopToBottom` travel), a top-anchored stack by dragging up.
//! Center-anchored stacks have no swipe axis at all.

/// Screen position a presentation stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    Top,
    TopLeading,
    TopTrailing,
    #[default]
    Bottom,
    BottomLeading,
    BottomTrailing,
    Leading,
    Trailing,
    Center,
}

/// Direction of the swipe that dismisses an anchored stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissDirection {
    /// Dismissal travel increases downward (bottom-anchored stacks).
    TopToBottom,
    /// Dismissal travel increases upward (top- and side-anchored stacks).
    BottomToTop,
    /// No swipe axis (center-anchored stacks).
    #[default]
    Unknown,
}

impl DismissDirection {
    /// Derive the dismissal direction from a stack anchor.
    #[must_use]
    pub const fn from_anchor(anchor: Anchor) -> Self {
        match anchor {
            Anchor::Top
            | Anchor::TopLeading
            | Anchor::TopTrailing
            | Anchor::Leading
            | Anchor::Trailing => Self::BottomToTop,
            Anchor::Bottom | Anchor::BottomLeading | Anchor::BottomTrailing => Self::TopToBottom,
            Anchor::Center => Self::Unknown,
        }
    }

    /// Whether a translation moves toward dismissal.
    ///
    /// Returns `None` when the direction is [`Unknown`](Self::Unknown); no
    /// decision can be made.
    #[must_use]
    pub fn is_forward(self, translation: f32) -> Option<bool> {
        match self {
            Self::TopToBottom => Some(translation > 0.0),
            Self::BottomToTop => Some(translation < 0.0),
            Self::Unknown => None,
        }
    }

    /// Sign of forward travel along the drag axis: `+1`, `-1`, or `0`.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::TopToBottom => 1.0,
            Self::BottomToTop => -1.0,
            Self::Unknown => 0.0,
        }
    }
}
