#![forbid(unsafe_code)]

//! Swipe-to-dismiss decision machine.
//!
//! The gesture recognizer feeds each stack a series of [`DragSample`]s while
//! a finger is down, then a single end event. [`SwipeDismiss`] turns that
//! series into at most one commit decision per gesture; the owning presenter
//! maps a commit to `pop_last()`.
//!
//! # Invariants
//!
//! - At most one commit per continuous gesture: once the latch fires,
//!   further samples are ignored until `drag_ended` resets it.
//! - The latch is reset exactly once, on `drag_ended`, whether or not a
//!   commit happened.
//! - A non-positive threshold never commits.
//!
//! # Failure Modes
//!
//! - `drag_ended` without a preceding `drag_changed` is a no-op.
//! - Samples along an `Unknown` direction never commit (no axis, no
//!   decision).

use crate::direction::DismissDirection;

/// One measurement of a live drag gesture.
///
/// `translation` is the current finger travel (used for visual feedback);
/// `predicted_end` is where the gesture is projected to settle (used for the
/// commit decision).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSample {
    pub translation: f32,
    pub predicted_end: f32,
}

impl DragSample {
    /// Create a sample from a translation and its predicted end.
    #[must_use]
    pub const fn new(translation: f32, predicted_end: f32) -> Self {
        Self {
            translation,
            predicted_end,
        }
    }
}

/// Per-stack swipe-dismiss state.
///
/// Holds the configured dismissal axis and commit threshold plus the single
/// piece of cross-sample state: whether the current gesture already
/// committed.
#[derive(Debug, Clone)]
pub struct SwipeDismiss {
    direction: DismissDirection,
    threshold: f32,
    dragged_away: bool,
}

impl SwipeDismiss {
    /// Create a swipe-dismiss policy for a stack.
    #[must_use]
    pub fn new(direction: DismissDirection, threshold: f32) -> Self {
        Self {
            direction,
            threshold,
            dragged_away: false,
        }
    }

    /// The configured dismissal axis.
    #[must_use]
    pub fn direction(&self) -> DismissDirection {
        self.direction
    }

    /// Whether the current gesture has already committed a dismissal.
    #[must_use]
    pub fn is_latched(&self) -> bool {
        self.dragged_away
    }

    /// Feed one drag sample; returns `true` when the dismissal commits.
    ///
    /// Commits when the predicted end travel points forward along the
    /// dismissal axis and its magnitude exceeds the threshold. Returns
    /// `true` at most once per gesture.
    pub fn drag_changed(&mut self, sample: DragSample) -> bool {
        if self.dragged_away || self.threshold <= 0.0 {
            return false;
        }
        if sample.predicted_end.abs() > self.threshold
            && self.direction.is_forward(sample.predicted_end) == Some(true)
        {
            self.dragged_away = true;
            return true;
        }
        false
    }

    /// The gesture ended (finger lifted or cancelled); resets the latch.
    pub fn drag_ended(&mut self) {
        self.dragged_away = false;
    }

    /// Translation to apply to the top entry for visual feedback.
    ///
    /// Zero once the gesture committed (the entry is already animating out),
    /// otherwise the raw sampled translation.
    #[must_use]
    pub fn visual_translation(&self, sample: DragSample) -> f32 {
        if self.dragged_away { 0.0 } else { sample.translation }
    }
}
