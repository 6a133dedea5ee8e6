#![forbid(unsafe_code)]

//! Visual transform derivation for stacked layers.
//!
//! The render layer draws every entry of a stack back-to-front; this module
//! computes where and how each one sits given its depth, the stack size, and
//! the live drag translation. The math carries no stack state. Presenters
//! decide *what* is in the stack; these functions decide *how it looks*.
//!
//! # Invariants
//!
//! - Only the top entry follows a forward drag 1:1; lower entries hold
//!   position.
//! - Reverse ("overscroll") drag is damped by a factor of 10 and fans out
//!   with depth, so the stack stretches slightly instead of tearing.
//! - Scale never reaches zero or inverts, regardless of stack size.

use crate::direction::DismissDirection;

/// Spacing between stacked layers along the dismiss axis, in points.
const LAYER_FAN_OUT: f32 = 10.0;

/// Per-level scale reduction for entries below the top.
const LAYER_SCALE_STEP: f32 = 0.05;

/// Damping divisor applied to reverse-drag travel.
const REVERSE_DRAG_DAMPING: f32 = 10.0;

/// Derived visual placement for one stacked layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayerTransform {
    /// Offset from the anchored position, `(x, y)` in points.
    pub offset: (f32, f32),
    /// Uniform scale factor; `1.0` for the top entry at rest.
    pub scale: f32,
    /// Blur radius in points; `0.0` for the top entry.
    pub blur: f32,
}

/// Compute the transform for the entry at `depth` in a stack of `total`
/// entries, under a live drag of `drag` points along `direction`.
///
/// Pass `drag = 0.0` when no gesture is active.
#[must_use]
pub fn stacked_transform(
    depth: usize,
    total: usize,
    drag: f32,
    direction: DismissDirection,
) -> LayerTransform {
    let is_top = total > 0 && depth == total - 1;

    let modulated_drag = match direction.is_forward(drag) {
        Some(true) => {
            if is_top {
                drag
            } else {
                0.0
            }
        }
        Some(false) => drag / REVERSE_DRAG_DAMPING * (depth as f32 + 1.0),
        None => 0.0,
    };

    let travel = depth as f32 * LAYER_FAN_OUT - modulated_drag * direction.sign();

    let offset = match direction {
        DismissDirection::TopToBottom => (0.0, -travel),
        DismissDirection::BottomToTop => (0.0, travel),
        DismissDirection::Unknown => (0.0, 0.0),
    };

    LayerTransform {
        offset,
        scale: layer_scale(depth, total),
        blur: layer_blur(depth, total),
    }
}

/// Offset for a fullscreen sheet: the top entry follows the forward
/// component of the drag, everything else stays put.
#[must_use]
pub fn top_sheet_offset(drag: f32, direction: DismissDirection) -> (f32, f32) {
    if direction.is_forward(drag) == Some(true) {
        (0.0, drag)
    } else {
        (0.0, 0.0)
    }
}

fn layer_scale(depth: usize, total: usize) -> f32 {
    let levels_below_top = total.saturating_sub(depth + 1) as f32;
    (1.0 - LAYER_SCALE_STEP * levels_below_top).max(LAYER_SCALE_STEP)
}

fn layer_blur(depth: usize, total: usize) -> f32 {
    total.saturating_sub(depth + 1) as f32
}
