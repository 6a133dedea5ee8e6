#![forbid(unsafe_code)]

//! Safe-area edges and insets.
//!
//! The platform layer reports the device safe area as an [`Insets`] value;
//! entries declare which edges they want to extend under via an [`Edges`]
//! set. [`Insets::resolving`] combines the two for the render layer.

use bitflags::bitflags;

bitflags! {
    /// A set of screen edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const LEADING = 1 << 1;
        const BOTTOM = 1 << 2;
        const TRAILING = 1 << 3;
        const ALL = Self::TOP.bits()
            | Self::LEADING.bits()
            | Self::BOTTOM.bits()
            | Self::TRAILING.bits();
    }
}

/// Safe-area insets in points, one value per screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl Insets {
    /// Create insets with explicit per-edge values.
    #[must_use]
    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Zero insets.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Resolve these insets against a set of ignored edges.
    ///
    /// Each edge named in `ignored` is zeroed; the rest keep their value.
    #[must_use]
    pub fn resolving(self, ignored: Edges) -> Self {
        Self {
            top: if ignored.contains(Edges::TOP) { 0.0 } else { self.top },
            leading: if ignored.contains(Edges::LEADING) {
                0.0
            } else {
                self.leading
            },
            bottom: if ignored.contains(Edges::BOTTOM) {
                0.0
            } else {
                self.bottom
            },
            trailing: if ignored.contains(Edges::TRAILING) {
                0.0
            } else {
                self.trailing
            },
        }
    }
}
