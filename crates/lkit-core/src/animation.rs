#![forbid(unsafe_code)]

//! Opaque animation descriptors.
//!
//! Presenters thread these through to the render layer unchanged; the core
//! never interprets them.

use std::time::Duration;

/// Description of how an insertion or removal should animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationSpec {
    /// No animation.
    #[default]
    None,
    /// Spring animation settling over roughly `duration`.
    Spring { duration: Duration },
    /// Symmetric ease-in-out over `duration`.
    EaseInOut { duration: Duration },
}

impl AnimationSpec {
    /// A spring settling over `duration`.
    #[must_use]
    pub const fn spring(duration: Duration) -> Self {
        Self::Spring { duration }
    }

    /// An ease-in-out over `duration`.
    #[must_use]
    pub const fn ease_in_out(duration: Duration) -> Self {
        Self::EaseInOut { duration }
    }

    /// The nominal duration, `None` for [`AnimationSpec::None`].
    #[must_use]
    pub const fn duration(self) -> Option<Duration> {
        match self {
            Self::None => None,
            Self::Spring { duration } | Self::EaseInOut { duration } => Some(duration),
        }
    }
}
