#![forbid(unsafe_code)]

//! Presenter construction-time configuration.

use lkit_core::AnimationSpec;
use std::time::Duration;

/// Configuration accepted by a presenter at construction.
///
/// The animation descriptors are opaque to the engine; they ride along to
/// the render layer, which reads them off the presenter when applying a
/// stack change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenterConfig {
    /// Emit per-operation lifecycle logs at debug level.
    pub verbose: bool,
    /// How insertions should animate.
    pub insertion_animation: AnimationSpec,
    /// How removals should animate.
    pub removal_animation: AnimationSpec,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        let spring = AnimationSpec::spring(Duration::from_millis(500));
        Self {
            verbose: false,
            insertion_animation: spring,
            removal_animation: spring,
        }
    }
}

impl PresenterConfig {
    /// Defaults for stacked kinds (cover, fullscreen, popup, notification).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for confirmation dialogs: a snappier spring.
    #[must_use]
    pub fn confirm() -> Self {
        let spring = AnimationSpec::spring(Duration::from_millis(300));
        Self {
            verbose: false,
            insertion_animation: spring,
            removal_animation: spring,
        }
    }

    /// Defaults for transient notifications.
    #[must_use]
    pub fn notification() -> Self {
        Self::default()
    }

    /// Enable verbose lifecycle logging.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the insertion animation descriptor.
    #[must_use]
    pub fn insertion_animation(mut self, spec: AnimationSpec) -> Self {
        self.insertion_animation = spec;
        self
    }

    /// Set the removal animation descriptor.
    #[must_use]
    pub fn removal_animation(mut self, spec: AnimationSpec) -> Self {
        self.removal_animation = spec;
        self
    }
}
