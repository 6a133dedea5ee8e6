#![forbid(unsafe_code)]

//! Per-entry dismissal and interaction policies.
//!
//! Each presented entry carries an immutable bundle of these policies (see
//! [`EntryMetadata`](crate::entry::EntryMetadata)). They are plain data; the
//! presenters and the gesture layer read them to decide what a given entry
//! allows.

use std::time::Duration;

/// Whether an entry blocks interaction with content beneath it.
///
/// A non-modal entry lets touches pass through to underlying views. A modal
/// entry blocks them; whether the modal entry itself still reacts to user
/// input (e.g. swipe to dismiss) is governed by its [`Interactivity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modality {
    /// Non-modal: underlying views stay interactive.
    #[default]
    None,
    /// Modal: underlying views are blocked.
    Modal(Interactivity),
}

/// Interactivity of a modal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactivity {
    /// The entry itself reacts to user input.
    Interactive,
    /// The entry ignores user input entirely (dismissal is programmatic).
    Noninteractive,
}

impl Modality {
    /// Whether this modality allows the user to interact with the entry.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        match self {
            Self::None => true,
            Self::Modal(Interactivity::Interactive) => true,
            Self::Modal(Interactivity::Noninteractive) => false,
        }
    }

    /// Whether underlying views are blocked while this entry is presented.
    #[must_use]
    pub const fn blocks_underlay(self) -> bool {
        matches!(self, Self::Modal(_))
    }
}

/// Rule governing whether an entry auto-dismisses after a duration.
///
/// The countdown only runs while the entry is on top of its stack; a
/// presenter re-arms the timer whenever the top changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpirationPolicy {
    /// The entry persists until explicitly dismissed.
    #[default]
    Never,
    /// The entry is auto-dismissed after staying on top for this long.
    Timeout(Duration),
}

impl ExpirationPolicy {
    /// The timeout duration, if any.
    #[must_use]
    pub const fn timeout(self) -> Option<Duration> {
        match self {
            Self::Never => None,
            Self::Timeout(d) => Some(d),
        }
    }
}

/// Behaviour on drag/scroll for entries supporting pull-to-dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DismissalScroll {
    /// No scroll-driven dismissal.
    #[default]
    None,
    /// Dismiss once the gesture's predicted end travel exceeds the threshold.
    Dismiss {
        /// Predicted-end translation magnitude that commits the dismissal.
        predicted_threshold: f32,
    },
}

impl DismissalScroll {
    /// The commit threshold; zero when scroll dismissal is disabled.
    #[must_use]
    pub const fn predicted_threshold(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Dismiss { predicted_threshold } => predicted_threshold,
        }
    }
}

/// Behaviour when the user taps outside the presented entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutTapBehavior {
    /// Ignore the tap.
    #[default]
    None,
    /// Dismiss the top entry.
    Dismiss,
}
