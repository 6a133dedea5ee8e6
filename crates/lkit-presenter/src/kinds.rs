#![forbid(unsafe_code)]

//! The concrete presentation kinds.
//!
//! Cover, fullscreen sheet, popup, and notification stacks share one
//! behaviour (an ordered, uniquely-keyed stack with depth reindexing, a
//! top-entry timer, and post-mutation notifications), so they are all the
//! same [`StackPresenter`], distinguished by the metadata their call sites
//! attach (see the `EntryMetadata` kind constructors) and the configuration
//! defaults in [`PresenterConfig`](crate::PresenterConfig). The aliases
//! below name the intent at construction sites; confirmation dialogs are the
//! exception and get their own [`ConfirmPresenter`](crate::ConfirmPresenter).
//!
//! ```
//! use lkit_core::{EntryId, EntryMetadata, ExpirationPolicy};
//! use lkit_presenter::{NotificationPresenter, PresenterConfig, StackPresenter};
//! use std::time::Duration;
//!
//! let mut toasts: NotificationPresenter<&'static str> =
//!     StackPresenter::with_config(PresenterConfig::notification());
//! let policy = ExpirationPolicy::Timeout(Duration::from_secs(3));
//! toasts.present(EntryId::new(), EntryMetadata::notification(policy), "saved");
//! assert_eq!(toasts.len(), 1);
//! ```

use crate::stack::StackPresenter;

/// Stack of edge-anchored covers (partial-height sheets).
pub type CoverPresenter<C> = StackPresenter<C>;

/// Stack of fullscreen sheets.
pub type FullscreenPresenter<C> = StackPresenter<C>;

/// Stack of centered popups above a dimmed backdrop.
pub type PopupPresenter<C> = StackPresenter<C>;

/// Stack of transient notifications (toasts).
pub type NotificationPresenter<C> = StackPresenter<C>;
