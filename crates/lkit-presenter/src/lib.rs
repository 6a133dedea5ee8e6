#![forbid(unsafe_code)]

//! Stateful presentation engine for LayerKit.
//!
//! One [`StackPresenter`] per presentation kind owns an ordered stack of
//! entries and notifies subscribers after every committed mutation; the
//! single-slot [`ConfirmPresenter`] does the same for confirmation dialogs.
//! Expiration is driven by the host event loop calling
//! [`StackPresenter::tick`]. Everything runs on one thread; presenters are
//! plain `&mut self` objects with no locking.

pub mod config;
pub mod confirm;
pub mod kinds;
pub mod stack;
pub mod subscribers;
pub mod timer;

pub use config::PresenterConfig;
pub use confirm::{
    ActionFonts, ConfirmEntry, ConfirmPresenter, ConfirmTheme, FontSpec, FontWeight, Tint,
};
pub use kinds::{CoverPresenter, FullscreenPresenter, NotificationPresenter, PopupPresenter};
pub use stack::StackPresenter;
pub use subscribers::{SubscriberSet, Subscription};
pub use timer::EntryTimer;
