#![forbid(unsafe_code)]

//! Single-slot confirmation dialog presenter.
//!
//! Unlike the stacked kinds, at most one confirmation dialog is live at a
//! time: presenting while the slot is occupied is rejected outright (no
//! queueing, no replacement). Actions are segregated by role when the entry
//! is built, so cancel-role actions always render after the regular ones.
//!
//! # Invariants
//!
//! - Capacity one: `present` while occupied returns `false` and changes
//!   nothing.
//! - An action handler runs at most once; invoking any action auto-dismisses
//!   the dialog, and dismissal drops all remaining handlers.
//! - One notification per committed mutation.

use crate::config::PresenterConfig;
use crate::subscribers::{SubscriberSet, Subscription};
use lkit_core::{Action, ActionId, AnimationSpec, EntryId, segregate};
use std::fmt;
use tracing::{debug, warn};

/// An RGBA tint, threaded to the render layer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    /// An opaque RGB tint.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Tint {
    fn default() -> Self {
        // System blue.
        Self::rgb(0, 122, 255)
    }
}

/// Font weight for a dialog action row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Semibold,
    Bold,
}

/// Opaque font descriptor for a dialog action row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub weight: FontWeight,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: 17.0,
            weight: FontWeight::Regular,
        }
    }
}

/// Fonts for the two action groups.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionFonts {
    /// Font for regular and destructive actions.
    pub regular: FontSpec,
    /// Font for cancel actions.
    pub cancel: FontSpec,
}

/// Dialog appearance, opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConfirmTheme {
    pub tint: Tint,
    pub fonts: ActionFonts,
}

/// The live confirmation dialog: content plus segregated actions.
pub struct ConfirmEntry<C> {
    id: EntryId,
    content: C,
    theme: ConfirmTheme,
    actions: Vec<Action>,
    cancel_actions: Vec<Action>,
}

impl<C> ConfirmEntry<C> {
    fn new(content: C, theme: ConfirmTheme, actions: Vec<Action>) -> Self {
        let split = segregate(actions);
        Self {
            id: EntryId::new(),
            content,
            theme,
            actions: split.regular,
            cancel_actions: split.cancel,
        }
    }

    /// The dialog instance id.
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// The opaque content payload (dialog header).
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// The dialog appearance.
    #[must_use]
    pub fn theme(&self) -> &ConfirmTheme {
        &self.theme
    }

    /// Regular and destructive actions, in input order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Cancel actions, rendered last; never empty.
    #[must_use]
    pub fn cancel_actions(&self) -> &[Action] {
        &self.cancel_actions
    }

    fn find_action_mut(&mut self, id: ActionId) -> Option<&mut Action> {
        self.actions
            .iter_mut()
            .chain(self.cancel_actions.iter_mut())
            .find(|action| action.id() == id)
    }
}

impl<C> fmt::Debug for ConfirmEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmEntry")
            .field("id", &self.id)
            .field("actions", &self.actions.len())
            .field("cancel_actions", &self.cancel_actions.len())
            .finish()
    }
}

/// Capacity-one presenter for confirmation dialogs.
#[derive(Debug)]
pub struct ConfirmPresenter<C> {
    presented: Option<ConfirmEntry<C>>,
    subscribers: SubscriberSet<Option<ConfirmEntry<C>>>,
    config: PresenterConfig,
}

impl<C: 'static> ConfirmPresenter<C> {
    /// Create an empty presenter with confirm defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PresenterConfig::confirm())
    }

    /// Create an empty presenter with the given configuration.
    #[must_use]
    pub fn with_config(config: PresenterConfig) -> Self {
        Self {
            presented: None,
            subscribers: SubscriberSet::new(),
            config,
        }
    }

    /// Present a dialog with `content` and `actions`.
    ///
    /// Returns `false` (and changes nothing) while a dialog is already
    /// showing. Actions are segregated by role at this point; a default
    /// cancel is synthesized when none was supplied.
    pub fn present(&mut self, content: C, theme: ConfirmTheme, actions: Vec<Action>) -> bool {
        if self.presented.is_some() {
            warn!("confirm dialog already presented, skipped");
            return false;
        }

        let entry = ConfirmEntry::new(content, theme, actions);
        if self.config.verbose {
            debug!(id = %entry.id(), "presenting confirm dialog");
        }
        self.presented = Some(entry);
        self.notify();
        true
    }

    /// Dismiss the current dialog; a logged no-op when none is showing.
    ///
    /// Remaining action handlers are dropped with the entry.
    pub fn dismiss(&mut self) {
        if self.presented.is_none() {
            warn!("no confirm dialog presented, dismiss skipped");
            return;
        }
        if self.config.verbose {
            debug!("confirm dialog dismissed");
        }
        self.presented = None;
        self.notify();
    }

    /// Run the tapped action's handler, then dismiss the dialog.
    ///
    /// The handler is consumed and can never run twice. Returns `false`
    /// when no dialog is showing or `id` names no action in it; the dialog
    /// is left untouched in that case.
    pub fn invoke(&mut self, id: ActionId) -> bool {
        let Some(entry) = self.presented.as_mut() else {
            warn!("no confirm dialog presented, invoke skipped");
            return false;
        };
        let Some(action) = entry.find_action_mut(id) else {
            warn!("action not found in confirm dialog, invoke skipped");
            return false;
        };

        if let Some(handler) = action.take_handler() {
            handler();
        }
        self.dismiss();
        true
    }

    /// Whether a dialog is currently showing.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presented.is_some()
    }

    /// The live dialog, if any.
    #[must_use]
    pub fn entry(&self) -> Option<&ConfirmEntry<C>> {
        self.presented.as_ref()
    }

    /// Observe the slot; `callback` receives the new state after every
    /// committed mutation, until the returned guard is dropped.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Option<ConfirmEntry<C>>) + 'static,
    ) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    /// The animation descriptor for insertions.
    #[must_use]
    pub fn insertion_animation(&self) -> AnimationSpec {
        self.config.insertion_animation
    }

    /// The animation descriptor for removals.
    #[must_use]
    pub fn removal_animation(&self) -> AnimationSpec {
        self.config.removal_animation
    }

    fn notify(&self) {
        self.subscribers.notify(&self.presented);
    }
}

impl<C: 'static> Default for ConfirmPresenter<C> {
    fn default() -> Self {
        Self::new()
    }
}
