#![forbid(unsafe_code)]

//! Actions for confirmation dialogs.
//!
//! An [`Action`] is one tappable row of a dialog: a role, an optional label
//! and icon, and a handler that runs at most once. Dialogs segregate their
//! actions by role at construction time: cancel-role actions always render
//! after the regular ones, and a default cancel is synthesized when none was
//! supplied.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for unique action IDs.
static ACTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an action within a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(u64);

impl ActionId {
    fn new() -> Self {
        Self(ACTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The role an action plays in a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRole {
    /// Performs a non-destructive operation.
    Regular,
    /// Permanently deletes or irreversibly changes something.
    Destructive,
    /// Hides the dialog without performing an operation; always listed last.
    Cancel,
}

/// Handler invoked when an action is tapped. Consumed on first invocation.
pub type ActionHandler = Box<dyn FnOnce()>;

/// One tappable dialog action.
pub struct Action {
    id: ActionId,
    role: ActionRole,
    label: Option<String>,
    icon: Option<String>,
    handler: Option<ActionHandler>,
}

impl Action {
    fn new(
        role: ActionRole,
        label: Option<String>,
        icon: Option<String>,
        handler: Option<ActionHandler>,
    ) -> Self {
        Self {
            id: ActionId::new(),
            role,
            label,
            icon,
            handler,
        }
    }

    /// A regular action with a label and a tap handler.
    pub fn regular(label: impl Into<String>, handler: impl FnOnce() + 'static) -> Self {
        Self::new(
            ActionRole::Regular,
            Some(label.into()),
            None,
            Some(Box::new(handler)),
        )
    }

    /// A destructive action with a label and a tap handler.
    pub fn destructive(label: impl Into<String>, handler: impl FnOnce() + 'static) -> Self {
        Self::new(
            ActionRole::Destructive,
            Some(label.into()),
            None,
            Some(Box::new(handler)),
        )
    }

    /// A cancel action with a label and no handler (dismissal is implicit).
    pub fn cancel(label: impl Into<String>) -> Self {
        Self::new(ActionRole::Cancel, Some(label.into()), None, None)
    }

    /// A cancel action with a label and a tap handler.
    pub fn cancel_with(label: impl Into<String>, handler: impl FnOnce() + 'static) -> Self {
        Self::new(
            ActionRole::Cancel,
            Some(label.into()),
            None,
            Some(Box::new(handler)),
        )
    }

    /// The default cancel action, synthesized when a dialog has none.
    #[must_use]
    pub fn default_cancel() -> Self {
        Self::cancel("Cancel")
    }

    /// Attach an icon reference.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// This action's unique ID.
    #[must_use]
    pub fn id(&self) -> ActionId {
        self.id
    }

    /// This action's role.
    #[must_use]
    pub fn role(&self) -> ActionRole {
        self.role
    }

    /// The display label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The icon reference, if any.
    #[must_use]
    pub fn icon_ref(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Take the handler, leaving the action spent.
    ///
    /// Returns `None` if the action has no handler or was already invoked.
    pub fn take_handler(&mut self) -> Option<ActionHandler> {
        self.handler.take()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("role", &self.role)
            .field("label", &self.label)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Actions split by role: regular (and destructive) first, cancel last.
#[derive(Debug, Default)]
pub struct SegregatedActions {
    /// Non-cancel actions, in input order.
    pub regular: Vec<Action>,
    /// Cancel-role actions, in input order; never empty after segregation.
    pub cancel: Vec<Action>,
}

impl SegregatedActions {
    /// Total number of actions across both groups.
    #[must_use]
    pub fn count(&self) -> usize {
        self.regular.len() + self.cancel.len()
    }
}

/// Split `actions` into regular and cancel groups, preserving the relative
/// order within each group.
///
/// If no cancel-role action was supplied, a default one is synthesized so a
/// dialog always has a way out.
#[must_use]
pub fn segregate(actions: Vec<Action>) -> SegregatedActions {
    let mut regular = Vec::new();
    let mut cancel = Vec::new();

    for action in actions {
        match action.role() {
            ActionRole::Cancel => cancel.push(action),
            _ => regular.push(action),
        }
    }

    if cancel.is_empty() {
        cancel.push(Action::default_cancel());
    }

    SegregatedActions { regular, cancel }
}
