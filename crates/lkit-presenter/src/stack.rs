#![forbid(unsafe_code)]

//! The generic presentation-stack presenter.
//!
//! One `StackPresenter` instance manages the ordered entry stack for a single
//! presentation kind (cover, fullscreen sheet, popup, or notification; see
//! [`kinds`](crate::kinds)). Entries append on present, so the newest entry
//! is always topmost; only the top entry is eligible for gesture dismissal
//! and expiration.
//!
//! # Invariants
//!
//! - `entries()[i].depth() == i` for all `i`, after every operation.
//! - At most one entry per id.
//! - At most one live expiration timer, always bound to the current top
//!   entry; it is replaced whenever the top changes, for any reason.
//! - Exactly one subscriber notification per committed mutation, emitted
//!   after the mutation has fully settled. Rejected or no-op calls emit
//!   nothing.
//!
//! # Failure Modes
//!
//! Every operation is total. Presenting a duplicate id returns `None`;
//! dismissing an unknown id and popping an empty stack are logged no-ops.
//! Call sites use the `present` return value to revert their own
//! presentation-intent state.

use crate::config::PresenterConfig;
use crate::subscribers::{SubscriberSet, Subscription};
use crate::timer::EntryTimer;
use lkit_core::entry::reindex_depths;
use lkit_core::{AnimationSpec, EntryId, EntryMetadata, OutTapBehavior, StackEntry};
use tracing::{debug, warn};
use web_time::Instant;

/// Ordered, uniquely-keyed presentation stack for one overlay kind.
#[derive(Debug)]
pub struct StackPresenter<C> {
    stack: Vec<StackEntry<C>>,
    subscribers: SubscriberSet<[StackEntry<C>]>,
    top_entry_timer: Option<EntryTimer>,
    config: PresenterConfig,
}

impl<C: 'static> StackPresenter<C> {
    /// Create an empty presenter with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PresenterConfig::default())
    }

    /// Create an empty presenter with the given configuration.
    #[must_use]
    pub fn with_config(config: PresenterConfig) -> Self {
        Self {
            stack: Vec::new(),
            subscribers: SubscriberSet::new(),
            top_entry_timer: None,
            config,
        }
    }

    // --- Stack Operations ---

    /// Present `content` under `id` with the given metadata.
    ///
    /// Returns `None` when `id` is already in the stack, an expected race
    /// with re-triggered call sites rather than a programming error. On success the
    /// entry becomes the new top, any previous expiration timer is dropped,
    /// and a fresh one is armed when the entry's policy is a timeout.
    pub fn present(&mut self, id: EntryId, metadata: EntryMetadata, content: C) -> Option<EntryId> {
        if self.contains(id) {
            warn!(%id, "already in stack, present skipped");
            return None;
        }

        self.top_entry_timer = None;

        let depth = self.stack.len();
        self.stack.push(StackEntry::new(id, depth, metadata, content));

        if let Some(duration) = metadata.expiration.timeout() {
            self.top_entry_timer = Some(EntryTimer::schedule(id, duration));
            if self.config.verbose {
                debug!(%id, ?duration, "expiration scheduled");
            }
        }

        if self.config.verbose {
            debug!(%id, depth, "presenting");
        }
        self.notify();
        Some(id)
    }

    /// Dismiss the entry with `id`.
    ///
    /// Unknown ids are a logged no-op (idempotent against double-dismiss
    /// races). Dismissing the top entry re-arms the expiration timer for the
    /// entry that becomes top, per its own policy; dismissing below the top
    /// reindexes the depths above the removal point and leaves the timer
    /// untouched.
    pub fn dismiss(&mut self, id: EntryId) {
        let Some(index) = self.stack.iter().position(|entry| entry.id() == id) else {
            warn!(%id, "not found in stack, dismiss skipped");
            return;
        };

        if index == self.stack.len() - 1 {
            self.stack.pop();
            self.top_entry_timer = None;

            if let Some(new_top) = self.stack.last()
                && let Some(duration) = new_top.metadata().expiration.timeout()
            {
                self.top_entry_timer = Some(EntryTimer::schedule(new_top.id(), duration));
                if self.config.verbose {
                    debug!(id = %new_top.id(), ?duration, "expiration scheduled for new top");
                }
            }
        } else {
            self.stack.remove(index);
            reindex_depths(&mut self.stack, index);
        }

        if self.config.verbose {
            debug!(%id, "dismissed");
        }
        self.notify();
    }

    /// Dismiss the current top entry; no-op on an empty stack.
    pub fn pop_last(&mut self) {
        if let Some(top_id) = self.top_id() {
            self.top_entry_timer = None;
            self.dismiss(top_id);
        }
    }

    /// Dismiss every entry in one mutation.
    ///
    /// Cancels the expiration timer and emits a single notification; a
    /// no-op (and silent) when the stack is already empty.
    pub fn pop_to_root(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        self.top_entry_timer = None;
        self.stack.clear();
        if self.config.verbose {
            debug!("popped to root");
        }
        self.notify();
    }

    /// Pop the top entry when its outside-tap behaviour requests it.
    ///
    /// Returns whether a dismissal happened.
    pub fn handle_out_tap(&mut self) -> bool {
        let dismisses = self
            .top()
            .is_some_and(|entry| entry.metadata().out_tap == OutTapBehavior::Dismiss);
        if dismisses {
            self.pop_last();
        }
        dismisses
    }

    // --- Expiration ---

    /// Drive expiration from the host event loop.
    ///
    /// Fires the live timer when due, dismissing its entry through the
    /// normal path (so the next top is re-armed). Returns the auto-dismissed
    /// id, if any.
    pub fn tick(&mut self, now: Instant) -> Option<EntryId> {
        let fired = self
            .top_entry_timer
            .as_mut()
            .and_then(|timer| timer.fire_if_due(now))?;
        if self.config.verbose {
            debug!(id = %fired, "expired");
        }
        self.dismiss(fired);
        Some(fired)
    }

    /// The entry the live expiration timer is bound to, if one is armed.
    #[must_use]
    pub fn expiration_owner(&self) -> Option<EntryId> {
        self.top_entry_timer
            .as_ref()
            .filter(|timer| timer.is_live())
            .map(EntryTimer::owner)
    }

    // --- State Queries ---

    /// The ordered entry list, bottom to top.
    #[must_use]
    pub fn entries(&self) -> &[StackEntry<C>] {
        &self.stack
    }

    /// Whether an entry with `id` is in the stack.
    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.stack.iter().any(|entry| entry.id() == id)
    }

    /// Whether `id` is the current top entry.
    #[must_use]
    pub fn is_top(&self, id: EntryId) -> bool {
        self.top_id() == Some(id)
    }

    /// The top entry, if any.
    #[must_use]
    pub fn top(&self) -> Option<&StackEntry<C>> {
        self.stack.last()
    }

    /// The top entry's id, if any.
    #[must_use]
    pub fn top_id(&self) -> Option<EntryId> {
        self.stack.last().map(StackEntry::id)
    }

    /// Number of entries in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    // --- Observation & Configuration ---

    /// Observe the stack; `callback` receives the new ordered entry list
    /// after every committed mutation, until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&[StackEntry<C>]) + 'static) -> Subscription {
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
        self.subscribers.notify(&self.stack);
    }
}

impl<C: 'static> Default for StackPresenter<C> {
    fn default() -> Self {
        Self::new()
    }
}
