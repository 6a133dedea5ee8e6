#![forbid(unsafe_code)]

//! Stack entries and their per-kind metadata.
//!
//! A [`StackEntry`] is one active overlay in a presentation stack: a stable
//! id, its depth (always equal to its index), an opaque content payload, and
//! an immutable [`EntryMetadata`] policy bundle. The content type is a
//! generic parameter; the core never looks inside it.
//!
//! # Invariants
//!
//! - `depth` equals the entry's index in its stack at all times; presenters
//!   reindex after non-tail removals.
//! - Metadata is fixed at present time; there is no way to mutate it on a
//!   live entry.

use crate::geometry::Edges;
use crate::id::EntryId;
use crate::policy::{DismissalScroll, ExpirationPolicy, Modality, OutTapBehavior};
use std::fmt;

/// Immutable policy bundle attached to an entry at present time.
///
/// The default is fully inert: non-modal, never expires, honors every
/// safe-area edge, no scroll dismissal, outside taps ignored. Per-kind
/// constructors fill in what each presentation kind actually configures;
/// builder setters cover the rest.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EntryMetadata {
    /// Whether the entry blocks interaction with content beneath it.
    pub modality: Modality,
    /// Auto-dismissal rule, applied only while the entry is on top.
    pub expiration: ExpirationPolicy,
    /// Safe-area edges the content extends under.
    pub ignores_edges: Edges,
    /// Pull-to-dismiss behaviour.
    pub dismissal_scroll: DismissalScroll,
    /// Behaviour when the user taps outside the entry.
    pub out_tap: OutTapBehavior,
}

impl EntryMetadata {
    /// Metadata for a cover: modality is the only kind-specific knob.
    #[must_use]
    pub fn cover(modal: Modality) -> Self {
        Self {
            modality: modal,
            ..Self::default()
        }
    }

    /// Metadata for a fullscreen sheet.
    #[must_use]
    pub fn fullscreen(ignores_edges: Edges, dismissal_scroll: DismissalScroll) -> Self {
        Self {
            ignores_edges,
            dismissal_scroll,
            ..Self::default()
        }
    }

    /// Metadata for a popup.
    #[must_use]
    pub fn popup(ignores_edges: Edges, out_tap: OutTapBehavior) -> Self {
        Self {
            ignores_edges,
            out_tap,
            ..Self::default()
        }
    }

    /// Metadata for a transient notification.
    #[must_use]
    pub fn notification(expiration: ExpirationPolicy) -> Self {
        Self {
            expiration,
            ..Self::default()
        }
    }

    /// Set the modality.
    #[must_use]
    pub fn modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    /// Set the expiration policy.
    #[must_use]
    pub fn expiration(mut self, expiration: ExpirationPolicy) -> Self {
        self.expiration = expiration;
        self
    }

    /// Set the ignored safe-area edges.
    #[must_use]
    pub fn ignores_edges(mut self, edges: Edges) -> Self {
        self.ignores_edges = edges;
        self
    }

    /// Set the pull-to-dismiss behaviour.
    #[must_use]
    pub fn dismissal_scroll(mut self, scroll: DismissalScroll) -> Self {
        self.dismissal_scroll = scroll;
        self
    }

    /// Set the outside-tap behaviour.
    #[must_use]
    pub fn out_tap(mut self, out_tap: OutTapBehavior) -> Self {
        self.out_tap = out_tap;
        self
    }

    /// Whether gesture-driven dismissal applies to this entry at all.
    ///
    /// Requires an interactive modality and a positive scroll threshold;
    /// entries failing either test are excluded from the gesture path
    /// entirely (no drag feedback, no commit).
    #[must_use]
    pub fn allows_interactive_dismiss(&self) -> bool {
        self.modality.is_interactive() && self.dismissal_scroll.predicted_threshold() > 0.0
    }
}

/// One active overlay entry in a presentation stack.
#[derive(Clone, PartialEq)]
pub struct StackEntry<C> {
    id: EntryId,
    depth: usize,
    metadata: EntryMetadata,
    content: C,
}

impl<C> StackEntry<C> {
    /// Create an entry at `depth` with the given metadata and content.
    #[must_use]
    pub fn new(id: EntryId, depth: usize, metadata: EntryMetadata, content: C) -> Self {
        Self {
            id,
            depth,
            metadata,
            content,
        }
    }

    /// The entry's stable id.
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Zero-based position in the stack; equal to the entry's index.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The entry's policy bundle.
    #[must_use]
    pub fn metadata(&self) -> &EntryMetadata {
        &self.metadata
    }

    /// The opaque content payload.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }
}

/// Reindex `entries` so that `entries[i].depth() == i`, starting at `from`.
///
/// Entries before `from` are left untouched (their depth is already
/// correct). Used by presenters after a non-tail removal.
pub fn reindex_depths<C>(entries: &mut [StackEntry<C>], from: usize) {
    for (index, entry) in entries.iter_mut().enumerate().skip(from) {
        entry.set_depth(index);
    }
}

impl<C> fmt::Debug for StackEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackEntry")
            .field("id", &self.id)
            .field("depth", &self.depth)
            .field("metadata", &self.metadata)
            .finish()
    }
}
