#![forbid(unsafe_code)]

//! Entry identity.
//!
//! An [`EntryId`] names one overlay for the whole of its presented lifetime.
//! The call site allocates the id (typically once per view binding) and keeps
//! it to request dismissal later; presenters only compare ids, never mint
//! them on the caller's behalf.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for unique entry IDs.
static ENTRY_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a presented overlay entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    /// Allocate a new process-unique entry ID.
    #[must_use]
    pub fn new() -> Self {
        Self(ENTRY_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Build an ID from a caller-managed identifier space.
    ///
    /// Raw ids are compared verbatim; callers mixing `from_raw` with
    /// [`EntryId::new`] are responsible for avoiding collisions.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw ID value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
