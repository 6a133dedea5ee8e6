#![forbid(unsafe_code)]

//! Change-notification registry for presenters.
//!
//! A [`SubscriberSet`] holds the observers of one presenter. Subscribing
//! returns a [`Subscription`] guard; dropping the guard unsubscribes. The
//! presenter calls `notify` exactly once per committed mutation, after its
//! state has fully settled.
//!
//! # Architecture
//!
//! Single-threaded shared ownership: callbacks live in an `Rc` owned by their
//! `Subscription`; the set stores only `Weak` references and prunes dead ones
//! lazily on each `notify`.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. Dropping a [`Subscription`] prevents any later delivery to its
//!    callback.
//! 3. Subscribing from within a callback is allowed; the new subscriber is
//!    first notified on the next `notify` cycle.
//!
//! # Failure Modes
//!
//! - A panicking callback propagates to the presenter's caller; earlier
//!   callbacks in the cycle have already run.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct Subscriber<A: ?Sized> {
    callback: Box<dyn Fn(&A)>,
}

/// Registry of observers receiving `&A` on every notification.
pub struct SubscriberSet<A: ?Sized> {
    subs: RefCell<Vec<Weak<Subscriber<A>>>>,
}

/// RAII guard keeping one subscription alive.
///
/// Dropping the guard unsubscribes; the registry prunes the slot lazily.
pub struct Subscription {
    _keep: Rc<dyn Any>,
}

impl<A: ?Sized + 'static> SubscriberSet<A> {
    /// Create an empty subscriber set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subs: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback; it stays active while the returned guard lives.
    pub fn subscribe(&self, callback: impl Fn(&A) + 'static) -> Subscription {
        let subscriber = Rc::new(Subscriber {
            callback: Box::new(callback),
        });
        self.subs.borrow_mut().push(Rc::downgrade(&subscriber));
        Subscription { _keep: subscriber }
    }

    /// Deliver `arg` to every live subscriber, in registration order.
    pub fn notify(&self, arg: &A) {
        // Upgrade and prune first so no borrow is held while callbacks run;
        // a callback may subscribe (but not mutate the owning presenter,
        // which would need a second `&mut`).
        let live: Vec<Rc<Subscriber<A>>> = {
            let mut subs = self.subs.borrow_mut();
            subs.retain(|weak| weak.strong_count() > 0);
            subs.iter().filter_map(Weak::upgrade).collect()
        };
        for subscriber in live {
            (subscriber.callback)(arg);
        }
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subs
            .borrow()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Whether no subscriber is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: ?Sized + 'static> Default for SubscriberSet<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> std::fmt::Debug for SubscriberSet<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("registered", &self.subs.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notify_reaches_subscriber() {
        let set: SubscriberSet<u32> = SubscriberSet::new();
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        let _sub = set.subscribe(move |v| s.set(*v));

        set.notify(&42);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn drop_unsubscribes() {
        let set: SubscriberSet<u32> = SubscriberSet::new();
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        let sub = set.subscribe(move |v| s.set(*v));

        set.notify(&1);
        assert_eq!(seen.get(), 1);

        drop(sub);
        set.notify(&2);
        assert_eq!(seen.get(), 1, "dropped subscriber must not fire");
        assert!(set.is_empty());
    }

    #[test]
    fn registration_order_delivery() {
        let set: SubscriberSet<u32> = SubscriberSet::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o1 = Rc::clone(&order);
        let _a = set.subscribe(move |_| o1.borrow_mut().push("first"));
        let o2 = Rc::clone(&order);
        let _b = set.subscribe(move |_| o2.borrow_mut().push("second"));

        set.notify(&0);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn multiple_subscribers_all_fire() {
        let set: SubscriberSet<u32> = SubscriberSet::new();
        let count = Rc::new(Cell::new(0));

        let guards: Vec<_> = (0..5)
            .map(|_| {
                let c = Rc::clone(&count);
                set.subscribe(move |_| c.set(c.get() + 1))
            })
            .collect();
        assert_eq!(set.len(), 5);

        set.notify(&0);
        assert_eq!(count.get(), 5);
        drop(guards);
    }

    #[test]
    fn unsized_argument() {
        let set: SubscriberSet<[u8]> = SubscriberSet::new();
        let seen = Rc::new(Cell::new(0usize));
        let s = Rc::clone(&seen);
        let _sub = set.subscribe(move |slice| s.set(slice.len()));

        set.notify(&[1, 2, 3]);
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn subscribe_during_notify() {
        let set: Rc<SubscriberSet<u32>> = Rc::new(SubscriberSet::new());
        let late = Rc::new(RefCell::new(None));

        let set2 = Rc::clone(&set);
        let late2 = Rc::clone(&late);
        let _outer = set.subscribe(move |_| {
            if late2.borrow().is_none() {
                *late2.borrow_mut() = Some(set2.subscribe(|_| {}));
            }
        });

        set.notify(&0);
        assert_eq!(set.len(), 2);
    }
}
