// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weft Multi Event: identifier-keyed multi-subscriber event fan-out.
//!
//! [`MultiEvent`] is the subscription registry underlying Weft's UI action
//! controllers. It holds an ordered list of handler bundles, each keyed by a
//! [`SubscriptionId`] assigned at subscribe time, and hands notifiers a
//! snapshot of that list so the set of handlers invoked in one notification
//! pass is fixed even when handlers subscribe or unsubscribe mid-pass.
//!
//! ## Design Notes
//!
//! - **Single-threaded, callback-driven**: all operations take `&self` via
//!   interior mutability so a handler invoked during notification can
//!   re-enter the registry. There is no locking and the types are not
//!   `Send`.
//! - **Snapshot-on-notify**: notifiers call [`MultiEvent::copy_handlers`]
//!   and iterate the returned snapshot. Mutation during the pass only
//!   affects later passes.
//! - **Shared identifiers**: [`MultiEvent::subscribe_with_id`] registers a
//!   bundle under a caller-supplied id, letting two registries share one
//!   logical subscription.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use weft_multi_event::MultiEvent;
//!
//! struct Handlers {
//!     fired: Cell<u32>,
//! }
//!
//! let event: MultiEvent<Handlers> = MultiEvent::new();
//! let handlers = Rc::new(Handlers { fired: Cell::new(0) });
//! let id = event.subscribe(handlers.clone());
//!
//! // A notification pass iterates a snapshot of the current subscribers.
//! for subscriber in event.copy_handlers() {
//!     subscriber.fired.set(subscriber.fired.get() + 1);
//! }
//! assert_eq!(handlers.fired.get(), 1);
//!
//! assert!(event.unsubscribe(id));
//! assert!(event.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;
use smallvec::SmallVec;

/// Identifies one subscription within a [`MultiEvent`].
///
/// Ids are allocated by [`MultiEvent::subscribe`] and are never reused by
/// the allocating registry. A subscriber holds its id until it passes it
/// back to [`MultiEvent::unsubscribe`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a subscription id from a raw value.
    ///
    /// This is typically only useful in tests; real ids come from
    /// [`MultiEvent::subscribe`].
    #[must_use]
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of this id.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubscriptionId").field(&self.0).finish()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

/// An ordered registry of handler bundles with snapshot-based notification.
///
/// `H` is the subscriber-supplied bundle type; this registry never inspects
/// it. Bundles are stored behind [`Rc`] so [`Self::copy_handlers`] can
/// produce a cheap snapshot for notifiers to iterate.
///
/// Most subscriber lists are tiny (a view plus a data binding or two), so
/// entries are stored inline until the list grows past a handful.
pub struct MultiEvent<H> {
    handlers: RefCell<SmallVec<[(SubscriptionId, Rc<H>); 4]>>,
    next_id: Cell<u64>,
}

impl<H> MultiEvent<H> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(SmallVec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Registers a handler bundle and returns its freshly allocated id.
    pub fn subscribe(&self, handlers: Rc<H>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, handlers));
        id
    }

    /// Registers a handler bundle under a caller-supplied id.
    ///
    /// This is how two registries share one logical subscription: the first
    /// registry allocates the id via [`Self::subscribe`] and the second
    /// registers its part of the bundle under the same id. Returns the id
    /// it was given.
    pub fn subscribe_with_id(&self, handlers: Rc<H>, id: SubscriptionId) -> SubscriptionId {
        debug_assert!(
            !self.is_subscribed(id),
            "subscription id already registered"
        );
        // Keep locally allocated ids from colliding with adopted ones.
        if id.0 >= self.next_id.get() {
            self.next_id.set(id.0 + 1);
        }
        self.handlers.borrow_mut().push((id, handlers));
        id
    }

    /// Removes the subscription with the given id.
    ///
    /// Returns `false` when the id is not currently registered; removing an
    /// unknown id is not an error.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        match handlers.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                handlers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the given id is currently registered.
    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.handlers
            .borrow()
            .iter()
            .any(|(entry_id, _)| *entry_id == id)
    }

    /// Returns a snapshot of the current handler bundles in subscription
    /// order.
    ///
    /// Notifiers iterate this snapshot rather than the live list, so a
    /// handler that subscribes or unsubscribes during the pass neither
    /// joins nor leaves the in-progress notification.
    #[must_use]
    pub fn copy_handlers(&self) -> Vec<Rc<H>> {
        self.handlers
            .borrow()
            .iter()
            .map(|(_, handlers)| handlers.clone())
            .collect()
    }

    /// Returns the number of current subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Returns `true` if there are no current subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }
}

impl<H> Default for MultiEvent<H> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug impl since handler bundles usually aren't Debug.
impl<H> fmt::Debug for MultiEvent<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiEvent")
            .field("subscriber_count", &self.subscriber_count())
            .field("next_id", &self.next_id.get())
            .finish()
    }
}
