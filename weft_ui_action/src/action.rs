// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base action controller: commit/edit lifecycle and the base push channel.
//!
//! [`UiAction`] carries the state every value controller shares: whether the
//! action is mid-edit, how pushed values are auto-accepted, and a channel of
//! base push-event subscribers. Typed controllers such as
//! [`NumberUiAction`](crate::NumberUiAction) own a `UiAction` and layer
//! their value-specific channel on top of it, sharing subscription ids
//! across both channels.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use weft_multi_event::{MultiEvent, SubscriptionId};

/// How a value commit was initiated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommitKind {
    /// A deliberate user action, such as pressing Enter in an editor.
    Explicit,
    /// An indirect cause: loss of focus, or auto-acceptance of a pushed
    /// value.
    Implicit,
}

/// Policy for what happens to a value pushed from the data-source side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AutoAcceptance {
    /// Pushed values stay pending until something commits them.
    #[default]
    None,
    /// A pushed value is immediately committed (as [`CommitKind::Implicit`]).
    Accept,
}

/// Handler invoked when the edited flag transitions.
pub type EditedPushHandler = Box<dyn Fn(bool)>;

/// Handler invoked when the action commits.
pub type CommitPushHandler = Box<dyn Fn(CommitKind)>;

/// Base-channel handler bundle.
///
/// Every callback is independently optional; a subscriber registers only
/// the ones it cares about and absent handlers are simply skipped during
/// notification.
#[derive(Default)]
pub struct UiPushHandlers {
    /// Called with the new flag when the edited state transitions.
    pub edited: Option<EditedPushHandler>,
    /// Called when the action commits, with the kind of commit.
    pub committed: Option<CommitPushHandler>,
}

// Manual Debug impl since callbacks aren't Debug.
impl fmt::Debug for UiPushHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiPushHandlers")
            .field("has_edited", &self.edited.is_some())
            .field("has_committed", &self.committed.is_some())
            .finish()
    }
}

/// Commit/edit lifecycle state shared by all value controllers.
///
/// All methods take `&self`: the model is single-threaded and
/// callback-driven, and subscribers must be able to call back into the
/// action from inside a notification.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use weft_ui_action::{CommitKind, UiAction, UiPushHandlers};
///
/// let action = UiAction::new();
/// let committed = Rc::new(Cell::new(None));
///
/// let committed_in_handler = committed.clone();
/// action.subscribe_push_events(UiPushHandlers {
///     committed: Some(Box::new(move |kind| committed_in_handler.set(Some(kind)))),
///     ..Default::default()
/// });
///
/// action.set_edited(true);
/// assert!(action.edited());
///
/// action.commit(CommitKind::Explicit);
/// assert!(!action.edited());
/// assert_eq!(committed.get(), Some(CommitKind::Explicit));
/// ```
#[derive(Debug)]
pub struct UiAction {
    edited: Cell<bool>,
    auto_acceptance: Cell<AutoAcceptance>,
    push_event: MultiEvent<UiPushHandlers>,
}

impl UiAction {
    /// Creates an action that is not edited, with [`AutoAcceptance::None`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            edited: Cell::new(false),
            auto_acceptance: Cell::new(AutoAcceptance::None),
            push_event: MultiEvent::new(),
        }
    }

    /// Returns `true` while the action holds an uncommitted user edit.
    #[must_use]
    #[inline]
    pub fn edited(&self) -> bool {
        self.edited.get()
    }

    /// Returns the configured auto-acceptance policy.
    #[must_use]
    #[inline]
    pub fn auto_acceptance(&self) -> AutoAcceptance {
        self.auto_acceptance.get()
    }

    /// Sets the auto-acceptance policy applied by [`Self::push_auto_acceptance`].
    #[inline]
    pub fn set_auto_acceptance(&self, policy: AutoAcceptance) {
        self.auto_acceptance.set(policy);
    }

    /// Runs the base commit protocol: clears the edited flag and notifies
    /// `committed` subscribers with the given kind.
    pub fn commit(&self, kind: CommitKind) {
        self.edited.set(false);
        self.notify_commit_push(kind);
    }

    /// Sets the edited flag.
    ///
    /// On a transition, notifies `edited` subscribers and returns
    /// `Some(new_flag)` so the owning controller can re-announce its
    /// current value under the new flag. Returns `None` when the flag was
    /// already in the requested state.
    pub fn set_edited(&self, edited: bool) -> Option<bool> {
        if self.edited.get() == edited {
            return None;
        }
        self.edited.set(edited);
        self.notify_edited_push(edited);
        Some(edited)
    }

    /// Applies the auto-acceptance policy to a just-pushed value.
    ///
    /// Under [`AutoAcceptance::Accept`] this commits with
    /// [`CommitKind::Implicit`]; under [`AutoAcceptance::None`] it does
    /// nothing. Controllers call this after notifying subscribers of a
    /// push, never after a re-announcement.
    pub fn push_auto_acceptance(&self) {
        if self.auto_acceptance.get() == AutoAcceptance::Accept {
            self.commit(CommitKind::Implicit);
        }
    }

    /// Registers a base-channel handler bundle, returning its subscription
    /// id.
    pub fn subscribe_push_events(&self, handlers: UiPushHandlers) -> SubscriptionId {
        self.push_event.subscribe(Rc::new(handlers))
    }

    /// Removes a base-channel subscription.
    ///
    /// Returns `false` when the id is not currently registered.
    pub fn unsubscribe_push_events(&self, id: SubscriptionId) -> bool {
        self.push_event.unsubscribe(id)
    }

    fn notify_edited_push(&self, edited: bool) {
        for handlers in self.push_event.copy_handlers() {
            if let Some(handler) = &handlers.edited {
                handler(edited);
            }
        }
    }

    fn notify_commit_push(&self, kind: CommitKind) {
        for handlers in self.push_event.copy_handlers() {
            if let Some(handler) = &handlers.committed {
                handler(kind);
            }
        }
    }
}

impl Default for UiAction {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn new_action_is_not_edited() {
        let action = UiAction::new();
        assert!(!action.edited());
        assert_eq!(action.auto_acceptance(), AutoAcceptance::None);
    }

    #[test]
    fn commit_clears_edited_and_notifies_kind() {
        let action = UiAction::new();
        let committed = Rc::new(Cell::new(None));

        let committed_in_handler = committed.clone();
        action.subscribe_push_events(UiPushHandlers {
            committed: Some(Box::new(move |kind| committed_in_handler.set(Some(kind)))),
            ..Default::default()
        });

        action.set_edited(true);
        action.commit(CommitKind::Explicit);

        assert!(!action.edited());
        assert_eq!(committed.get(), Some(CommitKind::Explicit));
    }

    #[test]
    fn set_edited_reports_transitions_only() {
        let action = UiAction::new();

        assert_eq!(action.set_edited(true), Some(true));
        assert_eq!(action.set_edited(true), None);
        assert_eq!(action.set_edited(false), Some(false));
        assert_eq!(action.set_edited(false), None);
    }

    #[test]
    fn set_edited_notifies_on_transition_only() {
        let action = UiAction::new();
        let flags = Rc::new(RefCell::new(Vec::new()));

        let flags_in_handler = flags.clone();
        action.subscribe_push_events(UiPushHandlers {
            edited: Some(Box::new(move |edited| {
                flags_in_handler.borrow_mut().push(edited);
            })),
            ..Default::default()
        });

        action.set_edited(true);
        action.set_edited(true);
        action.set_edited(false);

        assert_eq!(*flags.borrow(), Vec::from([true, false]));
    }

    #[test]
    fn push_auto_acceptance_is_a_no_op_without_policy() {
        let action = UiAction::new();
        let commits = Rc::new(Cell::new(0));

        let commits_in_handler = commits.clone();
        action.subscribe_push_events(UiPushHandlers {
            committed: Some(Box::new(move |_| {
                commits_in_handler.set(commits_in_handler.get() + 1);
            })),
            ..Default::default()
        });

        action.set_edited(true);
        action.push_auto_acceptance();

        assert!(action.edited());
        assert_eq!(commits.get(), 0);
    }

    #[test]
    fn push_auto_acceptance_commits_implicitly_under_accept() {
        let action = UiAction::new();
        action.set_auto_acceptance(AutoAcceptance::Accept);
        let committed = Rc::new(Cell::new(None));

        let committed_in_handler = committed.clone();
        action.subscribe_push_events(UiPushHandlers {
            committed: Some(Box::new(move |kind| committed_in_handler.set(Some(kind)))),
            ..Default::default()
        });

        action.set_edited(true);
        action.push_auto_acceptance();

        assert!(!action.edited());
        assert_eq!(committed.get(), Some(CommitKind::Implicit));
    }

    #[test]
    fn unsubscribed_handlers_are_not_notified() {
        let action = UiAction::new();
        let commits = Rc::new(Cell::new(0));

        let commits_in_handler = commits.clone();
        let id = action.subscribe_push_events(UiPushHandlers {
            committed: Some(Box::new(move |_| {
                commits_in_handler.set(commits_in_handler.get() + 1);
            })),
            ..Default::default()
        });

        action.commit(CommitKind::Explicit);
        assert!(action.unsubscribe_push_events(id));
        action.commit(CommitKind::Explicit);

        assert_eq!(commits.get(), 1);
    }

    #[test]
    fn empty_bundle_is_skipped_without_error() {
        let action = UiAction::new();
        action.subscribe_push_events(UiPushHandlers::default());

        action.set_edited(true);
        action.commit(CommitKind::Implicit);
    }

    #[test]
    fn handlers_debug_reports_presence() {
        let bundle = UiPushHandlers {
            edited: Some(Box::new(|_| {})),
            committed: None,
        };

        let debug = format!("{:?}", bundle);
        assert!(debug.contains("has_edited: true"));
        assert!(debug.contains("has_committed: false"));
    }
}
