// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weft UI Action: observable value-action controllers for UI data binding.
//!
//! A controller mediates one input value between a data model and a visual
//! editor. It is a small state machine tracking a pending (edited) value,
//! the last-committed state, and the constraint options an editor should
//! apply, broadcasting change notifications to subscribed views and
//! consumers.
//!
//! - [`UiAction`] is the base controller: the edited flag, the commit
//!   protocol, the auto-acceptance policy, and the base push channel.
//! - [`NumberUiAction`] is the numeric controller: an optional `f64` value
//!   slot with a defined-value shadow, a [`NumberOptions`] constraint slot,
//!   and a number-specific push channel layered over the base one.
//!
//! ## Control Flow
//!
//! The data-binding side pushes state into the controller; the editor side
//! commits user edits out of it:
//!
//! ```text
//! data source ── push_value / push_options ──▶ NumberUiAction ──▶ subscribers
//! editor      ── commit_value(kind) ─────────▶ NumberUiAction ──▶ subscribers
//! ```
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use weft_ui_action::{CommitKind, NumberOptions, NumberPushHandlers, NumberUiAction};
//!
//! let action = NumberUiAction::new();
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! let log_in_handler = log.clone();
//! action.subscribe_push_events(NumberPushHandlers {
//!     value: Some(Box::new(move |value, edited| {
//!         log_in_handler.borrow_mut().push((value, edited));
//!     })),
//!     ..Default::default()
//! });
//!
//! action.push_value(Some(42.0));
//! action.push_options(NumberOptions::default().with_min(0.0).with_max(100.0));
//! action.commit_value(Some(42.0), CommitKind::Explicit);
//!
//! assert_eq!(*log.borrow(), vec![(Some(42.0), false)]);
//! assert_eq!(action.options().max, Some(100.0));
//! ```
//!
//! ## Design Notes
//!
//! - **Single-threaded and synchronous**: every mutation and notification
//!   completes inline within the call that triggered it. All methods take
//!   `&self` via interior mutability so handlers can re-enter the
//!   controller; notification iterates a snapshot of the subscriber list
//!   (see `weft_multi_event`), so mid-pass subscribe/unsubscribe never
//!   corrupts a pass.
//! - **No validation**: controllers accept any value and any options
//!   record. Constraint enforcement belongs to the consuming view.
//! - **One subscription, two channels**: a [`NumberPushHandlers`] bundle is
//!   registered on the base and number channels under a single shared
//!   [`SubscriptionId`](weft_multi_event::SubscriptionId), and released
//!   from both by one unsubscribe.
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod action;
mod number;

pub use action::{
    AutoAcceptance, CommitKind, CommitPushHandler, EditedPushHandler, UiAction, UiPushHandlers,
};
pub use number::{
    NumberOptions, NumberPushHandlers, NumberUiAction, OptionsPushHandler, ValuePushHandler,
};
