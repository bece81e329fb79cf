// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric value controller: mediates a number between model and editor.
//!
//! [`NumberUiAction`] tracks a pending (possibly absent) numeric value, the
//! constraint [`NumberOptions`] an editor should apply, and a number-specific
//! push channel layered over the base [`UiAction`] channel. The data-binding
//! side calls [`NumberUiAction::push_value`] / [`NumberUiAction::push_options`];
//! the editor calls [`NumberUiAction::commit_value`] when the user finishes
//! an edit.
//!
//! ## Value absence
//!
//! An absent value is meaningful ("nothing entered yet") and is carried as
//! genuine `Option<f64>` absence through [`NumberUiAction::value`]. For view
//! boundaries that need a concrete number regardless,
//! [`NumberUiAction::defined_value`] substitutes
//! [`NumberUiAction::UNDEFINED_NUMBER`]; the sentinel never leaks into
//! `value()`.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use weft_multi_event::{MultiEvent, SubscriptionId};

use crate::action::{AutoAcceptance, CommitKind, UiAction, UiPushHandlers};

/// Constraints a numeric editor should apply when presenting and accepting
/// values.
///
/// Every field is independently optional; `None` means "no constraint, use
/// the view default". The controller never validates values against these
/// constraints (nor the constraints against each other, so `min > max` is
/// representable) — enforcement belongs entirely to the consuming view.
///
/// # Example
///
/// ```rust
/// use weft_ui_action::NumberOptions;
///
/// let percent = NumberOptions::default()
///     .with_min(0.0)
///     .with_max(100.0)
///     .with_step(0.5);
///
/// assert_eq!(percent.min, Some(0.0));
/// assert_eq!(percent.integer, None);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NumberOptions {
    /// Restrict input to whole numbers.
    pub integer: Option<bool>,
    /// Largest acceptable value.
    pub max: Option<f64>,
    /// Smallest acceptable value.
    pub min: Option<f64>,
    /// Increment applied by spinner arrows and similar affordances.
    pub step: Option<f64>,
    /// Display-only grouping of digits (e.g. thousands separators).
    pub use_grouping: Option<bool>,
    /// Minimum number of fraction digits to display.
    pub minimum_fraction_digits: Option<u8>,
    /// Maximum number of fraction digits to display.
    pub maximum_fraction_digits: Option<u8>,
}

impl NumberOptions {
    /// The process-wide default: every field explicitly unconstrained.
    pub const DEFAULT: Self = Self {
        integer: None,
        max: None,
        min: None,
        step: None,
        use_grouping: None,
        minimum_fraction_digits: None,
        maximum_fraction_digits: None,
    };

    /// Restricts input to whole numbers.
    #[must_use]
    pub const fn with_integer(mut self, integer: bool) -> Self {
        self.integer = Some(integer);
        self
    }

    /// Sets the largest acceptable value.
    #[must_use]
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the smallest acceptable value.
    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the spinner increment.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Sets display-only digit grouping.
    #[must_use]
    pub const fn with_use_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = Some(use_grouping);
        self
    }

    /// Sets the minimum number of displayed fraction digits.
    #[must_use]
    pub const fn with_minimum_fraction_digits(mut self, digits: u8) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self
    }

    /// Sets the maximum number of displayed fraction digits.
    #[must_use]
    pub const fn with_maximum_fraction_digits(mut self, digits: u8) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }
}

/// Handler invoked when the value changes, with the value and the edited
/// flag it is presented under.
pub type ValuePushHandler = Box<dyn Fn(Option<f64>, bool)>;

/// Handler invoked when the options record is replaced.
pub type OptionsPushHandler = Box<dyn Fn(NumberOptions)>;

/// The full handler bundle for one [`NumberUiAction`] subscription.
///
/// The `action` part is delivered through the base [`UiAction`] channel and
/// the `value` / `options` parts through the number channel, but the whole
/// bundle shares one [`SubscriptionId`]. Every handler is independently
/// optional.
#[derive(Default)]
pub struct NumberPushHandlers {
    /// Base-channel handlers (edited transitions, commits).
    pub action: UiPushHandlers,
    /// Called when the value changes.
    pub value: Option<ValuePushHandler>,
    /// Called when the options record is replaced.
    pub options: Option<OptionsPushHandler>,
}

// Manual Debug impl since callbacks aren't Debug.
impl fmt::Debug for NumberPushHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberPushHandlers")
            .field("action", &self.action)
            .field("has_value", &self.value.is_some())
            .field("has_options", &self.options.is_some())
            .finish()
    }
}

/// Number-channel part of a subscription, stored under the shared id.
struct NumberHandlers {
    value: Option<ValuePushHandler>,
    options: Option<OptionsPushHandler>,
}

/// Controller mediating a numeric input value between a data model and a
/// visual editor.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use weft_ui_action::{CommitKind, NumberPushHandlers, NumberUiAction};
///
/// let action = NumberUiAction::new();
/// let seen = Rc::new(Cell::new(None));
///
/// let seen_in_handler = seen.clone();
/// let id = action.subscribe_push_events(NumberPushHandlers {
///     value: Some(Box::new(move |value, _edited| seen_in_handler.set(value))),
///     ..Default::default()
/// });
///
/// // The data source pushes a value; subscribers hear about it.
/// action.push_value(Some(42.0));
/// assert_eq!(seen.get(), Some(42.0));
/// assert_eq!(action.value(), Some(42.0));
/// assert_eq!(action.defined_value(), 42.0);
///
/// // The editor commits the user's entry.
/// action.commit_value(Some(7.5), CommitKind::Explicit);
/// assert_eq!(action.value(), Some(7.5));
/// assert!(!action.edited());
///
/// // Absence is a real state, distinct from any number.
/// action.push_value(None);
/// assert!(action.value_undefined());
/// assert_eq!(action.defined_value(), NumberUiAction::UNDEFINED_NUMBER);
///
/// action.unsubscribe_push_events(id);
/// ```
#[derive(Debug)]
pub struct NumberUiAction {
    action: UiAction,
    value: Cell<Option<f64>>,
    defined_value: Cell<f64>,
    options: Cell<NumberOptions>,
    number_push_event: MultiEvent<NumberHandlers>,
}

impl NumberUiAction {
    /// Stand-in for an absent value where a concrete number is required:
    /// `-(2^53 - 1)`, the smallest integer exactly representable in an
    /// `f64`.
    pub const UNDEFINED_NUMBER: f64 = -9_007_199_254_740_991.0;

    /// Creates a controller with no value and default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            action: UiAction::new(),
            value: Cell::new(None),
            defined_value: Cell::new(Self::UNDEFINED_NUMBER),
            options: Cell::new(NumberOptions::DEFAULT),
            number_push_event: MultiEvent::new(),
        }
    }

    /// Returns `true` iff the value is absent.
    #[must_use]
    #[inline]
    pub fn value_undefined(&self) -> bool {
        self.value.get().is_none()
    }

    /// Returns the current value, which may be absent.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<f64> {
        self.value.get()
    }

    /// Returns the current value as a concrete number, substituting
    /// [`Self::UNDEFINED_NUMBER`] when the value is absent.
    #[must_use]
    #[inline]
    pub fn defined_value(&self) -> f64 {
        self.defined_value.get()
    }

    /// Returns the current constraint options.
    #[must_use]
    #[inline]
    pub fn options(&self) -> NumberOptions {
        self.options.get()
    }

    /// Returns `true` while the action holds an uncommitted user edit.
    #[must_use]
    #[inline]
    pub fn edited(&self) -> bool {
        self.action.edited()
    }

    /// Returns the configured auto-acceptance policy.
    #[must_use]
    #[inline]
    pub fn auto_acceptance(&self) -> AutoAcceptance {
        self.action.auto_acceptance()
    }

    /// Sets the auto-acceptance policy applied to pushed values.
    #[inline]
    pub fn set_auto_acceptance(&self, policy: AutoAcceptance) {
        self.action.set_auto_acceptance(policy);
    }

    /// Finalizes a user edit from the editor side.
    ///
    /// Sets the value, recomputes the defined value, and runs the base
    /// commit protocol with the given kind. The value is accepted
    /// unconditionally; enforcing [`NumberOptions`] constraints is the
    /// view's job.
    pub fn commit_value(&self, value: Option<f64>, kind: CommitKind) {
        self.value.set(value);
        self.update_defined_value();
        self.action.commit(kind);
    }

    /// Accepts a value pushed from the data-source side.
    ///
    /// Subscribers are notified of the raw push under the current edited
    /// flag first; only then is the auto-acceptance policy applied, so
    /// observers always see the push before any auto-commit side effect.
    pub fn push_value(&self, value: Option<f64>) {
        self.push_value_without_auto_acceptance(value, self.action.edited());
        self.action.push_auto_acceptance();
    }

    /// Replaces the constraint options and notifies options subscribers.
    ///
    /// The record replaces the previous one wholesale; there is no merging
    /// and no consistency validation.
    pub fn push_options(&self, options: NumberOptions) {
        self.options.set(options);
        self.notify_options_push();
    }

    /// Sets the edited flag.
    ///
    /// On a transition the current value is re-announced to value
    /// subscribers under the new flag. Unlike [`Self::push_value`], a
    /// re-announcement never triggers auto-acceptance.
    pub fn set_edited(&self, edited: bool) {
        if let Some(new_edited) = self.action.set_edited(edited) {
            self.repush_value(new_edited);
        }
    }

    /// Registers a handler bundle on both the base and number channels
    /// under one shared subscription id.
    pub fn subscribe_push_events(&self, handlers: NumberPushHandlers) -> SubscriptionId {
        let NumberPushHandlers {
            action,
            value,
            options,
        } = handlers;
        // The base channel allocates the id; the number channel adopts it.
        let id = self.action.subscribe_push_events(action);
        self.number_push_event
            .subscribe_with_id(Rc::new(NumberHandlers { value, options }), id)
    }

    /// Removes a subscription from both channels.
    ///
    /// Returns `false` when the id is not currently registered.
    pub fn unsubscribe_push_events(&self, id: SubscriptionId) -> bool {
        let number = self.number_push_event.unsubscribe(id);
        let base = self.action.unsubscribe_push_events(id);
        number && base
    }

    /// Re-announces the current value under a new edited flag, without
    /// auto-acceptance.
    fn repush_value(&self, new_edited: bool) {
        self.push_value_without_auto_acceptance(self.value.get(), new_edited);
    }

    fn push_value_without_auto_acceptance(&self, value: Option<f64>, edited: bool) {
        self.value.set(value);
        self.update_defined_value();
        self.notify_value_push(edited);
    }

    fn notify_value_push(&self, edited: bool) {
        for handlers in self.number_push_event.copy_handlers() {
            if let Some(handler) = &handlers.value {
                handler(self.value.get(), edited);
            }
        }
    }

    fn notify_options_push(&self) {
        for handlers in self.number_push_event.copy_handlers() {
            if let Some(handler) = &handlers.options {
                handler(self.options.get());
            }
        }
    }

    fn update_defined_value(&self) {
        self.defined_value
            .set(self.value.get().unwrap_or(Self::UNDEFINED_NUMBER));
    }
}

impl Default for NumberUiAction {
    fn default() -> Self {
        Self::new()
    }
}
