//! # Confirmation Gate
//!
//! Destructive actions (deleting a record, resetting every collection) go
//! through a [`ConfirmationGate`]: the action is armed with [`open`], shown to
//! the user with its [`ConfirmOptions`], and then either run with
//! [`confirm`] or dropped with [`close`].
//!
//! The gate holds at most one pending action. Opening it again before the
//! first action is resolved silently replaces that action; there is no queue.
//!
//! The gate is a plain value passed to whoever needs it, not a global. The
//! pending action receives its target (`&mut C`) only when confirmed, so arming
//! an action does not hold a borrow on the thing it will mutate.
//!
//! [`open`]: ConfirmationGate::open
//! [`confirm`]: ConfirmationGate::confirm
//! [`close`]: ConfirmationGate::close

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            title: "Confirm Action".to_string(),
            message: "Are you sure you want to proceed?".to_string(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

impl ConfirmOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }
}

type PendingAction<'a, C, R> = Box<dyn FnOnce(&mut C) -> Result<R> + 'a>;

pub struct ConfirmationGate<'a, C, R = ()> {
    pending: Option<PendingAction<'a, C, R>>,
    options: ConfirmOptions,
}

impl<'a, C, R> Default for ConfirmationGate<'a, C, R> {
    fn default() -> Self {
        Self {
            pending: None,
            options: ConfirmOptions::default(),
        }
    }
}

impl<'a, C, R> ConfirmationGate<'a, C, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Options of the most recently opened confirmation.
    pub fn options(&self) -> &ConfirmOptions {
        &self.options
    }

    /// Arm `action`, replacing any action still pending.
    pub fn open<F>(&mut self, action: F, options: ConfirmOptions)
    where
        F: FnOnce(&mut C) -> Result<R> + 'a,
    {
        self.pending = Some(Box::new(action));
        self.options = options;
    }

    /// Run the pending action against `target` and close the gate.
    ///
    /// Returns `Ok(None)` when nothing was pending. The gate is closed even if
    /// the action fails.
    pub fn confirm(&mut self, target: &mut C) -> Result<Option<R>> {
        match self.pending.take() {
            Some(action) => action(target).map(Some),
            None => Ok(None),
        }
    }

    /// Discard the pending action without running it.
    pub fn close(&mut self) {
        self.pending = None;
    }
}
