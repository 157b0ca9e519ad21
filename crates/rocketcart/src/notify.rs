//! User-facing error notifications.
//!
//! Cart operations report failures through a [`Notifier`], the equivalent of
//! a toast in the storefront UI. Notifications are fire-and-forget.

use std::sync::{Arc, Mutex};

/// Requested quantity exceeds available stock.
pub const OUT_OF_STOCK: &str = "requested quantity out of stock";
/// Generic failure of `add_product`.
pub const ADD_FAILED: &str = "failed to add product";
/// Generic failure of `remove_product`.
pub const REMOVE_FAILED: &str = "failed to remove product";
/// Generic failure of `update_product_amount`.
pub const UPDATE_FAILED: &str = "failed to update product quantity";

/// Sink for user-facing error messages.
pub trait Notifier: Send + Sync {
    /// Show an error message to the user.
    fn error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Emits notifications as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(target: "rocketcart::notify", "{}", message);
    }
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn error(&self, _message: &str) {}
}

/// Collects notifications in order.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// another to the store.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Drain the received messages.
    pub fn take(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut messages| std::mem::take(&mut *messages))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
