//! Short-lived notifications shown over the window.
//!
//! [`ToastQueue`] is the [`NotificationSink`] handed to the form controller.
//! It only records messages with the time they were posted; the window
//! draws whatever has not expired yet and drops the rest every frame.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use tip_core::NotificationSink;
use tracing::trace;

/// Toasts on screen at once; posting more drops the oldest.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub posted_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    duration: Duration,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            toasts: VecDeque::with_capacity(MAX_VISIBLE),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Posts a message as of `now`.
    pub fn push_at(
        &mut self,
        message: &str,
        now: Instant,
    ) {
        if self.toasts.len() == MAX_VISIBLE {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            message: message.to_string(),
            posted_at: now,
        });
    }

    /// Drops every toast that has been up for the full duration.
    pub fn expire(
        &mut self,
        now: Instant,
    ) {
        let duration = self.duration;
        let before = self.toasts.len();
        self.toasts
            .retain(|t| now.saturating_duration_since(t.posted_at) < duration);

        if self.toasts.len() != before {
            trace!(dismissed = before - self.toasts.len(), "toasts expired");
        }
    }

    /// Toasts still on screen, oldest first.
    pub fn visible(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Time until the oldest toast expires, if any are up.
    pub fn next_expiry(
        &self,
        now: Instant,
    ) -> Option<Duration> {
        self.toasts
            .front()
            .map(|t| (t.posted_at + self.duration).saturating_duration_since(now))
    }
}

impl NotificationSink for ToastQueue {
    fn notify(
        &mut self,
        message: &str,
    ) {
        self.push_at(message, Instant::now());
    }
}
