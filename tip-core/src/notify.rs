//! Transient user notifications.

/// Receives short, fire-and-forget messages for the user.
///
/// Implementations must not block: the caller is the UI event handler and
/// carries on as soon as `notify` returns.
pub trait NotificationSink {
    fn notify(
        &mut self,
        message: &str,
    );
}

impl<N: NotificationSink + ?Sized> NotificationSink for &mut N {
    fn notify(
        &mut self,
        message: &str,
    ) {
        (**self).notify(message);
    }
}

/// Sink that keeps every message it receives, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    messages: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(
        &mut self,
        message: &str,
    ) {
        self.messages.push(message.to_string());
    }
}
