// # Notification Channel
//
// A single transient status line with automatic expiry.
//
// ## Lifecycle
//
// - `show` / `show_error` replace whatever is displayed and restart the timer
// - Once the deadline passes the notification reads as absent
// - There is no queue and no manual dismiss
//
// The channel holds a deadline rather than a running timer task. Front ends
// wait on `deadline()` and call `expire()` to re-render when it passes.
// Timestamps come from `tokio::time`, so a paused test clock controls expiry.

use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Kind of notification, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Progress or success message
    Info,
    /// A failed or rejected action
    Error,
}

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text
    pub text: String,
    /// Info or error
    pub kind: NotificationKind,
    /// When the message stops being shown
    pub expires_at: Instant,
}

impl Notification {
    /// Whether the message has outlived its deadline at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Holds at most one notification and expires it after a fixed duration
#[derive(Debug, Clone)]
pub struct NotificationChannel {
    current: Option<Notification>,
    display_for: Duration,
}

impl NotificationChannel {
    /// Create a channel whose notifications live for `display_for`
    pub fn new(display_for: Duration) -> Self {
        Self {
            current: None,
            display_for,
        }
    }

    /// Show an informational message
    pub fn show(&mut self, text: impl Into<String>) {
        self.set(text.into(), NotificationKind::Info);
    }

    /// Show an error message
    pub fn show_error(&mut self, text: impl Into<String>) {
        self.set(text.into(), NotificationKind::Error);
    }

    fn set(&mut self, text: String, kind: NotificationKind) {
        debug!("Notification ({:?}): {}", kind, text);
        self.current = Some(Notification {
            text,
            kind,
            expires_at: Instant::now() + self.display_for,
        });
    }

    /// The live notification, if any
    pub fn current(&self) -> Option<&Notification> {
        let now = Instant::now();
        self.current.as_ref().filter(|n| !n.is_expired_at(now))
    }

    /// Text of the live notification
    pub fn text(&self) -> Option<&str> {
        self.current().map(|n| n.text.as_str())
    }

    /// Deadline of the pending notification, expired or not
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.expires_at)
    }

    /// Drop the notification if it has expired
    ///
    /// # Returns
    ///
    /// `true` if a notification was dropped
    pub fn expire(&mut self) -> bool {
        let now = Instant::now();
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
            return true;
        }
        false
    }

    /// Remove the notification immediately
    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_expires_after_display_time() {
        let mut channel = NotificationChannel::new(Duration::from_secs(10));
        channel.show("Contact saved to Database");

        tokio::time::advance(Duration::from_secs(9)).await;
        assert_eq!(channel.text(), Some("Contact saved to Database"));
        assert!(!channel.expire());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(channel.text(), None);
        assert!(channel.expire());
        assert!(channel.deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_replaces_and_restarts_timer() {
        let mut channel = NotificationChannel::new(Duration::from_secs(10));
        channel.show("first");

        tokio::time::advance(Duration::from_secs(8)).await;
        channel.show_error("second");

        tokio::time::advance(Duration::from_secs(8)).await;
        let live = channel.current().unwrap();
        assert_eq!(live.text, "second");
        assert_eq!(live.kind, NotificationKind::Error);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(channel.current().is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let mut channel = NotificationChannel::default();
        channel.show("Loading");
        channel.clear();
        assert!(channel.current().is_none());
        assert!(!channel.expire());
    }
}
