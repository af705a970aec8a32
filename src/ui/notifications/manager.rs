// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` shows every notification as soon as it is pushed. Each one
//! gets a single removal timer; a manual dismiss does not cancel it, so
//! removal must stay safe when the timer fires afterwards.

use super::notification::{Notification, NotificationId, Shape};
use iced::Task;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user pressed the dismiss control of an alert.
    Dismiss(NotificationId),
    /// The lifetime timer of a notification elapsed.
    Expired(NotificationId),
}

/// The timer a caller must start for a freshly pushed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub id: NotificationId,
    pub after: Duration,
}

/// Holds the notifications currently on screen, oldest first.
#[derive(Debug, Default)]
pub struct Manager {
    visible: Vec<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays a notification immediately.
    ///
    /// Identical messages are not merged and there is no upper bound on the
    /// number on screen. The returned [`Expiry`] must be handed to
    /// [`schedule_expiry`].
    pub fn notify(&mut self, notification: Notification) -> Expiry {
        let expiry = Expiry {
            id: notification.id(),
            after: notification.shape().lifetime(),
        };
        self.visible.push(notification);
        expiry
    }

    /// Removes a notification whose timer elapsed.
    ///
    /// Returns `false` if it was already gone.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        self.remove(id)
    }

    /// Removes a notification at the user's request.
    ///
    /// Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.remove(id)
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            true
        } else {
            false
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Expired(id) => {
                self.expire(*id);
            }
        }
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().filter(|n| n.shape() == Shape::Toast)
    }

    pub fn alerts(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().filter(|n| n.shape() == Shape::Alert)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Sleeps for the notification lifetime and yields its ID.
pub async fn wait_for_expiry(expiry: Expiry) -> NotificationId {
    tokio::time::sleep(expiry.after).await;
    expiry.id
}

/// Starts the removal timer of a notification.
///
/// The timer cannot be cancelled; it always delivers [`Message::Expired`].
pub fn schedule_expiry(expiry: Expiry) -> Task<Message> {
    Task::perform(wait_for_expiry(expiry), Message::Expired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn notify_shows_immediately_with_shape_lifetime() {
        let mut manager = Manager::new();
        let toast = Notification::toast("notification-copied");
        let id = toast.id();

        let expiry = manager.notify(toast);
        assert_eq!(expiry.id, id);
        assert_eq!(expiry.after, Duration::from_millis(2000));
        assert_eq!(manager.toasts().count(), 1);
        assert_eq!(manager.alerts().count(), 0);
    }

    #[test]
    fn identical_messages_are_not_merged() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.notify(Notification::toast("notification-copied"));
        }
        assert_eq!(manager.len(), 5);
    }

    #[test]
    fn alerts_and_toasts_are_listed_separately() {
        let mut manager = Manager::new();
        manager.notify(Notification::toast("notification-copied"));
        let expiry = manager.notify(Notification::alert(Severity::Error, "some-error"));

        assert_eq!(expiry.after, Duration::from_millis(5000));
        assert_eq!(manager.toasts().count(), 1);
        assert_eq!(manager.alerts().count(), 1);
    }

    #[test]
    fn dismiss_then_expire_is_a_no_op() {
        let mut manager = Manager::new();
        let alert = Notification::alert(Severity::Info, "info");
        let id = alert.id();
        manager.notify(alert);

        assert!(manager.dismiss(id));
        assert!(!manager.expire(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn expire_then_dismiss_is_a_no_op() {
        let mut manager = Manager::new();
        let alert = Notification::alert(Severity::Warning, "warn");
        let id = alert.id();
        manager.notify(alert);

        assert!(manager.expire(id));
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn removal_keeps_other_notifications() {
        let mut manager = Manager::new();
        let first = Notification::toast("a");
        let first_id = first.id();
        manager.notify(first);
        manager.notify(Notification::toast("b"));

        manager.handle_message(&Message::Expired(first_id));
        let keys: Vec<_> = manager.toasts().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_timer_waits_for_lifetime() {
        let toast = Notification::toast("notification-copied");
        let id = toast.id();
        let expiry = Manager::new().notify(toast);

        let started = tokio::time::Instant::now();
        assert_eq!(wait_for_expiry(expiry).await, id);
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }
}
