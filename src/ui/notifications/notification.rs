// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification is either a small success toast or a dismissible alert
//! banner. The shape decides placement, lifetime and whether a dismiss
//! control is shown; the severity only changes colors.

use crate::config::{ALERT_LIFETIME, TOAST_LIFETIME};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// How a notification is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Top-right success message with a leading check mark and no dismiss
    /// control.
    Toast,
    /// Top-center banner with a dismiss control.
    Alert,
}

impl Shape {
    /// Fixed time on screen before automatic removal.
    #[must_use]
    pub fn lifetime(self) -> Duration {
        match self {
            Shape::Toast => TOAST_LIFETIME,
            Shape::Alert => ALERT_LIFETIME,
        }
    }

    #[must_use]
    pub fn is_dismissible(self) -> bool {
        matches!(self, Shape::Alert)
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    shape: Shape,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    created_at: Instant,
}

impl Notification {
    /// Creates a success toast.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn toast(message_key: impl Into<String>) -> Self {
        Self::new(Shape::Toast, Severity::Success, message_key)
    }

    /// Creates an alert banner of the given severity.
    pub fn alert(severity: Severity, message_key: impl Into<String>) -> Self {
        Self::new(Shape::Alert, severity, message_key)
    }

    fn new(shape: Shape, severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            shape,
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::toast("test");
        let n2 = Notification::toast("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn toast_is_success_and_not_dismissible() {
        let toast = Notification::toast("notification-copied");
        assert_eq!(toast.shape(), Shape::Toast);
        assert_eq!(toast.severity(), Severity::Success);
        assert!(!toast.shape().is_dismissible());
    }

    #[test]
    fn alert_keeps_severity_and_is_dismissible() {
        let alert = Notification::alert(Severity::Warning, "notification-config-load-error");
        assert_eq!(alert.shape(), Shape::Alert);
        assert_eq!(alert.severity(), Severity::Warning);
        assert!(alert.shape().is_dismissible());
    }

    #[test]
    fn lifetimes_match_shape() {
        assert_eq!(Shape::Toast.lifetime(), Duration::from_millis(2000));
        assert_eq!(Shape::Alert.lifetime(), Duration::from_millis(5000));
    }
}
