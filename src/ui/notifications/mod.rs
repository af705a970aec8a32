// SPDX-License-Identifier: MPL-2.0
//! Transient notifications for user feedback.
//!
//! Two shapes exist:
//!
//! - **Toast**: success only, top-right, removed after 2 seconds, no
//!   dismiss control.
//! - **Alert**: any severity, top-center, removed after 5 seconds or when
//!   the user presses its dismiss button.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Shape` and `Severity`
//! - [`manager`] - `Manager` holding what is on screen, plus the expiry timer
//! - [`toast`] - rendering of the overlay
//!
//! # Usage
//!
//! ```ignore
//! let expiry = manager.notify(Notification::toast("notification-copied"));
//! let task = notifications::schedule_expiry(expiry).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{schedule_expiry, wait_for_expiry, Expiry, Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity, Shape};
pub use toast::Toast;
