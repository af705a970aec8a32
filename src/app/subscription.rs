// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.

use super::Message;
use crate::ui::results;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval of the result card entrance.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Drives the result card fade-in; idle once every card is opaque.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(|now| Message::Results(results::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}
