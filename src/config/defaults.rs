// SPDX-License-Identifier: MPL-2.0
//! Centralized default values.
//!
//! # Categories
//!
//! - **Notifications**: fixed lifetimes of toasts and alerts
//! - **Form**: where a valid request is sent
//! - **Diagnostics**: event buffer size
//! - **Results**: entrance animation timing

use std::time::Duration;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long the "copied" toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(2000);

/// How long an alert banner stays on screen unless dismissed.
pub const ALERT_LIFETIME: Duration = Duration::from_millis(5000);

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Endpoint the cipher form posts to.
pub const DEFAULT_FORM_ACTION: &str = "/encrypt";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

// ==========================================================================
// Result Card Defaults
// ==========================================================================

/// Delay between the entrance of consecutive result cards.
pub const CARD_STAGGER: Duration = Duration::from_millis(100);

/// Duration of a single card's fade-in.
pub const CARD_FADE: Duration = Duration::from_millis(300);
