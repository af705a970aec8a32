// SPDX-License-Identifier: MPL-2.0
//! Domain layer - business rules free of any UI or I/O.
//!
//! # Modules
//!
//! - [`form`]: Cipher request rules ([`validate`](form::validate),
//!   [`live_check`](form::live_check), [`Submission`](form::Submission))

pub mod form;
