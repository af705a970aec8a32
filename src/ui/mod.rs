// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `State`, a `Message`, an `update` returning an `Event` for the
//! application, and a `view`.
//!
//! # Components
//!
//! - [`cipher_form`] - The request form with per-field error lines
//! - [`results`] - Cards for the accepted request, with copy buttons
//! - [`notifications`] - Success toasts and dismissible alerts
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod cipher_form;
pub mod design_tokens;
pub mod notifications;
pub mod results;
pub mod theming;
