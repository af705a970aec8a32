// SPDX-License-Identifier: MPL-2.0
//! `cipher_form` is a desktop front end for a classical cipher service,
//! built with the Iced GUI framework.
//!
//! It validates a plaintext message and its rail-fence and
//! row-transposition keys before a request may be sent, reports problems
//! inline and through transient notifications, and copies results to the
//! clipboard with a command-line fallback.

#![doc(html_root_url = "https://docs.rs/cipher_form/0.1.0")]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
