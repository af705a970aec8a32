// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The locale
//! comes from the command line, then the config file, then the operating
//! system, and falls back to `en-US`. Missing keys in a translation fall
//! back to the English text.

pub mod fluent;
