// SPDX-License-Identifier: MPL-2.0
//! Diagnostics channel for warnings, errors and user actions.
//!
//! Failures that are not surfaced to the user (a failed clipboard fallback,
//! an unreadable settings file) still need a trace. They are sent here.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cloneable, non-blocking sender
//! - [`DiagnosticsCollector`]: drains the channel into a [`CircularBuffer`]
//! - [`DiagnosticEventKind`]: what was recorded

mod buffer;
mod collector;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
