// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions worth correlating with warnings and errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// The form passed validation and was sent.
    SubmitForm {
        /// Names of the submitted fields.
        fields: Vec<String>,
    },
    /// Submission was prevented by failed rules.
    SubmissionBlocked {
        /// Number of failed rules.
        violations: usize,
    },
    /// A copy to the clipboard was requested.
    CopyText {
        /// Length of the copied text in characters.
        chars: usize,
    },
    /// An alert was closed with its dismiss control.
    DismissAlert,
    /// The event log was exported to the clipboard.
    ExportDiagnostics {
        /// Number of exported events.
        events: usize,
    },
}

/// Category of a non-fatal problem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The platform clipboard refused a write; the fallback was tried.
    ClipboardWrite,
    /// The settings file could not be read; defaults are in use.
    ConfigLoad,
    Other,
}

/// Category of a failed operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Both clipboard paths failed.
    ClipboardFallback,
    /// Settings could not be written.
    ConfigSave,
    /// The event log could not be serialized.
    DiagnosticsExport,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event stamped with when it was raised.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
}
