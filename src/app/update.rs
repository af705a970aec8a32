// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each component returns an event; the handlers here turn those events into
//! side effects: notifications, diagnostics, clipboard tasks and config
//! persistence.

use super::Message;
use crate::clipboard::{self, ClipboardWriter, CopyOutcome, CopyReport, LegacyCopy};
use crate::config::{self, Config};
use crate::diagnostics::{
    DiagnosticsHandle, ErrorEvent, ErrorType, UserAction, WarningEvent, WarningType,
};
use crate::ui::cipher_form::{self, Event as FormEvent, SubmitTarget};
use crate::ui::notifications::{self, Notification, NotificationMessage, Severity};
use crate::ui::results::{self, Event as ResultsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Mutable application state handed to the message handlers.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub form: &'a mut cipher_form::State,
    pub results: &'a mut results::State,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: DiagnosticsHandle,
    pub clipboard: &'a Arc<dyn ClipboardWriter>,
    pub legacy_copy: &'a Arc<dyn LegacyCopy>,
}

/// Shows a notification and starts its removal timer.
pub fn notify(
    notifications: &mut notifications::Manager,
    notification: Notification,
) -> Task<Message> {
    let expiry = notifications.notify(notification);
    notifications::schedule_expiry(expiry).map(Message::Notification)
}

/// Handles form messages: live annotations and submission gating.
pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: cipher_form::Message,
) -> Task<Message> {
    let target = SubmitTarget {
        action: &ctx.config.form.action,
        method: ctx.config.form.method,
    };

    match cipher_form::update(ctx.form, message, target) {
        FormEvent::None => Task::none(),
        FormEvent::Blocked(report) => {
            ctx.diagnostics.log_action(UserAction::SubmissionBlocked {
                violations: report.len(),
            });
            if report.missing_key() {
                notify(
                    ctx.notifications,
                    Notification::alert(Severity::Warning, "validation-key-required"),
                )
            } else {
                Task::none()
            }
        }
        FormEvent::Submitted(submission) => {
            ctx.diagnostics.log_action(UserAction::SubmitForm {
                fields: submission
                    .fields
                    .iter()
                    .map(|field| field.name.to_string())
                    .collect(),
            });
            ctx.results.show(submission, Instant::now());
            Task::none()
        }
    }
}

/// Handles result card messages; a copy request starts the clipboard task.
pub fn handle_results_message(
    ctx: &mut UpdateContext<'_>,
    message: results::Message,
) -> Task<Message> {
    match results::update(ctx.results, message) {
        ResultsEvent::None => Task::none(),
        ResultsEvent::CopyRequested(text) => {
            ctx.diagnostics.log_action(UserAction::CopyText {
                chars: text.chars().count(),
            });
            let copy = clipboard::copy_text(
                text,
                Arc::clone(ctx.clipboard),
                Arc::clone(ctx.legacy_copy),
            );
            Task::perform(copy, Message::CopyFinished)
        }
    }
}

/// Sends an exported event log through the clipboard.
pub fn handle_copy_diagnostics(
    ctx: &mut UpdateContext<'_>,
    export: serde_json::Result<String>,
    events: usize,
) -> Task<Message> {
    match export {
        Ok(json) => {
            ctx.diagnostics
                .log_action(UserAction::ExportDiagnostics { events });
            let copy = clipboard::copy_text(
                json,
                Arc::clone(ctx.clipboard),
                Arc::clone(ctx.legacy_copy),
            );
            Task::perform(copy, Message::CopyFinished)
        }
        Err(e) => {
            ctx.diagnostics.log_error(ErrorEvent::new(
                ErrorType::DiagnosticsExport,
                e.to_string(),
            ));
            Task::none()
        }
    }
}

/// Reacts to a finished copy.
///
/// Only a successful copy is visible to the user. A failed fallback is
/// recorded in diagnostics and nowhere else.
pub fn handle_copy_finished(ctx: &mut UpdateContext<'_>, report: CopyReport) -> Task<Message> {
    if let Some(error) = &report.primary_error {
        ctx.diagnostics.log_warning(WarningEvent::new(
            WarningType::ClipboardWrite,
            error.to_string(),
        ));
    }

    match report.outcome {
        CopyOutcome::Copied(_) => {
            notify(ctx.notifications, Notification::toast("notification-copied"))
        }
        CopyOutcome::NotCopied => Task::none(),
        CopyOutcome::Failed(error) => {
            ctx.diagnostics.log_error(ErrorEvent::new(
                ErrorType::ClipboardFallback,
                error.to_string(),
            ));
            Task::none()
        }
    }
}

/// Handles notification messages (manual dismiss, timer expiry).
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &NotificationMessage,
) -> Task<Message> {
    if let NotificationMessage::Dismiss(_) = message {
        ctx.diagnostics.log_action(UserAction::DismissAlert);
    }
    ctx.notifications.handle_message(message);
    Task::none()
}

/// Returns the mode that follows `mode` in the theme cycle.
#[must_use]
pub fn next_theme_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => ThemeMode::Light,
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::System,
    }
}

/// Switches the theme mode and writes it to `settings.toml`.
pub fn handle_cycle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.config.general.theme_mode = next_theme_mode(ctx.config.general.theme_mode);

    match config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        Ok(()) => Task::none(),
        Err(error) => {
            ctx.diagnostics
                .log_error(ErrorEvent::new(ErrorType::ConfigSave, error.to_string()));
            notify(
                ctx.notifications,
                Notification::alert(Severity::Error, "notification-config-save-error"),
            )
        }
    }
}
