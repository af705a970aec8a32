// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::clipboard::CopyReport;
use crate::ui::cipher_form;
use crate::ui::notifications;
use crate::ui::results;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(cipher_form::Message),
    Results(results::Message),
    Notification(notifications::NotificationMessage),
    /// A copy attempt finished, through either clipboard path.
    CopyFinished(CopyReport),
    /// Switch to the next theme mode and persist it.
    CycleTheme,
    /// Copy the diagnostic event log as JSON.
    CopyDiagnostics,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CIPHER_FORM_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
