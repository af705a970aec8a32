// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the form, the result cards, the
//! notification overlay, the clipboard backends and the diagnostics
//! channel, and translates component events into side effects.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::clipboard::{ClipboardWriter, CommandCopy, LegacyCopy, SystemClipboard};
use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, WarningEvent, WarningType};
use crate::i18n::fluent::I18n;
use crate::ui::cipher_form;
use crate::ui::notifications::{self, Notification, Severity};
use crate::ui::results;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
const MIN_WINDOW_WIDTH: f32 = 480.0;
const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Explicit settings directory; `None` resolves it through [`paths`].
    config_dir: Option<PathBuf>,
    form: cipher_form::State,
    results: results::State,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    clipboard: Arc<dyn ClipboardWriter>,
    legacy_copy: Arc<dyn LegacyCopy>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("form", &self.form)
            .field("notifications", &self.notifications.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish_non_exhaustive()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application around explicit backends.
    pub fn with_backends(
        config: Config,
        i18n: I18n,
        clipboard: Arc<dyn ClipboardWriter>,
        legacy_copy: Arc<dyn LegacyCopy>,
    ) -> Self {
        let diagnostics =
            DiagnosticsCollector::new(BufferCapacity::new(config.diagnostics.buffer_capacity))
                .with_stderr_echo(config.diagnostics.echo_to_stderr);

        Self {
            i18n,
            config,
            config_dir: None,
            form: cipher_form::State::new(),
            results: results::State::new(),
            notifications: notifications::Manager::new(),
            diagnostics,
            clipboard,
            legacy_copy,
        }
    }

    /// Writes settings to `dir` instead of the resolved config directory.
    #[must_use]
    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    /// Loads settings and locale, then reports an unreadable settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_backends(
            config,
            i18n,
            Arc::new(SystemClipboard),
            Arc::new(CommandCopy::detect()),
        );
        app.config_dir = config_dir;

        let task = match config_warning {
            Some(key) => app.report_config_warning(key),
            None => Task::none(),
        };

        (app, task)
    }

    fn report_config_warning(&mut self, key: String) -> Task<Message> {
        self.diagnostics
            .handle()
            .log_warning(WarningEvent::new(WarningType::ConfigLoad, key.clone()));
        self.diagnostics.process_pending();
        update::notify(
            &mut self.notifications,
            Notification::alert(Severity::Warning, key),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.results.is_animating())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &mut self.config,
            config_dir: &self.config_dir,
            form: &mut self.form,
            results: &mut self.results,
            notifications: &mut self.notifications,
            diagnostics: self.diagnostics.handle(),
            clipboard: &self.clipboard,
            legacy_copy: &self.legacy_copy,
        };

        let task = match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::Results(results_message) => {
                update::handle_results_message(&mut ctx, results_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::CopyFinished(report) => update::handle_copy_finished(&mut ctx, report),
            Message::CycleTheme => update::handle_cycle_theme(&mut ctx),
            Message::CopyDiagnostics => {
                self.diagnostics.process_pending();
                let export = self.diagnostics.export_json();
                update::handle_copy_diagnostics(&mut ctx, export, self.diagnostics.len())
            }
        };

        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            results: &self.results,
            notifications: &self.notifications,
            theme_mode: self.config.general.theme_mode,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn form(&self) -> &cipher_form::State {
        &self.form
    }

    #[must_use]
    pub fn results(&self) -> &results::State {
        &self.results
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }
}
