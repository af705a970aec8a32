// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the form followed by the result cards, with the
//! notification overlay stacked above everything.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::cipher_form::{self, ViewContext as FormViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::results;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a cipher_form::State,
    pub results: &'a results::State,
    pub notifications: &'a Manager,
    pub theme_mode: ThemeMode,
}

/// Renders the page with its notification overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let theme_button = button(
        Text::new(ctx.i18n.tr(theme_mode_label_key(ctx.theme_mode))).size(typography::CAPTION),
    )
    .on_press(Message::CycleTheme)
    .padding([spacing::XXS, spacing::SM]);

    let diagnostics_button =
        button(Text::new(ctx.i18n.tr("diagnostics-copy-button")).size(typography::CAPTION))
            .on_press(Message::CopyDiagnostics)
            .padding([spacing::XXS, spacing::SM]);

    let header = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(diagnostics_button)
        .push(theme_button);

    let form = cipher_form::view(FormViewContext {
        i18n: ctx.i18n,
        state: ctx.form,
    })
    .map(Message::Form);

    let results = results::view(ctx.results, ctx.i18n).map(Message::Results);

    let page = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(header)
        .push(form)
        .push(results);

    let content = Container::new(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(overlay)
        .into()
}

/// i18n key naming a theme mode, shown on the toggle button.
#[must_use]
pub fn theme_mode_label_key(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "theme-mode-light",
        ThemeMode::Dark => "theme-mode-dark",
        ThemeMode::System => "theme-mode-system",
    }
}
