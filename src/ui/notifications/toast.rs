// SPDX-License-Identifier: MPL-2.0
//! Rendering of toasts and alert banners.
//!
//! Toasts stack in the top-right corner with a leading check mark. Alerts
//! stack at the top center and carry a dismiss button.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

const CHECK_MARK: &str = "\u{2713}";
const DISMISS_GLYPH: &str = "\u{00d7}";

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a success toast: `[✓] message`.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(CHECK_MARK)
                    .size(typography::BODY_LG)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent_color),
                    }),
            )
            .push(message_text(notification, i18n));

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent_color))
            .into()
    }

    /// Renders an alert banner: `message [×]`.
    pub fn view_alert<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        let dismiss_button = tooltip(
            button(Text::new(DISMISS_GLYPH).size(typography::BODY_LG))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
            Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
        .gap(spacing::XXS);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_text(notification, i18n))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::ALERT_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent_color))
            .into()
    }

    /// Renders every visible notification above the page content.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .toasts()
            .map(|notification| Self::view(notification, i18n))
            .collect();
        let alerts: Vec<Element<'a, Message>> = manager
            .alerts()
            .map(|notification| Self::view_alert(notification, i18n))
            .collect();

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if !alerts.is_empty() {
            layers = layers.push(corner(
                Column::with_children(alerts)
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center),
                alignment::Horizontal::Center,
            ));
        }

        if !toasts.is_empty() {
            layers = layers.push(corner(
                Column::with_children(toasts)
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Right),
                alignment::Horizontal::Right,
            ));
        }

        layers.into()
    }
}

fn message_text<'a>(notification: &Notification, i18n: &I18n) -> Element<'a, Message> {
    Text::new(i18n.tr(notification.message_key()))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        })
        .into()
}

fn corner<'a>(
    stacked: impl Into<Element<'a, Message>>,
    horizontal: alignment::Horizontal,
) -> Element<'a, Message> {
    Container::new(stacked)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}

/// Style function for toast and alert cards.
fn card_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = card_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_highlights_on_hover_only() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }
}
