// SPDX-License-Identifier: MPL-2.0
//! Result cards for the last accepted cipher request.
//!
//! Each submitted field gets a card with a copy button. Cards fade in one
//! after another when a new request is shown.

use crate::config::{CARD_FADE, CARD_STAGGER};
use crate::domain::form::Submission;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// The request on display and the timing of its entrance.
#[derive(Debug, Clone, Default)]
pub struct State {
    submission: Option<Submission>,
    shown_at: Option<Instant>,
    now: Option<Instant>,
}

/// Messages emitted by the result cards.
#[derive(Debug, Clone)]
pub enum Message {
    /// Copy the value of the card at this index.
    Copy(usize),
    /// Animation frame.
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    CopyRequested(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed request and restarts the entrance.
    pub fn show(&mut self, submission: Submission, now: Instant) {
        self.submission = Some(submission);
        self.shown_at = Some(now);
        self.now = Some(now);
    }

    #[must_use]
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Time since the cards appeared, as of the last tick.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match (self.shown_at, self.now) {
            (Some(start), Some(now)) => now.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// Whether some card is still fading in.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let Some(submission) = &self.submission else {
            return false;
        };
        let cards = submission.fields.len();
        if cards == 0 {
            return false;
        }
        self.elapsed() < entrance_duration(cards)
    }
}

/// Total time until the last of `cards` cards is fully visible.
#[must_use]
pub fn entrance_duration(cards: usize) -> Duration {
    let last = u32::try_from(cards.saturating_sub(1)).unwrap_or(u32::MAX);
    CARD_STAGGER.saturating_mul(last).saturating_add(CARD_FADE)
}

/// Opacity of card `index` once `elapsed` has passed since the cards
/// appeared: 0 before its turn, then a linear ramp to 1.
#[must_use]
pub fn entrance_opacity(index: usize, elapsed: Duration) -> f32 {
    let delay = CARD_STAGGER.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
    let Some(into_fade) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    (into_fade.as_secs_f32() / CARD_FADE.as_secs_f32()).clamp(0.0, 1.0)
}

/// Process a result card message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Copy(index) => state
            .submission
            .as_ref()
            .and_then(|submission| submission.fields.get(index))
            .map_or(Event::None, |field| Event::CopyRequested(field.value.clone())),
        Message::Tick(now) => {
            state.now = Some(now);
            Event::None
        }
    }
}

/// Render the cards, or nothing when no request was accepted yet.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(submission) = &state.submission else {
        return Column::new().into();
    };

    let elapsed = state.elapsed();
    let heading = Text::new(format!(
        "{} ({} {})",
        i18n.tr("results-title"),
        submission.method.as_str(),
        submission.action
    ))
    .size(typography::TITLE_SM);

    let cards = submission
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let alpha = entrance_opacity(index, elapsed);
            let label = i18n.tr(&format!("results-field-{}", field.name));
            let copy = button(Text::new(i18n.tr("results-copy-button")).size(typography::BODY))
                .on_press(Message::Copy(index))
                .padding([spacing::XXS, spacing::SM]);

            let body = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .width(Length::Fill)
                        .push(Text::new(label).size(typography::CAPTION))
                        .push(Text::new(field.value.as_str()).size(typography::BODY_LG)),
                )
                .push(copy);

            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(move |theme: &Theme| card_style(theme, alpha))
                .into()
        });

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(heading)
        .extend(cards)
        .into()
}

fn card_style(theme: &Theme, alpha: f32) -> container::Style {
    let palette = theme.extended_palette();
    let fade = |color: Color| Color {
        a: color.a * alpha,
        ..color
    };

    container::Style {
        background: Some(iced::Background::Color(fade(palette.background.weak.color))),
        border: iced::Border {
            color: fade(palette.background.strong.color),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(fade(palette.background.weak.text)),
        ..Default::default()
    }
}
