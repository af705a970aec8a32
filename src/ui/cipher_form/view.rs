// SPDX-License-Identifier: MPL-2.0
//! Rendering of the cipher request form.

use super::{Message, State};
use crate::domain::form::Field;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, sizing, spacing, typography};
use iced::widget::{button, text, text_input, Column, Text};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the form: one labelled input per field, then the submit button.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("form-title")).size(typography::TITLE_LG);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(title);

    for field in Field::ALL {
        column = column.push(field_group(&ctx, field));
    }

    let hint = Text::new(ctx.i18n.tr("form-keys-hint")).size(typography::CAPTION);
    let submit = button(Text::new(ctx.i18n.tr("form-submit-button")).size(typography::BODY))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::LG]);

    column.push(hint).push(submit).into()
}

/// Label, input and, when the field is invalid, its error line right below.
fn field_group<'a>(ctx: &ViewContext<'a>, field: Field) -> Element<'a, Message> {
    let invalid = ctx.state.errors().is_invalid(field);

    let input = text_input(&ctx.i18n.tr(placeholder_key(field)), ctx.state.value(field))
        .on_input(move |value| on_change(field, value))
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| input_style(theme, status, invalid));

    let mut group = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr(field.label_key())).size(typography::BODY))
        .push(input);

    if let Some(key) = ctx.state.errors().get(field) {
        group = group.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    group.into()
}

fn on_change(field: Field, value: String) -> Message {
    match field {
        Field::Message => Message::MessageChanged(value),
        Field::RailFenceKey => Message::RailFenceKeyChanged(value),
        Field::RowTranspositionKey => Message::RowTranspositionKeyChanged(value),
    }
}

fn placeholder_key(field: Field) -> &'static str {
    match field {
        Field::Message => "form-message-placeholder",
        Field::RailFenceKey => "form-rail-fence-placeholder",
        Field::RowTranspositionKey => "form-row-transposition-placeholder",
    }
}

/// Default input style, with an error-colored border on invalid fields.
fn input_style(theme: &Theme, status: text_input::Status, invalid: bool) -> text_input::Style {
    let mut style = text_input::default(theme, status);
    if invalid {
        style.border.color = palette::ERROR_500;
        style.border.width = border::WIDTH_MD;
    }
    style
}
