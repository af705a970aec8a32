// SPDX-License-Identifier: MPL-2.0
//! The cipher request form.
//!
//! Holds what the user typed, annotates fields as they change and gates
//! submission on the full rule set of [`crate::domain::form`]. A field
//! shows at most one error line at a time.

mod field_errors;
mod view;

pub use field_errors::FieldErrors;
pub use view::{view, ViewContext};

use crate::domain::form::{self, Field, FormMethod, FormSnapshot, Submission, ValidationReport};

/// Raw input values and their current annotations.
#[derive(Debug, Clone, Default)]
pub struct State {
    message: String,
    rail_fence_key: String,
    row_transposition_key: String,
    errors: FieldErrors,
}

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    MessageChanged(String),
    RailFenceKeyChanged(String),
    RowTranspositionKeyChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Submission was prevented; every violation is listed.
    Blocked(ValidationReport),
    /// The form is valid and this payload would be sent.
    Submitted(Submission),
}

/// Where a valid request goes.
#[derive(Debug, Clone, Copy)]
pub struct SubmitTarget<'a> {
    pub action: &'a str,
    pub method: FormMethod,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Message => &self.message,
            Field::RailFenceKey => &self.rail_fence_key,
            Field::RowTranspositionKey => &self.row_transposition_key,
        }
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Captures the current values for validation.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::new(
            self.message.clone(),
            self.rail_fence_key.clone(),
            self.row_transposition_key.clone(),
        )
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Message => self.message = value,
            Field::RailFenceKey => self.rail_fence_key = value,
            Field::RowTranspositionKey => self.row_transposition_key = value,
        }
    }

    /// Stores a new value and re-checks the field as the user types.
    ///
    /// Only a live error may appear here; the cross-field rules wait for
    /// submission.
    fn on_input(&mut self, field: Field, value: String) {
        self.errors.clear(field);
        if let Some(violation) = form::live_check(field, &value) {
            self.errors.show(field, violation.message_key());
        }
        self.set_value(field, value);
    }

    fn on_submit(&mut self, target: SubmitTarget<'_>) -> Event {
        let snapshot = self.snapshot();
        let report = form::validate(&snapshot);

        for field in Field::ALL {
            if let Some(violation) = report.field_violation(field) {
                self.errors.show(field, violation.message_key());
            }
        }

        if report.is_valid() {
            self.errors.clear_all();
            Event::Submitted(snapshot.submission(target.action, target.method))
        } else {
            Event::Blocked(report)
        }
    }
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message, target: SubmitTarget<'_>) -> Event {
    match message {
        Message::MessageChanged(value) => {
            state.on_input(Field::Message, value);
            Event::None
        }
        Message::RailFenceKeyChanged(value) => {
            state.on_input(Field::RailFenceKey, value);
            Event::None
        }
        Message::RowTranspositionKeyChanged(value) => {
            state.on_input(Field::RowTranspositionKey, value);
            Event::None
        }
        Message::Submit => state.on_submit(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::Violation;

    const TARGET: SubmitTarget<'static> = SubmitTarget {
        action: "/encrypt",
        method: FormMethod::Post,
    };

    fn typed(message: &str, rail: &str, row: &str) -> State {
        let mut state = State::new();
        update(&mut state, Message::MessageChanged(message.into()), TARGET);
        update(&mut state, Message::RailFenceKeyChanged(rail.into()), TARGET);
        update(&mut state, Message::RowTranspositionKeyChanged(row.into()), TARGET);
        state
    }

    #[test]
    fn valid_form_is_submitted_with_provided_keys_only() {
        let mut state = typed("HELLO WORLD", "3", "");
        let Event::Submitted(submission) = update(&mut state, Message::Submit, TARGET) else {
            panic!("expected submission");
        };
        assert_eq!(submission.get("message"), Some("HELLO WORLD"));
        assert_eq!(submission.get("rail_fence_key"), Some("3"));
        assert_eq!(submission.get("row_transposition_key"), None);
        assert!(state.errors().is_empty());
    }

    #[test]
    fn empty_form_is_blocked_with_message_and_key_errors() {
        let mut state = State::new();
        let Event::Blocked(report) = update(&mut state, Message::Submit, TARGET) else {
            panic!("expected blocked submission");
        };
        assert!(report.missing_key());
        assert_eq!(
            state.errors().get(Field::Message),
            Some("validation-message-required")
        );
        assert!(!state.errors().is_invalid(Field::RailFenceKey));
    }

    #[test]
    fn live_check_flags_bad_rail_key_while_typing() {
        let mut state = State::new();
        update(&mut state, Message::RailFenceKeyChanged("1".into()), TARGET);
        assert_eq!(
            state.errors().get(Field::RailFenceKey),
            Some("validation-rail-fence-not-number")
        );

        update(&mut state, Message::RailFenceKeyChanged("12".into()), TARGET);
        assert!(!state.errors().is_invalid(Field::RailFenceKey));
    }

    #[test]
    fn live_check_never_compares_with_message_length() {
        let state = typed("HI", "5", "");
        assert!(!state.errors().is_invalid(Field::RailFenceKey));
    }

    #[test]
    fn submit_shows_length_error_on_rail_field() {
        let mut state = typed("HI", "5", "");
        let Event::Blocked(report) = update(&mut state, Message::Submit, TARGET) else {
            panic!("expected blocked submission");
        };
        assert_eq!(
            report.field_violation(Field::RailFenceKey),
            Some(&Violation::RailFenceExceedsMessage {
                rails: 5,
                message_len: 2
            })
        );
        assert_eq!(
            state.errors().get(Field::RailFenceKey),
            Some("validation-rail-fence-too-large")
        );
    }

    #[test]
    fn row_key_live_error_clears_once_fixed() {
        let mut state = State::new();
        update(
            &mut state,
            Message::RowTranspositionKeyChanged("key1".into()),
            TARGET,
        );
        assert_eq!(
            state.errors().get(Field::RowTranspositionKey),
            Some("validation-row-transposition-letters")
        );
        update(
            &mut state,
            Message::RowTranspositionKeyChanged("key".into()),
            TARGET,
        );
        assert!(!state.errors().is_invalid(Field::RowTranspositionKey));
    }

    #[test]
    fn typing_in_message_clears_its_error() {
        let mut state = State::new();
        update(&mut state, Message::Submit, TARGET);
        assert!(state.errors().is_invalid(Field::Message));

        update(&mut state, Message::MessageChanged("A".into()), TARGET);
        assert!(!state.errors().is_invalid(Field::Message));
    }

    #[test]
    fn resubmit_clears_stale_field_errors() {
        let mut state = typed("HI", "5", "");
        update(&mut state, Message::Submit, TARGET);
        assert!(state.errors().is_invalid(Field::RailFenceKey));

        update(&mut state, Message::MessageChanged("HELLO".into()), TARGET);
        // The stale length error stays until the next submit.
        assert!(state.errors().is_invalid(Field::RailFenceKey));

        let event = update(&mut state, Message::Submit, TARGET);
        assert!(matches!(event, Event::Submitted(_)));
        assert!(state.errors().is_empty());
    }

    #[test]
    fn blocked_submit_keeps_live_error_on_passing_field() {
        let mut state = typed("", "  ", "KEY");
        assert_eq!(
            state.errors().get(Field::RailFenceKey),
            Some("validation-rail-fence-not-number")
        );

        let event = update(&mut state, Message::Submit, TARGET);
        assert!(matches!(event, Event::Blocked(_)));
        assert!(state.errors().is_invalid(Field::Message));
        assert_eq!(
            state.errors().get(Field::RailFenceKey),
            Some("validation-rail-fence-not-number")
        );
    }

    #[test]
    fn submission_uses_configured_target() {
        let mut state = typed("HELLO", "", "KEY");
        let target = SubmitTarget {
            action: "https://ciphers.example/encrypt",
            method: FormMethod::Get,
        };
        let Event::Submitted(submission) = update(&mut state, Message::Submit, target) else {
            panic!("expected submission");
        };
        assert_eq!(submission.action, "https://ciphers.example/encrypt");
        assert_eq!(submission.method, FormMethod::Get);
    }
}
