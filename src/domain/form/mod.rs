// SPDX-License-Identifier: MPL-2.0
//! Cipher request form rules.
//!
//! The form carries a plaintext message and up to two cipher keys. These
//! rules decide whether a request may be sent to the cipher service; they
//! are pure functions of the raw field values so they can be exercised
//! without any UI.
//!
//! # Rules
//!
//! Evaluated independently, in this order:
//!
//! 1. The message must not be blank.
//! 2. At least one of the two keys must be non-blank (form-level).
//! 3. A rail-fence key must read as an integer of at least 2.
//! 4. That integer must not exceed the message length, whitespace excluded.
//! 5. A row-transposition key must consist of ASCII letters only.
//!
//! Rule 4 is deliberately absent from [`live_check`].

mod rail_key;
mod submission;

pub use rail_key::{RailKey, MIN_RAILS};
pub use submission::{FormMethod, Submission, SubmittedField};

use rail_key::is_form_whitespace;

/// An input field of the cipher form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Message,
    RailFenceKey,
    RowTranspositionKey,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [
        Field::Message,
        Field::RailFenceKey,
        Field::RowTranspositionKey,
    ];

    /// Name under which the field is submitted.
    #[must_use]
    pub fn form_name(self) -> &'static str {
        match self {
            Field::Message => "message",
            Field::RailFenceKey => "rail_fence_key",
            Field::RowTranspositionKey => "row_transposition_key",
        }
    }

    /// i18n key of the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Message => "form-message-label",
            Field::RailFenceKey => "form-rail-fence-label",
            Field::RowTranspositionKey => "form-row-transposition-label",
        }
    }
}

/// Raw form values captured when the user submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub message: String,
    pub rail_fence_key: String,
    pub row_transposition_key: String,
}

impl FormSnapshot {
    pub fn new(
        message: impl Into<String>,
        rail_fence_key: impl Into<String>,
        row_transposition_key: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            rail_fence_key: rail_fence_key.into(),
            row_transposition_key: row_transposition_key.into(),
        }
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

    /// Whether the field holds anything besides whitespace.
    #[must_use]
    pub fn is_provided(&self, field: Field) -> bool {
        !self
            .value(field)
            .trim_matches(is_form_whitespace)
            .is_empty()
    }

    /// Number of message characters once all whitespace is removed.
    #[must_use]
    pub fn compact_message_len(&self) -> usize {
        self.message
            .chars()
            .filter(|c| !is_form_whitespace(*c))
            .count()
    }

    /// Builds the payload a native form submission would send.
    ///
    /// The message is always sent; a key only when it was provided.
    #[must_use]
    pub fn submission(&self, action: impl Into<String>, method: FormMethod) -> Submission {
        let fields = Field::ALL
            .into_iter()
            .filter(|field| *field == Field::Message || self.is_provided(*field))
            .map(|field| SubmittedField {
                name: field.form_name(),
                value: self.value(field).to_string(),
            })
            .collect();

        Submission {
            action: action.into(),
            method,
            fields,
        }
    }
}

/// A failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Rule 1.
    MessageRequired,
    /// Rule 2. Not tied to a single field.
    KeyRequired,
    /// Rule 3.
    RailFenceNotANumber,
    /// Rule 4.
    RailFenceExceedsMessage { rails: i64, message_len: usize },
    /// Rule 5.
    RowTranspositionNotLetters,
}

impl Violation {
    /// Field the error is attached to, `None` for the form-level rule.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Violation::MessageRequired => Some(Field::Message),
            Violation::KeyRequired => None,
            Violation::RailFenceNotANumber | Violation::RailFenceExceedsMessage { .. } => {
                Some(Field::RailFenceKey)
            }
            Violation::RowTranspositionNotLetters => Some(Field::RowTranspositionKey),
        }
    }

    /// i18n key of the user-facing message.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Violation::MessageRequired => "validation-message-required",
            Violation::KeyRequired => "validation-key-required",
            Violation::RailFenceNotANumber => "validation-rail-fence-not-number",
            Violation::RailFenceExceedsMessage { .. } => "validation-rail-fence-too-large",
            Violation::RowTranspositionNotLetters => "validation-row-transposition-letters",
        }
    }
}

/// Outcome of running every rule over one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when no rule failed and the request may be sent.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Failed rules in evaluation order.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violation annotating `field`, if any.
    #[must_use]
    pub fn field_violation(&self, field: Field) -> Option<&Violation> {
        self.violations.iter().find(|v| v.field() == Some(field))
    }

    /// Whether the form-level "at least one key" rule failed.
    #[must_use]
    pub fn missing_key(&self) -> bool {
        self.violations.contains(&Violation::KeyRequired)
    }
}

/// Runs all rules against a snapshot.
#[must_use]
pub fn validate(form: &FormSnapshot) -> ValidationReport {
    let mut violations = Vec::new();

    if !form.is_provided(Field::Message) {
        violations.push(Violation::MessageRequired);
    }

    let has_rail_key = form.is_provided(Field::RailFenceKey);
    let has_row_key = form.is_provided(Field::RowTranspositionKey);

    if !has_rail_key && !has_row_key {
        violations.push(Violation::KeyRequired);
    }

    if has_rail_key {
        match RailKey::parse(&form.rail_fence_key).rails() {
            None => violations.push(Violation::RailFenceNotANumber),
            Some(rails) => {
                let message_len = form.compact_message_len();
                if usize::try_from(rails).map_or(true, |r| r > message_len) {
                    violations.push(Violation::RailFenceExceedsMessage { rails, message_len });
                }
            }
        }
    }

    if has_row_key && !is_letters_only(&form.row_transposition_key) {
        violations.push(Violation::RowTranspositionNotLetters);
    }

    ValidationReport { violations }
}

/// Per-keystroke check for a single field.
///
/// Runs only the format rule of the key fields and only when the raw
/// value is non-empty. The message-length bound is not checked here.
#[must_use]
pub fn live_check(field: Field, raw: &str) -> Option<Violation> {
    if raw.is_empty() {
        return None;
    }
    match field {
        Field::Message => None,
        Field::RailFenceKey => match RailKey::parse(raw) {
            RailKey::Number(n) if n >= MIN_RAILS => None,
            _ => Some(Violation::RailFenceNotANumber),
        },
        Field::RowTranspositionKey => {
            (!is_letters_only(raw)).then_some(Violation::RowTranspositionNotLetters)
        }
    }
}

/// Whole-string match of `[A-Za-z]+`.
fn is_letters_only(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphabetic())
}
