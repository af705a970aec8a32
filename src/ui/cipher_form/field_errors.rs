// SPDX-License-Identifier: MPL-2.0
//! Per-field error annotations.

use crate::domain::form::Field;
use std::collections::HashMap;

/// At most one error message per field.
///
/// Values are i18n keys so the text follows the active locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: HashMap<Field, &'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `field` invalid, replacing any error it already shows.
    pub fn show(&mut self, field: Field, message_key: &'static str) {
        self.errors.insert(field, message_key);
    }

    /// Removes the error of `field`; nothing happens on a clean field.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub fn is_invalid(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_previous_error() {
        let mut errors = FieldErrors::new();
        errors.show(Field::RailFenceKey, "validation-rail-fence-not-number");
        errors.show(Field::RailFenceKey, "validation-rail-fence-too-large");

        assert_eq!(
            errors.get(Field::RailFenceKey),
            Some("validation-rail-fence-too-large")
        );
        assert!(errors.is_invalid(Field::RailFenceKey));
        assert!(!errors.is_invalid(Field::Message));
    }

    #[test]
    fn clear_on_clean_field_is_harmless() {
        let mut errors = FieldErrors::new();
        errors.clear(Field::Message);
        assert!(errors.is_empty());

        errors.show(Field::Message, "validation-message-required");
        errors.clear(Field::Message);
        errors.clear(Field::Message);
        assert!(!errors.is_invalid(Field::Message));
    }

    #[test]
    fn clear_all_resets_every_field() {
        let mut errors = FieldErrors::new();
        errors.show(Field::Message, "validation-message-required");
        errors.show(Field::RowTranspositionKey, "validation-row-transposition-letters");
        errors.clear_all();
        assert!(errors.is_empty());
    }
}
