// SPDX-License-Identifier: MPL-2.0
use cipher_form::clipboard::{
    self, ClipboardError, ClipboardWriter, CopyOutcome, CopyPath, LegacyCopy, Scratch,
};
use cipher_form::config::{self, Config};
use cipher_form::domain::form::{self, Field, FormMethod, FormSnapshot, Violation};
use cipher_form::i18n::fluent::I18n;
use futures_util::future::BoxFuture;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

#[test]
fn hello_world_with_three_rails_is_accepted() {
    let snapshot = FormSnapshot::new("HELLO WORLD", "3", "");
    let report = form::validate(&snapshot);
    assert!(report.is_valid());

    let submission = snapshot.submission("/encrypt", FormMethod::Post);
    assert_eq!(submission.get("message"), Some("HELLO WORLD"));
    assert_eq!(submission.get("rail_fence_key"), Some("3"));
    assert_eq!(submission.get("row_transposition_key"), None);
}

#[test]
fn too_many_rails_for_short_message_is_blocked() {
    let report = form::validate(&FormSnapshot::new("HI", "5", ""));
    assert!(!report.is_valid());
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.field_violation(Field::RailFenceKey),
        Some(&Violation::RailFenceExceedsMessage {
            rails: 5,
            message_len: 2
        })
    );
}

#[test]
fn digits_in_row_key_are_blocked() {
    let report = form::validate(&FormSnapshot::new("TEST", "", "KEY123"));
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.field_violation(Field::RowTranspositionKey),
        Some(&Violation::RowTranspositionNotLetters)
    );
}

#[test]
fn blank_message_and_keys_report_both_rules() {
    let report = form::validate(&FormSnapshot::new("  \t", " ", ""));
    let violations: Vec<_> = report.violations().copied().collect();
    assert_eq!(
        violations,
        vec![Violation::MessageRequired, Violation::KeyRequired]
    );
}

#[test]
fn live_check_ignores_message_length() {
    assert_eq!(form::live_check(Field::RailFenceKey, "50"), None);
    assert_eq!(
        form::live_check(Field::RailFenceKey, "one"),
        Some(Violation::RailFenceNotANumber)
    );
    assert_eq!(form::live_check(Field::Message, ""), None);
}

#[test]
fn validation_messages_match_english_copy() {
    let i18n = english();
    let expected = [
        (Violation::MessageRequired, "Please enter a message to encrypt."),
        (Violation::KeyRequired, "Please provide at least one cipher key."),
        (
            Violation::RailFenceNotANumber,
            "Rail Fence key must be a number greater than 1.",
        ),
        (
            Violation::RailFenceExceedsMessage {
                rails: 3,
                message_len: 2,
            },
            "Rail Fence key cannot be greater than message length.",
        ),
        (
            Violation::RowTranspositionNotLetters,
            "Row Transposition key must contain only letters.",
        ),
    ];

    for (violation, text) in expected {
        assert_eq!(i18n.tr(violation.message_key()), text);
    }
    assert_eq!(i18n.tr("notification-copied"), "Copied to clipboard!");
}

#[test]
fn every_field_label_is_translated() {
    let i18n = english();
    for field in Field::ALL {
        assert!(!i18n.tr(field.label_key()).starts_with("MISSING"));
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(
        I18n::new(None, &loaded).current_locale().to_string(),
        "en-US"
    );

    config.general.language = Some("fr".to_string());
    config.form.method = FormMethod::Get;
    config::save_to_path(&config, &config_path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");
}

#[derive(Debug)]
struct RefusingClipboard;

impl ClipboardWriter for RefusingClipboard {
    fn write_text(&self, _text: String) -> BoxFuture<'static, Result<(), ClipboardError>> {
        Box::pin(async { Err(ClipboardError::Denied("not allowed".into())) })
    }
}

#[derive(Debug, Default)]
struct RecordingLegacy {
    scratch_paths: Mutex<Vec<std::path::PathBuf>>,
    copied: Mutex<Vec<String>>,
}

impl LegacyCopy for RecordingLegacy {
    fn copy_selection(&self, scratch: &Scratch) -> Result<bool, ClipboardError> {
        let mut text = String::new();
        std::io::Read::read_to_string(&mut scratch.select()?, &mut text)?;
        self.scratch_paths
            .lock()
            .expect("lock")
            .push(scratch.path().to_path_buf());
        self.copied.lock().expect("lock").push(text);
        Ok(true)
    }
}

#[tokio::test]
async fn refused_write_falls_back_and_cleans_up() {
    let legacy = Arc::new(RecordingLegacy::default());
    let report = clipboard::copy_text(
        "ZHLE OLOLRDW".to_string(),
        Arc::new(RefusingClipboard),
        legacy.clone(),
    )
    .await;

    assert_eq!(report.outcome, CopyOutcome::Copied(CopyPath::Fallback));
    assert!(report.is_copied());
    assert!(matches!(report.primary_error, Some(ClipboardError::Denied(_))));
    assert_eq!(*legacy.copied.lock().expect("lock"), vec!["ZHLE OLOLRDW"]);
    for path in legacy.scratch_paths.lock().expect("lock").iter() {
        assert!(!path.exists(), "scratch file should be removed");
    }
}
