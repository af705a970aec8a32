// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector.
//!
//! Components hold a cloneable [`DiagnosticsHandle`] and push events through
//! a bounded channel; the collector owned by the application drains the
//! channel from the update loop and keeps the most recent events.

use std::io::Write;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction,
    WarningEvent,
};

/// Channel depth between handles and the collector.
const CHANNEL_CAPACITY: usize = 100;

/// Sending side of the diagnostics channel.
///
/// Every method is non-blocking: when the channel is full the event is
/// dropped rather than stalling the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// One event as written to stderr or a JSON report.
#[derive(Debug, Serialize)]
struct SerializableEvent<'a> {
    at: DateTime<Utc>,
    offset_ms: u64,
    event: &'a DiagnosticEventKind,
}

/// Receives events and stores the most recent ones.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
    echo_to_stderr: bool,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
            echo_to_stderr: false,
        }
    }

    /// Mirrors every drained event to stderr as one JSON line.
    #[must_use]
    pub fn with_stderr_echo(mut self, enabled: bool) -> Self {
        self.echo_to_stderr = enabled;
        self
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    ///
    /// Called from the application update loop after each message.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if self.echo_to_stderr {
                self.echo(&event);
            }
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Serializes the stored events as a pretty JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<_> = self.buffer.iter().map(|e| self.serializable(e)).collect();
        serde_json::to_string_pretty(&events)
    }

    #[allow(clippy::cast_possible_truncation)] // session offsets in ms fit in u64
    fn serializable<'a>(&self, event: &'a DiagnosticEvent) -> SerializableEvent<'a> {
        let offset = event.timestamp.saturating_duration_since(self.started_at);
        let at = chrono::Duration::from_std(offset)
            .map_or(self.started_at_utc, |d| self.started_at_utc + d);
        SerializableEvent {
            at,
            offset_ms: offset.as_millis() as u64,
            event: &event.kind,
        }
    }

    fn echo(&self, event: &DiagnosticEvent) {
        if let Ok(line) = serde_json::to_string(&self.serializable(event)) {
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::CopyText { chars: 4 });
        handle.log_warning(WarningEvent::new(WarningType::ClipboardWrite, "denied"));
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn events_keep_send_order() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_error(ErrorEvent::new(ErrorType::ClipboardFallback, "first"));
        handle.log_action(UserAction::DismissAlert);
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::Error { .. }));
        assert!(matches!(
            kinds[1],
            DiagnosticEventKind::UserAction {
                action: UserAction::DismissAlert
            }
        ));
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(1000));
        let handle = collector.handle();

        for _ in 0..(CHANNEL_CAPACITY + 25) {
            handle.log_action(UserAction::DismissAlert);
        }
        collector.process_pending();
        assert_eq!(collector.len(), CHANNEL_CAPACITY);
    }

    #[test]
    fn export_json_lists_events() {
        let mut collector = DiagnosticsCollector::default();
        collector
            .handle()
            .log_error(ErrorEvent::new(ErrorType::ClipboardFallback, "no copy tool"));
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        assert!(json.contains("clipboard_fallback"));
        assert!(json.contains("offset_ms"));
    }
}
