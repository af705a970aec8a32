// SPDX-License-Identifier: MPL-2.0
//! Copying text to the system clipboard.
//!
//! A copy first goes through the platform clipboard API
//! ([`ClipboardWriter`]), which is asynchronous and may be refused. Only
//! once that attempt has reported a failure does the legacy path
//! ([`LegacyCopy`]) run: the text is staged in an off-screen
//! [`Scratch`] container and a copy command is run over it.
//!
//! The scratch container is owned by the attempt and dropped when it ends,
//! so it is removed whatever the outcome.

mod system;

pub use system::{CommandCopy, SystemClipboard};

use futures_util::future::BoxFuture;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Reasons a clipboard operation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable (no display server, unsupported platform).
    Unavailable(String),
    /// The clipboard owner refused the write.
    Denied(String),
    /// The legacy copy command could not be run.
    Command(String),
    /// Staging the text failed.
    Io(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(e) => write!(f, "clipboard unavailable: {}", e),
            ClipboardError::Denied(e) => write!(f, "clipboard write denied: {}", e),
            ClipboardError::Command(e) => write!(f, "copy command failed: {}", e),
            ClipboardError::Io(e) => write!(f, "staging failed: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<std::io::Error> for ClipboardError {
    fn from(err: std::io::Error) -> Self {
        ClipboardError::Io(err.to_string())
    }
}

/// The platform write-text API.
pub trait ClipboardWriter: Send + Sync + fmt::Debug {
    /// Writes `text` to the clipboard. May suspend; may fail.
    fn write_text(&self, text: String) -> BoxFuture<'static, Result<(), ClipboardError>>;
}

/// The synchronous legacy copy path.
pub trait LegacyCopy: Send + Sync + fmt::Debug {
    /// Creates the off-screen container holding `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be created.
    fn create_scratch(&self, text: &str) -> Result<Scratch, ClipboardError> {
        Scratch::new(text)
    }

    /// Selects the scratch contents and runs the copy command over them.
    ///
    /// `Ok(false)` means the command ran but reported that nothing was copied.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be run at all.
    fn copy_selection(&self, scratch: &Scratch) -> Result<bool, ClipboardError>;
}

/// Off-screen staging container for the legacy copy path.
///
/// Backed by a private temporary file that is deleted on drop.
#[derive(Debug)]
pub struct Scratch {
    file: NamedTempFile,
}

impl Scratch {
    /// Stages `text` in a fresh container.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created or written.
    pub fn new(text: &str) -> Result<Self, ClipboardError> {
        let mut file = tempfile::Builder::new()
            .prefix("cipher-form-copy-")
            .tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Location of the container while it exists.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Opens the staged text for reading from the start.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be reopened.
    pub fn select(&self) -> Result<std::fs::File, ClipboardError> {
        Ok(self.file.reopen()?)
    }
}

/// Which path put the text on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

/// Final state of one copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text is on the clipboard.
    Copied(CopyPath),
    /// The legacy command ran but reported that nothing was copied.
    NotCopied,
    /// Both paths failed; the error is the fallback's.
    Failed(ClipboardError),
}

/// Everything the caller needs to react to a finished copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub outcome: CopyOutcome,
    /// Why the primary write failed, when the fallback had to run.
    pub primary_error: Option<ClipboardError>,
}

impl CopyReport {
    /// Whether the success toast should be shown.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self.outcome, CopyOutcome::Copied(_))
    }
}

/// Copies `text`, falling back to the legacy path if the primary write fails.
pub async fn copy_text(
    text: String,
    writer: Arc<dyn ClipboardWriter>,
    legacy: Arc<dyn LegacyCopy>,
) -> CopyReport {
    let primary = match writer.write_text(text.clone()).await {
        Ok(()) => return continue_after_primary(Ok(()), &text, legacy.as_ref()),
        Err(e) => e,
    };

    // The legacy command waits on a child process.
    let blocking_error = primary.clone();
    tokio::task::spawn_blocking(move || {
        continue_after_primary(Err(primary), &text, legacy.as_ref())
    })
    .await
    .unwrap_or_else(|e| CopyReport {
        outcome: CopyOutcome::Failed(ClipboardError::Command(e.to_string())),
        primary_error: Some(blocking_error),
    })
}

/// Continuation run once the primary write has reported back.
pub fn continue_after_primary(
    primary: Result<(), ClipboardError>,
    text: &str,
    legacy: &dyn LegacyCopy,
) -> CopyReport {
    match primary {
        Ok(()) => CopyReport {
            outcome: CopyOutcome::Copied(CopyPath::Primary),
            primary_error: None,
        },
        Err(primary_error) => CopyReport {
            outcome: fallback_copy(text, legacy),
            primary_error: Some(primary_error),
        },
    }
}

fn fallback_copy(text: &str, legacy: &dyn LegacyCopy) -> CopyOutcome {
    let scratch = match legacy.create_scratch(text) {
        Ok(scratch) => scratch,
        Err(e) => return CopyOutcome::Failed(e),
    };

    let outcome = match legacy.copy_selection(&scratch) {
        Ok(true) => CopyOutcome::Copied(CopyPath::Fallback),
        Ok(false) => CopyOutcome::NotCopied,
        Err(e) => CopyOutcome::Failed(e),
    };

    drop(scratch);
    outcome
}
