// SPDX-License-Identifier: MPL-2.0
//! Platform clipboard backends.

use super::{ClipboardError, ClipboardWriter, LegacyCopy, Scratch};
use futures_util::future::BoxFuture;
use std::process::{Command, Stdio};

/// Primary path: the native clipboard through `arboard`.
///
/// `arboard` is synchronous, so the write runs on tokio's blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: String) -> BoxFuture<'static, Result<(), ClipboardError>> {
        Box::pin(async move {
            tokio::task::spawn_blocking(move || {
                let mut clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::Denied(e.to_string()))
            })
            .await
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?
        })
    }
}

/// Legacy path: pipes the scratch container into the platform copy tool.
#[derive(Debug, Clone)]
pub struct CommandCopy {
    program: String,
    args: Vec<String>,
}

impl CommandCopy {
    /// Uses an explicit copy command.
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Picks the copy tool of the running platform.
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::<String>::new())
        } else if cfg!(target_os = "windows") {
            Self::new("clip", Vec::<String>::new())
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::<String>::new())
        } else {
            Self::new("xclip", ["-selection", "clipboard"])
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandCopy {
    fn default() -> Self {
        Self::detect()
    }
}

impl LegacyCopy for CommandCopy {
    fn copy_selection(&self, scratch: &Scratch) -> Result<bool, ClipboardError> {
        let selection = scratch.select()?;
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::from(selection))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ClipboardError::Command(format!("{}: {}", self.program, e)))?;
        Ok(status.success())
    }
}
