// signal-clean - GPL-3.0-or-later
// This file is part of signal-clean.
//
// Copyright (C) 2025 The signal-clean contributors
//
// signal-clean is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// signal-clean is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with signal-clean.  If not, see <https://www.gnu.org/licenses/>.

//! Access to the host clipboard.
//!
//! The cleaner only needs to read the current text once and overwrite it once,
//! so the seam is a small trait. [`SystemClipboard`] talks to the real
//! clipboard, [`MemoryClipboard`] keeps the text in memory.

use anyhow::{anyhow, bail, Result};
use cli_clipboard::{ClipboardContext, ClipboardProvider};

/// Something that holds a single piece of text that can be read and replaced
pub trait Clipboard {
    /// Get the current text contents
    fn read_text(&mut self) -> Result<String>;

    /// Replace the contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The clipboard of the machine we are running on
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    /// Connect to the host clipboard.
    ///
    /// Fails if no clipboard mechanism is available, e.g. a headless session.
    pub fn open() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| anyhow!("clipboard unavailable: {e}"))?;
        tracing::debug!("connected to system clipboard");
        Ok(Self { ctx })
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        self.ctx
            .get_contents()
            .map_err(|e| anyhow!("clipboard unavailable: {e}"))
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| anyhow!("clipboard unavailable: {e}"))
    }
}

/// In-memory clipboard that can be told to fail
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: String,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryClipboard {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// Make every read fail as if the clipboard were unavailable
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every write fail as if the clipboard were unavailable
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// How many writes went through
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String> {
        if self.fail_reads {
            bail!("clipboard unavailable: reads disabled");
        }
        Ok(self.contents.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail_writes {
            bail!("clipboard unavailable: writes disabled");
        }
        text.clone_into(&mut self.contents);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let mut clipboard = MemoryClipboard::new("before");
        assert_eq!(clipboard.read_text().expect("read"), "before");
        clipboard.write_text("after").expect("write");
        assert_eq!(clipboard.read_text().expect("read"), "after");
        assert_eq!(clipboard.writes(), 1);
    }

    #[test]
    fn test_memory_failures() {
        let mut clipboard = MemoryClipboard::new("text").failing_reads();
        assert!(clipboard.read_text().is_err());
        assert!(clipboard.write_text("ok").is_ok());

        let mut clipboard = MemoryClipboard::new("text").failing_writes();
        assert!(clipboard.write_text("nope").is_err());
        assert_eq!(clipboard.contents(), "text");
        assert_eq!(clipboard.writes(), 0);
    }
}
