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

use crate::clipboard::Clipboard;
use crate::core::reformat::{reformat_report, Reformatted};
use anyhow::{Context, Result};

/// Read the clipboard once, reformat it and write the result back.
///
/// A failed read aborts before anything is written. The text is written back
/// even if nothing changed.
pub fn clean_clipboard<C: Clipboard + ?Sized>(clipboard: &mut C) -> Result<Reformatted> {
    let text = clipboard.read_text().context("failed to read clipboard")?;
    tracing::debug!(bytes = text.len(), "read clipboard contents");

    let report = reformat_report(&text);
    if report.is_unchanged() {
        tracing::debug!("no separators needed, writing text back unchanged");
    }

    clipboard
        .write_text(&report.text)
        .context("failed to write clipboard")?;

    tracing::info!(
        lines = report.lines,
        timestamps = report.timestamps,
        separators = report.separators,
        "cleaned clipboard"
    );
    Ok(report)
}
