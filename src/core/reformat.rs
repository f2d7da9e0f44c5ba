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

//! Line reformatting for copied Signal conversations.
//!
//! Timestamp lines stay where they are. A blank line is inserted in front of
//! the first timestamp that follows message text, so every message group ends
//! up separated from the next one when pasted.

use crate::parser::timestamp::{classify, TimestampKind};

/// Output of a reformatting pass together with what happened during it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reformatted {
    pub text: String,
    /// Number of lines in the input
    pub lines: usize,
    /// Number of lines recognized as timestamps
    pub timestamps: usize,
    /// Number of blank lines inserted
    pub separators: usize,
}

impl Reformatted {
    /// True if the pass left the text untouched
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.separators == 0
    }
}

/// Reformat copied conversation text, see [`reformat_report`]
#[must_use]
pub fn reformat(text: &str) -> String {
    reformat_report(text).text
}

/// Reformat copied conversation text and report the counts.
///
/// `last_was_date` starts out true, so a timestamp on the very first line never
/// gets a separator. Blank lines set it as well: they already separate groups,
/// which keeps a second pass over the output from adding more.
#[must_use]
pub fn reformat_report(text: &str) -> Reformatted {
    let mut report = Reformatted::default();
    let mut cleaned: Vec<&str> = Vec::new();
    let mut last_was_date = true;

    for line in text.split('\n') {
        report.lines += 1;

        // CRLF text keeps its line endings, they just don't count for matching
        let kind = classify(line.strip_suffix('\r').unwrap_or(line));
        tracing::trace!(
            line = report.lines,
            kind = kind.map(TimestampKind::label),
            "classified line"
        );

        if kind.is_some() {
            report.timestamps += 1;
            if !last_was_date {
                cleaned.push("");
                report.separators += 1;
            }
            last_was_date = true;
        } else {
            last_was_date = line.trim().is_empty();
        }
        cleaned.push(line);
    }

    report.text = cleaned.join("\n");
    report
}
