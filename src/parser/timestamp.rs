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

//! Recognition of the timestamp lines Signal desktop puts into copied messages.
//!
//! Only the textual shape is checked. Nothing here turns a timestamp into a
//! date or time value.

use fancy_regex::Regex;
use std::sync::LazyLock;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const DAYS_OF_WEEK: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Every month and weekday abbreviation is this long
const ABBREV_LEN: usize = 3;

// Longest literal each recognized shape can take
const ABSOLUTE_TEMPLATE: &str = "Dec 13, 2020 12:55pm";
const WEEKDAY_TEMPLATE: &str = "Wed 12:55pm";
const RELATIVE_TEMPLATE: &str = "40m";
const NOW: &str = "now";

const fn longest(templates: &[&str]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < templates.len() {
        if templates[i].len() > max {
            max = templates[i].len();
        }
        i += 1;
    }
    max
}

/// Lines longer than this can never be a timestamp and are rejected before
/// any pattern is tried. Byte length is sufficient since every shape is ASCII.
pub const MAX_TIMESTAMP_LEN: usize = longest(&[
    ABSOLUTE_TEMPLATE,
    WEEKDAY_TEMPLATE,
    RELATIVE_TEMPLATE,
    NOW,
]);

/// Upper bound for lines without a month or weekday prefix
const MAX_TOKEN_LEN: usize = longest(&[RELATIVE_TEMPLATE, NOW]);

// Matches the part after the month: " 13, 2020 12:55pm"
static ABSOLUTE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ [1-3]?\d, \d{4} [0-1]?\d:[0-5]\d[ap]m$").expect("valid regex literal")
});

// Matches the part after the weekday: " 12:55pm"
static WEEKDAY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ [0-1]?\d:[0-5]\d[ap]m$").expect("valid regex literal"));

static RELATIVE_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-5]?\dm$").expect("valid regex literal"));

static RELATIVE_HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1?\dh$").expect("valid regex literal"));

/// Which of the recognized shapes a timestamp line has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampKind {
    /// `Dec 13, 2020 12:55pm`
    Absolute,
    /// `Wed 9:55pm`
    Weekday,
    /// `40m`, `14h`
    Relative,
    /// `now`
    Now,
}

impl TimestampKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Weekday => "weekday",
            Self::Relative => "relative",
            Self::Now => "now",
        }
    }
}

fn matches(pattern: &Regex, text: &str) -> bool {
    pattern.is_match(text).unwrap_or(false)
}

/// Classify a single line, returning the matched shape if the whole line is a timestamp.
///
/// A line that starts with a month or weekday abbreviation is decided by the
/// matching suffix pattern alone, so `Dec 12` and `Tue` are rejected outright.
#[must_use]
pub fn classify(line: &str) -> Option<TimestampKind> {
    if line.len() > MAX_TIMESTAMP_LEN {
        return None;
    }

    if let Some((prefix, suffix)) = line.split_at_checked(ABBREV_LEN) {
        if MONTHS.contains(&prefix) {
            return matches(&ABSOLUTE_SUFFIX, suffix).then_some(TimestampKind::Absolute);
        }
        if DAYS_OF_WEEK.contains(&prefix) {
            return matches(&WEEKDAY_SUFFIX, suffix).then_some(TimestampKind::Weekday);
        }
    }

    // Only "40m", "12h" and "now" are left
    if line.len() > MAX_TOKEN_LEN {
        return None;
    }

    if line == NOW {
        return Some(TimestampKind::Now);
    }

    (matches(&RELATIVE_MINUTES, line) || matches(&RELATIVE_HOURS, line))
        .then_some(TimestampKind::Relative)
}

/// Check if a line is one of Signal's timestamp lines
#[must_use]
pub fn is_timestamp(line: &str) -> bool {
    classify(line).is_some()
}
