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

use signal_clean::clipboard::{Clipboard, MemoryClipboard};
use signal_clean::{clean_clipboard, is_timestamp, reformat};

const COPIED: &str = "Dec 13, 2020 12:55pm
Are we still on for tonight?
Wed 9:55pm
Yes!
- bring snacks
- bring cards
40m
On my way
now
now
See you";

const CLEANED: &str = "Dec 13, 2020 12:55pm
Are we still on for tonight?

Wed 9:55pm
Yes!
- bring snacks
- bring cards

40m
On my way

now
now
See you";

#[test]
fn test_copied_conversation() {
    let mut clipboard = MemoryClipboard::new(COPIED);
    let report = clean_clipboard(&mut clipboard).expect("clean should succeed");

    assert_eq!(clipboard.contents(), CLEANED);
    assert_eq!(report.timestamps, 5);
    assert_eq!(report.separators, 3);
}

#[test]
fn test_running_twice_adds_nothing() {
    let mut clipboard = MemoryClipboard::new(COPIED);
    clean_clipboard(&mut clipboard).expect("first run");
    let report = clean_clipboard(&mut clipboard).expect("second run");

    assert_eq!(report.separators, 0);
    assert_eq!(clipboard.contents(), CLEANED);
    assert_eq!(clipboard.writes(), 2);
}

#[test]
fn test_unavailable_clipboard_is_fatal() {
    let mut clipboard = MemoryClipboard::new(COPIED).failing_reads();
    let err = clean_clipboard(&mut clipboard).expect_err("read should fail");

    let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert_eq!(
        chain,
        ["failed to read clipboard", "clipboard unavailable: reads disabled"]
    );
    assert_eq!(clipboard.writes(), 0);
    assert!(clipboard.read_text().is_err());
}

#[test]
fn test_twenty_one_characters_never_match() {
    for line in [
        "Dec 13, 2020 12:55pm ",
        " Dec 13, 2020 12:55pm",
        "Dec 13, 2020 112:55pm",
    ] {
        assert_eq!(line.chars().count(), 21);
        assert!(!is_timestamp(line), "{line:?}");
        assert_eq!(reformat(&format!("Hi\n{line}")), format!("Hi\n{line}"));
    }
}
