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

//! Clean up conversations copied out of Signal desktop.
//!
//! Copied messages come with timestamp lines (`Dec 13, 2020 12:55pm`,
//! `Wed 9:55pm`, `40m`, `now`) between the message blocks. The cleaner
//! recognizes them and puts a blank line in front of every new group, so the
//! text pastes into Notion with its structure intact.

pub mod clipboard;
pub mod core;
pub mod logging;
pub mod parser;

pub use crate::core::{clean_clipboard, reformat, reformat_report, Reformatted};
pub use crate::parser::{classify, is_timestamp, TimestampKind};
