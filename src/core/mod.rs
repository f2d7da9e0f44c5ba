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

pub mod clean;
pub mod reformat;

pub use clean::clean_clipboard;
pub use reformat::{reformat, reformat_report, Reformatted};
