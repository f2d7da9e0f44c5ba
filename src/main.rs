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

use clap::Parser;
use signal_clean::clipboard::SystemClipboard;
use signal_clean::{clean_clipboard, logging};

#[derive(Parser, Debug)]
#[command(name = "signal-clean")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(
    about = "Clean up Signal messages on the clipboard so they paste properly into Notion",
    long_about = None
)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    logging::init();

    tracing::debug!(
        "signal-clean starting up (version {})",
        env!("CARGO_PKG_VERSION")
    );

    let mut clipboard = SystemClipboard::open()?;
    clean_clipboard(&mut clipboard)?;
    Ok(())
}
