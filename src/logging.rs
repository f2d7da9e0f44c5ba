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

//! Diagnostic output setup.
//!
//! Diagnostics always go to stderr, never near the clipboard text.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset, blank or unparsable
pub const DEFAULT_FILTER: &str = "signal_clean=warn";

/// Build the log filter from the raw `RUST_LOG` value
#[must_use]
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
/// Set `RUST_LOG` to override the default (e.g., `RUST_LOG=signal_clean=debug`)
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(build_filter(None).to_string(), DEFAULT_FILTER);
        assert_eq!(build_filter(Some("  ")).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_override() {
        assert_eq!(build_filter(Some("debug")).to_string(), "debug");
    }
}
