// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: logging.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count. Quiet runs only surface errors.
pub fn level_for(verbosity: u8, quiet: bool) -> &'static str {
	if quiet {
		return "error";
	}
	match verbosity {
		0 => "warn",
		1 => "info",
		_ => "debug",
	}
}

/// Install the stderr diagnostics subscriber. `RUST_LOG` takes precedence
/// over the verbosity flags.
pub fn init_logging(verbosity: u8, quiet: bool) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)));

	// A second call (tests driving `run` twice) keeps the first subscriber.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.try_init();
}
