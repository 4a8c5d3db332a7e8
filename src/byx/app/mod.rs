// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: mod.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

pub mod digest;
pub mod pgen;

use crate::byx::error::ByxError;
use crate::byx::output::report_error;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

/// Report a fatal error and leave with its exit status.
pub fn fail(err: &ByxError) -> ! {
	report_error(err);
	std::process::exit(err.exit_code());
}
