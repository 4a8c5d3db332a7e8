// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// Module: output
// Purpose: Collect report lines, print them, and save results to disk.

use crate::byx::error::{ByxError, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const RULE_WIDTH: usize = 50;

pub fn rule() -> String {
	"-".repeat(RULE_WIDTH)
}

/// Lines for stdout and warnings for stderr, built before anything is
/// printed so a failing run prints nothing partial.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
	pub lines: Vec<String>,
	pub warnings: Vec<String>,
}

impl Report {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn line(&mut self, line: impl Into<String>) {
		self.lines.push(line.into());
	}

	pub fn warn(&mut self, warning: impl Into<String>) {
		self.warnings.push(warning.into());
	}

	pub fn rule(&mut self) {
		self.lines.push(rule());
	}

	pub fn blank(&mut self) {
		self.lines.push(String::new());
	}

	pub fn text(&self) -> String {
		let mut out = String::new();
		for line in &self.lines {
			out.push_str(line);
			out.push('\n');
		}
		out
	}

	/// Warnings go to stderr first, then the report body to stdout.
	pub fn emit(&self) {
		for warning in &self.warnings {
			eprintln!("{} {}", "warning:".yellow().bold(), warning);
		}
		for line in &self.lines {
			println!("{}", line);
		}
	}
}

/// Write each line followed by a newline, replacing any existing file.
pub fn save_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
	let wrap = |e| {
		ByxError::io(format!("Error saving to file {}", path.display()), e)
	};
	let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
	for line in lines {
		writeln!(writer, "{}", line.as_ref()).map_err(wrap)?;
	}
	writer.flush().map_err(wrap)
}

/// Print an error the way both binaries report fatal failures.
pub fn report_error(err: &ByxError) {
	eprintln!("{} {}", "error:".red().bold(), err);
}
