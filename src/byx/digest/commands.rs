// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// Digest command handler (string/file/stdin)

use crate::byx::digest::{compute, DigestOutcome, DigestRequest};
use crate::byx::error::Result;
use crate::byx::output::{save_lines, Report};
use std::path::PathBuf;

const PREVIEW_HEX_BYTES: usize = 50;

#[derive(Clone, Debug, Default)]
pub struct DigestOptions {
	pub quiet: bool,
	pub verbosity: u8,
	pub save: Option<PathBuf>,
}

/// Hash the requested input, save it if asked, and return the report.
pub fn digest(
	request: &DigestRequest,
	options: &DigestOptions,
) -> Result<Report> {
	let outcome = compute(request)?;
	if let Some(path) = &options.save {
		save_lines(path, &[outcome.digest_hex.as_str()])?;
	}
	Ok(render(&outcome, options))
}

fn escape_bytes(bytes: &[u8]) -> String {
	bytes
		.iter()
		.flat_map(|b| std::ascii::escape_default(*b))
		.map(char::from)
		.collect()
}

fn ellipsis(truncated: bool) -> &'static str {
	if truncated {
		"..."
	} else {
		""
	}
}

pub fn render(outcome: &DigestOutcome, options: &DigestOptions) -> Report {
	let mut report = Report::new();
	if let Some(warning) = &outcome.warning {
		report.warn(warning.clone());
	}

	if options.quiet {
		report.line(outcome.digest_hex.clone());
		return report;
	}

	let verbosity = options.verbosity;
	let name = outcome.algorithm.to_string();
	let sample = &outcome.sample;
	let truncated = |shown: usize| sample.total > shown as u64;

	if verbosity >= 1 {
		report.line(format!("Input source: {}", outcome.input));
		report.line(format!("Input length: {} bytes", sample.total));
		report.line(format!("Algorithm: {}", name));
		if let Some(length) = outcome.requested_length {
			report.line(format!("Hash length: {} bytes", length));
		}
		report.rule();
	}

	if verbosity >= 2 {
		let head = &sample.head;
		report.line(format!(
			"Input as bytes: b'{}'{}",
			escape_bytes(head),
			ellipsis(truncated(head.len()))
		));
		let head = &head[..head.len().min(PREVIEW_HEX_BYTES)];
		report.line(format!(
			"Input hex: {}{}",
			hex::encode(head),
			ellipsis(truncated(head.len()))
		));
		report.line(format!("Processing with {} algorithm...", name));
		report.rule();
	}

	report.line(format!("Hash: {}", outcome.digest_hex));

	if verbosity >= 1 {
		report.line(format!(
			"Hash length: {} hex characters ({} bytes)",
			outcome.digest_hex.len(),
			outcome.digest_hex.len() / 2
		));
	}

	if let Some(path) = &options.save {
		report.blank();
		report.line(format!("Hash saved to: {}", path.display()));
	}
	report
}
