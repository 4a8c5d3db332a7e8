// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: wordlist_format.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

use assert_cmd::cargo::cargo_bin_cmd;
use std::io::Write;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn eff_file(words: usize) -> std::io::Result<tempfile::NamedTempFile> {
	let mut file = tempfile::NamedTempFile::new()?;
	for i in 0..words {
		writeln!(file, "{}\tword{}", 11111 + i, i)?;
	}
	Ok(file)
}

#[test]
fn plain_output_strips_indices() -> TestResult {
	let input = eff_file(3)?;
	let output = cargo_bin_cmd!("wordlist-format").arg(input.path()).output()?;
	assert!(output.status.success());
	assert_eq!(String::from_utf8(output.stdout)?, "word0\nword1\nword2\n");
	assert!(String::from_utf8(output.stderr)?.contains("Processed 3 words"));
	Ok(())
}

#[test]
fn rust_const_rows_of_ten() -> TestResult {
	let input = eff_file(12)?;
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("words.rs");
	let output = cargo_bin_cmd!("wordlist-format")
		.arg(input.path())
		.args(["--rust-const", "WORDS", "-o"])
		.arg(&path)
		.output()?;
	assert!(output.status.success());
	let source = std::fs::read_to_string(&path)?;
	let lines: Vec<&str> = source.lines().collect();
	assert_eq!(lines[0], "pub const WORDS: &[&str] = &[");
	assert_eq!(lines[1].matches('"').count(), 20);
	assert_eq!(lines[2], "\t\"word10\", \"word11\",");
	assert_eq!(lines[3], "];");
	Ok(())
}

#[test]
fn empty_input_is_rejected() -> TestResult {
	let input = tempfile::NamedTempFile::new()?;
	let output = cargo_bin_cmd!("wordlist-format").arg(input.path()).output()?;
	assert_eq!(output.status.code(), Some(2));
	Ok(())
}
