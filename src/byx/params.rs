// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: params.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

//! `key: value` parameters piped into the generator on stdin.

use crate::byx::error::{ByxError, Result};
use std::collections::HashMap;
use std::io::{IsTerminal, Read};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamOverrides {
	pub length: Option<usize>,
	pub count: Option<usize>,
}

impl ParamOverrides {
	pub fn is_empty(&self) -> bool {
		self.length.is_none() && self.count.is_none()
	}

	/// Parse piped text. Keys are case-insensitive, lines without a colon
	/// and unknown keys are ignored.
	pub fn parse(text: &str) -> Result<Self> {
		let pairs: HashMap<String, &str> = text
			.lines()
			.filter_map(|line| line.split_once(':'))
			.map(|(key, value)| (key.trim().to_lowercase(), value.trim()))
			.collect();

		Ok(Self {
			length: parse_count(&pairs, "length")?,
			count: parse_count(&pairs, "count")?,
		})
	}

	/// Read overrides from stdin unless it is a terminal.
	pub fn from_stdin() -> Result<Self> {
		let stdin = std::io::stdin();
		if stdin.is_terminal() {
			return Ok(Self::default());
		}
		let mut text = String::new();
		stdin
			.lock()
			.read_to_string(&mut text)
			.map_err(|e| ByxError::io("Error reading stdin", e))?;
		Self::parse(&text)
	}
}

fn parse_count(
	pairs: &HashMap<String, &str>,
	key: &str,
) -> Result<Option<usize>> {
	pairs
		.get(key)
		.map(|value| {
			value.parse::<usize>().map_err(|_| {
				ByxError::config(format!(
					"Invalid stdin value for {}: '{}'",
					key, value
				))
			})
		})
		.transpose()
}
