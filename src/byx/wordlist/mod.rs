// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: mod.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

//! Word lists for passphrases: built-in constants or files in EFF
//! (`index word`) or plain (`word`) format.

pub mod builtin;

use crate::byx::error::{ByxError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Word lists compiled into the binary.
#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BuiltinWordlist {
	#[default]
	EffShort,
	Compact,
}

impl BuiltinWordlist {
	pub fn words(self) -> &'static [&'static str] {
		match self {
			Self::EffShort => builtin::EFF_SHORT,
			Self::Compact => builtin::COMPACT,
		}
	}
}

impl fmt::Display for BuiltinWordlist {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::EffShort => "built-in EFF short wordlist",
			Self::Compact => "built-in compact wordlist",
		};
		write!(f, "{}", label)
	}
}

/// Where the passphrase words come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordSource {
	Builtin(BuiltinWordlist),
	File(PathBuf),
}

impl Default for WordSource {
	fn default() -> Self {
		Self::Builtin(BuiltinWordlist::default())
	}
}

impl fmt::Display for WordSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Builtin(list) => write!(f, "{}", list),
			Self::File(path) => {
				write!(f, "custom wordlist {}", path.display())
			}
		}
	}
}

/// One non-blank line of a word list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordLine<'a> {
	/// `12345   word`, as in the EFF dice lists.
	Indexed { index: &'a str, word: &'a str },
	/// A word on its own. Anything after the first token is ignored.
	Bare(&'a str),
}

impl<'a> WordLine<'a> {
	pub fn parse(line: &'a str) -> Option<Self> {
		let mut tokens = line.split_whitespace();
		let first = tokens.next()?;
		match tokens.next() {
			Some(word) if first.chars().all(|c| c.is_ascii_digit()) => {
				Some(Self::Indexed { index: first, word })
			}
			_ => Some(Self::Bare(first)),
		}
	}

	pub fn word(&self) -> &'a str {
		match self {
			Self::Indexed { word, .. } => *word,
			Self::Bare(word) => *word,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
	words: Vec<String>,
}

impl WordList {
	pub fn new(words: Vec<String>) -> Result<Self> {
		if words.is_empty() {
			return Err(ByxError::config("No words found in wordlist"));
		}
		Ok(Self { words })
	}

	pub fn builtin(list: BuiltinWordlist) -> Self {
		Self {
			words: list.words().iter().map(|w| w.to_string()).collect(),
		}
	}

	pub fn parse(text: &str) -> Result<Self> {
		Self::new(
			text.lines()
				.filter_map(WordLine::parse)
				.map(|line| line.word().to_string())
				.collect(),
		)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|e| {
			ByxError::io(
				format!("Error reading wordlist file {}", path.display()),
				e,
			)
		})?;
		Self::parse(&text).map_err(|_| {
			ByxError::config(format!(
				"No words found in wordlist file: {}",
				path.display()
			))
		})
	}

	pub fn from_source(source: &WordSource) -> Result<Self> {
		match source {
			WordSource::Builtin(list) => Ok(Self::builtin(*list)),
			WordSource::File(path) => Self::load(path),
		}
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.iter().any(|w| w == word)
	}
}
