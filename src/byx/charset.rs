// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: charset.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

//! Character classes and pool assembly for password generation.

use crate::byx::error::{ByxError, Result};
use std::collections::HashSet;
use strum::{EnumIter, IntoEnumIterator};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum CharacterClass {
	Upper,
	Lower,
	Digit,
	Symbol,
}

impl CharacterClass {
	pub fn chars(self) -> &'static str {
		match self {
			Self::Upper => UPPERCASE,
			Self::Lower => LOWERCASE,
			Self::Digit => DIGITS,
			Self::Symbol => SYMBOLS,
		}
	}

	pub fn contains(self, c: char) -> bool {
		match self {
			Self::Upper => c.is_ascii_uppercase(),
			Self::Lower => c.is_ascii_lowercase(),
			Self::Digit => c.is_ascii_digit(),
			Self::Symbol => c.is_ascii_punctuation(),
		}
	}

	pub fn of(c: char) -> Option<Self> {
		Self::iter().find(|class| class.contains(c))
	}
}

/// `--only` restriction categories.
#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OnlyClass {
	Alpha,
	Alphanumeric,
	Numeric,
	Symbols,
}

impl OnlyClass {
	pub fn classes(self) -> &'static [CharacterClass] {
		use CharacterClass::*;
		match self {
			Self::Alpha => &[Upper, Lower],
			Self::Alphanumeric => &[Upper, Lower, Digit],
			Self::Numeric => &[Digit],
			Self::Symbols => &[Symbol],
		}
	}
}

/// Which characters a password may be drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharsetSpec {
	pub no_upper: bool,
	pub no_lower: bool,
	pub no_digits: bool,
	pub no_symbols: bool,
	pub only: Option<OnlyClass>,
	pub force_chars: Option<String>,
}

impl CharsetSpec {
	/// Resolve the flags into a pool. Forced characters win over `only`,
	/// which wins over the exclusion flags.
	pub fn build(&self) -> Result<Pool> {
		if let Some(forced) =
			self.force_chars.as_deref().filter(|s| !s.is_empty())
		{
			return Ok(Pool::new(forced.chars().collect()));
		}

		if let Some(only) = self.only {
			return Ok(Pool::from_classes(only.classes()));
		}

		let mut classes = Vec::with_capacity(4);
		if !self.no_upper {
			classes.push(CharacterClass::Upper);
		}
		if !self.no_lower {
			classes.push(CharacterClass::Lower);
		}
		if !self.no_digits {
			classes.push(CharacterClass::Digit);
		}
		if !self.no_symbols {
			classes.push(CharacterClass::Symbol);
		}
		if classes.is_empty() {
			return Err(ByxError::config(
				"No character types selected. At least one character type must be enabled.",
			));
		}
		Ok(Pool::from_classes(&classes))
	}
}

/// Ordered characters eligible for selection. Duplicates are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool {
	chars: Vec<char>,
}

impl Pool {
	pub fn new(chars: Vec<char>) -> Self {
		Self { chars }
	}

	pub fn from_classes(classes: &[CharacterClass]) -> Self {
		Self::new(
			classes.iter().flat_map(|class| class.chars().chars()).collect(),
		)
	}

	pub fn chars(&self) -> &[char] {
		&self.chars
	}

	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	/// Number of different characters; this is what entropy is based on.
	pub fn distinct_len(&self) -> usize {
		self.chars.iter().collect::<HashSet<_>>().len()
	}

	pub fn contains(&self, c: char) -> bool {
		self.chars.contains(&c)
	}

	pub fn preview(&self) -> String {
		let head: String =
			self.chars.iter().take(PREVIEW_CHARS).collect();
		if self.chars.len() > PREVIEW_CHARS {
			format!("{}...", head)
		} else {
			head
		}
	}
}
