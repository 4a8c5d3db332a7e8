// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: entropy.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

//! Strength estimates derived from generation parameters, never from the
//! generated secret itself.

use std::fmt;

const WEAK_BITS: f64 = 28.0;
const REASONABLE_BITS: f64 = 36.0;
const STRONG_BITS: f64 = 60.0;
const VERY_STRONG_BITS: f64 = 128.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
	VeryWeak,
	Weak,
	Reasonable,
	Strong,
	VeryStrong,
}

impl Strength {
	/// Lower bounds are inclusive: 28.0 bits is already `Weak`.
	pub fn from_bits(bits: f64) -> Self {
		if bits < WEAK_BITS {
			Self::VeryWeak
		} else if bits < REASONABLE_BITS {
			Self::Weak
		} else if bits < STRONG_BITS {
			Self::Reasonable
		} else if bits < VERY_STRONG_BITS {
			Self::Strong
		} else {
			Self::VeryStrong
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::VeryWeak => "Very Weak",
			Self::Weak => "Weak",
			Self::Reasonable => "Reasonable",
			Self::Strong => "Strong",
			Self::VeryStrong => "Very Strong",
		}
	}
}

impl fmt::Display for Strength {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EntropyEstimate {
	pub bits: f64,
	pub strength: Strength,
}

impl EntropyEstimate {
	pub fn from_bits(bits: f64) -> Self {
		Self {
			bits,
			strength: Strength::from_bits(bits),
		}
	}

	/// `length` draws from `distinct_pool` equally likely characters.
	pub fn password(length: usize, distinct_pool: usize) -> Self {
		Self::from_bits(choice_bits(length, distinct_pool))
	}

	/// `word_count` draws from a list of `list_size` words.
	pub fn passphrase(word_count: usize, list_size: usize) -> Self {
		Self::from_bits(choice_bits(word_count, list_size))
	}
}

fn choice_bits(draws: usize, alphabet: usize) -> f64 {
	if alphabet == 0 {
		return 0.0;
	}
	draws as f64 * (alphabet as f64).log2()
}
