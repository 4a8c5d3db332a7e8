// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: generator.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

//! Password and passphrase generation.
//!
//! Passwords are built by rejection sampling: a full candidate is drawn
//! from the pool and kept only if it meets every per-class minimum. The
//! loop is capped at [`MAX_ATTEMPTS`].

use crate::byx::charset::{CharacterClass, Pool};
use crate::byx::entropy::EntropyEstimate;
use crate::byx::error::{ByxError, Result};
use crate::byx::random::{pick, SecretRng};
use crate::byx::wordlist::WordList;
use tracing::{debug, trace};

pub const MAX_ATTEMPTS: usize = 10_000;

/// Per-class character counts of a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composition {
	pub upper: usize,
	pub lower: usize,
	pub digits: usize,
	pub symbols: usize,
}

impl Composition {
	pub fn of(secret: &str) -> Self {
		let mut counts = Self::default();
		for c in secret.chars() {
			match CharacterClass::of(c) {
				Some(CharacterClass::Upper) => counts.upper += 1,
				Some(CharacterClass::Lower) => counts.lower += 1,
				Some(CharacterClass::Digit) => counts.digits += 1,
				Some(CharacterClass::Symbol) => counts.symbols += 1,
				None => {}
			}
		}
		counts
	}
}

/// Minimum number of characters required from each class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimumConstraints {
	pub upper: usize,
	pub lower: usize,
	pub digits: usize,
	pub symbols: usize,
}

impl MinimumConstraints {
	/// Sum of the four minimums, `None` when it does not fit in a `usize`.
	pub fn total(&self) -> Option<usize> {
		[self.upper, self.lower, self.digits, self.symbols]
			.into_iter()
			.try_fold(0usize, |sum, n| sum.checked_add(n))
	}

	pub fn is_unconstrained(&self) -> bool {
		self.total() == Some(0)
	}

	pub fn is_satisfied_by(&self, candidate: &str) -> bool {
		let counts = Composition::of(candidate);
		counts.upper >= self.upper
			&& counts.lower >= self.lower
			&& counts.digits >= self.digits
			&& counts.symbols >= self.symbols
	}

	/// Fail before sampling when the minimums cannot fit in `length`.
	pub fn check_fits(&self, length: usize) -> Result<()> {
		match self.total() {
			Some(total) if total <= length => Ok(()),
			Some(total) => Err(ByxError::config(format!(
				"Minimum requirements ({}) exceed password length ({})",
				total, length
			))),
			None => Err(ByxError::config(format!(
				"Minimum requirements exceed password length ({})",
				length
			))),
		}
	}
}

fn draw<R: SecretRng>(rng: &mut R, pool: &Pool, length: usize) -> String {
	(0..length).map(|_| *pick(rng, pool.chars())).collect()
}

/// Draw a password of exactly `length` characters from `pool` that meets
/// `minimums`.
pub fn generate_password<R: SecretRng>(
	rng: &mut R,
	pool: &Pool,
	length: usize,
	minimums: &MinimumConstraints,
) -> Result<String> {
	minimums.check_fits(length)?;
	if pool.is_empty() {
		return Err(ByxError::config("Character pool is empty"));
	}

	for attempt in 1..=MAX_ATTEMPTS {
		let candidate = draw(rng, pool, length);
		if minimums.is_satisfied_by(&candidate) {
			trace!(attempt, "password candidate accepted");
			return Ok(candidate);
		}
	}
	debug!(attempts = MAX_ATTEMPTS, "gave up on minimum constraints");
	Err(ByxError::Unsatisfiable {
		attempts: MAX_ATTEMPTS,
	})
}

/// `words` independent picks from `list`, joined by `separator`.
pub fn generate_passphrase<R: SecretRng>(
	rng: &mut R,
	list: &WordList,
	words: usize,
	separator: &str,
) -> String {
	(0..words)
		.map(|_| pick(rng, list.words()).as_str())
		.collect::<Vec<_>>()
		.join(separator)
}

/// What a batch should contain.
#[derive(Debug, Clone)]
pub enum SecretKind {
	Password {
		pool: Pool,
		length: usize,
		minimums: MinimumConstraints,
	},
	Passphrase {
		list: WordList,
		words: usize,
		separator: String,
	},
}

impl SecretKind {
	/// Estimate computed from the parameters, shared by the whole batch.
	pub fn entropy(&self) -> EntropyEstimate {
		match self {
			Self::Password { pool, length, .. } => {
				EntropyEstimate::password(*length, pool.distinct_len())
			}
			Self::Passphrase { list, words, .. } => {
				EntropyEstimate::passphrase(*words, list.len())
			}
		}
	}

	/// Reject contradictory parameters before anything is drawn.
	pub fn validate(&self) -> Result<()> {
		match self {
			Self::Password {
				pool,
				length,
				minimums,
			} => {
				minimums.check_fits(*length)?;
				if pool.is_empty() {
					return Err(ByxError::config("Character pool is empty"));
				}
				Ok(())
			}
			Self::Passphrase { list, .. } => {
				if list.is_empty() {
					return Err(ByxError::config(
						"No wordlist available",
					));
				}
				Ok(())
			}
		}
	}

	fn generate_one<R: SecretRng>(&self, rng: &mut R) -> Result<String> {
		match self {
			Self::Password {
				pool,
				length,
				minimums,
			} => generate_password(rng, pool, *length, minimums),
			Self::Passphrase {
				list,
				words,
				separator,
			} => Ok(generate_passphrase(rng, list, *words, separator)),
		}
	}
}

/// A finished batch of secrets plus its strength estimate.
#[derive(Debug, Clone)]
pub struct Batch {
	pub secrets: Vec<String>,
	pub entropy: EntropyEstimate,
}

impl Batch {
	pub fn average_length(&self) -> f64 {
		if self.secrets.is_empty() {
			return 0.0;
		}
		let total: usize =
			self.secrets.iter().map(|s| s.chars().count()).sum();
		total as f64 / self.secrets.len() as f64
	}
}

/// Produce `count` secrets. Either all of them are returned or none.
pub fn generate_batch<R: SecretRng>(
	rng: &mut R,
	kind: &SecretKind,
	count: usize,
) -> Result<Batch> {
	kind.validate()?;
	let secrets = (0..count)
		.map(|_| kind.generate_one(rng))
		.collect::<Result<Vec<_>>>()?;
	debug!(count, "generated batch");
	Ok(Batch {
		secrets,
		entropy: kind.entropy(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::byx::charset::{CharsetSpec, OnlyClass};
	use crate::byx::entropy::Strength;
	use rand::SeedableRng;
	use rand_chacha::ChaCha20Rng;

	fn rng() -> ChaCha20Rng {
		ChaCha20Rng::seed_from_u64(0x5eed)
	}

	fn default_pool() -> Pool {
		CharsetSpec::default().build().unwrap()
	}

	#[test]
	fn password_length_and_membership() {
		let mut rng = rng();
		let pool = default_pool();
		for length in [1, 4, 12, 33, 128] {
			let password = generate_password(
				&mut rng,
				&pool,
				length,
				&MinimumConstraints::default(),
			)
			.unwrap();
			assert_eq!(password.chars().count(), length);
			assert!(password.chars().all(|c| pool.contains(c)));
		}
	}

	#[test]
	fn numeric_only_yields_digits() {
		let mut rng = rng();
		let pool = CharsetSpec {
			only: Some(OnlyClass::Numeric),
			..Default::default()
		}
		.build()
		.unwrap();
		for _ in 0..50 {
			let password = generate_password(
				&mut rng,
				&pool,
				10,
				&MinimumConstraints::default(),
			)
			.unwrap();
			assert_eq!(password.len(), 10);
			assert!(password.chars().all(|c| c.is_ascii_digit()));
		}
	}

	#[test]
	fn minimums_are_met() {
		let mut rng = rng();
		let pool = default_pool();
		let minimums = MinimumConstraints {
			upper: 2,
			lower: 2,
			digits: 3,
			symbols: 1,
		};
		for _ in 0..100 {
			let password =
				generate_password(&mut rng, &pool, 12, &minimums).unwrap();
			let counts = Composition::of(&password);
			assert!(counts.upper >= 2);
			assert!(counts.lower >= 2);
			assert!(counts.digits >= 3);
			assert!(counts.symbols >= 1);
		}
	}

	#[test]
	fn minimums_exceeding_length_fail_fast() {
		let mut rng = rng();
		let minimums = MinimumConstraints {
			upper: 5,
			..Default::default()
		};
		let err = generate_password(&mut rng, &default_pool(), 4, &minimums)
			.unwrap_err();
		assert!(matches!(err, ByxError::Configuration(_)));
		assert!(err.to_string().contains("(5) exceed password length (4)"));
	}

	#[test]
	fn overflowing_minimums_are_a_configuration_error() {
		let minimums = MinimumConstraints {
			upper: usize::MAX,
			lower: 1,
			..Default::default()
		};
		assert_eq!(minimums.total(), None);
		assert!(!minimums.is_unconstrained());
		let err = minimums.check_fits(4).unwrap_err();
		assert!(matches!(err, ByxError::Configuration(_)));
		assert!(minimums.check_fits(usize::MAX).is_err());

		let mut rng = rng();
		let err = generate_password(&mut rng, &default_pool(), 4, &minimums)
			.unwrap_err();
		assert!(matches!(err, ByxError::Configuration(_)));
	}

	#[test]
	fn excluded_class_minimum_exhausts_attempts() {
		let mut rng = rng();
		let pool = CharsetSpec {
			only: Some(OnlyClass::Numeric),
			..Default::default()
		}
		.build()
		.unwrap();
		let minimums = MinimumConstraints {
			upper: 1,
			..Default::default()
		};
		let err =
			generate_password(&mut rng, &pool, 8, &minimums).unwrap_err();
		assert!(matches!(
			err,
			ByxError::Unsatisfiable {
				attempts: MAX_ATTEMPTS
			}
		));
	}

	#[test]
	fn passphrase_shape() {
		let mut rng = rng();
		let list = WordList::new(
			["ant", "bee", "cat", "dog", "eel"]
				.iter()
				.map(|w| w.to_string())
				.collect(),
		)
		.unwrap();
		for _ in 0..50 {
			let phrase = generate_passphrase(&mut rng, &list, 4, "-");
			assert_eq!(phrase.matches('-').count(), 3);
			let segments: Vec<&str> = phrase.split('-').collect();
			assert_eq!(segments.len(), 4);
			assert!(segments.iter().all(|s| list.contains(s)));
		}
	}

	#[test]
	fn passphrase_with_multichar_separator() {
		let mut rng = rng();
		let list = WordList::new(vec!["x".to_string()]).unwrap();
		let phrase = generate_passphrase(&mut rng, &list, 3, " :: ");
		assert_eq!(phrase, "x :: x :: x");
	}

	#[test]
	fn batch_counts_and_entropy() {
		let mut rng = rng();
		let kind = SecretKind::Password {
			pool: default_pool(),
			length: 16,
			minimums: MinimumConstraints::default(),
		};
		let batch = generate_batch(&mut rng, &kind, 5).unwrap();
		assert_eq!(batch.secrets.len(), 5);
		assert_eq!(batch.average_length(), 16.0);
		assert_eq!(batch.entropy.strength, Strength::VeryStrong);
	}

	#[test]
	fn forced_duplicates_do_not_inflate_entropy() {
		let kind = SecretKind::Password {
			pool: Pool::new("aaaabbbb".chars().collect()),
			length: 10,
			minimums: MinimumConstraints::default(),
		};
		assert_eq!(kind.entropy().bits, 10.0);
	}

	#[test]
	fn passphrase_entropy_uses_list_in_use() {
		let list = WordList::new(
			(0..16).map(|i| format!("w{}", i)).collect(),
		)
		.unwrap();
		let kind = SecretKind::Passphrase {
			list,
			words: 5,
			separator: "-".to_string(),
		};
		assert_eq!(kind.entropy().bits, 20.0);
	}

	#[test]
	fn batch_is_all_or_nothing() {
		let mut rng = rng();
		let kind = SecretKind::Password {
			pool: Pool::new(vec!['1']),
			length: 4,
			minimums: MinimumConstraints {
				symbols: 1,
				..Default::default()
			},
		};
		assert!(generate_batch(&mut rng, &kind, 3).is_err());
	}
}
