// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: random.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

use rand::rngs::OsRng;
use rand::Rng;
use rand_core::{CryptoRng, RngCore};

/// Random sources allowed to produce credentials.
pub trait SecretRng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SecretRng for T {}

/// The operating system generator used by the binaries.
pub fn system_rng() -> OsRng {
	OsRng
}

/// Uniform index in `0..len`. `len` must be non-zero.
pub fn pick_index<R: SecretRng>(rng: &mut R, len: usize) -> usize {
	rng.gen_range(0..len)
}

/// Uniform element of a non-empty slice.
pub fn pick<'a, T, R: SecretRng>(rng: &mut R, items: &'a [T]) -> &'a T {
	&items[pick_index(rng, items.len())]
}
