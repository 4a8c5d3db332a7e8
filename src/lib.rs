// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: lib.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

pub mod byx {
	pub mod app;
	pub mod charset;
	pub mod digest;
	pub mod entropy;
	pub mod error;
	pub mod generator;
	pub mod hash;
	pub mod logging;
	pub mod output;
	pub mod params;
	pub mod random;
	pub mod wordlist;
}
