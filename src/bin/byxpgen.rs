// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: byxpgen.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

use byx::byx::app;

fn main() {
	if let Err(err) = app::pgen::run() {
		app::fail(&err);
	}
}
