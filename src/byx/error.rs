// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: error.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

//! Error type shared by the digest tool and the secret generator.

use std::fmt;
use std::io;

/// Everything that can abort a run. None of these are retried.
#[derive(Debug)]
pub enum ByxError {
	/// Invalid or contradictory flags, caught before any work is done.
	Configuration(String),
	/// Rejection sampling gave up after `attempts` candidates.
	Unsatisfiable { attempts: usize },
	/// Reading an input or writing an output file failed.
	Io { context: String, source: io::Error },
}

impl ByxError {
	pub fn config(message: impl Into<String>) -> Self {
		Self::Configuration(message.into())
	}

	pub fn io(context: impl Into<String>, source: io::Error) -> Self {
		Self::Io {
			context: context.into(),
			source,
		}
	}

	/// Process exit status reported for this error.
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::Configuration(_) => 2,
			Self::Unsatisfiable { .. } => 3,
			Self::Io { .. } => 1,
		}
	}
}

impl fmt::Display for ByxError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Configuration(message) => write!(f, "{}", message),
			Self::Unsatisfiable { attempts } => write!(
				f,
				"could not generate a password meeting the minimum requirements after {} attempts; try reducing the minimums or increasing the length",
				attempts
			),
			Self::Io { context, source } => {
				write!(f, "{}: {}", context, source)
			}
		}
	}
}

impl std::error::Error for ByxError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io { source, .. } => Some(source),
			_ => None,
		}
	}
}

pub type Result<T> = std::result::Result<T, ByxError>;
