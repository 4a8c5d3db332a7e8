// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: hash.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

use crate::byx::error::{ByxError, Result};
use blake2::{Blake2bVar, Blake2sVar};
use digest::{Update, VariableOutput};
use sha2::Sha256;
use strum::EnumIter;

#[derive(
	clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq, EnumIter,
)]
pub enum DigestAlgorithm {
	Blake2b,
	Blake2s,
	Sha256,
}

impl std::fmt::Display for DigestAlgorithm {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		let name = match self {
			Self::Blake2b => "BLAKE2B",
			Self::Blake2s => "BLAKE2S",
			Self::Sha256 => "SHA256",
		};
		write!(f, "{}", name)
	}
}

/// Output length chosen for a run, plus a note when the request was ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLength {
	pub bytes: usize,
	pub warning: Option<String>,
}

impl DigestAlgorithm {
	pub fn max_length(self) -> usize {
		match self {
			Self::Blake2b => 64,
			Self::Blake2s => 32,
			Self::Sha256 => 32,
		}
	}

	pub fn default_length(self) -> usize {
		self.max_length()
	}

	pub fn is_variable(self) -> bool {
		!matches!(self, Self::Sha256)
	}

	/// Validate a requested `--length` against this algorithm.
	pub fn resolve_length(
		self,
		requested: Option<usize>,
	) -> Result<ResolvedLength> {
		let Some(bytes) = requested else {
			return Ok(ResolvedLength {
				bytes: self.default_length(),
				warning: None,
			});
		};
		if !self.is_variable() {
			let warning = (bytes != self.max_length()).then(|| {
				format!(
					"{} has fixed length of {} bytes, ignoring --length",
					self.to_string().to_lowercase(),
					self.max_length()
				)
			});
			return Ok(ResolvedLength {
				bytes: self.max_length(),
				warning,
			});
		}
		if bytes < 1 || bytes > self.max_length() {
			return Err(ByxError::config(format!(
				"{} hash length must be between 1 and {} bytes",
				self.to_string().to_lowercase(),
				self.max_length()
			)));
		}
		Ok(ResolvedLength {
			bytes,
			warning: None,
		})
	}
}

enum State {
	Blake2b(Blake2bVar),
	Blake2s(Blake2sVar),
	Sha256(Sha256),
}

impl State {
	fn new(algorithm: DigestAlgorithm, length: usize) -> Result<Self> {
		let invalid = || {
			ByxError::config(format!(
				"{} cannot produce a {} byte digest",
				algorithm, length
			))
		};
		let max = algorithm.max_length();
		if length == 0
			|| length > max
			|| (!algorithm.is_variable() && length != max)
		{
			return Err(invalid());
		}
		Ok(match algorithm {
			DigestAlgorithm::Blake2b => Self::Blake2b(
				Blake2bVar::new(length).map_err(|_| invalid())?,
			),
			DigestAlgorithm::Blake2s => Self::Blake2s(
				Blake2sVar::new(length).map_err(|_| invalid())?,
			),
			DigestAlgorithm::Sha256 => Self::Sha256(Sha256::default()),
		})
	}

	fn update(&mut self, data: &[u8]) {
		match self {
			Self::Blake2b(h) => h.update(data),
			Self::Blake2s(h) => h.update(data),
			Self::Sha256(h) => h.update(data),
		}
	}

	fn finalize(self, length: usize) -> Result<Vec<u8>> {
		let mut out = vec![0u8; length];
		let written = match self {
			Self::Blake2b(h) => h.finalize_variable(&mut out),
			Self::Blake2s(h) => h.finalize_variable(&mut out),
			Self::Sha256(h) => {
				return Ok(sha2::Digest::finalize(h).to_vec())
			}
		};
		written.map_err(|_| {
			ByxError::config(format!(
				"digest buffer of {} bytes rejected",
				length
			))
		})?;
		Ok(out)
	}
}

/// Running digest state fed chunk by chunk.
pub struct Digester {
	state: State,
	length: usize,
}

impl Digester {
	pub fn update(&mut self, data: &[u8]) {
		self.state.update(data);
	}

	pub fn finish(self) -> Result<Vec<u8>> {
		self.state.finalize(self.length)
	}
}

/// A configured digest: algorithm plus output length in bytes.
#[derive(Clone, Debug)]
pub struct Hasher {
	algorithm: DigestAlgorithm,
	length: usize,
}

impl Hasher {
	pub fn new(algorithm: DigestAlgorithm, length: usize) -> Result<Self> {
		State::new(algorithm, length)?;
		Ok(Self { algorithm, length })
	}

	pub fn algorithm(&self) -> DigestAlgorithm {
		self.algorithm
	}

	pub fn length(&self) -> usize {
		self.length
	}

	/// Start an incremental digest for input that arrives in chunks.
	pub fn digester(&self) -> Result<Digester> {
		Ok(Digester {
			state: State::new(self.algorithm, self.length)?,
			length: self.length,
		})
	}

	pub fn process_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>> {
		let mut digester = self.digester()?;
		digester.update(data);
		digester.finish()
	}

	pub fn hex_digest(&mut self, data: &[u8]) -> Result<String> {
		Ok(hex::encode(self.process_bytes(data)?))
	}
}
