// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: src/byx/digest/mod.rs
// Author: Yuki
//
// Digest command group: input acquisition and hashing live here, report
// rendering lives in `commands`.

pub mod commands;

use crate::byx::error::{ByxError, Result};
use crate::byx::hash::{DigestAlgorithm, Digester, Hasher};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

const CHUNK_SIZE: usize = 64 * 1024;

/// Bytes of input kept for the `-vv` preview.
pub const PREVIEW_LIMIT: usize = 100;

/// Where the bytes to hash come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DigestInput {
	Text(String),
	File(PathBuf),
	Stdin,
}

impl DigestInput {
	/// A file beats a positional string; with neither, stdin is used.
	pub fn select(text: Option<String>, file: Option<PathBuf>) -> Self {
		match (file, text) {
			(Some(path), _) => Self::File(path),
			(None, Some(text)) => Self::Text(text),
			(None, None) => Self::Stdin,
		}
	}

	/// Where a file digest is saved when no explicit path is given:
	/// `<stem>_hashed<suffix>` in the working directory.
	pub fn default_output(&self) -> Option<PathBuf> {
		let Self::File(path) = self else {
			return None;
		};
		let mut name = path.file_stem()?.to_os_string();
		name.push("_hashed");
		if let Some(extension) = path.extension() {
			name.push(".");
			name.push(extension);
		}
		Some(PathBuf::from(name))
	}

	fn context(&self) -> String {
		match self {
			Self::Text(_) => "Error reading input".to_string(),
			Self::File(path) => {
				format!("Error reading file {}", path.display())
			}
			Self::Stdin => "Error reading stdin".to_string(),
		}
	}

	/// Open the payload for reading. Stdin is only used when it is not a
	/// terminal.
	pub fn open(&self) -> Result<Box<dyn Read + '_>> {
		match self {
			Self::Text(text) => Ok(Box::new(text.as_bytes())),
			Self::File(path) => {
				let file = File::open(path)
					.map_err(|e| ByxError::io(self.context(), e))?;
				Ok(Box::new(BufReader::new(file)))
			}
			Self::Stdin => {
				let stdin = io::stdin();
				if stdin.is_terminal() {
					return Err(ByxError::config(
						"No input provided. Use [INPUT], --file FILE, or pipe data via stdin",
					));
				}
				Ok(Box::new(stdin.lock()))
			}
		}
	}
}

impl fmt::Display for DigestInput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => write!(f, "string: '{}'", text),
			Self::File(path) => write!(f, "file: {}", path.display()),
			Self::Stdin => write!(f, "stdin"),
		}
	}
}

/// Total size of the hashed input plus its first bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSample {
	pub total: u64,
	pub head: Vec<u8>,
}

impl InputSample {
	fn record(&mut self, chunk: &[u8]) {
		self.total += chunk.len() as u64;
		let room = PREVIEW_LIMIT.saturating_sub(self.head.len());
		self.head.extend_from_slice(&chunk[..chunk.len().min(room)]);
	}
}

fn consume<R: Read>(
	mut reader: R,
	digester: &mut Digester,
) -> io::Result<InputSample> {
	let mut sample = InputSample::default();
	let mut buffer = vec![0u8; CHUNK_SIZE];
	loop {
		let read = match reader.read(&mut buffer) {
			Ok(0) => return Ok(sample),
			Ok(read) => read,
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		};
		digester.update(&buffer[..read]);
		sample.record(&buffer[..read]);
	}
}

#[derive(Clone, Debug)]
pub struct DigestRequest {
	pub algorithm: DigestAlgorithm,
	pub length: Option<usize>,
	pub input: DigestInput,
}

/// Everything the report needs about one hashed input.
#[derive(Clone, Debug)]
pub struct DigestOutcome {
	pub algorithm: DigestAlgorithm,
	pub requested_length: Option<usize>,
	pub digest_length: usize,
	pub input: DigestInput,
	pub sample: InputSample,
	pub digest_hex: String,
	pub warning: Option<String>,
}

/// Validate the length, then stream the input through the hasher.
pub fn compute(request: &DigestRequest) -> Result<DigestOutcome> {
	let resolved = request.algorithm.resolve_length(request.length)?;
	let hasher = Hasher::new(request.algorithm, resolved.bytes)?;
	let mut digester = hasher.digester()?;
	let reader = request.input.open()?;
	let sample = consume(reader, &mut digester)
		.map_err(|e| ByxError::io(request.input.context(), e))?;
	debug!(
		algorithm = %request.algorithm,
		bytes = sample.total,
		"hashed input"
	);
	let digest_hex = hex::encode(digester.finish()?);
	Ok(DigestOutcome {
		algorithm: request.algorithm,
		requested_length: request.length,
		digest_length: resolved.bytes,
		input: request.input.clone(),
		sample,
		digest_hex,
		warning: resolved.warning,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn selection_precedence() {
		assert_eq!(
			DigestInput::select(Some("a".into()), Some("f".into())),
			DigestInput::File("f".into())
		);
		assert_eq!(
			DigestInput::select(Some("a".into()), None),
			DigestInput::Text("a".into())
		);
		assert_eq!(DigestInput::select(None, None), DigestInput::Stdin);
	}

	#[test]
	fn file_input_names_its_output() {
		assert_eq!(
			DigestInput::File("data/report.tar.gz".into()).default_output(),
			Some(PathBuf::from("report.tar_hashed.gz"))
		);
		assert_eq!(
			DigestInput::File("notes".into()).default_output(),
			Some(PathBuf::from("notes_hashed"))
		);
		assert_eq!(DigestInput::Text("x".into()).default_output(), None);
		assert_eq!(DigestInput::Stdin.default_output(), None);
	}

	#[test]
	fn source_labels() {
		assert_eq!(
			DigestInput::Text("hi".into()).to_string(),
			"string: 'hi'"
		);
		assert_eq!(
			DigestInput::File("a.txt".into()).to_string(),
			"file: a.txt"
		);
		assert_eq!(DigestInput::Stdin.to_string(), "stdin");
	}

	#[test]
	fn text_and_file_hash_identically() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(b"abc").unwrap();
		let from_text = compute(&DigestRequest {
			algorithm: DigestAlgorithm::Blake2s,
			length: None,
			input: DigestInput::Text("abc".into()),
		})
		.unwrap();
		let from_file = compute(&DigestRequest {
			algorithm: DigestAlgorithm::Blake2s,
			length: None,
			input: DigestInput::File(file.path().into()),
		})
		.unwrap();
		assert_eq!(from_text.digest_hex, from_file.digest_hex);
		assert_eq!(
			from_text.digest_hex,
			"508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982"
		);
	}

	#[test]
	fn invalid_length_fails_before_reading() {
		let err = compute(&DigestRequest {
			algorithm: DigestAlgorithm::Blake2b,
			length: Some(99),
			input: DigestInput::File("/nonexistent/input".into()),
		})
		.unwrap_err();
		assert!(matches!(err, ByxError::Configuration(_)));
	}

	#[test]
	fn unreadable_file_is_io_error() {
		let err = compute(&DigestRequest {
			algorithm: DigestAlgorithm::Sha256,
			length: None,
			input: DigestInput::File("/nonexistent/input".into()),
		})
		.unwrap_err();
		assert!(matches!(err, ByxError::Io { .. }));
	}

	#[test]
	fn large_file_keeps_only_a_preview() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		let data = vec![b'z'; CHUNK_SIZE * 2 + 17];
		file.write_all(&data).unwrap();
		let outcome = compute(&DigestRequest {
			algorithm: DigestAlgorithm::Sha256,
			length: None,
			input: DigestInput::File(file.path().into()),
		})
		.unwrap();
		assert_eq!(outcome.sample.total, data.len() as u64);
		assert_eq!(outcome.sample.head.len(), PREVIEW_LIMIT);
		let expected = Hasher::new(DigestAlgorithm::Sha256, 32)
			.unwrap()
			.hex_digest(&data)
			.unwrap();
		assert_eq!(outcome.digest_hex, expected);
	}

	#[test]
	fn sha256_length_warning_is_carried() {
		let outcome = compute(&DigestRequest {
			algorithm: DigestAlgorithm::Sha256,
			length: Some(20),
			input: DigestInput::Text("abc".into()),
		})
		.unwrap();
		assert_eq!(outcome.digest_length, 32);
		assert_eq!(outcome.digest_hex.len(), 64);
		assert!(outcome.warning.is_some());
	}
}
