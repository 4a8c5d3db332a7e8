// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: wordlist_format.rs
// Author: Yuki
// Copyright (c) 2025 Yuki
// Helper binary to normalise word lists and emit them as Rust constants.

use byx::byx::app;
use byx::byx::error::{ByxError, Result};
use byx::byx::wordlist::WordList;
use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;

const WORDS_PER_ROW: usize = 10;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about = "Convert an EFF or plain word list into one word per line or a Rust constant"
)]
struct Args {
	/// Word list to read (EFF `index word` lines or bare words)
	input: PathBuf,
	/// Write the result here instead of stdout
	#[arg(short, long)]
	output: Option<PathBuf>,
	/// Emit `pub const NAME: &[&str]` instead of plain lines
	#[arg(long, value_name = "NAME")]
	rust_const: Option<String>,
}

fn rust_const(name: &str, words: &[String]) -> String {
	let mut out = format!("pub const {}: &[&str] = &[\n", name);
	for row in words.chunks(WORDS_PER_ROW) {
		out.push('\t');
		let cells: Vec<String> =
			row.iter().map(|w| format!("{:?}", w)).collect();
		let _ = writeln!(out, "{},", cells.join(", "));
	}
	out.push_str("];\n");
	out
}

fn plain(words: &[String]) -> String {
	let mut out = String::new();
	for word in words {
		out.push_str(word);
		out.push('\n');
	}
	out
}

fn run(args: Args) -> Result<()> {
	let list = WordList::load(&args.input)?;
	let body = match &args.rust_const {
		Some(name) => rust_const(name, list.words()),
		None => plain(list.words()),
	};
	match &args.output {
		Some(path) => {
			std::fs::write(path, body).map_err(|e| {
				ByxError::io(
					format!("Error saving to file {}", path.display()),
					e,
				)
			})?;
			eprintln!("Processed {} words into {}", list.len(), path.display());
		}
		None => {
			print!("{}", body);
			eprintln!("Processed {} words", list.len());
		}
	}
	Ok(())
}

fn main() {
	if let Err(err) = run(Args::parse()) {
		app::fail(&err);
	}
}
