// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: digest.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

use super::HELP_TEMPLATE;
use crate::byx::digest::commands::{digest, DigestOptions};
use crate::byx::digest::{DigestInput, DigestRequest};
use crate::byx::error::Result;
use crate::byx::hash::DigestAlgorithm;
use crate::byx::logging::init_logging;
use clap::{crate_authors, crate_version, value_parser, Arg, ArgAction};
use std::ffi::OsString;
use std::path::PathBuf;

const AFTER_HELP: &str = "Examples:
  byxhash 'hello world'
  byxhash -a sha256 -f notes.txt
  cat notes.txt | byxhash -a blake2s -l 16 -q";

pub fn build_cli() -> clap::Command {
	clap::Command::new("byxhash")
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.version(crate_version!())
		.author(crate_authors!())
		.about("Hash a string, a file or stdin with BLAKE2b, BLAKE2s or SHA-256")
		.after_help(AFTER_HELP)
		.arg(
			Arg::new("input")
				.help("Input to be hashed (omit to read from stdin)")
				.required(false),
		)
		.arg(
			Arg::new("algorithm")
				.short('a')
				.long("algorithm")
				.value_parser(value_parser!(DigestAlgorithm))
				.default_value("blake2b")
				.help("Hash algorithm to use"),
		)
		.arg(
			Arg::new("length")
				.short('l')
				.long("length")
				.value_parser(value_parser!(usize))
				.help("Hash length in bytes: blake2b (1-64), blake2s (1-32), sha256 (fixed at 32)"),
		)
		.arg(
			Arg::new("file")
				.short('f')
				.long("file")
				.value_name("FILE")
				.value_parser(value_parser!(PathBuf))
				.help("Hash contents of the specified file"),
		)
		.arg(
			Arg::new("save")
				.short('s')
				.long("save")
				.value_name("FILE")
				.value_parser(value_parser!(PathBuf))
				.help("Save hash output to the specified file (with --file, defaults to <stem>_hashed<suffix>)"),
		)
		.arg(
			Arg::new("quiet")
				.short('q')
				.long("quiet")
				.action(ArgAction::SetTrue)
				.conflicts_with("verbose")
				.help("Quiet mode, only output the hash"),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.action(ArgAction::Count)
				.help("Add verbosity (-v for verbose, -vv for full verbose)"),
		)
}

/// Parsed command line for one digest run.
#[derive(Clone, Debug)]
pub struct DigestCommand {
	pub request: DigestRequest,
	pub options: DigestOptions,
}

impl DigestCommand {
	pub fn from_matches(matches: &clap::ArgMatches) -> Self {
		let algorithm = matches
			.get_one::<DigestAlgorithm>("algorithm")
			.copied()
			.unwrap_or(DigestAlgorithm::Blake2b);
		let input = DigestInput::select(
			matches.get_one::<String>("input").cloned(),
			matches.get_one::<PathBuf>("file").cloned(),
		);
		Self {
			options: DigestOptions {
				quiet: matches.get_flag("quiet"),
				verbosity: matches.get_count("verbose"),
				save: matches
					.get_one::<PathBuf>("save")
					.cloned()
					.or_else(|| input.default_output()),
			},
			request: DigestRequest {
				algorithm,
				length: matches.get_one::<usize>("length").copied(),
				input,
			},
		}
	}
}

pub fn run_from<I, T>(args: I) -> Result<()>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let matches = build_cli().get_matches_from(args);
	let command = DigestCommand::from_matches(&matches);
	init_logging(command.options.verbosity, command.options.quiet);
	let report = digest(&command.request, &command.options)?;
	report.emit();
	Ok(())
}

pub fn run() -> Result<()> {
	run_from(std::env::args_os())
}
