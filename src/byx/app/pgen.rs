// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: byx
// File: pgen.rs
// Author: Yuki
// Copyright (c) 2025 Yuki

use super::HELP_TEMPLATE;
use crate::byx::charset::{CharsetSpec, OnlyClass};
use crate::byx::error::{ByxError, Result};
use crate::byx::generator::{
	generate_batch, Batch, Composition, MinimumConstraints, SecretKind,
};
use crate::byx::logging::init_logging;
use crate::byx::output::{save_lines, Report};
use crate::byx::params::ParamOverrides;
use crate::byx::random::{system_rng, SecretRng};
use crate::byx::wordlist::{BuiltinWordlist, WordList, WordSource};
use clap::{crate_authors, crate_version, value_parser, Arg, ArgAction};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

const AFTER_HELP: &str = "Examples:
  byxpgen -l 20 -c 5
  byxpgen --only numeric -l 6 -q
  byxpgen -p -w 6 -s .
  printf 'length: 24\\ncount: 3\\n' | byxpgen";

fn count_arg(name: &'static str, default: &'static str) -> Arg {
	Arg::new(name)
		.long(name)
		.value_parser(value_parser!(usize))
		.default_value(default)
}

fn flag(name: &'static str, help: &'static str) -> Arg {
	Arg::new(name)
		.long(name)
		.action(ArgAction::SetTrue)
		.help(help)
}

pub fn build_cli() -> clap::Command {
	clap::Command::new("byxpgen")
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.version(crate_version!())
		.author(crate_authors!())
		.about("Generate random passwords and passphrases")
		.after_help(AFTER_HELP)
		.arg(
			count_arg("length", "12")
				.short('l')
				.help("Password length in characters"),
		)
		.arg(
			count_arg("count", "1")
				.short('c')
				.help("Number of passwords to generate"),
		)
		.arg(
			Arg::new("passphrase")
				.short('p')
				.long("passphrase")
				.action(ArgAction::SetTrue)
				.help("Generate a passphrase instead of a password"),
		)
		.arg(
			count_arg("words", "4")
				.short('w')
				.help("Number of words in a passphrase"),
		)
		.arg(
			Arg::new("separator")
				.short('s')
				.long("separator")
				.default_value("-")
				.allow_hyphen_values(true)
				.help(
					"Separator placed between passphrase words \
					 (the EFF list contains \"yo-yo\", which already has a '-')",
				),
		)
		.arg(
			Arg::new("wordlist")
				.short('W')
				.long("wordlist")
				.value_name("FILE")
				.value_parser(value_parser!(PathBuf))
				.help("Word list file, one word per line or EFF format"),
		)
		.arg(
			Arg::new("builtin-wordlist")
				.long("builtin-wordlist")
				.value_parser(value_parser!(BuiltinWordlist))
				.default_value("eff-short")
				.help("Built-in word list used when no file is given"),
		)
		.arg(flag("no-upper", "Exclude uppercase letters"))
		.arg(flag("no-lower", "Exclude lowercase letters"))
		.arg(flag("no-digits", "Exclude digits"))
		.arg(flag("no-symbols", "Exclude symbols"))
		.arg(
			Arg::new("only")
				.short('o')
				.long("only")
				.value_parser(value_parser!(OnlyClass))
				.conflicts_with("force-chars")
				.help("Use only one class of characters"),
		)
		.arg(
			Arg::new("force-chars")
				.short('F')
				.long("force-chars")
				.value_name("CHARS")
				.allow_hyphen_values(true)
				.help("Use exactly these characters"),
		)
		.arg(count_arg("min-upper", "0").help("Minimum uppercase letters"))
		.arg(count_arg("min-lower", "0").help("Minimum lowercase letters"))
		.arg(count_arg("min-digits", "0").help("Minimum digits"))
		.arg(count_arg("min-symbols", "0").help("Minimum symbols"))
		.arg(
			Arg::new("file")
				.short('f')
				.long("file")
				.value_name("FILE")
				.value_parser(value_parser!(PathBuf))
				.help("Save passwords to a file, one per line"),
		)
		.arg(
			Arg::new("quiet")
				.short('q')
				.long("quiet")
				.action(ArgAction::SetTrue)
				.conflicts_with("verbose")
				.help("Only print the passwords, one per line"),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.action(ArgAction::Count)
				.help("Add verbosity (-v for entropy, -vv for details)"),
		)
}

/// Generator settings after flags and stdin overrides are merged.
#[derive(Clone, Debug)]
pub struct PgenCommand {
	pub length: usize,
	pub count: usize,
	pub passphrase: bool,
	pub words: usize,
	pub separator: String,
	pub source: WordSource,
	pub charset: CharsetSpec,
	pub minimums: MinimumConstraints,
	pub file: Option<PathBuf>,
	pub quiet: bool,
	pub verbosity: u8,
}

fn get_usize(matches: &clap::ArgMatches, name: &str) -> usize {
	matches.get_one::<usize>(name).copied().unwrap_or_default()
}

impl PgenCommand {
	pub fn from_matches(matches: &clap::ArgMatches) -> Self {
		let source = match matches.get_one::<PathBuf>("wordlist") {
			Some(path) => WordSource::File(path.clone()),
			None => WordSource::Builtin(
				matches
					.get_one::<BuiltinWordlist>("builtin-wordlist")
					.copied()
					.unwrap_or_default(),
			),
		};
		Self {
			length: get_usize(matches, "length"),
			count: get_usize(matches, "count"),
			passphrase: matches.get_flag("passphrase"),
			words: get_usize(matches, "words"),
			separator: matches
				.get_one::<String>("separator")
				.cloned()
				.unwrap_or_default(),
			source,
			charset: CharsetSpec {
				no_upper: matches.get_flag("no-upper"),
				no_lower: matches.get_flag("no-lower"),
				no_digits: matches.get_flag("no-digits"),
				no_symbols: matches.get_flag("no-symbols"),
				only: matches.get_one::<OnlyClass>("only").copied(),
				force_chars: matches.get_one::<String>("force-chars").cloned(),
			},
			minimums: MinimumConstraints {
				upper: get_usize(matches, "min-upper"),
				lower: get_usize(matches, "min-lower"),
				digits: get_usize(matches, "min-digits"),
				symbols: get_usize(matches, "min-symbols"),
			},
			file: matches.get_one::<PathBuf>("file").cloned(),
			quiet: matches.get_flag("quiet"),
			verbosity: matches.get_count("verbose"),
		}
	}

	/// Values piped on stdin take precedence over the flags.
	pub fn apply(&mut self, overrides: &ParamOverrides) {
		if let Some(length) = overrides.length {
			self.length = length;
		}
		if let Some(count) = overrides.count {
			self.count = count;
		}
	}

	/// Only the size the selected mode draws with has to be positive.
	fn check_positive(&self) -> Result<()> {
		let size = if self.passphrase {
			("words", self.words)
		} else {
			("length", self.length)
		};
		for (name, value) in [("count", self.count), size] {
			if value == 0 {
				return Err(ByxError::config(format!(
					"{} must be at least 1",
					name
				)));
			}
		}
		Ok(())
	}

	/// Assemble the pool or word list this run draws from.
	pub fn kind(&self) -> Result<SecretKind> {
		self.check_positive()?;
		if self.passphrase {
			return Ok(SecretKind::Passphrase {
				list: WordList::from_source(&self.source)?,
				words: self.words,
				separator: self.separator.clone(),
			});
		}
		self.minimums.check_fits(self.length)?;
		Ok(SecretKind::Password {
			pool: self.charset.build()?,
			length: self.length,
			minimums: self.minimums,
		})
	}
}

/// Generate the batch, save it when asked, and build the report.
pub fn execute<R: SecretRng>(
	rng: &mut R,
	command: &PgenCommand,
) -> Result<Report> {
	let kind = command.kind()?;
	let batch = generate_batch(rng, &kind, command.count)?;
	if let Some(path) = &command.file {
		save_lines(path, batch.secrets.as_slice())?;
		info!(path = %path.display(), "saved passwords");
	}
	Ok(render(&batch, &kind, command))
}

pub fn render(
	batch: &Batch,
	kind: &SecretKind,
	command: &PgenCommand,
) -> Report {
	let mut report = Report::new();
	if command.quiet {
		for secret in &batch.secrets {
			report.line(secret.clone());
		}
		return report;
	}

	match batch.secrets.as_slice() {
		[single] => report.line(format!("Password: {}", single)),
		many => report.line(format!("Passwords: {}", many.join(", "))),
	}

	if command.verbosity >= 1 {
		report.blank();
		let generated = batch.secrets.len();
		report.line(format!(
			"Generated: {} password{}",
			generated,
			if generated > 1 { "s" } else { "" }
		));
		report.line(format!(
			"Average length: {:.1} characters",
			batch.average_length()
		));
		report.line(format!("Entropy: {:.2} bits", batch.entropy.bits));
		report.line(format!("Strength: {}", batch.entropy.strength));
	}

	if command.verbosity >= 2 {
		report.rule();
		match kind {
			SecretKind::Passphrase {
				list,
				words,
				separator,
			} => {
				report.line(format!("Wordlist size: {} words", list.len()));
				report.line(format!("Wordlist source: {}", command.source));
				report.line(format!("Words per passphrase: {}", words));
				report.line(format!("Separator: '{}'", separator));
			}
			SecretKind::Password { pool, .. } => {
				report.line(format!(
					"Character set size: {}",
					pool.distinct_len()
				));
				if let Some(first) = batch.secrets.first() {
					let sample = Composition::of(first);
					report.blank();
					report.line("Character composition (sample):");
					report.line(format!("  Uppercase: {}", sample.upper));
					report.line(format!("  Lowercase: {}", sample.lower));
					report.line(format!("  Digits: {}", sample.digits));
					report.line(format!("  Symbols: {}", sample.symbols));
				}
				report.blank();
				report.line(format!(
					"Character set preview: {}",
					pool.preview()
				));
			}
		}
	}

	if let Some(path) = &command.file {
		report.blank();
		report.line(format!("Passwords saved to: {}", path.display()));
	}
	report
}

pub fn run_from<I, T>(args: I) -> Result<()>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let matches = build_cli().get_matches_from(args);
	let mut command = PgenCommand::from_matches(&matches);
	init_logging(command.verbosity, command.quiet);

	let overrides = ParamOverrides::from_stdin()?;
	if !overrides.is_empty() {
		info!(?overrides, "applying stdin parameters");
		command.apply(&overrides);
	}

	let report = execute(&mut system_rng(), &command)?;
	report.emit();
	Ok(())
}

pub fn run() -> Result<()> {
	run_from(std::env::args_os())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha20Rng;

	fn parse(args: &[&str]) -> clap::error::Result<PgenCommand> {
		build_cli()
			.try_get_matches_from(args)
			.map(|m| PgenCommand::from_matches(&m))
	}

	fn rng() -> ChaCha20Rng {
		ChaCha20Rng::seed_from_u64(7)
	}

	#[test]
	fn cli_is_well_formed() {
		build_cli().debug_assert();
	}

	#[test]
	fn defaults() {
		let command = parse(&["byxpgen"]).unwrap();
		assert_eq!(command.length, 12);
		assert_eq!(command.count, 1);
		assert_eq!(command.words, 4);
		assert_eq!(command.separator, "-");
		assert!(!command.passphrase);
		assert_eq!(command.source, WordSource::default());
		assert_eq!(command.charset, CharsetSpec::default());
		assert!(command.minimums.is_unconstrained());
	}

	#[test]
	fn wordlist_file_replaces_builtin() {
		let command = parse(&[
			"byxpgen",
			"-p",
			"-W",
			"words.txt",
			"--builtin-wordlist",
			"compact",
		])
		.unwrap();
		assert_eq!(command.source, WordSource::File("words.txt".into()));

		let command =
			parse(&["byxpgen", "-p", "--builtin-wordlist", "compact"]).unwrap();
		assert_eq!(
			command.source,
			WordSource::Builtin(BuiltinWordlist::Compact)
		);
	}

	#[test]
	fn hyphen_values_are_accepted() {
		let command = parse(&["byxpgen", "-p", "--separator=--"]).unwrap();
		assert_eq!(command.separator, "--");
		let command = parse(&["byxpgen", "--force-chars=-_"]).unwrap();
		assert_eq!(command.charset.force_chars.as_deref(), Some("-_"));
	}

	#[test]
	fn conflicting_flags_are_rejected() {
		assert!(parse(&["byxpgen", "-q", "-v"]).is_err());
		assert!(parse(&["byxpgen", "-o", "numeric", "-F", "abc"]).is_err());
	}

	#[test]
	fn stdin_overrides_win() {
		let mut command = parse(&["byxpgen", "-l", "8", "-c", "2"]).unwrap();
		command.apply(&ParamOverrides {
			length: Some(20),
			count: None,
		});
		assert_eq!(command.length, 20);
		assert_eq!(command.count, 2);
	}

	#[test]
	fn zero_count_is_rejected() {
		let command = parse(&["byxpgen", "-c", "0"]).unwrap();
		let err = execute(&mut rng(), &command).unwrap_err();
		assert_eq!(err.exit_code(), 2);
	}

	#[test]
	fn unused_size_is_not_validated() {
		let command = parse(&["byxpgen", "-w", "0", "-l", "6", "-q"]).unwrap();
		let report = execute(&mut rng(), &command).unwrap();
		assert_eq!(report.lines[0].len(), 6);

		let command =
			parse(&["byxpgen", "-p", "-l", "0", "-w", "3", "-s", ".", "-q"])
				.unwrap();
		let report = execute(&mut rng(), &command).unwrap();
		assert_eq!(report.lines[0].matches('.').count(), 2);

		let command = parse(&["byxpgen", "-p", "-w", "0"]).unwrap();
		let err = execute(&mut rng(), &command).unwrap_err();
		assert!(err.to_string().contains("words must be at least 1"));
	}

	#[test]
	fn generated_count_is_pluralised() {
		let command = parse(&["byxpgen", "-c", "3", "-v"]).unwrap();
		let text = execute(&mut rng(), &command).unwrap().text();
		assert!(text.contains("Generated: 3 passwords\n"));
	}

	#[test]
	fn separator_help_warns_about_hyphenated_words() {
		let help = build_cli().render_help().to_string();
		assert!(help.contains("yo-yo"));
	}

	#[test]
	fn numeric_only_quiet() {
		let command =
			parse(&["byxpgen", "--length", "10", "--only", "numeric", "-q"])
				.unwrap();
		let report = execute(&mut rng(), &command).unwrap();
		assert_eq!(report.lines.len(), 1);
		assert_eq!(report.lines[0].len(), 10);
		assert!(report.lines[0].chars().all(|c| c.is_ascii_digit()));
	}

	#[test]
	fn minimums_exceeding_length_fail() {
		let command =
			parse(&["byxpgen", "--min-upper", "5", "--length", "4"]).unwrap();
		let err = execute(&mut rng(), &command).unwrap_err();
		assert!(matches!(err, ByxError::Configuration(_)));
	}

	#[test]
	fn several_passwords_share_one_line() {
		let command = parse(&["byxpgen", "-c", "3", "-l", "6"]).unwrap();
		let report = execute(&mut rng(), &command).unwrap();
		assert_eq!(report.lines.len(), 1);
		let line = report.lines[0].strip_prefix("Passwords: ").unwrap();
		assert_eq!(line.split(", ").count(), 3);
	}

	#[test]
	fn verbose_password_report() {
		let command =
			parse(&["byxpgen", "-l", "10", "-o", "numeric", "-vv"]).unwrap();
		let text = execute(&mut rng(), &command).unwrap().text();
		assert!(text.starts_with("Password: "));
		assert!(text.contains("Generated: 1 password\n"));
		assert!(text.contains("Average length: 10.0 characters"));
		assert!(text.contains("Entropy: 33.22 bits"));
		assert!(text.contains("Strength: Weak"));
		assert!(text.contains("Character set size: 10"));
		assert!(text.contains("  Digits: 10"));
		assert!(text.contains("Character set preview: 0123456789"));
	}

	#[test]
	fn verbose_passphrase_report() {
		let command = parse(&[
			"byxpgen",
			"-p",
			"-w",
			"4",
			"-s",
			".",
			"--builtin-wordlist",
			"eff-short",
			"-vv",
		])
		.unwrap();
		let report = execute(&mut rng(), &command).unwrap();
		let phrase = report.lines[0].strip_prefix("Password: ").unwrap();
		assert_eq!(phrase.matches('.').count(), 3);
		let text = report.text();
		assert!(text.contains("Entropy: 41.36 bits"));
		assert!(text.contains("Strength: Reasonable"));
		assert!(text.contains("Wordlist size: 1296 words"));
		assert!(text.contains("Wordlist source: built-in EFF short wordlist"));
		assert!(text.contains("Words per passphrase: 4"));
		assert!(text.contains("Separator: '.'"));
	}

	#[test]
	fn file_output_is_saved_before_reporting() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("out.txt");
		let path_arg = path.to_string_lossy().into_owned();
		let command =
			parse(&["byxpgen", "-c", "4", "-l", "8", "-f", &path_arg]).unwrap();
		let report = execute(&mut rng(), &command).unwrap();
		let saved = std::fs::read_to_string(&path).unwrap();
		assert_eq!(saved.lines().count(), 4);
		assert!(saved.lines().all(|l| l.chars().count() == 8));
		assert!(report
			.text()
			.contains(&format!("Passwords saved to: {}", path.display())));
	}
}
