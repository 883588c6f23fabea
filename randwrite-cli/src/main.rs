use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use randwrite_core::{Generator, TransitionModel};

/// Write random text that statistically mimics its input.
///
/// Builds a character-transition model from the given files (or standard
/// input), keyed by sliding windows of SEED_LENGTH characters, then walks
/// the model at random to produce exactly OUTPUT_LENGTH characters on
/// standard output.
#[derive(Parser, Debug)]
#[command(name = "randwrite")]
#[command(version, about)]
struct Cli {
	/// Width of the sliding seed window, in characters (>= 1).
	#[arg(value_parser = clap::value_parser!(u64).range(1..))]
	seed_length: u64,

	/// Number of characters to generate (>= 1).
	#[arg(value_parser = clap::value_parser!(u64).range(1..))]
	output_length: u64,

	/// Input files to learn from; standard input is read when none are given.
	files: Vec<PathBuf>,
}

fn open_input(path: &Path) -> anyhow::Result<File> {
	File::open(path).map_err(|e| {
		let what = match e.kind() {
			ErrorKind::NotFound => "file not found",
			ErrorKind::PermissionDenied => "permission denied",
			_ => "cannot open file",
		};
		anyhow::Error::new(e).context(format!("{what}: {}", path.display()))
	})
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let cli = Cli::parse();

	let mut model = TransitionModel::new(cli.seed_length as usize)?;

	if cli.files.is_empty() {
		model
			.fold(io::stdin().lock())
			.context("error while reading standard input")?;
	} else {
		for path in &cli.files {
			let file = open_input(path)?;
			model
				.fold(file)
				.with_context(|| format!("error while reading {}", path.display()))?;
		}
	}

	if model.is_empty() {
		bail!(
			"input is too short: no window of {} characters has a follower",
			cli.seed_length
		);
	}

	let generator = Generator::new(&model)?;
	let mut out = BufWriter::new(io::stdout().lock());
	generator.write(cli.output_length as usize, &mut out)?;
	out.flush()?;

	Ok(())
}
