//! Bindery shell.
//!
//! Reads commands one per line from a script or standard input and runs them
//! against a single session. Besides `bind`, `bindtags`, and `destroy`:
//! - `window path class ?toplevel?` creates a window
//! - `deliver path sequence` delivers an event and prints the scripts that ran

mod shell;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};

use crate::shell::{Shell, load_config};

/// Shell command line arguments.
#[derive(Parser, Debug)]
#[command(name = "bindery")]
#[command(about = "Drive binding tags and event dispatch from a command script")]
struct Args {
	/// TOML configuration file; repeat to layer files, later ones winning
	#[arg(short, long, value_name = "PATH")]
	config: Vec<PathBuf>,

	/// Command script; standard input when omitted
	#[arg(value_name = "SCRIPT")]
	script: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let config = load_config(&args.config)?;

	let level = if args.verbose {
		Level::DEBUG
	} else {
		config
			.log_level()
			.parse()
			.with_context(|| format!("log level {:?}", config.log_level()))?
	};
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let mut shell = Shell::from_config(&config)?;
	info!(windows = config.windows.len(), "session ready");

	let input: Box<dyn BufRead> = match &args.script {
		Some(path) => {
			let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
			Box::new(BufReader::new(file))
		}
		None => Box::new(io::stdin().lock()),
	};

	let failures = shell.run(input, &mut io::stdout().lock(), &mut io::stderr().lock())?;
	if failures > 0 {
		anyhow::bail!("{failures} command(s) failed");
	}
	Ok(())
}
