use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, bail};
use bindery_commands::{Session, parse_list};
use bindery_config::Config;
use bindery_table::{Event, PatternTable};
use bindery_window::{WindowKind, WindowTree};
use tracing::warn;


const WINDOW_USAGE: &str = "window path class ?toplevel?";
const DELIVER_USAGE: &str = "deliver path sequence";

/// Loads and merges configuration files in order.
///
/// Sections in later files replace earlier ones; windows accumulate.
pub fn load_config<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<Config> {
	let mut config = Config::default();
	for path in paths {
		config.merge(Config::load(path)?);
	}
	Ok(config)
}

/// A session over the in-memory window tree and pattern table.
pub struct Shell {
	session: Session<WindowTree, PatternTable>,
}

impl Shell {
	/// Builds a session and creates the configured windows in order.
	pub fn from_config(config: &Config) -> anyhow::Result<Self> {
		let bindings = config.bindings();
		let mut windows = WindowTree::new(&bindings.main_class);
		for spec in &config.windows {
			let kind = if spec.toplevel {
				WindowKind::Toplevel
			} else {
				WindowKind::Child
			};
			windows
				.create(&spec.path, &spec.class, kind)
				.with_context(|| format!("configured window {}", spec.path))?;
		}
		Ok(Self {
			session: Session::with_config(windows, PatternTable::new(), &bindings),
		})
	}

	/// Runs one line, returning the text to print.
	///
	/// Blank lines and lines starting with `#` do nothing.
	pub fn run_line(&mut self, line: &str) -> anyhow::Result<String> {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			return Ok(String::new());
		}
		let words = parse_list(line)?;
		let words: Vec<&str> = words.iter().map(String::as_str).collect();
		match *words.as_slice() {
			["window", path, class] => self.create_window(path, class, WindowKind::Child),
			["window", path, class, "toplevel"] => self.create_window(path, class, WindowKind::Toplevel),
			["window", ..] => bail!("wrong # args: should be \"{WINDOW_USAGE}\""),
			["deliver", path, sequence] => {
				self.session.deliver_to(path, &Event::new(sequence))?;
				let scripts: Vec<String> = self
					.session
					.table_mut()
					.take_fired()
					.into_iter()
					.map(|fired| fired.script)
					.collect();
				Ok(scripts.join("\n"))
			}
			["deliver", ..] => bail!("wrong # args: should be \"{DELIVER_USAGE}\""),
			_ => Ok(self.session.eval(&words)?.to_string()),
		}
	}

	/// Runs every line of `input`, printing results to `out` and errors to `err`.
	///
	/// Returns the number of lines that failed.
	pub fn run<R: BufRead, O: Write, E: Write>(&mut self, input: R, out: &mut O, err: &mut E) -> anyhow::Result<usize> {
		let mut failures = 0;
		for (index, line) in input.lines().enumerate() {
			let line = line.context("reading commands")?;
			match self.run_line(&line) {
				Ok(text) if text.is_empty() => {}
				Ok(text) => writeln!(out, "{text}")?,
				Err(error) => {
					failures += 1;
					warn!(line = index + 1, %error, "command failed");
					writeln!(err, "line {}: {error:#}", index + 1)?;
				}
			}
		}
		Ok(failures)
	}

	fn create_window(&mut self, path: &str, class: &str, kind: WindowKind) -> anyhow::Result<String> {
		self.session.windows_mut().create(path, class, kind)?;
		Ok(path.to_owned())
	}
}
