use std::fmt;

use bindery_config::BindingsConfig;
use bindery_primitives::{BindingKey, WindowId, intern, is_window_path};
use bindery_tags::{BindingTable, TagRules, TagStore, WindowLifecycle, WindowTable, deliver, query_tags};
use tracing::debug;

use crate::error::{CommandError, Result};
use crate::list::{format_list, parse_list};


const BIND_USAGE: &str = "bind window ?pattern? ?command?";
const BINDTAGS_USAGE: &str = "bindtags window ?taglist?";

/// What a `bind` call asks of the binding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindRequest<'a> {
	/// List every pattern bound on the object.
	All,
	/// Return the script bound to one pattern.
	Query(&'a str),
	/// Bind, append to, or (with an empty script) delete a pattern.
	Set { pattern: &'a str, script: &'a str },
}

/// Result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
	Empty,
	Text(String),
	List(Vec<String>),
}

impl fmt::Display for CommandOutput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => Ok(()),
			Self::Text(text) => f.write_str(text),
			Self::List(items) => f.write_str(&format_list(items)),
		}
	}
}

/// Tag store, window table, and binding table of one application.
///
/// All commands and event deliveries run on the thread that owns the session.
#[derive(Debug)]
pub struct Session<W, B> {
	windows: W,
	table: B,
	tags: TagStore,
	rules: TagRules,
	append_marker: char,
}

impl<W, B> Session<W, B>
where
	W: WindowTable,
	B: BindingTable,
{
	/// Creates a session with the default wildcard `all` and append marker `+`.
	pub fn new(windows: W, table: B) -> Self {
		Self::with_config(windows, table, &BindingsConfig::default())
	}

	pub fn with_config(windows: W, table: B, config: &BindingsConfig) -> Self {
		Self {
			windows,
			table,
			tags: TagStore::new(),
			rules: TagRules::with_wildcard(&config.wildcard),
			append_marker: config.append_marker,
		}
	}

	pub fn windows(&self) -> &W {
		&self.windows
	}

	pub fn windows_mut(&mut self) -> &mut W {
		&mut self.windows
	}

	pub fn table(&self) -> &B {
		&self.table
	}

	pub fn table_mut(&mut self) -> &mut B {
		&mut self.table
	}

	pub fn tags(&self) -> &TagStore {
		&self.tags
	}

	pub fn rules(&self) -> &TagRules {
		&self.rules
	}

	/// Resolves a window path to a live window.
	pub fn window(&self, path: &str) -> Result<WindowId> {
		self.windows
			.resolve(path)
			.ok_or_else(|| CommandError::BadWindowPath(path.to_owned()))
	}

	/// Binding key for the first argument of `bind`.
	///
	/// Path-spelled targets must name a live window; anything else is a tag.
	pub fn binding_key(&self, target: &str) -> Result<BindingKey> {
		if !is_window_path(target) {
			return Ok(BindingKey::Tag(intern(target)));
		}
		let window = self.window(target)?;
		let path = self
			.windows
			.path(window)
			.ok_or_else(|| CommandError::BadWindowPath(target.to_owned()))?;
		Ok(BindingKey::Window(path.clone()))
	}

	/// Queries or changes the bindings of a window or tag.
	pub fn bind(&mut self, target: &str, request: BindRequest<'_>) -> Result<CommandOutput> {
		let key = self.binding_key(target)?;
		match request {
			BindRequest::All => Ok(CommandOutput::List(self.table.query_all(&key))),
			BindRequest::Query(pattern) => Ok(self
				.table
				.query(&key, pattern)
				.map_or(CommandOutput::Empty, CommandOutput::Text)),
			BindRequest::Set { pattern, script } if script.is_empty() => {
				self.table.delete(&key, pattern)?;
				debug!(object = %key, pattern, "binding deleted");
				Ok(CommandOutput::Empty)
			}
			BindRequest::Set { pattern, script } => {
				let (script, append) = match script.strip_prefix(self.append_marker) {
					Some(rest) => (rest, true),
					None => (script, false),
				};
				let mask = self.table.create(&key, pattern, script, append)?;
				debug!(object = %key, pattern, append, ?mask, "binding set");
				Ok(CommandOutput::Empty)
			}
		}
	}

	/// Tags applying to the window at `path`: explicit if assigned, else the default chain.
	pub fn query_tags(&self, path: &str) -> Result<Vec<String>> {
		let window = self.window(path)?;
		Ok(query_tags(&self.tags, &self.windows, window, &self.rules))
	}

	/// Replaces the tags of the window at `path`; an empty list restores the defaults.
	pub fn set_tags<S: AsRef<str>>(&mut self, path: &str, tags: &[S]) -> Result<usize> {
		let window = self.window(path)?;
		Ok(self.tags.set_tags(window, tags)?)
	}

	/// Event-delivery entry point: runs the bindings that apply to `window`.
	pub fn deliver(&mut self, window: WindowId, event: &B::Event) {
		deliver(&self.tags, &self.windows, &mut self.table, &self.rules, window, event);
	}

	/// Delivers `event` to the window currently at `path`.
	pub fn deliver_to(&mut self, path: &str, event: &B::Event) -> Result<()> {
		let window = self.window(path)?;
		self.deliver(window, event);
		Ok(())
	}
}

impl<W, B> Session<W, B>
where
	W: WindowLifecycle,
	B: BindingTable,
{
	/// Destroys `window` and its descendants, releasing their tags and window bindings.
	///
	/// Returns the number of windows destroyed.
	pub fn destroy_window(&mut self, window: WindowId) -> usize {
		let destroyed = self.windows.destroy(window);
		for gone in &destroyed {
			self.tags.free_tags(gone.id);
			self.table.delete_all(&BindingKey::Window(gone.path.clone()));
		}
		destroyed.len()
	}

	/// Destroys the windows named by `paths`, skipping names that do not resolve.
	///
	/// Destroying the main window `"."` ends the command; later names are ignored.
	pub fn destroy<S: AsRef<str>>(&mut self, paths: &[S]) -> usize {
		let main = self.windows.resolve(".");
		let mut count = 0;
		for path in paths {
			let Some(window) = self.windows.resolve(path.as_ref()) else {
				continue;
			};
			count += self.destroy_window(window);
			if Some(window) == main {
				break;
			}
		}
		debug!(count, "destroy");
		count
	}

	/// Runs one command given as words, e.g. `["bindtags", ".b", "Button all"]`.
	pub fn eval<S: AsRef<str>>(&mut self, words: &[S]) -> Result<CommandOutput> {
		let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
		match *words.as_slice() {
			[] => Ok(CommandOutput::Empty),
			["bind", target] => self.bind(target, BindRequest::All),
			["bind", target, pattern] => self.bind(target, BindRequest::Query(pattern)),
			["bind", target, pattern, script] => self.bind(target, BindRequest::Set { pattern, script }),
			["bind", ..] => Err(CommandError::WrongArgs(BIND_USAGE)),
			["bindtags", path] => Ok(CommandOutput::List(self.query_tags(path)?)),
			["bindtags", path, list] => {
				let window = self.window(path)?;
				let tags = parse_list(list)?;
				self.tags.set_tags(window, &tags)?;
				Ok(CommandOutput::Empty)
			}
			["bindtags", ..] => Err(CommandError::WrongArgs(BINDTAGS_USAGE)),
			["destroy", ref paths @ ..] => {
				self.destroy(paths);
				Ok(CommandOutput::Empty)
			}
			[name, ..] => Err(CommandError::UnknownCommand(name.to_owned())),
		}
	}
}
