//! Configuration for binding sessions.
//!
//! Configuration is written in TOML:
//!
//! ```toml
//! [bindings]
//! wildcard = "all"
//! append-marker = "+"
//!
//! [log]
//! level = "debug"
//!
//! [[window]]
//! path = ".top"
//! class = "Toplevel"
//! toplevel = true
//!
//! [[window]]
//! path = ".top.btn"
//! class = "Button"
//! ```
//!
//! Every section is optional. `[[window]]` entries are created in order, so a
//! parent must be listed before its children.

pub mod error;

use std::path::Path;

use bindery_primitives::is_window_path;
pub use error::{ConfigError, Result};
use serde::Deserialize;


/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Tag and binding command settings, if the `[bindings]` section is present.
	pub bindings: Option<BindingsConfig>,
	/// Logging settings for the shell, if the `[log]` section is present.
	pub log: Option<LogConfig>,
	/// Windows created when a session starts.
	#[serde(rename = "window")]
	pub windows: Vec<WindowSpec>,
}

/// `[bindings]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct BindingsConfig {
	/// Tag ending every default tag chain.
	pub wildcard: String,
	/// Leading script character that appends to an existing binding.
	pub append_marker: char,
	/// Class of the main window `"."`.
	pub main_class: String,
}

impl Default for BindingsConfig {
	fn default() -> Self {
		Self {
			wildcard: "all".to_owned(),
			append_marker: '+',
			main_class: "App".to_owned(),
		}
	}
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// Maximum level: error, warn, info, debug, or trace.
	pub level: String,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			level: DEFAULT_LOG_LEVEL.to_owned(),
		}
	}
}

/// One `[[window]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSpec {
	pub path: String,
	pub class: String,
	/// Whether the window roots its own hierarchy.
	#[serde(default)]
	pub toplevel: bool,
}

const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

impl Config {
	/// Parse a TOML string into a validated [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Effective `[bindings]` settings.
	pub fn bindings(&self) -> BindingsConfig {
		self.bindings.clone().unwrap_or_default()
	}

	/// Effective log level.
	pub fn log_level(&self) -> &str {
		self.log.as_ref().map_or(DEFAULT_LOG_LEVEL, |log| log.level.as_str())
	}

	/// Checks values serde cannot.
	pub fn validate(&self) -> Result<()> {
		if let Some(bindings) = &self.bindings {
			let wildcard = &bindings.wildcard;
			if wildcard.is_empty() || is_window_path(wildcard) {
				return Err(ConfigError::InvalidWildcard(wildcard.clone()));
			}
			if bindings.append_marker.is_whitespace() {
				return Err(ConfigError::InvalidAppendMarker(bindings.append_marker));
			}
		}
		if let Some(log) = &self.log
			&& !LOG_LEVELS.contains(&log.level.as_str())
		{
			return Err(ConfigError::InvalidLogLevel(log.level.clone()));
		}
		if let Some(bad) = self.windows.iter().find(|w| !is_window_path(&w.path)) {
			return Err(ConfigError::InvalidWindowPath(bad.path.clone()));
		}
		Ok(())
	}

	/// Merge another config into this one.
	///
	/// Sections present in `other` replace those in `self`; windows are appended.
	pub fn merge(&mut self, other: Config) {
		if other.bindings.is_some() {
			self.bindings = other.bindings;
		}
		if other.log.is_some() {
			self.log = other.log;
		}
		self.windows.extend(other.windows);
	}
}
