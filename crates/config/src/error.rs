//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unexpected field.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The wildcard tag is empty or spelled like a window path.
	#[error("invalid wildcard tag \"{0}\" (must be non-empty and not start with '.')")]
	InvalidWildcard(String),

	/// The append marker is whitespace.
	#[error("invalid append marker {0:?}")]
	InvalidAppendMarker(char),

	/// The log level is not one of error, warn, info, debug, trace.
	#[error("invalid log level \"{0}\"")]
	InvalidLogLevel(String),

	/// A preset window has a path that is not a window path.
	#[error("invalid window path \"{0}\" in [[window]]")]
	InvalidWindowPath(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
