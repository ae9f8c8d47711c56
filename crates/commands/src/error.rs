//! Error types for the command surface.

use bindery_tags::{BindingError, TagError};
use thiserror::Error;

use crate::list::ListError;

/// Errors reported to the caller of a command. No state changes when one is returned.
#[derive(Debug, Error)]
pub enum CommandError {
	/// Wrong number of words for the command.
	#[error("wrong # args: should be \"{0}\"")]
	WrongArgs(&'static str),

	/// A window path that names no live window.
	#[error("bad window path name \"{0}\"")]
	BadWindowPath(String),

	/// The first word is not a known command.
	#[error("invalid command name \"{0}\"")]
	UnknownCommand(String),

	/// A tag list word could not be split.
	#[error(transparent)]
	List(#[from] ListError),

	/// The binding table rejected the request.
	#[error(transparent)]
	Binding(#[from] BindingError),

	/// The replacement tag list could not be built.
	#[error(transparent)]
	Tags(#[from] TagError),
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, CommandError>;
