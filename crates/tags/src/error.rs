//! Error types for tag assignment.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while replacing a window's tag list.
///
/// On any error the window keeps the tags it had before the call.
#[derive(Debug, Error)]
pub enum TagError {
	/// Storage for the replacement list could not be allocated.
	#[error("cannot allocate {count} binding tags: {source}")]
	Alloc {
		/// Number of tags requested.
		count: usize,
		/// The underlying allocation failure.
		source: TryReserveError,
	},
}

/// Result type for tag store operations.
pub type Result<T> = std::result::Result<T, TagError>;
