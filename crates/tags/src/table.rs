//! Binding table collaborator.
//!
//! The table owns pattern parsing, matching, and script execution. This crate
//! only decides which objects are consulted for an event and in what order.

use bindery_primitives::{BindingKey, WindowId};
use bitflags::bitflags;
use thiserror::Error;

bitflags! {
	/// Event types a binding can match.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct EventMask: u32 {
		const KEY_PRESS = 1 << 0;
		const KEY_RELEASE = 1 << 1;
		const BUTTON_PRESS = 1 << 2;
		const BUTTON_RELEASE = 1 << 3;
		const MOTION = 1 << 4;
		const ENTER = 1 << 5;
		const LEAVE = 1 << 6;
		const FOCUS_IN = 1 << 7;
		const FOCUS_OUT = 1 << 8;
		const EXPOSE = 1 << 9;
		const CONFIGURE = 1 << 10;
		const MAP = 1 << 11;
		const UNMAP = 1 << 12;
		const DESTROY = 1 << 13;
		const MOUSE_WHEEL = 1 << 14;
		const ACTIVATE = 1 << 15;
		const DEACTIVATE = 1 << 16;
		const VIRTUAL = 1 << 17;
	}
}

/// Errors reported by a binding table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
	/// The event pattern could not be understood.
	#[error("bad event pattern \"{pattern}\": {reason}")]
	BadPattern {
		/// The rejected pattern text.
		pattern: String,
		/// Why it was rejected.
		reason: &'static str,
	},
}

/// Store of pattern-to-script bindings keyed by [`BindingKey`].
pub trait BindingTable {
	/// Event type delivered to [`BindingTable::dispatch`].
	type Event;

	/// Binds `script` to `pattern` on `key`, appending to an existing script if `append`.
	fn create(
		&mut self,
		key: &BindingKey,
		pattern: &str,
		script: &str,
		append: bool,
	) -> Result<EventMask, BindingError>;

	/// Removes the binding for `pattern` on `key`. Missing bindings are not an error.
	fn delete(&mut self, key: &BindingKey, pattern: &str) -> Result<(), BindingError>;

	/// Script bound to `pattern` on `key`, if any. Unparseable patterns have no script.
	fn query(&self, key: &BindingKey, pattern: &str) -> Option<String>;

	/// All patterns bound on `key`, in creation order.
	fn query_all(&self, key: &BindingKey) -> Vec<String>;

	/// Removes every binding on `key`.
	fn delete_all(&mut self, key: &BindingKey);

	/// Runs the bindings matching `event` for each object in order.
	///
	/// `None` entries name windows that no longer exist and must be skipped.
	fn dispatch(&mut self, event: &Self::Event, window: WindowId, objects: &[Option<BindingKey>]);
}
