//! Reference [`BindingTable`].
//!
//! Patterns are opaque strings: an event matches a binding when its sequence
//! text equals the bound pattern exactly. Only enough of the pattern is read
//! to report an [`EventMask`] and reject obviously malformed input. Scripts
//! are not executed; each match is recorded as a [`Fired`] entry.

use bindery_primitives::{BindingKey, WindowId};
use bindery_tags::{BindingError, BindingTable, EventMask};
use indexmap::IndexMap;
use tracing::trace;


/// Script that stops consulting further objects for the current event.
pub const BREAK_SCRIPT: &str = "break";

/// An event, identified by the sequence text bindings are matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
	pub sequence: String,
}

impl Event {
	pub fn new(sequence: impl Into<String>) -> Self {
		Self {
			sequence: sequence.into(),
		}
	}
}

/// A binding that matched during dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired {
	pub window: WindowId,
	pub object: BindingKey,
	pub script: String,
}

/// Bindings per object, each in creation order.
#[derive(Debug, Default)]
pub struct PatternTable {
	bindings: IndexMap<BindingKey, IndexMap<String, String>>,
	fired: Vec<Fired>,
}

impl PatternTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Bindings fired so far, oldest first.
	pub fn fired(&self) -> &[Fired] {
		&self.fired
	}

	/// Drains the fired log.
	pub fn take_fired(&mut self) -> Vec<Fired> {
		std::mem::take(&mut self.fired)
	}

	/// Number of objects with at least one binding.
	pub fn object_count(&self) -> usize {
		self.bindings.len()
	}
}

const EVENT_TYPES: &[(&str, EventMask)] = &[
	("Key", EventMask::KEY_PRESS),
	("KeyPress", EventMask::KEY_PRESS),
	("KeyRelease", EventMask::KEY_RELEASE),
	("Button", EventMask::BUTTON_PRESS),
	("ButtonPress", EventMask::BUTTON_PRESS),
	("ButtonRelease", EventMask::BUTTON_RELEASE),
	("Motion", EventMask::MOTION),
	("Enter", EventMask::ENTER),
	("Leave", EventMask::LEAVE),
	("FocusIn", EventMask::FOCUS_IN),
	("FocusOut", EventMask::FOCUS_OUT),
	("Expose", EventMask::EXPOSE),
	("Configure", EventMask::CONFIGURE),
	("Map", EventMask::MAP),
	("Unmap", EventMask::UNMAP),
	("Destroy", EventMask::DESTROY),
	("MouseWheel", EventMask::MOUSE_WHEEL),
	("Activate", EventMask::ACTIVATE),
	("Deactivate", EventMask::DEACTIVATE),
];

fn bad(pattern: &str, reason: &'static str) -> BindingError {
	BindingError::BadPattern {
		pattern: pattern.to_owned(),
		reason,
	}
}

/// Event types `pattern` can match.
///
/// `<<Name>>` is a virtual event. Inside `<...>` the first field naming an
/// event type decides the mask; a bare button number means a button press and
/// anything else is taken as a keysym. Text outside brackets is typed keys.
pub fn event_mask(pattern: &str) -> Result<EventMask, BindingError> {
	if pattern.is_empty() {
		return Err(bad(pattern, "no events specified in binding"));
	}
	if let Some(inner) = pattern.strip_prefix("<<") {
		return match inner.strip_suffix(">>") {
			Some(name) if !name.is_empty() => Ok(EventMask::VIRTUAL),
			_ => Err(bad(pattern, "virtual event is not closed by \">>\"")),
		};
	}
	let Some(inner) = pattern.strip_prefix('<') else {
		return Ok(EventMask::KEY_PRESS);
	};
	let Some(inner) = inner.strip_suffix('>').filter(|inner| !inner.is_empty()) else {
		return Err(bad(pattern, "missing \">\" in binding"));
	};

	let fields = inner.split(['-', ' ']).filter(|field| !field.is_empty());
	let mut mask = None;
	let mut saw_button = false;
	for field in fields {
		if let Some(&(_, found)) = EVENT_TYPES.iter().find(|(name, _)| *name == field) {
			mask = Some(found);
			break;
		}
		saw_button |= matches!(field, "1" | "2" | "3" | "4" | "5");
	}
	Ok(mask.unwrap_or(if saw_button {
		EventMask::BUTTON_PRESS
	} else {
		EventMask::KEY_PRESS
	}))
}

impl BindingTable for PatternTable {
	type Event = Event;

	fn create(
		&mut self,
		key: &BindingKey,
		pattern: &str,
		script: &str,
		append: bool,
	) -> Result<EventMask, BindingError> {
		let mask = event_mask(pattern)?;
		let scripts = self.bindings.entry(key.clone()).or_default();
		if append && let Some(existing) = scripts.get_mut(pattern) {
			existing.push('\n');
			existing.push_str(script);
		} else {
			scripts.insert(pattern.to_owned(), script.to_owned());
		}
		trace!(object = %key, pattern, append, "binding created");
		Ok(mask)
	}

	fn delete(&mut self, key: &BindingKey, pattern: &str) -> Result<(), BindingError> {
		event_mask(pattern)?;
		if let Some(scripts) = self.bindings.get_mut(key) {
			scripts.shift_remove(pattern);
			if scripts.is_empty() {
				self.bindings.shift_remove(key);
			}
		}
		Ok(())
	}

	fn query(&self, key: &BindingKey, pattern: &str) -> Option<String> {
		self.bindings.get(key)?.get(pattern).cloned()
	}

	fn query_all(&self, key: &BindingKey) -> Vec<String> {
		self.bindings
			.get(key)
			.map(|scripts| scripts.keys().cloned().collect())
			.unwrap_or_default()
	}

	fn delete_all(&mut self, key: &BindingKey) {
		self.bindings.shift_remove(key);
	}

	fn dispatch(&mut self, event: &Event, window: WindowId, objects: &[Option<BindingKey>]) {
		for object in objects.iter().flatten() {
			let Some(script) = self
				.bindings
				.get(object)
				.and_then(|scripts| scripts.get(&event.sequence))
			else {
				continue;
			};
			let stop = script.trim() == BREAK_SCRIPT;
			self.fired.push(Fired {
				window,
				object: object.clone(),
				script: script.clone(),
			});
			if stop {
				break;
			}
		}
	}
}
