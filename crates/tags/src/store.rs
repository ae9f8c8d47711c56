//! Explicit per-window tag lists.

use bindery_primitives::{BindingObject, WindowId};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::{Result, TagError};


/// Explicit binding tags for every window that has them.
///
/// A window missing from the store uses its default tag chain. Lists are
/// never edited in place: each assignment builds a complete replacement and
/// only then drops the old list.
#[derive(Debug, Default)]
pub struct TagStore {
	lists: FxHashMap<WindowId, Box<[BindingObject]>>,
}

impl TagStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Explicit tags for `window`, or an empty slice if it uses defaults.
	pub fn get_tags(&self, window: WindowId) -> &[BindingObject] {
		self.lists.get(&window).map(|list| &list[..]).unwrap_or_default()
	}

	/// Returns true if `window` has an explicit tag list.
	pub fn has_explicit(&self, window: WindowId) -> bool {
		self.lists.contains_key(&window)
	}

	/// Replaces the tags of `window` with `raw`, returning the number installed.
	///
	/// An empty `raw` reverts the window to its default chain and returns 0.
	/// On error the previous list is left in place.
	pub fn set_tags<S: AsRef<str>>(&mut self, window: WindowId, raw: &[S]) -> Result<usize> {
		if raw.is_empty() {
			self.free_tags(window);
			return Ok(0);
		}

		let mut list = Vec::new();
		list.try_reserve_exact(raw.len()).map_err(|source| TagError::Alloc {
			count: raw.len(),
			source,
		})?;
		list.extend(raw.iter().map(|tag| BindingObject::classify(tag.as_ref())));

		let previous = self.lists.insert(window, list.into_boxed_slice());
		debug!(
			?window,
			count = raw.len(),
			replaced = previous.as_ref().map_or(0, |old| old.len()),
			"bindtags assigned"
		);
		Ok(raw.len())
	}

	/// Releases the explicit tags of `window`, reverting it to defaults.
	///
	/// Called when the window is destroyed. Returns the number of tags released.
	pub fn free_tags(&mut self, window: WindowId) -> usize {
		let released = self.lists.remove(&window).map_or(0, |old| old.len());
		if released > 0 {
			trace!(?window, released, "bindtags freed");
		}
		released
	}

	/// Number of windows holding explicit tags.
	pub fn len(&self) -> usize {
		self.lists.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lists.is_empty()
	}
}
