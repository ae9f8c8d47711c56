//! Per-event object lists.

use bindery_primitives::{BindingKey, BindingObject, WindowId};
use smallvec::SmallVec;
use tracing::trace;

use crate::defaults::{TagRules, default_tags};
use crate::store::TagStore;
use crate::table::BindingTable;
use crate::windows::WindowTable;


/// Tag count served without a heap allocation.
pub const INLINE_TAGS: usize = 20;

/// Ordered objects consulted for one event. `None` marks a path tag whose
/// window no longer exists.
pub type DispatchList = SmallVec<[Option<BindingKey>; INLINE_TAGS]>;

/// Builds the object list for an event delivered to `window`.
///
/// Explicit tags are used in order, with path tags re-resolved against the
/// current window table so they follow whichever window holds the path now.
/// Without explicit tags the default chain is used. Returns `None` if the
/// window has no explicit tags and is unknown to the table.
pub fn build_dispatch_list<W>(
	store: &TagStore,
	windows: &W,
	window: WindowId,
	rules: &TagRules,
) -> Option<DispatchList>
where
	W: WindowTable + ?Sized,
{
	let explicit = store.get_tags(window);
	if explicit.is_empty() {
		return default_tags(windows, window, rules).map(|tags| tags.into_iter().map(Some).collect());
	}

	let mut objects = DispatchList::with_capacity(explicit.len());
	for tag in explicit {
		let object = match tag {
			BindingObject::Interned(sym) => Some(BindingKey::Tag(*sym)),
			BindingObject::OwnedPath(path) => {
				let current = windows
					.resolve(path)
					.and_then(|id| windows.path(id))
					.map(|current| BindingKey::Window(current.clone()));
				if current.is_none() {
					trace!(?window, tag = %path, "path tag names no live window");
				}
				current
			}
		};
		objects.push(object);
	}
	Some(objects)
}

/// Delivers `event` for `window` to the binding table.
///
/// The object list lives only for this call; a spilled list is freed as soon
/// as the table returns.
pub fn deliver<W, B>(
	store: &TagStore,
	windows: &W,
	table: &mut B,
	rules: &TagRules,
	window: WindowId,
	event: &B::Event,
) where
	W: WindowTable + ?Sized,
	B: BindingTable + ?Sized,
{
	let Some(objects) = build_dispatch_list(store, windows, window, rules) else {
		trace!(?window, "event for unknown window dropped");
		return;
	};
	trace!(?window, count = objects.len(), spilled = objects.spilled(), "dispatching event");
	table.dispatch(event, window, &objects);
}
