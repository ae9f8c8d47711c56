//! Minimal collaborators for unit tests.

use bindery_primitives::{BindingKey, Symbol, WindowId, WindowPath, intern};
use rustc_hash::FxHashMap;

use crate::table::{BindingError, BindingTable, EventMask};
use crate::windows::WindowTable;

struct Record {
	path: WindowPath,
	class: Symbol,
	parent: Option<WindowId>,
	top: bool,
}

/// Flat window table; parents are given explicitly.
#[derive(Default)]
pub(crate) struct FakeWindows {
	windows: FxHashMap<WindowId, Record>,
	names: FxHashMap<String, WindowId>,
	next: u64,
}

impl FakeWindows {
	pub(crate) fn add(&mut self, path: &str, class: &str, parent: Option<WindowId>, top: bool) -> WindowId {
		self.next += 1;
		let id = WindowId::new(self.next);
		self.windows.insert(
			id,
			Record {
				path: WindowPath::new(path),
				class: intern(class),
				parent,
				top,
			},
		);
		self.names.insert(path.to_owned(), id);
		id
	}

	pub(crate) fn remove(&mut self, id: WindowId) {
		if let Some(record) = self.windows.remove(&id) {
			self.names.remove(record.path.as_str());
		}
	}
}

impl WindowTable for FakeWindows {
	fn resolve(&self, path: &str) -> Option<WindowId> {
		self.names.get(path).copied()
	}

	fn path(&self, window: WindowId) -> Option<&WindowPath> {
		self.windows.get(&window).map(|r| &r.path)
	}

	fn class(&self, window: WindowId) -> Option<Symbol> {
		self.windows.get(&window).map(|r| r.class)
	}

	fn parent(&self, window: WindowId) -> Option<WindowId> {
		self.windows.get(&window).and_then(|r| r.parent)
	}

	fn is_top_hierarchy(&self, window: WindowId) -> bool {
		self.windows.get(&window).is_some_and(|r| r.top)
	}
}

/// Binding table that only records what it was asked to dispatch.
#[derive(Default)]
pub(crate) struct RecordingTable {
	pub(crate) dispatched: Vec<(WindowId, Vec<Option<String>>)>,
}

impl BindingTable for RecordingTable {
	type Event = ();

	fn create(&mut self, _: &BindingKey, _: &str, _: &str, _: bool) -> Result<EventMask, BindingError> {
		Ok(EventMask::KEY_PRESS)
	}

	fn delete(&mut self, _: &BindingKey, _: &str) -> Result<(), BindingError> {
		Ok(())
	}

	fn query(&self, _: &BindingKey, _: &str) -> Option<String> {
		None
	}

	fn query_all(&self, _: &BindingKey) -> Vec<String> {
		Vec::new()
	}

	fn delete_all(&mut self, _: &BindingKey) {}

	fn dispatch(&mut self, _: &(), window: WindowId, objects: &[Option<BindingKey>]) {
		let names = objects
			.iter()
			.map(|object| object.as_ref().map(|key| key.as_str().to_owned()))
			.collect();
		self.dispatched.push((window, names));
	}
}

/// `.`, `.top` (toplevel) and `.top.btn` (Button).
pub(crate) fn sample_tree() -> (FakeWindows, WindowId, WindowId, WindowId) {
	let mut windows = FakeWindows::default();
	let root = windows.add(".", "App", None, true);
	let top = windows.add(".top", "Toplevel", Some(root), true);
	let btn = windows.add(".top.btn", "Button", Some(top), false);
	(windows, root, top, btn)
}
