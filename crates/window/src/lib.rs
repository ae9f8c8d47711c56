//! In-memory window hierarchy.
//!
//! [`WindowTree`] keeps the path-name table and parent links that tag
//! resolution reads through [`WindowTable`]. Windows are created under an
//! existing parent and destroyed together with their descendants.

use bindery_primitives::{PATH_MARKER, Symbol, WindowId, WindowPath, intern};
use bindery_tags::{DestroyedWindow, WindowLifecycle, WindowTable};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;


/// Errors from window creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
	/// The path is not a well-formed window path.
	#[error("bad window path name \"{0}\"")]
	BadPath(String),
	/// The parent named by the path does not exist.
	#[error("bad window path name \"{parent}\" (parent of \"{path}\")")]
	MissingParent { path: String, parent: String },
	/// Another live window already holds the path.
	#[error("window name \"{0}\" already exists")]
	Exists(String),
}

/// Whether a window roots its own native hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowKind {
	/// Lives inside its parent's native window.
	#[default]
	Child,
	/// Top-level window; the top of its own hierarchy.
	Toplevel,
}

#[derive(Debug)]
struct WindowRecord {
	path: WindowPath,
	class: Symbol,
	parent: Option<WindowId>,
	children: Vec<WindowId>,
	kind: WindowKind,
}

/// Live windows indexed by id and by path name.
#[derive(Debug)]
pub struct WindowTree {
	windows: FxHashMap<WindowId, WindowRecord>,
	names: FxHashMap<Box<str>, WindowId>,
	main: WindowId,
	next_id: u64,
}

impl WindowTree {
	/// Creates a tree holding only the main window `"."` of class `main_class`.
	pub fn new(main_class: &str) -> Self {
		let main = WindowId::new(1);
		let path = WindowPath::new(".");
		let mut tree = Self {
			windows: FxHashMap::default(),
			names: FxHashMap::default(),
			main,
			next_id: 2,
		};
		tree.names.insert(path.as_str().into(), main);
		tree.windows.insert(
			main,
			WindowRecord {
				path,
				class: intern(main_class),
				parent: None,
				children: Vec::new(),
				kind: WindowKind::Toplevel,
			},
		);
		tree
	}

	/// The main window `"."`.
	pub fn main(&self) -> WindowId {
		self.main
	}

	/// Creates a window at `path`, whose parent must already exist.
	pub fn create(&mut self, path: &str, class: &str, kind: WindowKind) -> Result<WindowId, WindowError> {
		let well_formed = path.len() > 1
			&& path.starts_with(PATH_MARKER)
			&& path[1..].split(PATH_MARKER).all(|segment| !segment.is_empty());
		if !well_formed {
			return Err(WindowError::BadPath(path.to_owned()));
		}

		let path = WindowPath::new(path);
		if self.names.contains_key(path.as_str()) {
			return Err(WindowError::Exists(path.to_string()));
		}
		let parent_path = path.parent().unwrap_or(".");
		let Some(parent) = self.resolve(parent_path) else {
			return Err(WindowError::MissingParent {
				path: path.to_string(),
				parent: parent_path.to_owned(),
			});
		};

		let id = WindowId::new(self.next_id);
		self.next_id += 1;
		if let Some(record) = self.windows.get_mut(&parent) {
			record.children.push(id);
		}
		self.names.insert(path.as_str().into(), id);
		debug!(?id, %path, class, ?kind, "window created");
		self.windows.insert(
			id,
			WindowRecord {
				path,
				class: intern(class),
				parent: Some(parent),
				children: Vec::new(),
				kind,
			},
		);
		Ok(id)
	}

	/// Live children of `window`, in creation order.
	pub fn children(&self, window: WindowId) -> &[WindowId] {
		self.windows
			.get(&window)
			.map(|record| record.children.as_slice())
			.unwrap_or_default()
	}

	/// Returns true if `window` is live.
	pub fn contains(&self, window: WindowId) -> bool {
		self.windows.contains_key(&window)
	}

	/// Number of live windows, including the main window.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	fn destroy_subtree(&mut self, window: WindowId, out: &mut Vec<DestroyedWindow>) {
		let Some(record) = self.windows.remove(&window) else {
			return;
		};
		for child in record.children {
			self.destroy_subtree(child, out);
		}
		self.names.remove(record.path.as_str());
		out.push(DestroyedWindow {
			id: window,
			path: record.path,
		});
	}
}

impl Default for WindowTree {
	fn default() -> Self {
		Self::new("App")
	}
}

impl WindowTable for WindowTree {
	fn resolve(&self, path: &str) -> Option<WindowId> {
		self.names.get(path).copied()
	}

	fn path(&self, window: WindowId) -> Option<&WindowPath> {
		self.windows.get(&window).map(|record| &record.path)
	}

	fn class(&self, window: WindowId) -> Option<Symbol> {
		self.windows.get(&window).map(|record| record.class)
	}

	fn parent(&self, window: WindowId) -> Option<WindowId> {
		self.windows.get(&window).and_then(|record| record.parent)
	}

	fn is_top_hierarchy(&self, window: WindowId) -> bool {
		self.windows
			.get(&window)
			.is_some_and(|record| record.kind == WindowKind::Toplevel)
	}
}

impl WindowLifecycle for WindowTree {
	fn destroy(&mut self, window: WindowId) -> Vec<DestroyedWindow> {
		let parent = self.parent(window);
		let mut destroyed = Vec::new();
		self.destroy_subtree(window, &mut destroyed);
		if let Some(record) = parent.and_then(|parent| self.windows.get_mut(&parent)) {
			record.children.retain(|&child| child != window);
		}
		if !destroyed.is_empty() {
			debug!(?window, count = destroyed.len(), "windows destroyed");
		}
		destroyed
	}
}
