//! Window-name table collaborator.

use bindery_primitives::{Symbol, WindowId, WindowPath};

/// Read access to the window hierarchy and its path-name table.
pub trait WindowTable {
	/// Finds the window currently holding `path`.
	fn resolve(&self, path: &str) -> Option<WindowId>;

	/// Path name of a live window.
	fn path(&self, window: WindowId) -> Option<&WindowPath>;

	/// Class of a live window.
	fn class(&self, window: WindowId) -> Option<Symbol>;

	/// Parent of a live window; `None` for the main window.
	fn parent(&self, window: WindowId) -> Option<WindowId>;

	/// Whether the window is the root of its own native window hierarchy.
	fn is_top_hierarchy(&self, window: WindowId) -> bool;

	/// Nearest window at or above `window` that is a hierarchy root.
	fn top_hierarchy(&self, window: WindowId) -> Option<WindowId> {
		let mut current = Some(window);
		while let Some(id) = current {
			if self.is_top_hierarchy(id) {
				return Some(id);
			}
			current = self.parent(id);
		}
		None
	}
}

/// A window removed from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestroyedWindow {
	pub id: WindowId,
	pub path: WindowPath,
}

/// Window tables that can remove windows.
pub trait WindowLifecycle: WindowTable {
	/// Removes `window` and all of its descendants, descendants first.
	///
	/// Returns an empty list if the window is not live.
	fn destroy(&mut self, window: WindowId) -> Vec<DestroyedWindow>;
}
