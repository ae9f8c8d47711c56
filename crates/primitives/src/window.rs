use std::fmt;
use std::sync::Arc;

/// Leading character of a window path name. `"."` alone is the main window.
pub const PATH_MARKER: char = '.';

/// Returns true if `text` is spelled like a window path name.
pub fn is_window_path(text: &str) -> bool {
	text.starts_with(PATH_MARKER)
}

/// Identity of one window instance.
///
/// Ids are never reused: a window destroyed and recreated under the same path
/// gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
	/// Wraps a raw id allocated by a window table.
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Returns the raw id.
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for WindowId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "w{}", self.0)
	}
}

/// Path name of a window, shared between the window table and binding keys.
///
/// Compared by text, so a recreated window with the same path is the same
/// binding target.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowPath(Arc<str>);

impl WindowPath {
	pub fn new(path: &str) -> Self {
		Self(Arc::from(path))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns the parent path, or `None` for the main window.
	///
	/// `".a.b"` has parent `".a"`, and `".a"` has parent `"."`.
	pub fn parent(&self) -> Option<&str> {
		if self.as_str() == "." {
			return None;
		}
		match self.0.rfind(PATH_MARKER)? {
			0 => Some("."),
			idx => Some(&self.0[..idx]),
		}
	}
}

impl fmt::Debug for WindowPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "WindowPath({:?})", &*self.0)
	}
}

impl fmt::Display for WindowPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for WindowPath {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
