use std::fmt;

use crate::symbol::{Symbol, intern};
use crate::window::{WindowPath, is_window_path};

/// One entry of a window's explicit tag list.
///
/// Path-spelled tags keep their own copy of the text instead of a window
/// handle: the window they name may be destroyed and recreated before the tag
/// is used, so they are re-resolved at dispatch time.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum BindingObject {
	/// Class names, the wildcard, and any tag not spelled like a window path.
	Interned(Symbol),
	/// Path text of a window, owned by the tag-list slot holding it.
	OwnedPath(Box<str>),
}

impl BindingObject {
	/// Classifies a raw tag string.
	///
	/// This is the only place tag text is inspected; everything downstream
	/// branches on the variant.
	pub fn classify(raw: &str) -> Self {
		if is_window_path(raw) {
			Self::OwnedPath(Box::from(raw))
		} else {
			Self::Interned(intern(raw))
		}
	}

	/// Text of the tag as it was assigned.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Interned(sym) => sym.as_str(),
			Self::OwnedPath(path) => path,
		}
	}
}

impl fmt::Debug for BindingObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Interned(sym) => write!(f, "Interned({:?})", sym.as_str()),
			Self::OwnedPath(path) => write!(f, "OwnedPath({path:?})"),
		}
	}
}

impl fmt::Display for BindingObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Identity under which a binding table stores and matches bindings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindingKey {
	/// A window, identified by its current path name.
	Window(WindowPath),
	/// A symbolic tag such as a class name or `all`.
	Tag(Symbol),
}

impl BindingKey {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Window(path) => path.as_str(),
			Self::Tag(sym) => sym.as_str(),
		}
	}
}

impl fmt::Display for BindingKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
