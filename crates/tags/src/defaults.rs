//! Implicit tag chain for windows without explicit tags.

use bindery_primitives::{BindingKey, Symbol, WindowId, intern};
use smallvec::SmallVec;

use crate::store::TagStore;
use crate::windows::WindowTable;


/// Tag name matched by every window's default chain.
pub const WILDCARD_TAG: &str = "all";

/// Default chain: window, class, optional top-level, wildcard.
pub type DefaultTags = SmallVec<[BindingKey; 4]>;

/// Settings shared by the query and dispatch paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRules {
	/// Last element of every default chain.
	pub wildcard: Symbol,
}

impl TagRules {
	pub fn with_wildcard(wildcard: &str) -> Self {
		Self {
			wildcard: intern(wildcard),
		}
	}
}

impl Default for TagRules {
	fn default() -> Self {
		Self::with_wildcard(WILDCARD_TAG)
	}
}

/// Computes the default chain for a live window.
///
/// The chain is `[window, class, wildcard]` for a hierarchy root and
/// `[window, class, top-level, wildcard]` otherwise. The top-level entry is
/// left out when no ancestor is a hierarchy root. Returns `None` if
/// `window` is not in the table.
pub fn default_tags<W>(windows: &W, window: WindowId, rules: &TagRules) -> Option<DefaultTags>
where
	W: WindowTable + ?Sized,
{
	let path = windows.path(window)?;
	let class = windows.class(window)?;

	let mut tags = DefaultTags::new();
	tags.push(BindingKey::Window(path.clone()));
	tags.push(BindingKey::Tag(class));
	if let Some(top) = windows.top_hierarchy(window).filter(|&top| top != window)
		&& let Some(top_path) = windows.path(top)
	{
		tags.push(BindingKey::Window(top_path.clone()));
	}
	tags.push(BindingKey::Tag(rules.wildcard));
	Some(tags)
}

/// Tag names that apply to `window`: its explicit list if set, else its default chain.
///
/// Explicit tags are reported exactly as assigned. A window the table does
/// not know and that has no explicit tags yields an empty list.
pub fn query_tags<W>(store: &TagStore, windows: &W, window: WindowId, rules: &TagRules) -> Vec<String>
where
	W: WindowTable + ?Sized,
{
	let explicit = store.get_tags(window);
	if !explicit.is_empty() {
		return explicit.iter().map(|tag| tag.as_str().to_owned()).collect();
	}
	default_tags(windows, window, rules)
		.map(|tags| tags.iter().map(|key| key.as_str().to_owned()).collect())
		.unwrap_or_default()
}
