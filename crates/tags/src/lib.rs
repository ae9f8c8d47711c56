//! Binding tag resolution.
//!
//! * [`TagStore`] — explicit per-window tag lists, replaced wholesale
//! * [`default_tags`] — the implicit chain used when a window has no explicit tags
//! * [`build_dispatch_list`] / [`deliver`] — the ordered object list handed to a [`BindingTable`]
//!
//! The window hierarchy and the binding table are collaborators reached through
//! the [`WindowTable`] and [`BindingTable`] traits.

pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod store;
pub mod table;
pub mod windows;

#[cfg(test)]
mod testing;

pub use defaults::{DefaultTags, TagRules, WILDCARD_TAG, default_tags, query_tags};
pub use dispatch::{DispatchList, INLINE_TAGS, build_dispatch_list, deliver};
pub use error::{Result, TagError};
pub use store::TagStore;
pub use table::{BindingError, BindingTable, EventMask};
pub use windows::{DestroyedWindow, WindowLifecycle, WindowTable};
