//! Core identity types for tag-based event binding: interned symbols, binding objects, and windows.

/// Binding objects stored in tag lists and the keys handed to binding tables.
pub mod object;
/// Process-lifetime string interning.
pub mod symbol;
/// Window identifiers and path names.
pub mod window;

pub use object::{BindingKey, BindingObject};
pub use symbol::{Interner, Symbol, intern};
pub use window::{PATH_MARKER, WindowId, WindowPath, is_window_path};
