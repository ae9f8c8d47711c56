use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;

#[cfg(test)]
mod tests;

/// Canonical identity for a string, valid for the rest of the process.
///
/// Two symbols are equal iff they were interned from equal text. Equality and
/// hashing look only at the address of the interned text.
#[derive(Clone, Copy)]
pub struct Symbol(&'static str);

impl Symbol {
	/// Returns the interned text.
	pub const fn as_str(self) -> &'static str {
		self.0
	}
}

impl PartialEq for Symbol {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.0, other.0)
	}
}

impl Eq for Symbol {}

impl Hash for Symbol {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.as_ptr().hash(state);
		self.0.len().hash(state);
	}
}

impl fmt::Debug for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Symbol({:?})", self.0)
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}

impl AsRef<str> for Symbol {
	fn as_ref(&self) -> &str {
		self.0
	}
}

/// Append-only string table.
///
/// Interned text is leaked and never freed; there is no removal API.
#[derive(Debug, Default)]
pub struct Interner {
	table: Mutex<FxHashSet<&'static str>>,
}

impl Interner {
	/// Creates an empty interner.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the canonical symbol for `text`, inserting it on first use.
	pub fn intern(&self, text: &str) -> Symbol {
		let mut table = self.table.lock();
		if let Some(&existing) = table.get(text) {
			return Symbol(existing);
		}
		let leaked: &'static str = Box::leak(Box::from(text));
		table.insert(leaked);
		Symbol(leaked)
	}

	/// Returns the symbol for `text` if it has already been interned.
	pub fn lookup(&self, text: &str) -> Option<Symbol> {
		self.table.lock().get(text).copied().map(Symbol)
	}

	/// Number of distinct strings interned so far.
	pub fn len(&self) -> usize {
		self.table.lock().len()
	}

	/// Returns true if nothing has been interned.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

static GLOBAL: LazyLock<Interner> = LazyLock::new(Interner::new);

/// Interns `text` in the process-wide table.
pub fn intern(text: &str) -> Symbol {
	GLOBAL.intern(text)
}
