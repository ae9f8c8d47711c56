use proptest::prelude::*;

use super::*;

#[test]
fn equal_text_yields_identical_symbol() {
	let interner = Interner::new();
	let a = interner.intern("Button");
	let b = interner.intern(&String::from("Button"));
	assert_eq!(a, b);
	assert!(std::ptr::eq(a.as_str(), b.as_str()));
	assert_eq!(interner.len(), 1);
}

#[test]
fn distinct_text_yields_distinct_symbols() {
	let interner = Interner::new();
	assert_ne!(interner.intern("all"), interner.intern("All"));
	assert_eq!(interner.len(), 2);
}

#[test]
fn lookup_does_not_insert() {
	let interner = Interner::new();
	assert!(interner.lookup("Entry").is_none());
	assert!(interner.is_empty());
	let sym = interner.intern("Entry");
	assert_eq!(interner.lookup("Entry"), Some(sym));
}

#[test]
fn global_intern_is_canonical() {
	assert_eq!(intern("Toplevel"), intern("Toplevel"));
	assert_eq!(intern("Toplevel").to_string(), "Toplevel");
}

#[test]
fn empty_string_interns() {
	let interner = Interner::new();
	assert_eq!(interner.intern(""), interner.intern(""));
	assert_eq!(interner.intern("").as_str(), "");
}

proptest! {
	#[test]
	fn intern_equality_matches_string_equality(a in "[a-zA-Z.]{0,6}", b in "[a-zA-Z.]{0,6}") {
		let interner = Interner::new();
		prop_assert_eq!(interner.intern(&a) == interner.intern(&b), a == b);
	}
}
