//! End-to-end tag resolution through the command surface and event delivery.

use bindery_commands::Session;
use bindery_config::BindingsConfig;
use bindery_primitives as _;
use bindery_table::{Event, PatternTable};
use bindery_tags::INLINE_TAGS;
use bindery_window::{WindowKind, WindowTree};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use thiserror as _;
use tracing as _;

fn app() -> Session<WindowTree, PatternTable> {
	let mut windows = WindowTree::new("App");
	windows.create(".top", "Toplevel", WindowKind::Toplevel).unwrap();
	windows.create(".top.btn", "Button", WindowKind::Child).unwrap();
	Session::new(windows, PatternTable::new())
}

fn fire(session: &mut Session<WindowTree, PatternTable>, path: &str, sequence: &str) -> Vec<String> {
	session.deliver_to(path, &Event::new(sequence)).unwrap();
	session
		.table_mut()
		.take_fired()
		.into_iter()
		.map(|fired| fired.script)
		.collect()
}

/// Binds `<1>` on every default-chain object so dispatch order is visible.
fn bind_markers(session: &mut Session<WindowTree, PatternTable>) {
	for target in [".top.btn", "Button", ".top", "all"] {
		session.eval(&["bind", target, "<1>", target]).unwrap();
	}
}

#[test]
fn default_chain_for_child_window() {
	let s = app();
	assert_eq!(s.query_tags(".top.btn").unwrap(), [".top.btn", "Button", ".top", "all"]);
}

#[test]
fn default_chain_for_hierarchy_roots() {
	let s = app();
	assert_eq!(s.query_tags(".top").unwrap(), [".top", "Toplevel", "all"]);
	assert_eq!(s.query_tags(".").unwrap(), [".", "App", "all"]);
}

#[test]
fn dispatch_follows_default_chain_order() {
	let mut s = app();
	bind_markers(&mut s);
	assert_eq!(fire(&mut s, ".top.btn", "<1>"), [".top.btn", "Button", ".top", "all"]);
	assert_eq!(fire(&mut s, ".top", "<1>"), [".top", "all"]);
}

#[test]
fn explicit_tags_replace_chain() {
	let mut s = app();
	bind_markers(&mut s);
	s.eval(&["bindtags", ".top.btn", "all Button"]).unwrap();
	assert_eq!(s.query_tags(".top.btn").unwrap(), ["all", "Button"]);
	assert_eq!(fire(&mut s, ".top.btn", "<1>"), ["all", "Button"]);
}

#[test]
fn empty_assignment_reverts_and_is_idempotent() {
	let mut s = app();
	s.eval(&["bindtags", ".top.btn", "a b c"]).unwrap();
	s.eval(&["bindtags", ".top.btn", ""]).unwrap();
	assert_eq!(s.query_tags(".top.btn").unwrap(), [".top.btn", "Button", ".top", "all"]);
	let none: [&str; 0] = [];
	s.set_tags(".top.btn", &none).unwrap();
	s.set_tags(".top.btn", &none).unwrap();
	assert_eq!(s.query_tags(".top.btn").unwrap(), [".top.btn", "Button", ".top", "all"]);
}

#[test]
fn path_tag_tracks_current_holder() {
	let mut s = app();
	s.windows_mut().create(".a", "Frame", WindowKind::Child).unwrap();
	s.eval(&["bindtags", ".top.btn", ".a all"]).unwrap();
	s.eval(&["bind", ".a", "<1>", "first-a"]).unwrap();
	s.eval(&["bind", "all", "<1>", "all"]).unwrap();

	assert_eq!(fire(&mut s, ".top.btn", "<1>"), ["first-a", "all"]);

	s.eval(&["destroy", ".a"]).unwrap();
	assert_eq!(fire(&mut s, ".top.btn", "<1>"), ["all"]);
	assert_eq!(s.query_tags(".top.btn").unwrap(), [".a", "all"]);

	s.windows_mut().create(".a", "Canvas", WindowKind::Child).unwrap();
	s.eval(&["bind", ".a", "<1>", "second-a"]).unwrap();
	assert_eq!(fire(&mut s, ".top.btn", "<1>"), ["second-a", "all"]);
}

#[test]
fn recreated_window_starts_with_defaults() {
	let mut s = app();
	s.eval(&["bindtags", ".top.btn", "Button all"]).unwrap();
	assert_eq!(s.query_tags(".top.btn").unwrap(), ["Button", "all"]);

	s.eval(&["destroy", ".top.btn"]).unwrap();
	s.windows_mut().create(".top.btn", "Button", WindowKind::Child).unwrap();
	assert_eq!(s.query_tags(".top.btn").unwrap(), [".top.btn", "Button", ".top", "all"]);
}

#[rstest]
#[case(5)]
#[case(INLINE_TAGS)]
#[case(INLINE_TAGS + 1)]
#[case(25)]
fn tag_lists_dispatch_in_order(#[case] count: usize) {
	let mut s = app();
	let tags: Vec<String> = (0..count).map(|i| format!("t{i:02}")).collect();
	for tag in &tags {
		s.eval(&["bind", tag.as_str(), "<Key>", tag.as_str()]).unwrap();
	}
	s.set_tags(".top.btn", &tags).unwrap();
	assert_eq!(fire(&mut s, ".top.btn", "<Key>"), tags);
}

#[test]
fn configured_wildcard_ends_chain_and_dispatch() {
	let config = BindingsConfig {
		wildcard: "every".into(),
		..BindingsConfig::default()
	};
	let mut windows = WindowTree::new(&config.main_class);
	windows.create(".f", "Frame", WindowKind::Child).unwrap();
	let mut s = Session::with_config(windows, PatternTable::new(), &config);
	s.eval(&["bind", "every", "<1>", "every"]).unwrap();
	s.eval(&["bind", "all", "<1>", "all"]).unwrap();

	assert_eq!(s.query_tags(".f").unwrap(), [".f", "Frame", ".", "every"]);
	assert_eq!(fire(&mut s, ".f", "<1>"), ["every"]);
}

#[test]
fn break_ends_dispatch() {
	let mut s = app();
	bind_markers(&mut s);
	s.eval(&["bind", "Button", "<1>", "break"]).unwrap();
	assert_eq!(fire(&mut s, ".top.btn", "<1>"), [".top.btn", "break"]);
}

proptest! {
	#[test]
	fn assigned_tags_round_trip(tags in prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,5}|\\.[a-z]{1,4}", 1..30)) {
		let mut s = app();
		s.set_tags(".top.btn", &tags).unwrap();
		prop_assert_eq!(s.query_tags(".top.btn").unwrap(), tags);
	}
}
