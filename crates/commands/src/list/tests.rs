use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("", &[])]
#[case("   ", &[])]
#[case("Button all", &["Button", "all"])]
#[case("  .top\t\n Button  ", &[".top", "Button"])]
#[case("{two words} x", &["two words", "x"])]
#[case("{a {b c}} d", &["a {b c}", "d"])]
#[case("{}", &[""])]
#[case("\"q u\" z", &["q u", "z"])]
#[case("a\\ b", &["a b"])]
#[case("a\\", &["a\\"])]
#[case("x \\", &["x", "\\"])]
fn splits_elements(#[case] input: &str, #[case] expected: &[&str]) {
	assert_eq!(parse_list(input).unwrap(), expected);
}

#[rstest]
#[case("{open", "unmatched open brace in list")]
#[case("\"open", "unmatched open quote in list")]
#[case("{a}b", "list element in braces followed by \"b\" instead of space")]
#[case("\"a\"b", "list element in quotes followed by \"b\" instead of space")]
fn reports_malformed_lists(#[case] input: &str, #[case] message: &str) {
	assert_eq!(parse_list(input).unwrap_err().message, message);
}

#[test]
fn error_points_at_open_brace() {
	assert_eq!(parse_list("ok {bad").unwrap_err().position, 3);
}

#[test]
fn formats_plain_and_grouped_elements() {
	assert_eq!(format_list(&[".top.btn", "Button", ".top", "all"]), ".top.btn Button .top all");
	assert_eq!(format_list(&["two words", ""]), "{two words} {}");
	assert_eq!(format_list(&["un{balanced"]), "un\\{balanced");
	let none: [&str; 0] = [];
	assert_eq!(format_list(&none), "");
}

proptest! {
	#[test]
	fn format_then_parse_preserves_elements(elements in prop::collection::vec("[a-z .{}\"\\\\]{0,6}", 0..8)) {
		let formatted = format_list(&elements);
		prop_assert_eq!(parse_list(&formatted).unwrap(), elements);
	}
}
