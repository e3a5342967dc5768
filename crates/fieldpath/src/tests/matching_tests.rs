//! Tests for path matching, structural equality, and hashing.

use std::collections::HashMap;

use rstest::rstest;

use crate::FieldPath;

fn parsed(input: &str) -> FieldPath {
    FieldPath::parse(input)
        .expect("input must parse")
        .expect("input must yield a path")
}

#[test]
fn matching_is_reflexive() {
    let path = parsed("a.b[2].c");
    assert!(path.matches(&path));
}

#[rstest]
#[case("a.*.c", "a.b.c")]
#[case("a.b.c", "a.*.c")]
#[case("variants[*]", "variants[7]")]
#[case("*.b", "a.b")]
fn wildcards_match_concrete_elements_symmetrically(#[case] left: &str, #[case] right: &str) {
    let left = parsed(left);
    let right = parsed(right);
    assert!(left.matches(&right));
    assert!(right.matches(&left));
}

#[rstest]
#[case("a.b.c", "a.x.c")]
#[case("a[0]", "a[1]")]
#[case("a.b", "x")]
fn concrete_mismatches_do_not_match(#[case] left: &str, #[case] right: &str) {
    assert!(!parsed(left).matches(&parsed(right)));
}

#[test]
fn matching_compares_only_the_common_prefix() {
    // The shorter path constrains nothing beyond its own length.
    assert!(parsed("a.*").matches(&parsed("a.b.c")));
    assert!(parsed("a.b.c").matches(&parsed("a.*")));
    assert!(parsed("a").matches(&parsed("a.b.c.d")));
}

#[test]
fn equality_is_strict_about_wildcards() {
    let wildcard = parsed("a.*");
    let concrete = parsed("a.b");
    assert!(wildcard.matches(&concrete));
    assert_ne!(wildcard, concrete);
    assert_eq!(wildcard, parsed("a.*"));
}

#[test]
fn equality_requires_the_same_length() {
    assert_ne!(parsed("a.b"), parsed("a.b.c"));
    assert_eq!(parsed("a.b.c"), parsed("a.b.c"));
}

#[test]
fn bracket_and_dot_fields_are_the_same_element() {
    assert_eq!(parsed("test.some.long[path]"), parsed("test.some.long.path"));
}

#[test]
fn indices_and_fields_never_conflate() {
    // `a[0]` is an indexed element, `a.0` a field named "0".
    assert_ne!(parsed("a[0]"), parsed("a.0"));
    assert!(!parsed("a[0]").matches(&parsed("a.0")));
}

#[test]
fn equal_paths_hash_equal() {
    let mut lookup = HashMap::new();
    lookup.insert(parsed("variants[0].prices"), "first");
    assert_eq!(lookup.get(&parsed("variants[0].prices")), Some(&"first"));
    assert_eq!(lookup.get(&parsed("variants[0].price")), None);
}

#[test]
fn starts_with_is_directional() {
    let path = parsed("variants[0].prices.purchasePrice");
    assert!(path.starts_with(&parsed("variants[0]")));
    assert!(path.starts_with(&parsed("variants[*].prices")));
    assert!(path.starts_with(&path.clone()));
    // A prefix longer than the path never passes, even all-wildcards.
    assert!(!parsed("variants[0]").starts_with(&path));
    assert!(!parsed("a.b").starts_with(&parsed("*.*.*")));
    assert!(!path.starts_with(&parsed("prices")));
}

#[rstest]
#[case("a.*.c", "a.b.c", true)]
#[case("a.b", "a.c", false)]
#[case("a.b", "", false)]
#[case("a.b", ".", false)]
#[case("a.b", "a]b", false)]
fn matches_str_parses_and_matches(
    #[case] path: &str,
    #[case] candidate: &str,
    #[case] expected: bool,
) {
    assert_eq!(parsed(path).matches_str(candidate), expected);
}

#[test]
fn derived_paths_keep_matching_invariants() {
    let base = parsed("a.*");
    let child = base.child("c").expect("valid name");
    assert!(!child.is_direct());
    assert!(child.matches(&parsed("a.b.c")));

    let direct_again = child.sibling_element(crate::PathElement::index(1));
    assert_eq!(direct_again.value(), "a.*[1]");
    assert!(!direct_again.is_direct());
}
