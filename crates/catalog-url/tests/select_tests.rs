//! Integration tests for url rewrite selection
//!
//! Covers explicit paths, key filtering, both context modes and the
//! fallbacks for unmatched or missing candidates.

use catalog_url::select_url_path;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Reference Scenarios
// ============================================================================

#[rstest]
#[case::explicit_path_wins(
    Some("foobar/top"),
    vec![Some("foobar"), Some("foobar/top")],
    "top",
    None,
    None,
    "foobar/top"
)]
#[case::longest_match_first_on_tie(
    None,
    vec![
        Some("top"),
        Some("top/urlKey"),
        Some("top/2nd/urlKey"),
        Some("other"),
        Some("other/urlKey"),
        Some("other/2nd/urlKey"),
    ],
    "urlKey",
    None,
    None,
    "top/2nd/urlKey"
)]
#[case::full_context_path(
    None,
    vec![Some("foobar"), Some("foobar/top"), Some("bar"), Some("bar/top"), Some("bar/foo/top")],
    "top",
    None,
    Some("bar/foo"),
    "bar/foo/top"
)]
#[case::context_key_is_parent(
    None,
    vec![Some("top"), Some("foobar/top"), Some("foobar/foo/top"), Some("foobar/bar/top")],
    "top",
    Some("bar"),
    None,
    "foobar/bar/top"
)]
#[case::no_match_falls_back_to_key(
    None,
    vec![Some("top"), Some("top/urlKey"), Some("top/2nd/urlKey")],
    "noKey",
    None,
    None,
    "noKey"
)]
#[case::null_candidate_tolerated(None, vec![None], "urlKey", None, None, "urlKey")]
fn test_select_url_path(
    #[case] url_path: Option<&str>,
    #[case] candidates: Vec<Option<&str>>,
    #[case] key: &str,
    #[case] context_key: Option<&str>,
    #[case] context_path: Option<&str>,
    #[case] expected: &str,
) {
    assert_eq!(
        select_url_path(url_path, candidates, key, context_key, context_path),
        expected
    );
}

// ============================================================================
// Context Path Handling
// ============================================================================

#[test]
fn test_partial_context_path_steers_choice() {
    // Sharing only the leading segment beats sharing nothing
    let candidates = [Some("men/tops/shirt"), Some("sale/summer/shirt")];
    assert_eq!(
        select_url_path(None, candidates, "shirt", None, Some("sale/winter")),
        "sale/summer/shirt"
    );
}

#[test]
fn test_context_path_narrows_to_shallower_match() {
    let candidates = [Some("sale/summer/deals/shirt"), Some("men/shirt")];
    assert_eq!(
        select_url_path(None, candidates, "shirt", None, Some("men/tops")),
        "men/shirt"
    );
}

#[test]
fn test_context_path_tie_keeps_input_order() {
    let candidates = [Some("men/a/shirt"), Some("men/b/shirt"), Some("men/shirt")];
    assert_eq!(
        select_url_path(None, candidates, "shirt", None, Some("men")),
        "men/a/shirt"
    );
}

#[test]
fn test_blank_context_path_uses_context_key() {
    let candidates = [Some("a/b/top"), Some("x/bar/top")];
    assert_eq!(
        select_url_path(None, candidates, "top", Some("bar"), Some(" ")),
        "x/bar/top"
    );
}

// ============================================================================
// Context Key Handling
// ============================================================================

#[test]
fn test_context_key_without_parent_match_is_ignored() {
    let candidates = [Some("a/top"), Some("a/b/top")];
    assert_eq!(
        select_url_path(None, candidates, "top", Some("missing"), None),
        "a/b/top"
    );
}

#[test]
fn test_context_key_picks_deepest_among_matches() {
    let candidates = [Some("bar/top"), Some("x/bar/top"), Some("y/top")];
    assert_eq!(
        select_url_path(None, candidates, "top", Some("bar"), None),
        "x/bar/top"
    );
}

// ============================================================================
// Inputs
// ============================================================================

#[test]
fn test_accepts_owned_candidates() {
    let rewrites = vec!["men/shirt".to_string(), "men/tops/shirt".to_string()];
    assert_eq!(
        select_url_path(None, rewrites.iter().map(Some), "shirt", None, None),
        "men/tops/shirt"
    );
}

#[test]
fn test_null_entries_between_candidates() {
    let candidates = [None, Some("a/top"), None, Some("b/c/top"), None];
    assert_eq!(select_url_path(None, candidates, "top", None, None), "b/c/top");
}

#[test]
fn test_empty_candidates() {
    let candidates: [Option<&str>; 0] = [];
    assert_eq!(select_url_path(None, candidates, "top", Some("a"), Some("a/b")), "top");
}

#[test]
fn test_single_segment_candidate_equal_to_key() {
    assert_eq!(select_url_path(None, [Some("top")], "top", None, None), "top");
}
