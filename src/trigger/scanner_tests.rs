//! Tests for trigger/scanner

use proptest::prelude::*;

use super::*;

#[test]
fn test_query_after_trigger_at_end() {
    let result = scan("hello /Jo", 9, '/');

    assert!(result.active);
    assert_eq!(result.query, "Jo");
    assert_eq!(result.left_boundary, 6);
    assert_eq!(result.caret_range(), Some(CaretRange { start: 6, end: 8 }));
}

#[test]
fn test_trigger_alone_gives_empty_query() {
    let result = scan("hello /", 7, '/');

    assert!(result.active);
    assert_eq!(result.query, "");
    assert_eq!(result.caret_range(), Some(CaretRange { start: 6, end: 6 }));
}

#[test]
fn test_caret_at_start_is_inactive() {
    let result = scan("/John", 0, '/');

    assert!(!result.active);
    assert_eq!(result.left_boundary, 0);
    assert!(result.caret_range().is_none());
}

#[test]
fn test_trigger_at_start_of_text() {
    let result = scan("/to", 3, '/');

    assert!(result.active);
    assert_eq!(result.query, "to");
    assert_eq!(result.left_boundary, 0);
}

#[test]
fn test_token_without_trigger_is_inactive() {
    let result = scan("hello world", 11, '/');

    assert!(!result.active);
    assert_eq!(result.left_boundary, 6);
}

#[test]
fn test_trigger_in_middle_of_token_is_inactive() {
    let result = scan("path/to", 7, '/');
    assert!(!result.active);
}

#[test]
fn test_caret_in_middle_of_query() {
    let result = scan("say /Johnny now", 7, '/');

    assert!(result.active);
    assert_eq!(result.query, "Jo");
}

#[test]
fn test_caret_after_whitespace_is_inactive() {
    let result = scan("/Jo ", 4, '/');

    assert!(!result.active);
    assert_eq!(result.left_boundary, 4);
}

#[test]
fn test_newline_is_a_boundary() {
    let result = scan("first line\n/ja", 14, '/');

    assert!(result.active);
    assert_eq!(result.query, "ja");
    assert_eq!(result.left_boundary, 11);
}

#[test]
fn test_caret_past_end_is_clamped() {
    let result = scan("/Jo", 42, '/');

    assert!(result.active);
    assert_eq!(result.caret, 3);
    assert_eq!(result.query, "Jo");
}

#[test]
fn test_offsets_count_characters_not_bytes() {
    let result = scan("héllo /wö", 9, '/');

    assert!(result.active);
    assert_eq!(result.query, "wö");
    assert_eq!(result.caret_range(), Some(CaretRange { start: 6, end: 8 }));
}

#[test]
fn test_custom_trigger() {
    assert!(scan("ping @ja", 8, '@').active);
    assert!(!scan("ping @ja", 8, '/').active);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_query_never_contains_whitespace(
        text in "[a-c/ \\t\\n]{0,20}",
        caret in 0usize..25,
    ) {
        let result = scan(&text, caret, '/');
        prop_assert!(!result.query.chars().any(char::is_whitespace));
    }

    #[test]
    fn prop_boundary_never_exceeds_caret(
        text in "[a-c/ \\n]{0,20}",
        caret in 0usize..25,
    ) {
        let result = scan(&text, caret, '/');
        prop_assert!(result.left_boundary <= result.caret);
        prop_assert!(result.caret <= text.chars().count());
    }

    #[test]
    fn prop_active_range_covers_query(
        text in "[a-c/ ]{0,20}",
        caret in 0usize..25,
    ) {
        let result = scan(&text, caret, '/');
        if let Some(range) = result.caret_range() {
            let chars: Vec<char> = text.chars().collect();
            prop_assert_eq!(chars[range.start], '/');
            let query: String = chars[range.start + 1..range.end + 1].iter().collect();
            prop_assert_eq!(query, result.query);
        }
    }
}
