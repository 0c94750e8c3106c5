//! Property tests for template compilation and matching.

use proptest::prelude::*;
use scoperoute::error::PatternError;
use scoperoute::pattern::PathPattern;

fn segment_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn segment_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._~-]{1,12}"
}

proptest! {
    #[test]
    fn prop_unique_placeholders_bind_in_order(
        names in prop::collection::btree_set(segment_name(), 1..6),
        values in prop::collection::vec(segment_value(), 6),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let template: String = names.iter().map(|n| format!("/seg/:{n}")).collect();
        let pattern = PathPattern::compile(&template).unwrap();
        prop_assert_eq!(pattern.param_count(), names.len());

        let path: String = values.iter().take(names.len()).map(|v| format!("/seg/{v}")).collect();
        let params = pattern.match_path(&path).unwrap();
        prop_assert_eq!(params.len(), names.len());
        for ((bound_name, bound_value), (name, value)) in params.iter().zip(names.iter().zip(values.iter())) {
            prop_assert_eq!(bound_name.as_ref(), name.as_str());
            prop_assert_eq!(bound_value, value);
        }
    }

    #[test]
    fn prop_repeated_placeholder_is_rejected(
        name in segment_name(),
        prefix in "[a-z]{1,6}",
    ) {
        let template = format!("/{prefix}/:{name}/x/<{name}>");
        let err = PathPattern::compile(&template).unwrap_err();
        let is_duplicate = matches!(err, PatternError::DuplicateParam { .. });
        prop_assert!(is_duplicate);
    }

    #[test]
    fn prop_static_template_matches_only_itself(
        segments in prop::collection::vec("[a-z]{1,8}", 1..5),
        extra in "[a-z]{1,8}",
    ) {
        let template: String = segments.iter().map(|s| format!("/{s}")).collect();
        let pattern = PathPattern::compile(&template).unwrap();
        prop_assert!(pattern.is_static());
        prop_assert!(pattern.match_path(&template).is_some());
        let longer = format!("{template}/{extra}");
        prop_assert!(pattern.match_path(&longer).is_none());
    }

    #[test]
    fn prop_placeholder_never_spans_segments(value in segment_value(), tail in segment_value()) {
        let pattern = PathPattern::compile("/item/:id").unwrap();
        let path = format!("/item/{value}/{tail}");
        prop_assert!(pattern.match_path(&path).is_none());
    }
}
