//! Property-based tests for the assurance engine and the built-in rules.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use assurance::rules::comparison::{greater_than_message, less_than_message};
use assurance::rules::text::blank_message;
use assurance::{Assure, AssuranceContext, AssuranceError};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Kind {
    First(String),
    Second(String),
}

prop_compose! {
    fn arbitrary_name()(name in prop::option::of("[a-z_]{1,12}")) -> Option<String> {
        name
    }
}

prop_compose! {
    fn blank_text()(chars in prop::collection::vec(
        prop::sample::select(vec![' ', '\t', '\n', '\r', '\u{a0}', '\u{2003}']),
        0..8,
    )) -> String {
        chars.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn bare_assure_fails_iff_condition(failed in any::<bool>(), message in ".*") {
        let result = AssuranceContext::new(Kind::First).assure(failed, message.clone());

        match result {
            Ok(_) => {
                prop_assert!(!failed);
            }
            Err(error) => {
                prop_assert!(failed);
                prop_assert_eq!(error, Kind::First(message));
            }
        }
    }

    #[test]
    fn valued_assure_fails_iff_predicate(
        value in any::<i64>(),
        threshold in any::<i64>(),
        name in arbitrary_name(),
    ) {
        let context = match name.clone() {
            Some(name) => AssuranceContext::new(Kind::First).with_named_value(value, name),
            None => AssuranceContext::new(Kind::First).with_value(value),
        };

        let result = context.assure(
            |v| *v > threshold,
            |v, n| format!("{v}:{}", n.unwrap_or("-")),
        );

        if value > threshold {
            let expected = format!("{value}:{}", name.as_deref().unwrap_or("-"));
            prop_assert_eq!(result.unwrap_err(), Kind::First(expected));
        } else {
            let context = result.unwrap();
            prop_assert_eq!(*context.value(), value);
            prop_assert_eq!(context.name(), name.as_deref());
        }
    }

    #[test]
    fn error_kind_round_trip_matches_direct_construction(
        value in any::<u32>(),
        name in "[a-z]{1,8}",
    ) {
        let converted = AssuranceContext::new(Kind::First)
            .with_named_value(value, name.clone())
            .with_error_kind(Kind::First)
            .with_error_kind(Kind::Second);
        let direct = AssuranceContext::new(Kind::Second).with_named_value(value, name.clone());

        prop_assert_eq!(converted.value(), direct.value());
        prop_assert_eq!(converted.name(), direct.name());

        let from_converted = converted.assure(|_| true, |_, _| "boom".to_string()).unwrap_err();
        let from_direct = direct.assure(|_| true, |_, _| "boom".to_string()).unwrap_err();
        prop_assert_eq!(from_converted, from_direct);
    }

    #[test]
    fn ordering_rules_agree_with_ordering(a in any::<i32>(), b in any::<i32>()) {
        let less = Assure::is().less_than(a, b, "a");
        let greater = Assure::is().greater_than(a, b, "a");

        prop_assert_eq!(less.is_ok(), a < b);
        prop_assert_eq!(greater.is_ok(), a > b);
        prop_assert_eq!(Assure::is().less_than_or_equal(a, b, "a").is_ok(), a <= b);
        prop_assert_eq!(Assure::is().greater_than_or_equal(a, b, "a").is_ok(), a >= b);

        if let Err(error) = less {
            prop_assert_eq!(error.message(), less_than_message(&a, Some("a"), &b));
        }
        if let Err(error) = greater {
            prop_assert_eq!(error.message(), greater_than_message(&a, Some("a"), &b));
        }
    }

    #[test]
    fn smaller_value_fails_greater_than_with_less_than_wording(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a < b);

        prop_assert!(Assure::is().less_than(a, b, "a").is_ok());
        let error = Assure::is().greater_than(a, b, "a").unwrap_err();
        prop_assert_eq!(
            error.message(),
            format!("The 'a' value '{a}' is less than '{b}'.")
        );
    }

    #[test]
    fn ties_are_reported_as_equal(a in any::<i32>()) {
        let less = Assure::is().less_than(a, a, "a").unwrap_err();
        let greater = Assure::is().greater_than(a, a, "a").unwrap_err();

        let expected = format!("The 'a' value '{a}' is equal to '{a}'.");
        prop_assert_eq!(less.message(), expected.as_str());
        prop_assert_eq!(greater.message(), expected.as_str());
    }

    #[test]
    fn emptiness_follows_length(items in prop::collection::vec(any::<u8>(), 0..16)) {
        let is_empty = items.is_empty();

        prop_assert_eq!(Assure::is().empty(items.clone(), "items").is_ok(), is_empty);
        prop_assert_eq!(Assure::is().not_empty(items.as_slice(), "items").is_ok(), !is_empty);
    }

    #[test]
    fn blank_text_always_fails(text in blank_text()) {
        let error = Assure::argument().not_white_space(text.as_str(), "text").unwrap_err();
        prop_assert_eq!(
            error,
            AssuranceError::InvalidArgument(blank_message(Some("text")))
        );
    }

    #[test]
    fn text_with_visible_character_passes(
        prefix in blank_text(),
        visible in "[[:graph:]]",
        suffix in blank_text(),
    ) {
        let text = format!("{prefix}{visible}{suffix}");
        prop_assert!(Assure::is().not_white_space(text, "text").is_ok());
    }

    #[test]
    fn equality_is_symmetric_over_absence(a in prop::option::of(0..4u8), b in prop::option::of(0..4u8)) {
        prop_assert_eq!(Assure::is().equal(a, b, "a").is_ok(), a == b);
        prop_assert_eq!(Assure::is().equal(b, a, "b").is_ok(), a == b);
        prop_assert_eq!(Assure::is().not_equal(a, b, "a").is_ok(), a != b);
    }
}
