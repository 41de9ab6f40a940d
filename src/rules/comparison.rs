//! Ordering rules.
//!
//! Messages describe the relationship that actually holds. The strict rules
//! report a tie as "equal to", so `less_than(5, 5)` reads "is equal to '5'",
//! and values without an ordering (NaN) read "is not comparable to".

use crate::core::{name_label, AssuranceContext, ValuedContext};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::Display;

/// Message for a failed `less_than`.
pub fn less_than_message<V>(value: &V, name: Option<&str>, bound: &V) -> String
where
    V: PartialOrd + Display,
{
    ordering_message(value, name, bound)
}

/// Message for a failed `less_than_or_equal`.
pub fn less_than_or_equal_message<V>(value: &V, name: Option<&str>, bound: &V) -> String
where
    V: PartialOrd + Display,
{
    ordering_message(value, name, bound)
}

/// Message for a failed `greater_than`.
pub fn greater_than_message<V>(value: &V, name: Option<&str>, bound: &V) -> String
where
    V: PartialOrd + Display,
{
    ordering_message(value, name, bound)
}

/// Message for a failed `greater_than_or_equal`.
pub fn greater_than_or_equal_message<V>(value: &V, name: Option<&str>, bound: &V) -> String
where
    V: PartialOrd + Display,
{
    ordering_message(value, name, bound)
}

fn ordering_message<V: PartialOrd + Display>(value: &V, name: Option<&str>, bound: &V) -> String {
    format!(
        "The{}value '{value}' is {} '{bound}'.",
        name_label(name),
        relation(value, bound)
    )
}

fn relation<V: PartialOrd>(value: &V, bound: &V) -> &'static str {
    match value.partial_cmp(bound) {
        Some(Ordering::Less) => "less than",
        Some(Ordering::Equal) => "equal to",
        Some(Ordering::Greater) => "greater than",
        None => "not comparable to",
    }
}

impl<E, V: PartialOrd + Display> ValuedContext<E, V> {
    /// Fail unless the value is strictly less than `bound`.
    pub fn less_than(self, bound: V) -> Result<Self, E> {
        self.assure(
            |value| !(*value < bound),
            |value, name| less_than_message(value, name, &bound),
        )
    }

    /// Fail when the value is greater than `bound`.
    pub fn less_than_or_equal(self, bound: V) -> Result<Self, E> {
        self.assure(
            |value| !(*value <= bound),
            |value, name| less_than_or_equal_message(value, name, &bound),
        )
    }

    /// Fail unless the value is strictly greater than `bound`.
    pub fn greater_than(self, bound: V) -> Result<Self, E> {
        self.assure(
            |value| !(*value > bound),
            |value, name| greater_than_message(value, name, &bound),
        )
    }

    /// Fail when the value is less than `bound`.
    pub fn greater_than_or_equal(self, bound: V) -> Result<Self, E> {
        self.assure(
            |value| !(*value >= bound),
            |value, name| greater_than_or_equal_message(value, name, &bound),
        )
    }
}

impl<E> AssuranceContext<E> {
    pub fn less_than<V: PartialOrd + Display>(
        self,
        value: V,
        bound: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).less_than(bound)
    }

    pub fn less_than_or_equal<V: PartialOrd + Display>(
        self,
        value: V,
        bound: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).less_than_or_equal(bound)
    }

    pub fn greater_than<V: PartialOrd + Display>(
        self,
        value: V,
        bound: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).greater_than(bound)
    }

    pub fn greater_than_or_equal<V: PartialOrd + Display>(
        self,
        value: V,
        bound: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).greater_than_or_equal(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Assure;

    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    struct Version(u32);

    impl Display for Version {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "v{}", self.0)
        }
    }

    #[test]
    fn less_than_passes_for_smaller_values() {
        assert!(Assure::is().less_than(1, 2, "v").is_ok());
        assert!(Assure::is().less_than(-1.5, 0.0, "v").is_ok());
    }

    #[test]
    fn less_than_reports_greater_values() {
        let error = Assure::is().less_than(3, 2, "v").unwrap_err();
        assert_eq!(error.message(), "The 'v' value '3' is greater than '2'.");
    }

    #[test]
    fn less_than_reports_ties_as_equal() {
        let error = Assure::is().less_than(2, 2, "v").unwrap_err();
        assert_eq!(error.message(), "The 'v' value '2' is equal to '2'.");
    }

    #[test]
    fn less_than_or_equal_accepts_ties() {
        assert!(Assure::is().less_than_or_equal(2, 2, "v").is_ok());

        let error = Assure::is().less_than_or_equal(5, 2, "v").unwrap_err();
        assert_eq!(error.message(), "The 'v' value '5' is greater than '2'.");
    }

    #[test]
    fn greater_than_reports_smaller_values_and_ties() {
        assert!(Assure::is().greater_than(3, 2, "v").is_ok());

        let error = Assure::is().greater_than(1, 2, "v").unwrap_err();
        assert_eq!(error.message(), "The 'v' value '1' is less than '2'.");

        let error = Assure::is().greater_than(2, 2, "v").unwrap_err();
        assert_eq!(error.message(), "The 'v' value '2' is equal to '2'.");
    }

    #[test]
    fn greater_than_or_equal_accepts_ties() {
        assert!(Assure::is().greater_than_or_equal(2, 2, "v").is_ok());

        let error = Assure::is().greater_than_or_equal(1, 2, "v").unwrap_err();
        assert_eq!(error.message(), "The 'v' value '1' is less than '2'.");
    }

    #[test]
    fn custom_ordered_types_use_their_display() {
        let error = Assure::is()
            .less_than(Version(4), Version(3), "version")
            .unwrap_err();
        assert_eq!(error.message(), "The 'version' value 'v4' is greater than 'v3'.");
    }

    #[test]
    fn nan_never_satisfies_an_ordering() {
        let expected = "The 'x' value 'NaN' is not comparable to '1'.";

        let error = Assure::is().less_than(f64::NAN, 1.0, "x").unwrap_err();
        assert_eq!(error.message(), expected);
        let error = Assure::is().less_than_or_equal(f64::NAN, 1.0, "x").unwrap_err();
        assert_eq!(error.message(), expected);
        let error = Assure::is().greater_than(f64::NAN, 1.0, "x").unwrap_err();
        assert_eq!(error.message(), expected);
        let error = Assure::is().greater_than_or_equal(f64::NAN, 1.0, "x").unwrap_err();
        assert_eq!(error.message(), expected);
    }

    #[test]
    fn rules_chain_on_one_value() {
        let context = Assure::argument()
            .with_named_value(5, "level")
            .greater_than(0)
            .and_then(|c| c.less_than_or_equal(10))
            .unwrap();
        assert_eq!(*context.value(), 5);
    }
}
