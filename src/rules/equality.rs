//! Equality rules.
//!
//! Values are printed through [`Render`], so absent values (`None`) are
//! reported alongside present ones. Absence compares symmetrically: two
//! `None`s are equal, and `None` never equals `Some(_)`.

use super::render::{Render, Rendered};
use crate::core::{name_label, AssuranceContext, ValuedContext};
use std::borrow::Cow;

/// Message for a failed `equal`.
pub fn not_equal_message<V: Render>(value: &V, name: Option<&str>, expected: &V) -> String {
    format!(
        "The{}value '{}' is not equal to the expected value '{}'.",
        name_label(name),
        Rendered(value),
        Rendered(expected)
    )
}

/// Message for a failed `not_equal`.
pub fn equal_message<V: Render>(value: &V, name: Option<&str>) -> String {
    format!(
        "The{}value is equal to the unexpected value '{}'.",
        name_label(name),
        Rendered(value)
    )
}

impl<E, V: PartialEq + Render> ValuedContext<E, V> {
    /// Fail unless the value equals `expected`.
    ///
    /// ```rust
    /// use assurance::Assure;
    ///
    /// assert!(Assure::is().equal(None::<u8>, None, "slot").is_ok());
    ///
    /// let error = Assure::is().equal(Some(1), None, "slot").unwrap_err();
    /// assert_eq!(
    ///     error.message(),
    ///     "The 'slot' value '1' is not equal to the expected value 'None'."
    /// );
    /// ```
    pub fn equal(self, expected: V) -> Result<Self, E> {
        self.assure(
            |value| *value != expected,
            |value, name| not_equal_message(value, name, &expected),
        )
    }

    /// Fail when the value equals `unexpected`.
    pub fn not_equal(self, unexpected: V) -> Result<Self, E> {
        self.assure(|value| *value == unexpected, equal_message::<V>)
    }
}

impl<E> AssuranceContext<E> {
    pub fn equal<V: PartialEq + Render>(
        self,
        value: V,
        expected: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).equal(expected)
    }

    pub fn not_equal<V: PartialEq + Render>(
        self,
        value: V,
        unexpected: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).not_equal(unexpected)
    }
}
