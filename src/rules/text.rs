//! Text rules.

use crate::core::{name_label, AssuranceContext, ValuedContext};
use std::borrow::Cow;

/// Message for a blank string.
pub fn blank_message(name: Option<&str>) -> String {
    format!("The string{}cannot be blank.", name_label(name))
}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

impl<E, V: AsRef<str>> ValuedContext<E, V> {
    /// Fail when the text is empty or consists only of whitespace.
    pub fn not_white_space(self) -> Result<Self, E> {
        self.assure_named(|text| is_blank(text.as_ref()), blank_message)
    }
}

impl<E> AssuranceContext<E> {
    /// Attach `value` as `name` and fail when it is blank.
    pub fn not_white_space<V: AsRef<str>>(
        self,
        value: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).not_white_space()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Assure, AssuranceError};

    #[test]
    fn text_with_visible_characters_passes() {
        for text in ["_", "a    ", "  o  ", "    z"] {
            assert!(Assure::is().not_white_space(text, "text").is_ok());
        }
    }

    #[test]
    fn blank_text_fails() {
        for text in ["", "   ", " \t ", "\n\u{2003}"] {
            let error = Assure::is().not_white_space(text, "text").unwrap_err();
            assert_eq!(
                error,
                AssuranceError::Failed("The string 'text' cannot be blank.".to_string())
            );
        }
    }

    #[test]
    fn owned_strings_are_accepted() {
        let context = Assure::is()
            .not_white_space(String::from("value"), "owned")
            .unwrap();
        assert_eq!(context.into_value(), "value");
    }

    #[test]
    fn unnamed_message_omits_the_name() {
        let error = Assure::argument()
            .with_value(String::new())
            .not_white_space()
            .unwrap_err();
        assert_eq!(error.message(), "The string cannot be blank.");
    }
}
