//! Macros that capture the checked expression as its diagnostic name.

/// Attach a value named after the expression that produced it.
///
/// # Example
///
/// ```
/// use assurance::{with_value, Assure};
///
/// let retries = 3;
/// let context = with_value!(Assure::argument(), retries);
///
/// assert_eq!(context.name(), Some("retries"));
/// ```
#[macro_export]
macro_rules! with_value {
    ($context:expr, $value:expr $(,)?) => {
        $context.with_named_value($value, stringify!($value))
    };
}

/// Run a rule against an expression, naming the value after the expression.
///
/// `assure!(context, rule(value, operands...))` expands to
/// `context.with_named_value(value, "value").rule(operands...)`, so it works
/// with every rule that has a valued-context method, including rules added
/// through extension traits.
///
/// # Example
///
/// ```
/// use assurance::{assure, Assure};
///
/// let user_name = "  ";
/// let error = assure!(Assure::argument(), not_white_space(user_name)).unwrap_err();
/// assert_eq!(error.message(), "The string 'user_name' cannot be blank.");
///
/// let attempts = 4;
/// let error = assure!(Assure::is(), less_than(attempts, 3)).unwrap_err();
/// assert_eq!(error.message(), "The 'attempts' value '4' is greater than '3'.");
/// ```
#[macro_export]
macro_rules! assure {
    ($context:expr, $rule:ident($value:expr $(, $operand:expr)* $(,)?)) => {
        $crate::with_value!($context, $value).$rule($($operand),*)
    };
}
