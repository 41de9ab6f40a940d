//! Entry points that start a chain with a preselected error kind.

use crate::core::AssuranceContext;
use crate::error::AssuranceError;

/// Starting points for assurance chains.
///
/// # Example
///
/// ```rust
/// use assurance::{Assure, AssuranceError};
///
/// fn open(path: &str, retries: u32) -> Result<(), AssuranceError> {
///     Assure::argument().not_white_space(path, "path")?;
///     Assure::argument().less_than_or_equal(retries, 5, "retries")?;
///     Ok(())
/// }
///
/// assert!(open("data.bin", 3).is_ok());
/// assert_eq!(
///     open("   ", 3).unwrap_err(),
///     AssuranceError::InvalidArgument("The string 'path' cannot be blank.".to_string())
/// );
/// ```
pub struct Assure;

impl Assure {
    /// General-purpose failures.
    pub fn that() -> AssuranceContext<AssuranceError> {
        Self::is()
    }

    /// General-purpose failures.
    pub fn is() -> AssuranceContext<AssuranceError> {
        Self::with_error(AssuranceError::Failed)
    }

    /// Failures caused by invalid arguments.
    pub fn argument() -> AssuranceContext<AssuranceError> {
        Self::with_error(AssuranceError::InvalidArgument)
    }

    /// Failures caused by invalid state for the requested operation.
    pub fn operation() -> AssuranceContext<AssuranceError> {
        Self::with_error(AssuranceError::InvalidOperation)
    }

    /// Failures of a caller-defined kind.
    pub fn with_error<E, F>(error_factory: F) -> AssuranceContext<E>
    where
        F: Fn(String) -> E + Send + Sync + 'static,
    {
        AssuranceContext::new(error_factory)
    }
}
