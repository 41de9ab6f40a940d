//! Control-flow rules.

use crate::core::AssuranceContext;

/// Message for reaching a statement marked unreachable.
pub const NOT_REACHED_MESSAGE: &str = "The statement is not supposed to be reached.";

impl<E> AssuranceContext<E> {
    /// Always fail. Marks a branch that must never execute.
    ///
    /// Unlike `unreachable!`, this returns an error of the chain's kind
    /// instead of panicking. Usually paired with [`Assure::operation`](crate::Assure::operation).
    ///
    /// ```rust
    /// use assurance::{Assure, AssuranceError};
    ///
    /// fn parity(n: u8) -> Result<&'static str, AssuranceError> {
    ///     match n % 2 {
    ///         0 => Ok("even"),
    ///         1 => Ok("odd"),
    ///         _ => Err(Assure::operation().not_reached().unwrap_err()),
    ///     }
    /// }
    ///
    /// assert_eq!(parity(3).unwrap(), "odd");
    /// ```
    pub fn not_reached(self) -> Result<Self, E> {
        self.assure(true, NOT_REACHED_MESSAGE)
    }
}
