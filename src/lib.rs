//! Assurance: fluent precondition checks with pluggable error kinds
//!
//! Assurance replaces ad-hoc `if !valid { return Err(...) }` blocks with
//! chains of small, reusable rules. Each chain starts from a context that
//! knows which kind of error to produce. Rules attach the value under test,
//! evaluate a failure predicate and either hand the context back or return
//! the error with a consistently worded message.
//!
//! # Core Concepts
//!
//! - **Contexts**: `AssuranceContext` carries an error factory, `ValuedContext`
//!   adds the value under test and its diagnostic name
//! - **Rules**: a failure predicate paired with a message factory, exposed on
//!   both context types
//! - **Environment**: the seam path rules use to observe the filesystem
//!
//! Rules know nothing about error kinds, and contexts know nothing about rules.
//! Any rule runs under any error kind.
//!
//! # Example
//!
//! ```rust
//! use assurance::{Assure, AssuranceError};
//!
//! fn resize(width: u32, height: u32) -> Result<(), AssuranceError> {
//!     Assure::argument()
//!         .with_named_value(width, "width")
//!         .greater_than(0)?
//!         .less_than_or_equal(4096)?;
//!     Assure::argument().greater_than(height, 0, "height")?;
//!     Ok(())
//! }
//!
//! assert!(resize(640, 480).is_ok());
//! assert_eq!(
//!     resize(0, 480).unwrap_err(),
//!     AssuranceError::InvalidArgument("The 'width' value '0' is equal to '0'.".to_string())
//! );
//! ```

pub mod assure;
pub mod core;
pub mod error;
mod macros;
pub mod rules;

// Re-export commonly used types
pub use assure::Assure;
pub use crate::core::{AssuranceContext, Environment, FileSystem, ValuedContext};
pub use error::AssuranceError;
