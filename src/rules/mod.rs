//! Built-in rules.
//!
//! Every rule follows the same shape:
//! - a pure predicate that returns `true` when the check fails
//! - a public message factory producing the exact failure text
//! - a method on [`ValuedContext`](crate::core::ValuedContext) that runs the check
//! - a method on [`AssuranceContext`](crate::core::AssuranceContext) that takes
//!   the value and its name, attaches them and delegates to the first
//!
//! Rules defined outside this crate follow the same shape through an
//! extension trait implemented for both context types.

pub mod collection;
pub mod comparison;
pub mod equality;
pub mod filesystem;
pub mod operation;
pub mod render;
pub mod text;

pub use collection::{CollectionKind, Countable};
pub use render::{Render, Rendered};
