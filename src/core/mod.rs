//! The assurance engine.
//!
//! This module contains everything rules are built from:
//! - Contexts carrying an error kind and, optionally, a named value
//! - The `assure` primitives that evaluate a failure predicate
//! - The environment seam consulted by path rules
//! - Name formatting shared by every message
//!
//! Nothing in this module names a concrete error kind.

mod context;
mod environment;
mod label;

pub use context::{AssuranceContext, ErrorFactory, ValuedContext};
pub use environment::{file_system, Environment, FileSystem};
pub use label::name_label;
