//! Per-worker test variables.
//!
//! This module provides the named-variable table commands fall back to when
//! a path matches neither the `request.*` nor `response.*` vocabulary, and
//! the loader that seeds it from the workspace's `vars.json` file.

pub mod loader;
pub mod store;

pub use loader::{load_variables, LoadError};
pub use store::VariableStore;
