//! Per-worker variable store.
//!
//! Test steps register named string values here (captured tokens, generated
//! ids, counters) and later commands read them back by name. Each concurrent
//! test worker owns an independent store, created when the worker starts and
//! dropped when it finishes; nothing is shared across workers, so reads and
//! writes need no synchronization.

use super::loader::{load_variables, LoadError};
use std::collections::HashMap;
use std::path::Path;

/// Named string variables owned by one test worker.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    vars: HashMap<String, String>,
}

impl VariableStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given variables.
    pub fn with_variables(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Creates a store seeded from the workspace's variables file.
    ///
    /// This is the explicit "create worker context" step: the seed file is
    /// read once here, not lazily on first access. A missing file yields an
    /// empty store; a malformed file is an error.
    ///
    /// # Arguments
    ///
    /// * `workspace_path` - Directory to search for `vars.json`
    pub fn load(workspace_path: &Path) -> Result<Self, LoadError> {
        let vars = load_variables(workspace_path)?;
        log::debug!("variable store seeded with {} entries", vars.len());
        Ok(Self { vars })
    }

    /// Looks up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Merges a map of variables into the store.
    ///
    /// Used by step definitions that register several values at once.
    pub fn set_all(&mut self, vars: HashMap<String, String>) {
        self.vars.extend(vars);
    }

    /// Checks whether a variable is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Number of variables currently defined.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
