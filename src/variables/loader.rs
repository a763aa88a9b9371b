//! Variables seed-file loader.
//!
//! Each test worker's variable store is seeded from a `vars.json` file: a
//! flat JSON object mapping variable names to string values. The loader
//! searches the workspace directory and up to 3 parent directories; a
//! missing file is a graceful empty result, since test suites without
//! predefined variables are common.

use serde_json;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading the variables file.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Failed to parse JSON content.
    Parse(String),

    /// The file parsed but is not a flat object of string values.
    InvalidFormat(String),

    /// IO error occurred while reading the file.
    Io(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Parse(msg) => write!(f, "Failed to parse variables file: {}", msg),
            LoadError::InvalidFormat(msg) => write!(f, "Invalid variables format: {}", msg),
            LoadError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Supported variables file names in order of preference
const VAR_FILE_NAMES: &[&str] = &["vars.json", ".vars.json"];

/// Maximum number of parent directories to search
const MAX_PARENT_SEARCH_DEPTH: usize = 3;

/// Loads seed variables from the workspace.
///
/// Searches for a variables file starting from the workspace path and
/// traversing up to 3 parent directories. Returns an empty map if no file is
/// found (graceful fallback).
///
/// # Arguments
///
/// * `workspace_path` - The root workspace directory to start searching from
///
/// # Returns
///
/// * `Ok(HashMap)` - Loaded variables, or empty if no file was found
/// * `Err(LoadError)` - If a file exists but could not be read or parsed
pub fn load_variables(workspace_path: &Path) -> Result<HashMap<String, String>, LoadError> {
    let var_file = match find_variables_file(workspace_path) {
        Some(path) => path,
        None => {
            log::info!(
                "no variables file found under {}; starting with an empty store",
                workspace_path.display()
            );
            return Ok(HashMap::new());
        }
    };

    let content = fs::read_to_string(&var_file)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    parse_variables(raw)
}

/// Finds the variables file by searching workspace and parent directories
fn find_variables_file(workspace_path: &Path) -> Option<PathBuf> {
    let mut current_path = workspace_path.to_path_buf();

    for _ in 0..=MAX_PARENT_SEARCH_DEPTH {
        for file_name in VAR_FILE_NAMES {
            let candidate = current_path.join(file_name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        match current_path.parent() {
            Some(parent) => current_path = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Validates the parsed JSON and converts it to a variable map.
///
/// The file must be a single object whose values are all strings.
fn parse_variables(raw: serde_json::Value) -> Result<HashMap<String, String>, LoadError> {
    let object = raw.as_object().ok_or_else(|| {
        LoadError::InvalidFormat("variables file must contain a JSON object".to_string())
    })?;

    let mut variables = HashMap::new();
    for (name, value) in object {
        match value.as_str() {
            Some(text) => {
                variables.insert(name.clone(), text.to_string());
            }
            None => {
                return Err(LoadError::InvalidFormat(format!(
                    "variable '{}' must be a string value",
                    name
                )));
            }
        }
    }

    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_vars_file(dir: &Path, name: &str, content: &str) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_variables_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let vars = load_variables(dir.path()).unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn test_load_variables_from_workspace() {
        let dir = TempDir::new().unwrap();
        write_vars_file(
            dir.path(),
            "vars.json",
            r#"{"user_id": "7", "token": "abc123"}"#,
        );

        let vars = load_variables(dir.path()).unwrap();
        assert_eq!(vars.get("user_id"), Some(&"7".to_string()));
        assert_eq!(vars.get("token"), Some(&"abc123".to_string()));
    }

    #[test]
    fn test_load_variables_from_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("suite").join("cases");
        fs::create_dir_all(&nested).unwrap();
        write_vars_file(dir.path(), "vars.json", r#"{"env": "staging"}"#);

        let vars = load_variables(&nested).unwrap();
        assert_eq!(vars.get("env"), Some(&"staging".to_string()));
    }

    #[test]
    fn test_load_variables_hidden_fallback_name() {
        let dir = TempDir::new().unwrap();
        write_vars_file(dir.path(), ".vars.json", r#"{"k": "v"}"#);

        let vars = load_variables(dir.path()).unwrap();
        assert_eq!(vars.get("k"), Some(&"v".to_string()));
    }

    #[test]
    fn test_load_variables_invalid_json() {
        let dir = TempDir::new().unwrap();
        write_vars_file(dir.path(), "vars.json", "{not json");

        match load_variables(dir.path()) {
            Err(LoadError::Parse(_)) => (),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_variables_non_string_value() {
        let dir = TempDir::new().unwrap();
        write_vars_file(dir.path(), "vars.json", r#"{"count": 42}"#);

        match load_variables(dir.path()) {
            Err(LoadError::InvalidFormat(msg)) => assert!(msg.contains("count")),
            other => panic!("Expected InvalidFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_variables_non_object_root() {
        let dir = TempDir::new().unwrap();
        write_vars_file(dir.path(), "vars.json", r#"["a", "b"]"#);

        assert!(matches!(
            load_variables(dir.path()),
            Err(LoadError::InvalidFormat(_))
        ));
    }
}
