//! Tasks and vars file decoding.
//!
//! Files are read in full, decoded with `serde_yaml` and closed before any
//! of their content is printed.

use std::path::Path;

use serde_yaml::Value;

use super::classify::scalar_text;
use crate::error::{OutlineError, OutlineResult};

/// Read and decode a tasks file into its records.
pub fn load_tasks(path: &Path) -> OutlineResult<Vec<Value>> {
    parse_tasks_str(&read(path)?, path)
}

/// Decode tasks file content. `path` is only used for error reporting.
///
/// The top level must be a sequence. An empty document counts as an empty
/// task list.
pub fn parse_tasks_str(content: &str, path: &Path) -> OutlineResult<Vec<Value>> {
    match decode(content, path)? {
        Value::Sequence(records) => Ok(records),
        Value::Null => Ok(Vec::new()),
        _ => Err(OutlineError::UnexpectedShape {
            path: path.to_path_buf(),
            expected: "a sequence of tasks",
        }),
    }
}

/// Read and decode a vars file into its variable names.
pub fn load_variables(path: &Path) -> OutlineResult<Vec<String>> {
    parse_variables_str(&read(path)?, path)
}

/// Decode vars file content into variable names, in file order.
///
/// A top-level mapping contributes its keys. A top-level sequence
/// contributes exactly one name per entry: a scalar is its own name, a
/// single-key mapping is named by its key and anything else is shown
/// compactly.
pub fn parse_variables_str(content: &str, path: &Path) -> OutlineResult<Vec<String>> {
    match decode(content, path)? {
        Value::Mapping(variables) => Ok(variables.keys().map(scalar_text).collect()),
        Value::Sequence(entries) => Ok(entries.iter().map(entry_name).collect()),
        Value::Null => Ok(Vec::new()),
        _ => Err(OutlineError::UnexpectedShape {
            path: path.to_path_buf(),
            expected: "a mapping or sequence of variables",
        }),
    }
}

fn entry_name(entry: &Value) -> String {
    match entry {
        Value::Mapping(fields) if fields.len() == 1 => {
            fields.keys().next().map(scalar_text).unwrap_or_default()
        }
        other => scalar_text(other),
    }
}

fn read(path: &Path) -> OutlineResult<String> {
    std::fs::read_to_string(path).map_err(|e| OutlineError::io(path, e))
}

fn decode(content: &str, path: &Path) -> OutlineResult<Value> {
    serde_yaml::from_str(content)
        .map_err(|source| OutlineError::Decode { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("roles/web/tasks/main.yml")
    }

    #[test]
    fn test_parse_tasks() {
        let yaml = r#"
- name: install nginx
  apt:
    name: nginx
- assert:
    that: port > 0
- import_tasks: setup.yml
"#;
        let records = parse_tasks_str(yaml, path()).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_empty_task_list() {
        assert!(parse_tasks_str("[]", path()).unwrap().is_empty());
        assert!(parse_tasks_str("~", path()).unwrap().is_empty());
    }

    #[test]
    fn test_tasks_must_be_a_sequence() {
        let err = parse_tasks_str("name: not a list", path()).unwrap_err();
        assert!(matches!(err, OutlineError::UnexpectedShape { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_a_decode_error() {
        let err = parse_tasks_str("- name: [unclosed", path()).unwrap_err();
        assert!(matches!(err, OutlineError::Decode { .. }));
        assert!(err.to_string().contains("roles/web/tasks/main.yml"));
    }

    #[test]
    fn test_mapping_variables_in_file_order() {
        let yaml = "port: 8080\nhost: localhost\nworkers: 4\n";
        assert_eq!(parse_variables_str(yaml, path()).unwrap(), vec!["port", "host", "workers"]);
    }

    #[test]
    fn test_sequence_variables() {
        let yaml = "- debug\n- db_user: app\n- 3\n";
        assert_eq!(parse_variables_str(yaml, path()).unwrap(), vec!["debug", "db_user", "3"]);
    }

    #[test]
    fn test_one_name_per_sequence_entry() {
        let yaml = "- a\n- {user: deploy, group: www}\n- {}\n";
        assert_eq!(
            parse_variables_str(yaml, path()).unwrap(),
            vec!["a", r#"{"user":"deploy","group":"www"}"#, "{}"]
        );
    }

    #[test]
    fn test_scalar_vars_file_rejected() {
        let err = parse_variables_str("just text", path()).unwrap_err();
        assert!(matches!(err, OutlineError::UnexpectedShape { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_tasks(Path::new("/nonexistent/rolescope/main.yml")).unwrap_err();
        assert!(matches!(err, OutlineError::Io { .. }));
    }
}
