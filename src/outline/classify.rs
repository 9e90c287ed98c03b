//! Task record classification.
//!
//! A task record is a YAML mapping of unknown shape. Only three keys are
//! recognized; everything else in the record is ignored.

use serde::Serialize;
use serde_yaml::Value;

/// Key of a step that imports another task list.
pub const IMPORT_KEY: &str = "import_tasks";

/// Key of an assertion step.
pub const ASSERT_KEY: &str = "assert";

/// Key holding a step's display name.
pub const NAME_KEY: &str = "name";

/// Suffix removed from import targets.
pub const IMPORT_SUFFIX: &str = ".yml";

/// A recognized facet of a task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", content = "label", rename_all = "snake_case")]
pub enum Tag {
    /// The step imports the named task list
    Import(String),
    /// The step performs an assertion
    Assertion,
    /// The step carries a display name
    Named(String),
}

/// Classify a task record.
///
/// Tags come out in a fixed order: import, assertion, name. A record with
/// none of the recognized keys, or one that is not a mapping, yields no tags.
pub fn classify(record: &Value) -> Vec<Tag> {
    let mut tags = Vec::new();

    let Value::Mapping(fields) = record else {
        return tags;
    };

    if let Some(target) = fields.get(IMPORT_KEY) {
        let target = scalar_text(target);
        tags.push(Tag::Import(strip_literal_suffix(&target, IMPORT_SUFFIX).to_string()));
    }

    if fields.contains_key(ASSERT_KEY) {
        tags.push(Tag::Assertion);
    }

    if let Some(label) = fields.get(NAME_KEY) {
        tags.push(Tag::Named(scalar_text(label)));
    }

    tags
}

/// Remove `suffix` from the end of `text` if it is there verbatim.
///
/// `sub.yml` becomes `sub`, while `sub.yaml` is returned unchanged.
pub fn strip_literal_suffix<'a>(text: &'a str, suffix: &str) -> &'a str {
    text.strip_suffix(suffix).unwrap_or(text)
}

/// Render a YAML value as display text.
///
/// Strings are returned as-is; other scalars use their YAML spelling and
/// collections fall back to compact JSON. A collection JSON cannot hold
/// (a mapping with a collection key) is written back as YAML.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        other => serde_json::to_string(other)
            .or_else(|_| serde_yaml::to_string(other).map(|yaml| yaml.trim_end().to_string()))
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}
