//! Outline entries and the sinks they are written to.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use super::classify::Tag;
use super::tree::{indent, TreeLine};
use crate::error::OutlineResult;

/// Marker in front of role headers.
pub const ROLE_MARKER: &str = "👥";

/// Marker in front of vars file headers.
pub const VARS_MARKER: &str = "🔧";

/// Marker in front of variable names.
pub const VARIABLE_MARKER: &str = "💲";

/// Marker in front of tasks file headers.
pub const TASKS_MARKER: &str = "📝";

/// Marker in front of import steps.
pub const IMPORT_MARKER: &str = "📥";

/// Marker in front of assertion steps.
pub const ASSERT_MARKER: &str = "👮";

/// One line of the outline, before formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entry", rename_all = "snake_case")]
pub enum OutlineEntry {
    /// A role header
    Role { name: String },
    /// A vars file header
    VarsFile { name: String },
    /// A variable declared in the preceding vars file
    Variable { name: String },
    /// A tasks file header
    TasksFile { name: String },
    /// One tag of a task record from the preceding tasks file
    Task(Tag),
    /// A node of a `files/` or `templates/` tree
    Tree(TreeLine),
}

impl fmt::Display for OutlineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role { name } => write!(f, "{ROLE_MARKER} {name}"),
            Self::VarsFile { name } => write!(f, "{}{VARS_MARKER} {name}", indent(1)),
            Self::Variable { name } => write!(f, "{}- {VARIABLE_MARKER} {name}", indent(2)),
            Self::TasksFile { name } => write!(f, "{}{TASKS_MARKER} {name}", indent(1)),
            Self::Task(Tag::Import(target)) => {
                write!(f, "{}- {IMPORT_MARKER} import {target}", indent(2))
            }
            Self::Task(Tag::Assertion) => write!(f, "{}- {ASSERT_MARKER} assert", indent(2)),
            Self::Task(Tag::Named(label)) => write!(f, "{}- {label}", indent(2)),
            Self::Tree(line) => write!(f, "{line}"),
        }
    }
}

/// Destination for outline entries.
pub trait OutlineSink {
    /// Write one entry.
    fn emit(&mut self, entry: &OutlineEntry) -> OutlineResult<()>;

    /// Called once after the last entry.
    fn finish(&mut self) -> OutlineResult<()> {
        Ok(())
    }
}

/// Writes the human-readable outline, one line per entry.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutlineSink for TextSink<W> {
    fn emit(&mut self, entry: &OutlineEntry) -> OutlineResult<()> {
        writeln!(self.writer, "{entry}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutlineResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes one JSON object per entry (JSON Lines).
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutlineSink for JsonLinesSink<W> {
    fn emit(&mut self, entry: &OutlineEntry) -> OutlineResult<()> {
        serde_json::to_writer(&mut self.writer, entry)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> OutlineResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects entries in memory.
impl OutlineSink for Vec<OutlineEntry> {
    fn emit(&mut self, entry: &OutlineEntry) -> OutlineResult<()> {
        self.push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::tree::NodeKind;

    #[test]
    fn test_text_forms() {
        let cases = [
            (OutlineEntry::Role { name: "web".into() }, "👥 web"),
            (OutlineEntry::VarsFile { name: "main".into() }, "  🔧 main"),
            (OutlineEntry::Variable { name: "port".into() }, "    - 💲 port"),
            (OutlineEntry::TasksFile { name: "main".into() }, "  📝 main"),
            (OutlineEntry::Task(Tag::Import("setup".into())), "    - 📥 import setup"),
            (OutlineEntry::Task(Tag::Assertion), "    - 👮 assert"),
            (OutlineEntry::Task(Tag::Named("install".into())), "    - install"),
            (
                OutlineEntry::Tree(TreeLine {
                    depth: 2,
                    kind: NodeKind::File,
                    name: "nginx.conf".into(),
                }),
                "    📄 nginx.conf",
            ),
        ];

        for (entry, expected) in cases {
            assert_eq!(entry.to_string(), expected);
        }
    }

    #[test]
    fn test_text_sink_writes_lines() {
        let mut sink = TextSink::new(Vec::new());
        sink.emit(&OutlineEntry::Role { name: "web".into() }).unwrap();
        sink.emit(&OutlineEntry::TasksFile { name: "main".into() }).unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "👥 web\n  📝 main\n");
    }

    #[test]
    fn test_json_lines_sink() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.emit(&OutlineEntry::Role { name: "web".into() }).unwrap();
        sink.emit(&OutlineEntry::Task(Tag::Import("setup".into()))).unwrap();
        sink.emit(&OutlineEntry::Task(Tag::Assertion)).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let values: Vec<serde_json::Value> =
            output.lines().map(|line| serde_json::from_str(line).unwrap()).collect();

        assert_eq!(values[0], serde_json::json!({"entry": "role", "name": "web"}));
        assert_eq!(
            values[1],
            serde_json::json!({"entry": "task", "tag": "import", "label": "setup"})
        );
        assert_eq!(values[2], serde_json::json!({"entry": "task", "tag": "assertion"}));
    }

    #[test]
    fn test_json_tree_entry() {
        let entry = OutlineEntry::Tree(TreeLine {
            depth: 1,
            kind: NodeKind::Directory,
            name: "files".into(),
        });
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({"entry": "tree", "depth": 1, "kind": "directory", "name": "files"})
        );
    }
}
