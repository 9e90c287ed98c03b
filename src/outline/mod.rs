//! Outline rendering.
//!
//! Turns a [`RoleIndex`](crate::scanner::RoleIndex) into a stream of
//! [`OutlineEntry`] values: role headers, variable names, classified task
//! steps and the trees of each role's `files/` and `templates/`.

mod classify;
mod decode;
mod printer;
mod sink;
pub mod tree;

pub use classify::{
    classify, scalar_text, strip_literal_suffix, Tag, ASSERT_KEY, IMPORT_KEY, IMPORT_SUFFIX,
    NAME_KEY,
};
pub use decode::{load_tasks, load_variables, parse_tasks_str, parse_variables_str};
pub use printer::{run, OutlinePrinter};
pub use sink::{
    JsonLinesSink, OutlineEntry, OutlineSink, TextSink, ASSERT_MARKER, IMPORT_MARKER,
    ROLE_MARKER, TASKS_MARKER, VARIABLE_MARKER, VARS_MARKER,
};
pub use tree::{NodeKind, TreeLine, TreeLines, DIRECTORY_MARKER, FILE_MARKER, INDENT};
