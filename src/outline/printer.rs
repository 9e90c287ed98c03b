//! Outline orchestration.
//!
//! Scans once, then walks the roles in discovery order and emits each
//! section in a fixed order: vars, tasks, `files/`, `templates/`.

use std::path::{Path, PathBuf};

use super::classify::classify;
use super::decode::{load_tasks, load_variables};
use super::sink::{OutlineEntry, OutlineSink};
use super::tree;
use crate::core::Config;
use crate::error::OutlineResult;
use crate::scanner::{Role, RoleIndex, RoleScanner};

/// Depth at which `files/` and `templates/` trees start.
const TREE_DEPTH: usize = 1;

/// Prints the outline of every role under a project root.
#[derive(Debug, Clone)]
pub struct OutlinePrinter {
    /// Project root containing the roles directory
    root: PathBuf,

    /// Effective configuration
    config: Config,

    /// Only outline these roles (empty = all)
    only: Vec<String>,
}

impl OutlinePrinter {
    /// Create a printer for `root` with the default configuration.
    pub fn new(root: &Path) -> Self {
        Self::with_config(root, Config::default())
    }

    /// Create a printer for `root` with the given configuration.
    pub fn with_config(root: &Path, config: Config) -> Self {
        Self { root: root.to_path_buf(), config, only: Vec::new() }
    }

    /// Restrict the outline to the named roles.
    pub fn with_roles(mut self, names: Vec<String>) -> Self {
        self.only = names;
        self
    }

    /// Discover the roles this printer would outline.
    pub fn scan(&self) -> RoleIndex {
        let index = RoleScanner::with_config(&self.root, &self.config.scanner).scan();
        if self.only.is_empty() {
            return index;
        }

        for name in &self.only {
            if index.get(name).is_none() {
                tracing::warn!(role = %name, "Requested role not found");
            }
        }
        index.retain_named(&self.only)
    }

    /// Write the full outline to `sink`.
    ///
    /// The first decode or filesystem error stops the run; entries already
    /// emitted stay emitted.
    pub fn run(&self, sink: &mut dyn OutlineSink) -> OutlineResult<()> {
        let index = self.scan();
        tracing::debug!(roles = index.len(), root = ?self.root, "Printing outline");

        for role in &index {
            self.print_role(role, sink)?;
        }

        sink.finish()
    }

    fn print_role(&self, role: &Role, sink: &mut dyn OutlineSink) -> OutlineResult<()> {
        let sections = &self.config.outline;

        sink.emit(&OutlineEntry::Role { name: role.name.clone() })?;

        if sections.show_vars {
            for vars_file in &role.vars_files {
                sink.emit(&OutlineEntry::VarsFile { name: vars_file.name() })?;
                for name in load_variables(&vars_file.path)? {
                    sink.emit(&OutlineEntry::Variable { name })?;
                }
            }
        }

        if sections.show_tasks {
            for tasks_file in &role.tasks_files {
                sink.emit(&OutlineEntry::TasksFile { name: tasks_file.name() })?;
                for record in load_tasks(&tasks_file.path)? {
                    for tag in classify(&record) {
                        sink.emit(&OutlineEntry::Task(tag))?;
                    }
                }
            }
        }

        if sections.show_files {
            if let Some(dir) = role.files_dir() {
                print_tree(&dir, sink)?;
            }
        }

        if sections.show_templates {
            if let Some(dir) = role.templates_dir() {
                print_tree(&dir, sink)?;
            }
        }

        Ok(())
    }
}

fn print_tree(dir: &Path, sink: &mut dyn OutlineSink) -> OutlineResult<()> {
    for line in tree::render(dir, TREE_DEPTH)? {
        sink.emit(&OutlineEntry::Tree(line?))?;
    }
    Ok(())
}

/// Print the outline of the roles under `root` with default settings.
pub fn run(root: &Path, sink: &mut dyn OutlineSink) -> OutlineResult<()> {
    OutlinePrinter::new(root).run(sink)
}
