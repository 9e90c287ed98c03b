//! Role data structures.
//!
//! A role is a named folder under `roles/` bundling tasks, variables,
//! static files and templates.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Directory holding a role's static files.
pub const FILES_DIR: &str = "files";

/// Directory holding a role's templates.
pub const TEMPLATES_DIR: &str = "templates";

/// A tasks or vars file belonging to a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleFile {
    /// Location of the file on disk
    pub path: PathBuf,
}

/// A file whose top level is a sequence of task records.
pub type TaskFile = RoleFile;

/// A file whose top level declares variables.
pub type VarsFile = RoleFile;

impl RoleFile {
    /// Create a role file for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Display name: the file name without its extension.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A role and the files discovered for it, in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    /// Role name, derived from its directory name
    pub name: String,

    /// Directory of the role (the one containing `tasks/` and `vars/`)
    pub root: PathBuf,

    /// Tasks files, in discovery order
    pub tasks_files: Vec<TaskFile>,

    /// Vars files, in discovery order
    pub vars_files: Vec<VarsFile>,
}

impl Role {
    /// Create an empty role.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            tasks_files: Vec::new(),
            vars_files: Vec::new(),
        }
    }

    /// `files/` directory of the role, if it exists.
    pub fn files_dir(&self) -> Option<PathBuf> {
        existing_dir(&self.root, FILES_DIR)
    }

    /// `templates/` directory of the role, if it exists.
    pub fn templates_dir(&self) -> Option<PathBuf> {
        existing_dir(&self.root, TEMPLATES_DIR)
    }
}

fn existing_dir(root: &Path, name: &str) -> Option<PathBuf> {
    let dir = root.join(name);
    dir.is_dir().then_some(dir)
}

/// Roles keyed by name, iterated in first-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleIndex {
    roles: Vec<Role>,
    positions: HashMap<String, usize>,
}

impl RoleIndex {
    /// Get the role with the given name, creating it on first encounter.
    pub(crate) fn entry(&mut self, name: &str, root: &Path) -> &mut Role {
        let position = match self.positions.get(name) {
            Some(&position) => position,
            None => {
                tracing::debug!(role = name, root = ?root, "Discovered role");
                self.roles.push(Role::new(name, root));
                self.positions.insert(name.to_string(), self.roles.len() - 1);
                self.roles.len() - 1
            }
        };
        &mut self.roles[position]
    }

    /// Look up a role by name.
    pub fn get(&self, name: &str) -> Option<&Role> {
        self.positions.get(name).map(|&position| &self.roles[position])
    }

    /// Iterate roles in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Role> {
        self.roles.iter()
    }

    /// Role names in discovery order.
    pub fn names(&self) -> Vec<&str> {
        self.roles.iter().map(|role| role.name.as_str()).collect()
    }

    /// Number of roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no role was discovered.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Keep only the named roles, preserving discovery order.
    pub fn retain_named(self, names: &[String]) -> Self {
        let mut index = Self::default();
        for role in self.roles.into_iter().filter(|role| names.contains(&role.name)) {
            index.positions.insert(role.name.clone(), index.roles.len());
            index.roles.push(role);
        }
        index
    }
}

impl<'a> IntoIterator for &'a RoleIndex {
    type Item = &'a Role;
    type IntoIter = std::slice::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for RoleIndex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.roles.serialize(serializer)
    }
}
