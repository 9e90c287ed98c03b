//! Role discovery.
//!
//! Finds `roles/*/tasks/*.yml` and `roles/*/vars/*.yml` and groups the
//! matches by role name.

mod role;

pub use role::{Role, RoleFile, RoleIndex, TaskFile, VarsFile, FILES_DIR, TEMPLATES_DIR};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::ScannerConfig;

/// Directory holding a role's task lists.
pub const TASKS_DIR: &str = "tasks";

/// Directory holding a role's variable files.
pub const VARS_DIR: &str = "vars";

/// Scanner that builds a [`RoleIndex`] from a project tree.
#[derive(Debug, Clone)]
pub struct RoleScanner {
    /// Directory containing one folder per role
    roles_dir: PathBuf,

    /// Extension of tasks and vars files
    extension: String,
}

impl RoleScanner {
    /// Create a scanner for `root` with the default layout (`roles/`, `.yml`).
    pub fn new(root: &Path) -> Self {
        Self::with_config(root, &ScannerConfig::default())
    }

    /// Create a scanner for `root` using the given scanner settings.
    pub fn with_config(root: &Path, config: &ScannerConfig) -> Self {
        Self { roles_dir: root.join(&config.roles_dir), extension: config.extension.clone() }
    }

    /// Directory the scanner looks for roles in.
    pub fn roles_dir(&self) -> &Path {
        &self.roles_dir
    }

    /// Scan the tree and group tasks and vars files by role.
    ///
    /// Roles appear in the order they were first seen: the tasks pass runs
    /// first, then the vars pass. A missing roles directory yields an empty
    /// index.
    pub fn scan(&self) -> RoleIndex {
        let mut index = RoleIndex::default();

        for path in self.discover(TASKS_DIR) {
            if let Some((name, root)) = role_key(&path) {
                tracing::debug!(role = %name, path = ?path, "Discovered tasks file");
                index.entry(&name, root).tasks_files.push(TaskFile::new(path.clone()));
            }
        }

        for path in self.discover(VARS_DIR) {
            if let Some((name, root)) = role_key(&path) {
                tracing::debug!(role = %name, path = ?path, "Discovered vars file");
                index.entry(&name, root).vars_files.push(VarsFile::new(path.clone()));
            }
        }

        index
    }

    /// Find `<roles_dir>/*/<section>/*.<extension>`, sorted by path.
    fn discover(&self, section: &str) -> Vec<PathBuf> {
        if !self.roles_dir.is_dir() {
            tracing::debug!(roles_dir = ?self.roles_dir, "No roles directory");
            return Vec::new();
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&self.roles_dir)
            .min_depth(3)
            .max_depth(3)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .map(walkdir::DirEntry::into_path)
            .filter(|path| is_section_file(path, section, &self.extension))
            .collect();

        paths.sort();
        paths
    }
}

/// Whether `path` is a `<section>/*.<extension>` file.
fn is_section_file(path: &Path, section: &str, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
        && path.parent().and_then(Path::file_name) == Some(OsStr::new(section))
        && path.is_file()
}

/// Derive the role name and role directory of a tasks or vars file.
///
/// The role is the directory two levels above the file, i.e. the one
/// containing `tasks/` or `vars/`. Its name is that directory's stem.
pub fn role_key(path: &Path) -> Option<(String, &Path)> {
    let root = path.parent()?.parent()?;
    let name = root.file_stem()?.to_string_lossy().into_owned();
    Some((name, root))
}
