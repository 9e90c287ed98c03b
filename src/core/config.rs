//! Configuration management for Rolescope.
//!
//! Handles loading configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the per-project configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".rolescope.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discovery settings
    pub scanner: ScannerConfig,

    /// Which outline sections to print
    pub outline: OutlineConfig,
}

/// Role discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Directory under the project root that holds one folder per role
    pub roles_dir: String,

    /// Extension of tasks and vars files (without the dot)
    pub extension: String,
}

/// Outline section toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutlineConfig {
    /// Print vars files and their variable names
    pub show_vars: bool,

    /// Print tasks files and their classified steps
    pub show_tasks: bool,

    /// Print the `files/` tree of each role
    pub show_files: bool,

    /// Print the `templates/` tree of each role
    pub show_templates: bool,
}

impl Config {
    /// Load configuration for the project rooted at `root`.
    ///
    /// Looks for config in:
    /// 1. `.rolescope.toml` in `root`
    /// 2. `~/.config/rolescope/config.toml`
    /// 3. Falls back to defaults
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let local_config = root.join(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = Self::config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.scanner.roles_dir.is_empty() {
            anyhow::bail!("scanner.roles_dir cannot be empty");
        }
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rolescope"))
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self { roles_dir: "roles".to_string(), extension: "yml".to_string() }
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self { show_vars: true, show_tasks: true, show_files: true, show_templates: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scanner.roles_dir, "roles");
        assert_eq!(config.scanner.extension, "yml");
        assert!(config.outline.show_vars);
        assert!(config.outline.show_tasks);
        assert!(config.outline.show_files);
        assert!(config.outline.show_templates);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml(
            r#"
[outline]
show_templates = false
"#,
        )
        .unwrap();

        assert!(!config.outline.show_templates);
        assert!(config.outline.show_files);
        assert_eq!(config.scanner, ScannerConfig::default());
    }

    #[test]
    fn test_scanner_section() {
        let config = Config::from_toml(
            r#"
[scanner]
roles_dir = "playbooks/roles"
extension = "yaml"
"#,
        )
        .unwrap();

        assert_eq!(config.scanner.roles_dir, "playbooks/roles");
        assert_eq!(config.scanner.extension, "yaml");
    }

    #[test]
    fn test_empty_roles_dir_rejected() {
        let result = Config::from_toml("[scanner]\nroles_dir = \"\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(Config::from_toml("[outline\nshow_vars = ").is_err());
    }

    #[test]
    fn test_load_prefers_local_file() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join(LOCAL_CONFIG_FILE), "[outline]\nshow_vars = false\n")
            .unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert!(!config.outline.show_vars);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
