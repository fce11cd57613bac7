use crate::error::{Result, RollError};
use crate::model::DEFAULT_LABEL_WIDTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = ".vroll.json";
pub const DEFAULT_ARCHIVE_DIR: &str = "saveit";

/// What a roll does when the lowest and highest version are the same directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingleVersionPolicy {
    /// Archive, remove, then copy. The copy finds no source and fails.
    #[default]
    Sequential,
    /// Seed the next version before removing the old one.
    CopyFirst,
    /// Archive and remove; create nothing.
    SkipCopy,
    /// Abort before touching anything.
    Refuse,
}

/// Per-root configuration, stored in `<root>/.vroll.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollConfig {
    /// Name of the archive store directory, excluded from version candidates
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,

    /// Zero-padding width of archive labels
    #[serde(default = "default_label_width")]
    pub label_width: usize,

    #[serde(default)]
    pub single_version: SingleVersionPolicy,
}

fn default_archive_dir() -> String {
    DEFAULT_ARCHIVE_DIR.to_string()
}

fn default_label_width() -> usize {
    DEFAULT_LABEL_WIDTH
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            archive_dir: default_archive_dir(),
            label_width: default_label_width(),
            single_version: SingleVersionPolicy::default(),
        }
    }
}

impl RollConfig {
    /// Load config from the given root, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RollError::Io)?;
        let config: RollConfig = serde_json::from_str(&content).map_err(RollError::Config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let config_path = root.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RollError::Config)?;
        fs::write(config_path, content).map_err(RollError::Io)?;
        Ok(())
    }

    pub fn with_single_version(mut self, policy: SingleVersionPolicy) -> Self {
        self.single_version = policy;
        self
    }

    fn validate(&self) -> Result<()> {
        let name = self.archive_dir.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(RollError::InvalidArchiveDir(self.archive_dir.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RollConfig::default();
        assert_eq!(config.archive_dir, "saveit");
        assert_eq!(config.label_width, 4);
        assert_eq!(config.single_version, SingleVersionPolicy::Sequential);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = RollConfig::load(temp.path()).unwrap();
        assert_eq!(config, RollConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let config = RollConfig {
            archive_dir: "attic".to_string(),
            label_width: 6,
            single_version: SingleVersionPolicy::CopyFirst,
        };
        config.save(temp.path()).unwrap();

        let loaded = RollConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "single_version": "skip-copy" }"#,
        )
        .unwrap();

        let loaded = RollConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.archive_dir, "saveit");
        assert_eq!(loaded.label_width, 4);
        assert_eq!(loaded.single_version, SingleVersionPolicy::SkipCopy);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            RollConfig::load(temp.path()),
            Err(RollError::Config(_))
        ));
    }

    #[test]
    fn test_archive_dir_must_be_plain_name() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "archive_dir": "../elsewhere" }"#,
        )
        .unwrap();
        assert!(matches!(
            RollConfig::load(temp.path()),
            Err(RollError::InvalidArchiveDir(ref d)) if d == "../elsewhere"
        ));
    }
}
