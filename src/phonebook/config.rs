use crate::error::{PhonebookError, Result};
use crate::store::fs::DEFAULT_INDENT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_NAME: &str = "contacts.json";
const MAX_INDENT: usize = 16;

/// Configuration for the phone book, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Name of the contacts file inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Indentation width used when writing the contacts file
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            indent: default_indent(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(PhonebookError::Config("file_name must not be empty".into()));
        }
        if self.indent > MAX_INDENT {
            return Err(PhonebookError::Config(format!(
                "indent must be at most {}, got {}",
                MAX_INDENT, self.indent
            )));
        }
        Ok(())
    }

    /// Full path of the contacts file inside `data_dir`
    pub fn contacts_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PhonebookConfig::default();
        assert_eq!(config.file_name, "contacts.json");
        assert_eq!(config.indent, 4);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PhonebookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, PhonebookConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"file_name": "family.json", "indent": 2}"#,
        )
        .unwrap();

        let loaded = PhonebookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.indent, 2);
        assert_eq!(
            loaded.contacts_path(temp_dir.path()),
            temp_dir.path().join("family.json")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"indent": 2}"#).unwrap();

        let loaded = PhonebookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.file_name, "contacts.json");
        assert_eq!(loaded.indent, 2);
    }

    #[test]
    fn test_rejects_empty_file_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"file_name": " "}"#).unwrap();

        assert!(matches!(
            PhonebookConfig::load(temp_dir.path()),
            Err(PhonebookError::Config(_))
        ));
    }
}
