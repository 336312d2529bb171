use crate::api::PhonebookApi;
use crate::config::PhonebookConfig;
use crate::error::{PhonebookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the default data directory.
pub const HOME_ENV: &str = "PHONEBOOK_HOME";

pub struct PhonebookContext {
    pub api: PhonebookApi<FileStore>,
    pub config: PhonebookConfig,
    pub contacts_path: PathBuf,
}

/// Picks the data directory: explicit flag, then `$PHONEBOOK_HOME`, then the
/// platform data dir.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "phonebook", "phonebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PhonebookError::Config("Could not determine data directory".into()))
}

/// Loads config and opens the contacts file. `file` overrides the configured location.
pub fn initialize(file: Option<&Path>, data_dir: Option<&Path>) -> Result<PhonebookContext> {
    let data_dir = resolve_data_dir(data_dir)?;
    let config = PhonebookConfig::load(&data_dir)?;

    let contacts_path = match file {
        Some(path) => path.to_path_buf(),
        None => config.contacts_path(&data_dir),
    };
    debug!(
        data_dir = %data_dir.display(),
        contacts = %contacts_path.display(),
        "initializing phone book"
    );

    let store = FileStore::open(&contacts_path).with_indent(config.indent);
    Ok(PhonebookContext {
        api: PhonebookApi::new(store),
        config,
        contacts_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use std::fs;

    #[test]
    fn explicit_file_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("elsewhere.json");

        let ctx = initialize(Some(file.as_path()), Some(dir.path())).unwrap();
        assert_eq!(ctx.contacts_path, file);
    }

    #[test]
    fn config_file_name_is_used_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"file_name": "work.json"}"#).unwrap();

        let ctx = initialize(None, Some(dir.path())).unwrap();
        assert_eq!(ctx.contacts_path, dir.path().join("work.json"));
        assert_eq!(ctx.config.file_name, "work.json");
    }

    #[test]
    fn existing_contacts_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("contacts.json"),
            r#"{"John Smith": {"phone": "89998887766", "date_of_birth": ""}}"#,
        )
        .unwrap();

        let ctx = initialize(None, Some(dir.path())).unwrap();
        assert_eq!(ctx.api.store().contacts().len(), 1);
    }
}
