use super::{ContactMap, DataStore};
use crate::error::{PhonebookError, Result};
use crate::model::{Identifier, Record};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_INDENT: usize = 4;

/// JSON-file backed store. The file is read once on [`FileStore::open`] and
/// rewritten in full after every mutation.
pub struct FileStore {
    path: PathBuf,
    indent: usize,
    contacts: ContactMap,
}

impl FileStore {
    /// Opens the book at `path`. A missing or unparsable file yields an empty book.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let contacts = load_contacts(&path);
        Self {
            path,
            indent: DEFAULT_INDENT,
            contacts,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn contacts(&self) -> &ContactMap {
        &self.contacts
    }

    fn contacts_mut(&mut self) -> &mut ContactMap {
        &mut self.contacts
    }

    fn persist(&mut self) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = to_json(&self.contacts, self.indent)?;
        fs::write(&self.path, content).map_err(PhonebookError::Io)?;
        debug!(
            path = %self.path.display(),
            contacts = self.contacts.len(),
            "saved phone book"
        );
        Ok(())
    }
}

/// Reads the whole book from `path`, falling back to an empty book when the
/// file is missing or is not a JSON object.
///
/// Entries are converted one by one. A key that is not a valid identifier, a
/// record that does not parse, or a key that collides with an earlier one
/// after normalization is skipped with a warning; its siblings still load.
pub fn load_contacts(path: &Path) -> ContactMap {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no phone book file, starting empty");
            return ContactMap::new();
        }
    };

    let raw = match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(&content) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "phone book file is corrupt, starting empty");
            return ContactMap::new();
        }
    };

    let mut contacts = ContactMap::new();
    for (key, value) in raw {
        let id = match key.parse::<Identifier>() {
            Ok(id) => id,
            Err(e) => {
                warn!(key = %key, error = %e, "skipping entry with invalid identifier");
                continue;
            }
        };
        let record = match serde_json::from_value::<Record>(value) {
            Ok(record) => record,
            Err(e) => {
                warn!(key = %key, error = %e, "skipping entry with invalid record");
                continue;
            }
        };
        if contacts.contains_key(&id) {
            warn!(key = %key, existing = %id, "skipping entry that duplicates another contact");
            continue;
        }
        contacts.insert(id, record);
    }

    debug!(path = %path.display(), contacts = contacts.len(), "loaded phone book");
    contacts
}

fn to_json(contacts: &ContactMap, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    contacts
        .serialize(&mut ser)
        .map_err(PhonebookError::Serialization)?;
    Ok(buf)
}
