//! # Storage Layer
//!
//! This module defines the storage abstraction for the phone book. The [`DataStore`]
//! trait owns the mapping from [`Identifier`] to [`Record`] and is the only way to
//! mutate it.
//!
//! ## Design Rationale
//!
//! Every mutation goes through [`DataStore::put`], [`DataStore::remove`] or
//! [`DataStore::rename`]. Each of them calls [`DataStore::persist`] after the
//! in-memory map has changed, so commands never decide when to write.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole book lives in a single JSON file (`contacts.json` by default)
//!   - Loaded once on open, rewritten after every mutation
//!   - A missing or unreadable file opens as an empty book
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "John Smith": {
//!         "phone": "89998887766",
//!         "date_of_birth": "01.01.2000"
//!     }
//! }
//! ```

use crate::error::{PhonebookError, Result};
use crate::model::{Contact, Identifier, Record};
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// The in-memory form of the whole book.
pub type ContactMap = BTreeMap<Identifier, Record>;

/// Abstract interface for contact storage.
///
/// Implementors provide access to the map and a persistence hook; the
/// lookup and mutation operations are shared.
pub trait DataStore {
    fn contacts(&self) -> &ContactMap;

    fn contacts_mut(&mut self) -> &mut ContactMap;

    /// Write the current map to the backing medium.
    fn persist(&mut self) -> Result<()>;

    fn contains(&self, id: &Identifier) -> bool {
        self.contacts().contains_key(id)
    }

    /// Get a record by identifier
    fn get(&self, id: &Identifier) -> Result<Record> {
        self.contacts()
            .get(id)
            .cloned()
            .ok_or_else(|| PhonebookError::NotFound(id.clone()))
    }

    /// Insert or replace a record
    fn put(&mut self, id: Identifier, record: Record) -> Result<()> {
        self.contacts_mut().insert(id, record);
        self.persist()
    }

    /// Remove a record permanently, returning it
    fn remove(&mut self, id: &Identifier) -> Result<Record> {
        let record = self
            .contacts_mut()
            .remove(id)
            .ok_or_else(|| PhonebookError::NotFound(id.clone()))?;
        self.persist()?;
        Ok(record)
    }

    /// Move a record to a new key. Either both the removal and the insertion
    /// happen, or the map is left untouched.
    fn rename(&mut self, from: &Identifier, to: Identifier) -> Result<()> {
        if from == &to {
            return Ok(());
        }
        if self.contains(&to) {
            return Err(PhonebookError::AlreadyExists(to));
        }
        let record = self
            .contacts_mut()
            .remove(from)
            .ok_or_else(|| PhonebookError::NotFound(from.clone()))?;
        self.contacts_mut().insert(to, record);
        self.persist()
    }

    /// All contacts, sorted by identifier
    fn list(&self) -> Vec<Contact> {
        self.contacts()
            .iter()
            .map(|(id, record)| Contact::new(id.clone(), record.clone()))
            .collect()
    }
}
