//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every phone book operation, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns the store**, so every mutation flows through one object
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no prompting, printing or formatting. Those belong to the shell.
//!
//! ## Generic Over DataStore
//!
//! `PhonebookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PhonebookApi<FileStore>`
//! - Testing: `PhonebookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Identifier;
use crate::store::DataStore;

/// The main API facade for phone book operations.
pub struct PhonebookApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> PhonebookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_contact(&mut self, input: &NewContact) -> Result<CmdResult> {
        commands::add::run(&mut self.store, input)
    }

    pub fn delete_contact(&mut self, id: &Identifier) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_contacts(&self, query: &SearchQuery) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn edit_contact(&mut self, id: &Identifier, edit: &FieldEdit) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, id, edit)
    }

    pub fn contact_age(&self, id: &Identifier) -> Result<CmdResult> {
        commands::age::run(&self.store, id)
    }

    /// Whether a contact with this identifier exists.
    pub fn contains(&self, id: &Identifier) -> bool {
        self.store.contains(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use commands::age::Age;
pub use commands::edit::FieldEdit;
pub use commands::search::SearchQuery;
pub use commands::{CmdMessage, CmdResult, MessageLevel, NewContact};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> PhonebookApi<InMemoryStore> {
        PhonebookApi::new(InMemoryStore::new())
    }

    #[test]
    fn add_then_list_dispatches_to_store() {
        let mut api = api();
        api.add_contact(&NewContact::new("John", "Smith", "89998887766", ""))
            .unwrap();

        let listed = api.list_contacts().unwrap().listed_contacts;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].to_string(), "John Smith: 89998887766 ");
    }

    #[test]
    fn edit_and_delete_go_through_the_same_store() {
        let mut api = api();
        api.add_contact(&NewContact::new("John", "Smith", "89998887766", ""))
            .unwrap();
        let john = Identifier::new("John", "Smith").unwrap();
        let johnny = Identifier::new("Johnny", "Smith").unwrap();

        api.edit_contact(&john, &FieldEdit::Name("Johnny".into()))
            .unwrap();
        assert!(!api.contains(&john));
        assert!(api.contains(&johnny));

        api.delete_contact(&johnny).unwrap();
        assert!(api.store().contacts().is_empty());
    }

    #[test]
    fn age_returns_structured_result() {
        let mut api = api();
        api.add_contact(&NewContact::new("John", "Smith", "89998887766", ""))
            .unwrap();
        let id = Identifier::new("John", "Smith").unwrap();
        assert_eq!(api.contact_age(&id).unwrap().age, Some(Age::Unknown));
    }
}
