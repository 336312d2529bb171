use crate::commands::helpers::contact_by_id;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{parse_date_of_birth, parse_phone, Contact, Identifier};
use crate::store::DataStore;
use tracing::debug;

/// A single-field change to an existing contact. Values are raw user input.
#[derive(Debug, Clone)]
pub enum FieldEdit {
    Name(String),
    Surname(String),
    Phone(String),
    DateOfBirth(String),
}

/// Applies `edit` to the contact at `id`.
///
/// Renames go through [`DataStore::rename`], so a collision with another
/// contact leaves the book untouched.
pub fn run<S: DataStore>(store: &mut S, id: &Identifier, edit: &FieldEdit) -> Result<CmdResult> {
    let current = contact_by_id(store, id)?;

    let updated = match edit {
        FieldEdit::Name(name) => rename(store, current, id.with_name(name)?)?,
        FieldEdit::Surname(surname) => rename(store, current, id.with_surname(surname)?)?,
        FieldEdit::Phone(raw) => {
            let mut record = current.record;
            record.phone = parse_phone(raw)?;
            store.put(id.clone(), record.clone())?;
            Contact::new(id.clone(), record)
        }
        FieldEdit::DateOfBirth(raw) => {
            let mut record = current.record;
            record.date_of_birth = parse_date_of_birth(raw)?;
            store.put(id.clone(), record.clone())?;
            Contact::new(id.clone(), record)
        }
    };
    debug!(from = %id, to = %updated.id, "contact edited");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact updated: {}", updated.id)))
        .with_affected_contacts(vec![updated]))
}

fn rename<S: DataStore>(store: &mut S, current: Contact, to: Identifier) -> Result<Contact> {
    store.rename(&current.id, to.clone())?;
    Ok(Contact::new(to, current.record))
}
