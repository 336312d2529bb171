use crate::commands::{CmdMessage, CmdResult, NewContact};
use crate::error::{PhonebookError, Result};
use crate::model::{Contact, Identifier, Record};
use crate::store::DataStore;
use tracing::debug;

/// Adds a contact. Nothing is written unless every field is valid and the
/// identifier is free.
pub fn run<S: DataStore>(store: &mut S, input: &NewContact) -> Result<CmdResult> {
    let id = Identifier::new(&input.name, &input.surname)?;
    if store.contains(&id) {
        return Err(PhonebookError::AlreadyExists(id));
    }
    let record = Record::new(&input.phone, &input.date_of_birth)?;

    store.put(id.clone(), record.clone())?;
    debug!(contact = %id, "contact added");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact added: {}", id)))
        .with_affected_contacts(vec![Contact::new(id, record)]))
}
