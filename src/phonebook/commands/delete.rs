use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Contact, Identifier};
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, id: &Identifier) -> Result<CmdResult> {
    let record = store.remove(id)?;
    debug!(contact = %id, "contact deleted");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact deleted: {}", id)))
        .with_affected_contacts(vec![Contact::new(id.clone(), record)]))
}
