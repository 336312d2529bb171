use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let contacts = store.list();
    let mut result = CmdResult::default();
    if contacts.is_empty() {
        result.add_message(CmdMessage::info("Phone book is empty."));
    }
    Ok(result.with_listed_contacts(contacts))
}
