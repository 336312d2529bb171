use crate::commands::helpers::{contact_by_id, filter_contacts};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::{normalize_part, parse_date_of_birth, parse_phone, Contact, Identifier};
use crate::store::DataStore;

/// What to search by. Values are raw user input.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    Name(String),
    Surname(String),
    FullName { name: String, surname: String },
    Phone(String),
    DateOfBirth(String),
}

/// Runs a search. Invalid filter input is not an error: it yields no
/// matches and a warning message.
pub fn run<S: DataStore>(store: &S, query: &SearchQuery) -> Result<CmdResult> {
    match matches(store, query) {
        Ok(contacts) => Ok(CmdResult::default().with_listed_contacts(contacts)),
        Err(e) if e.is_user_error() => {
            Ok(CmdResult::default().with_message(CmdMessage::warning(e.to_string())))
        }
        Err(e) => Err(e),
    }
}

fn matches<S: DataStore>(store: &S, query: &SearchQuery) -> Result<Vec<Contact>> {
    let contacts = match query {
        SearchQuery::Name(raw) => {
            let name = normalize_part(raw)
                .ok_or_else(|| PhonebookError::InvalidName(raw.trim().to_string()))?;
            filter_contacts(store, |c| c.id.name() == name)
        }
        SearchQuery::Surname(raw) => {
            let surname = normalize_part(raw)
                .ok_or_else(|| PhonebookError::InvalidSurname(raw.trim().to_string()))?;
            filter_contacts(store, |c| c.id.surname() == surname)
        }
        SearchQuery::FullName { name, surname } => {
            let id = Identifier::new(name, surname)?;
            vec![contact_by_id(store, &id)?]
        }
        SearchQuery::Phone(raw) => {
            let phone = parse_phone(raw)?;
            filter_contacts(store, |c| c.record.phone == phone)
        }
        SearchQuery::DateOfBirth(raw) => {
            let dob = parse_date_of_birth(raw)?;
            filter_contacts(store, |c| c.record.date_of_birth == dob)
        }
    };
    Ok(contacts)
}
