//! # Rendering
//!
//! Turns command results into terminal text. Contact lines are always plain
//! `"{identifier}: {phone} {dob}"`; messages are colored by level.

use colored::Colorize;
use phonebook::api::{Age, CmdMessage, MessageLevel};
use phonebook::error::PhonebookError;
use phonebook::model::{Contact, Identifier};

pub const MAIN_MENU: &str = "\
Available operations:
1. Show phone book
2. Add contact
3. Delete contact
4. Search contacts
5. Edit contact
6. Calculate contact age
Type 'quit' to exit";

pub const SEARCH_MENU: &str = "\
Search by:
1. Name
2. Surname
3. Name and surname
4. Phone number
5. Date of birth";

pub const EDIT_MENU: &str = "\
Editable fields:
1. Name
2. Surname
3. Phone number
4. Date of birth";

pub fn duplicate_menu(id: &Identifier) -> String {
    format!(
        "A contact named {} already exists.\n\
         1. Edit the existing contact\n\
         2. Enter a different name and surname\n\
         3. Back to the main menu",
        id
    )
}

pub fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}\n", render_message(m)))
        .collect()
}

pub fn render_error(err: &PhonebookError) -> String {
    render_message(&CmdMessage::error(err.to_string()))
}

pub fn render_contacts(contacts: &[Contact]) -> String {
    contacts.iter().map(|c| format!("{}\n", c)).collect()
}

/// Search output: a header plus one line per match, or an empty-result notice.
pub fn render_search_results(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.\n".to_string();
    }
    format!("{}\n{}", "Found contacts:".bold(), render_contacts(contacts))
}

pub fn render_age(age: Age) -> String {
    match age {
        Age::Years(n) => format!("Age: {}\n", n),
        Age::Unknown => format!(
            "{}\n",
            "Date of birth is empty, cannot calculate age.".yellow()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::model::Record;

    fn contact(name: &str, surname: &str, phone: &str, dob: &str) -> Contact {
        Contact::new(
            Identifier::new(name, surname).unwrap(),
            Record::new(phone, dob).unwrap(),
        )
    }

    #[test]
    fn test_render_contacts_one_per_line() {
        let output = render_contacts(&[
            contact("John", "Smith", "89998887766", ""),
            contact("Jane", "Doe", "81112223344", "01.01.2000"),
        ]);
        assert_eq!(
            output,
            "John Smith: 89998887766 \nJane Doe: 81112223344 01.01.2000\n"
        );
    }

    #[test]
    fn test_render_search_results_empty() {
        assert_eq!(render_search_results(&[]), "No contacts found.\n");
    }

    #[test]
    fn test_render_search_results_lists_matches() {
        let output = render_search_results(&[contact("John", "Smith", "89998887766", "")]);
        assert!(output.contains("Found contacts:"));
        assert!(output.contains("John Smith: 89998887766 \n"));
    }

    #[test]
    fn test_render_age_distinguishes_unknown_from_zero() {
        assert_eq!(render_age(Age::Years(0)), "Age: 0\n");
        assert!(render_age(Age::Unknown).contains("cannot calculate age"));
    }

    #[test]
    fn test_render_messages_multiple() {
        let output = render_messages(&[
            CmdMessage::info("Info message"),
            CmdMessage::success("Contact added: John Smith"),
        ]);
        assert!(output.contains("Info message"));
        assert!(output.contains("Contact added: John Smith"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_duplicate_menu_names_contact() {
        let id = Identifier::new("John", "Smith").unwrap();
        assert!(duplicate_menu(&id).contains("John Smith already exists"));
    }
}
