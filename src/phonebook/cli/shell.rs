//! # Interactive Shell
//!
//! The menu loop. Every operation gathers its inputs with line prompts, calls
//! the API once, and renders the result. The shell is generic over its input
//! and output streams, so tests drive it with a `Cursor` and a `Vec<u8>`.
//!
//! User-level errors (bad input, missing contact, name collision) are printed
//! and the menu is shown again. Storage errors end the loop.
//! End of input behaves like `quit`.

use super::render::{
    duplicate_menu, render_age, render_contacts, render_error, render_messages,
    render_search_results, EDIT_MENU, MAIN_MENU, SEARCH_MENU,
};
use phonebook::api::{CmdResult, FieldEdit, NewContact, PhonebookApi, SearchQuery};
use phonebook::error::{PhonebookError, Result};
use phonebook::model::{normalize_part, parse_phone, Identifier};
use phonebook::store::DataStore;
use std::io::{BufRead, Write};

/// How many times the user may re-enter a name after a collision during add.
pub const MAX_NAME_ATTEMPTS: usize = 3;

const PHONE_PROMPT: &str = "Phone number (11 digits, starting with +7 or 8): ";
const DOB_PROMPT: &str = "Date of birth (dd.mm.yyyy), or leave empty: ";

pub struct Shell<S: DataStore, R: BufRead, W: Write> {
    api: PhonebookApi<S>,
    input: R,
    out: W,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: PhonebookApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (PhonebookApi<S>, W) {
        (self.api, self.out)
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "{}", MAIN_MENU)?;
            let Some(command) = self.prompt("Enter operation number: ")? else {
                break;
            };

            match command.as_str() {
                "1" => self.list()?,
                "2" => self.add()?,
                "3" => self.delete()?,
                "4" => self.search()?,
                "5" => self.edit()?,
                "6" => self.age()?,
                "quit" => break,
                other => {
                    writeln!(
                        self.out,
                        "{}",
                        render_error(&PhonebookError::InvalidChoice(other.to_string()))
                    )?;
                    writeln!(self.out, "Enter a number from 1 to 6, or 'quit' to exit.")?;
                }
            }
            writeln!(self.out)?;
        }
        writeln!(self.out, "Goodbye.")?;
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list_contacts()?;
        write!(self.out, "{}", render_contacts(&result.listed_contacts))?;
        write!(self.out, "{}", render_messages(&result.messages))?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let Some(mut id) = self.prompt_identifier()? else {
            return Ok(());
        };

        let mut attempts = 0;
        while self.api.contains(&id) {
            writeln!(self.out, "{}", duplicate_menu(&id))?;
            let Some(choice) = self.prompt("Enter option number: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => return self.edit_fields(&id),
                "2" if attempts < MAX_NAME_ATTEMPTS => {
                    attempts += 1;
                    match self.prompt_identifier()? {
                        Some(next) => id = next,
                        None => return Ok(()),
                    }
                }
                "2" => {
                    writeln!(self.out, "Too many attempts, back to the main menu.")?;
                    return Ok(());
                }
                "3" => return Ok(()),
                other => {
                    return self.report(PhonebookError::InvalidChoice(other.to_string()));
                }
            }
        }

        let Some(phone) = self.prompt(PHONE_PROMPT)? else {
            return Ok(());
        };
        if let Err(e) = parse_phone(&phone) {
            return self.report(e);
        }
        let Some(dob) = self.prompt(DOB_PROMPT)? else {
            return Ok(());
        };

        let input = NewContact::new(id.name(), id.surname(), phone, dob);
        let outcome = self.api.add_contact(&input);
        self.show(outcome)
    }

    fn delete(&mut self) -> Result<()> {
        let Some(id) = self.prompt_identifier()? else {
            return Ok(());
        };
        let outcome = self.api.delete_contact(&id);
        self.show(outcome)
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.out, "{}", SEARCH_MENU)?;
        let Some(choice) = self.prompt("Enter field number to search by: ")? else {
            return Ok(());
        };

        let query = match choice.as_str() {
            "1" => self.prompt("Name: ")?.map(SearchQuery::Name),
            "2" => self.prompt("Surname: ")?.map(SearchQuery::Surname),
            "3" => match self.prompt("Name: ")? {
                Some(name) => self
                    .prompt("Surname: ")?
                    .map(|surname| SearchQuery::FullName { name, surname }),
                None => None,
            },
            "4" => self.prompt(PHONE_PROMPT)?.map(SearchQuery::Phone),
            "5" => self.prompt(DOB_PROMPT)?.map(SearchQuery::DateOfBirth),
            other => {
                self.report(PhonebookError::InvalidChoice(other.to_string()))?;
                writeln!(self.out, "Enter a number from 1 to 5.")?;
                return Ok(());
            }
        };
        let Some(query) = query else {
            return Ok(());
        };

        let result = self.api.search_contacts(&query)?;
        write!(self.out, "{}", render_messages(&result.messages))?;
        write!(self.out, "{}", render_search_results(&result.listed_contacts))?;
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        let Some(id) = self.prompt_identifier()? else {
            return Ok(());
        };
        if !self.api.contains(&id) {
            return self.report(PhonebookError::NotFound(id));
        }
        self.edit_fields(&id)
    }

    fn edit_fields(&mut self, id: &Identifier) -> Result<()> {
        writeln!(self.out, "{}", EDIT_MENU)?;
        let Some(choice) = self.prompt("Enter field number to edit: ")? else {
            return Ok(());
        };

        let edit = match choice.as_str() {
            "1" => self.prompt("New name: ")?.map(FieldEdit::Name),
            "2" => self.prompt("New surname: ")?.map(FieldEdit::Surname),
            "3" => self.prompt(PHONE_PROMPT)?.map(FieldEdit::Phone),
            "4" => self.prompt(DOB_PROMPT)?.map(FieldEdit::DateOfBirth),
            other => {
                self.report(PhonebookError::InvalidChoice(other.to_string()))?;
                writeln!(self.out, "Enter a number from 1 to 4.")?;
                return Ok(());
            }
        };
        let Some(edit) = edit else {
            return Ok(());
        };

        let outcome = self.api.edit_contact(id, &edit);
        self.show(outcome)
    }

    fn age(&mut self) -> Result<()> {
        let Some(id) = self.prompt_identifier()? else {
            return Ok(());
        };
        let outcome = self.api.contact_age(&id);
        if let Some(age) = self.handle(outcome)?.and_then(|r| r.age) {
            write!(self.out, "{}", render_age(age))?;
        }
        Ok(())
    }

    /// Prompts for a name, then a surname, checking each as soon as it is entered.
    /// Returns `None` after reporting invalid input or on end of input.
    fn prompt_identifier(&mut self) -> Result<Option<Identifier>> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(None);
        };
        if normalize_part(&name).is_none() {
            self.report(PhonebookError::InvalidName(name))?;
            return Ok(None);
        }

        let Some(surname) = self.prompt("Surname: ")? else {
            return Ok(None);
        };
        match Identifier::new(&name, &surname) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                self.report(e)?;
                Ok(None)
            }
        }
    }

    /// Reads one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prints messages of a successful result, or the error if it is user-level.
    fn handle(&mut self, outcome: Result<CmdResult>) -> Result<Option<CmdResult>> {
        match outcome {
            Ok(result) => {
                write!(self.out, "{}", render_messages(&result.messages))?;
                Ok(Some(result))
            }
            Err(e) if e.is_user_error() => {
                self.report(e)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn show(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        self.handle(outcome).map(|_| ())
    }

    fn report(&mut self, err: PhonebookError) -> Result<()> {
        writeln!(self.out, "{}", render_error(&err))?;
        Ok(())
    }
}
