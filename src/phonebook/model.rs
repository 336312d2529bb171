use crate::error::{PhonebookError, Result};
use crate::validation::{capitalize, normalize_phone, validate_dob, validate_name, validate_phone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The unique key of a contact: a capitalized name and surname.
///
/// Always renders as exactly two space-separated tokens, `"Name Surname"`.
/// On disk it is stored as that string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    name: String,
    surname: String,
}

impl Identifier {
    /// Builds an identifier from raw user input: trims, capitalizes and validates both parts.
    pub fn new(name: &str, surname: &str) -> Result<Self> {
        let name = normalize_part(name)
            .ok_or_else(|| PhonebookError::InvalidName(name.trim().to_string()))?;
        let surname = normalize_part(surname)
            .ok_or_else(|| PhonebookError::InvalidSurname(surname.trim().to_string()))?;
        Ok(Self { name, surname })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Same surname, different name.
    pub fn with_name(&self, name: &str) -> Result<Self> {
        Self::new(name, &self.surname)
    }

    /// Same name, different surname.
    pub fn with_surname(&self, surname: &str) -> Result<Self> {
        Self::new(&self.name, surname)
    }
}

/// Trims and capitalizes one identifier part, or `None` if it is not a single valid token.
pub fn normalize_part(raw: &str) -> Option<String> {
    let part = capitalize(raw.trim());
    // inner whitespace would break the two-token key
    if !validate_name(&part) || part.contains(char::is_whitespace) {
        return None;
    }
    Some(part)
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.surname)
    }
}

impl FromStr for Identifier {
    type Err = PhonebookError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, surname) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| PhonebookError::InvalidSurname(String::new()))?;
        Self::new(name, surname)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The payload stored for each contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub phone: String,
    /// Empty when not recorded, otherwise `dd.mm.yyyy`.
    #[serde(default)]
    pub date_of_birth: String,
}

impl Record {
    /// Builds a record from raw input, normalizing `+7` phones and validating both fields.
    pub fn new(phone: &str, date_of_birth: &str) -> Result<Self> {
        Ok(Self {
            phone: parse_phone(phone)?,
            date_of_birth: parse_date_of_birth(date_of_birth)?,
        })
    }
}

pub fn parse_phone(raw: &str) -> Result<String> {
    let phone = normalize_phone(raw);
    if !validate_phone(&phone) {
        return Err(PhonebookError::InvalidPhone(raw.trim().to_string()));
    }
    Ok(phone)
}

pub fn parse_date_of_birth(raw: &str) -> Result<String> {
    let dob = raw.trim();
    if !validate_dob(dob) {
        return Err(PhonebookError::InvalidDateOfBirth(dob.to_string()));
    }
    Ok(dob.to_string())
}

/// A stored record together with its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Identifier,
    pub record: Record,
}

impl Contact {
    pub fn new(id: Identifier, record: Record) -> Self {
        Self { id, record }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.id, self.record.phone, self.record.date_of_birth
        )
    }
}
