use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Identifier;
use crate::store::DataStore;
use crate::validation::parse_dob;
use chrono::{Local, NaiveDate};
use std::fmt;

const DAYS_PER_YEAR: i64 = 365;

/// Age of a contact in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Age {
    /// No date of birth is recorded.
    Unknown,
    Years(i64),
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Unknown => write!(f, "unknown"),
            Age::Years(n) => write!(f, "{}", n),
        }
    }
}

/// Whole elapsed days between `dob` and `today`, divided by 365 and floored.
///
/// This is deliberately approximate: leap days are not accounted for, so a
/// contact may appear a year older a few days before their birthday.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i64 {
    (today - dob).num_days().div_euclid(DAYS_PER_YEAR)
}

pub fn run<S: DataStore>(store: &S, id: &Identifier) -> Result<CmdResult> {
    run_on(store, id, Local::now().date_naive())
}

pub fn run_on<S: DataStore>(store: &S, id: &Identifier, today: NaiveDate) -> Result<CmdResult> {
    let record = store.get(id)?;
    // stored dates were validated on write; an unparsable one counts as unknown
    let age = match parse_dob(&record.date_of_birth) {
        Some(dob) => Age::Years(age_on(dob, today)),
        None => Age::Unknown,
    };
    Ok(CmdResult::default().with_age(age))
}
