//! Input validation for contact fields.
//!
//! All functions here are pure predicates or normalizers over raw user input.
//! They never fail: validators answer `bool`, normalizers return a new `String`.
//!
//! Valid names and surnames:
//! - Non-empty
//! - Latin letters, digits and spaces only
//!
//! Valid phone numbers:
//! - Exactly 11 ASCII digits
//! - First digit is `8` (a leading `+7` is rewritten by [`normalize_phone`])
//!
//! Valid dates of birth:
//! - Empty (no date recorded), or
//! - `day.month.year` with a 1-2 digit day and month and a 4 digit year,
//!   naming a real calendar date

use chrono::NaiveDate;

pub const DOB_FORMAT: &str = "%d.%m.%Y";
const PHONE_LEN: usize = 11;

/// Validates a name or surname.
///
/// # Examples
/// ```
/// use phonebook::validation::validate_name;
///
/// assert!(validate_name("John"));
/// assert!(validate_name("R2d2"));
/// assert!(!validate_name(""));
/// assert!(!validate_name("Jean-Luc"));
/// assert!(!validate_name("Иван"));
/// ```
pub fn validate_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_valid_name_char)
}

fn is_valid_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == ' '
}

/// Validates an already normalized phone number.
///
/// # Examples
/// ```
/// use phonebook::validation::validate_phone;
///
/// assert!(validate_phone("89998887766"));
/// assert!(!validate_phone("+79998887766"));
/// assert!(!validate_phone("79998887766"));
/// assert!(!validate_phone("8999888776"));
/// ```
pub fn validate_phone(phone: &str) -> bool {
    phone.len() == PHONE_LEN
        && phone.chars().all(|c| c.is_ascii_digit())
        && phone.starts_with('8')
}

/// Trims the input and rewrites a leading `+7` country code to `8`.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.strip_prefix("+7") {
        Some(rest) => format!("8{}", rest),
        None => trimmed.to_string(),
    }
}

/// Validates a date of birth. The empty string means "not recorded" and is valid.
///
/// # Examples
/// ```
/// use phonebook::validation::validate_dob;
///
/// assert!(validate_dob(""));
/// assert!(validate_dob("01.01.2000"));
/// assert!(validate_dob("1.1.2000"));
/// assert!(validate_dob("29.02.2024"));
/// assert!(!validate_dob("29.02.2023"));
/// assert!(!validate_dob("2000-01-01"));
/// ```
pub fn validate_dob(dob: &str) -> bool {
    dob.is_empty() || parse_dob(dob).is_some()
}

/// Parses a non-empty date of birth into a calendar date.
pub fn parse_dob(dob: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = dob.split('.').collect();
    let [day, month, year] = parts[..] else {
        return None;
    };

    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
    };
    if !digits(day, 1, 2) || !digits(month, 1, 2) || !digits(year, 4, 4) {
        return None;
    }

    NaiveDate::parse_from_str(dob, DOB_FORMAT).ok()
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_allows_letters_digits_and_spaces() {
        assert!(validate_name("Anna Maria"));
        assert!(validate_name("007"));
        assert!(!validate_name("O'Brien"));
        assert!(!validate_name("john_doe"));
    }

    #[test]
    fn phone_matches_length_digits_and_prefix() {
        let cases = [
            ("89998887766", true),
            ("80000000000", true),
            ("99998887766", false),
            ("8999888776a", false),
            ("899988877661", false),
            ("", false),
            ("8 999888776", false),
        ];
        for (input, expected) in cases {
            assert_eq!(validate_phone(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!validate_phone("8٩٩٩٨٨٨٧٧٦٦"));
    }

    #[test]
    fn normalize_rewrites_country_code() {
        assert_eq!(normalize_phone("+79998887766"), "89998887766");
        assert_eq!(normalize_phone("  89998887766 "), "89998887766");
        assert_eq!(normalize_phone("+19998887766"), "+19998887766");
    }

    #[test]
    fn dob_accepts_padded_and_natural_forms() {
        assert!(validate_dob("05.09.1987"));
        assert!(validate_dob("5.9.1987"));
        assert!(validate_dob("31.12.1999"));
    }

    #[test]
    fn dob_rejects_malformed_or_impossible_dates() {
        for input in [
            "32.01.2000",
            "01.13.2000",
            "01.01.20",
            "01.01.02000",
            "01/01/2000",
            " 01.01.2000",
            "01.01.2000 ",
            "+1.01.2000",
            "01.01",
            "abc",
        ] {
            assert!(!validate_dob(input), "accepted {:?}", input);
        }
    }

    #[test]
    fn parse_dob_returns_calendar_date() {
        assert_eq!(
            parse_dob("01.02.2003"),
            NaiveDate::from_ymd_opt(2003, 2, 1)
        );
    }

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("jOHN"), "John");
        assert_eq!(capitalize("smith"), "Smith");
        assert_eq!(capitalize("1abc"), "1abc");
        assert_eq!(capitalize(""), "");
    }
}
