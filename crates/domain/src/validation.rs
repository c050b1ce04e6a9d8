// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation for identity verification.
//!
//! Each function validates exactly one field and returns its normalized
//! value, or a field-specific `DomainError`. The verification pipeline
//! re-prompts the operator on failure; nothing here coerces or drops an
//! invalid field silently.

use crate::error::DomainError;

/// Collapses runs of internal whitespace into single spaces and trims.
#[must_use]
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Title-cases a value: the first letter of each word is uppercased and the
/// rest lowercased. Word boundaries are spaces and hyphens, so hyphenated
/// names like `Anne-Marie` keep both capitals.
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out: String = String::with_capacity(value.len());
    let mut at_boundary: bool = true;
    for c in value.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}

/// Shared rule for name parts: letters, spaces, and hyphens only, at least
/// two characters after whitespace collapsing. Returns the title-cased value.
fn name_part(raw: &str) -> Result<String, String> {
    let collapsed: String = collapse_whitespace(raw);

    if collapsed.is_empty() {
        return Err(String::from("value is required"));
    }

    if collapsed.chars().count() < 2 {
        return Err(String::from("must be at least 2 characters"));
    }

    if !collapsed
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-')
    {
        return Err(String::from(
            "can only contain letters, spaces, and hyphens",
        ));
    }

    Ok(title_case(&collapsed))
}

/// Validates and normalizes a first name.
///
/// # Errors
///
/// Returns `DomainError::InvalidFirstName` if the value is empty, shorter
/// than two characters, or contains anything other than letters, spaces,
/// and hyphens.
pub fn validate_first_name(raw: &str) -> Result<String, DomainError> {
    name_part(raw).map_err(|reason| DomainError::InvalidFirstName(format!("first name {reason}")))
}

/// Validates and normalizes a surname.
///
/// # Errors
///
/// Returns `DomainError::InvalidSurname` under the same rules as
/// [`validate_first_name`].
pub fn validate_surname(raw: &str) -> Result<String, DomainError> {
    name_part(raw).map_err(|reason| DomainError::InvalidSurname(format!("surname {reason}")))
}

/// Validates an optional middle initial.
///
/// An empty value means no middle initial. A non-empty value must be
/// exactly one letter and is normalized to uppercase.
///
/// # Errors
///
/// Returns `DomainError::InvalidMiddleInitial` if the value is more than
/// one character or not a letter.
pub fn validate_middle_initial(raw: &str) -> Result<Option<char>, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut chars = trimmed.chars();
    let first: char = chars.next().unwrap_or(' ');
    if chars.next().is_some() || !first.is_alphabetic() {
        return Err(DomainError::InvalidMiddleInitial(String::from(
            "middle initial must be a single letter",
        )));
    }

    Ok(Some(first.to_ascii_uppercase()))
}

/// Validates and normalizes a contact number.
///
/// Separators and spaces are stripped; the remaining digits must number
/// between 10 and 11. The normalized value is the digit string.
///
/// # Errors
///
/// Returns `DomainError::InvalidContact` if the value is empty or the
/// digit count is out of range.
pub fn validate_contact_number(raw: &str) -> Result<String, DomainError> {
    if raw.trim().is_empty() {
        return Err(DomainError::InvalidContact(String::from(
            "contact number cannot be empty",
        )));
    }

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() < 10 {
        return Err(DomainError::InvalidContact(String::from(
            "contact number too short (minimum 10 digits)",
        )));
    }
    if digits.len() > 11 {
        return Err(DomainError::InvalidContact(String::from(
            "contact number too long (maximum 11 digits)",
        )));
    }

    Ok(digits)
}

/// Validates a street address line.
///
/// # Errors
///
/// Returns `DomainError::InvalidStreet` if the value is empty, shorter than
/// five characters, or contains characters outside letters, digits, spaces,
/// and `- # . ,`.
pub fn validate_street(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidStreet(String::from(
            "street address is required",
        )));
    }

    if trimmed.chars().count() < 5 {
        return Err(DomainError::InvalidStreet(String::from(
            "enter the complete street address including house/building number",
        )));
    }

    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '#' | '.' | ','))
    {
        return Err(DomainError::InvalidStreet(String::from(
            "street address contains invalid characters",
        )));
    }

    Ok(trimmed.to_string())
}

/// Validates a barangay (locality) name.
///
/// # Errors
///
/// Returns `DomainError::InvalidBarangay` if the value is empty or shorter
/// than two characters.
pub fn validate_barangay(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidBarangay(String::from(
            "barangay is required",
        )));
    }
    if trimmed.chars().count() < 2 {
        return Err(DomainError::InvalidBarangay(String::from(
            "enter a valid barangay name",
        )));
    }

    Ok(trimmed.to_string())
}

/// Validates and title-cases a city or municipality name.
///
/// # Errors
///
/// Returns `DomainError::InvalidCity` if the value is empty or shorter than
/// two characters.
pub fn validate_city(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidCity(String::from(
            "city/municipality is required",
        )));
    }
    if trimmed.chars().count() < 2 {
        return Err(DomainError::InvalidCity(String::from(
            "enter a valid city/municipality name",
        )));
    }

    Ok(title_case(trimmed))
}

/// Validates and title-cases a province name.
///
/// # Errors
///
/// Returns `DomainError::InvalidProvince` if the value is empty or shorter
/// than two characters.
pub fn validate_province(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidProvince(String::from(
            "province is required",
        )));
    }
    if trimmed.chars().count() < 2 {
        return Err(DomainError::InvalidProvince(String::from(
            "enter a valid province name",
        )));
    }

    Ok(title_case(trimmed))
}

/// Validates a Philippine postal code.
///
/// Postal codes are exactly four digits, and the numeric value must fall in
/// the assigned range 0800-9820.
///
/// # Errors
///
/// Returns `DomainError::InvalidPostalCode` if the value is empty, not all
/// digits, not four digits long, or outside the assigned range.
pub fn validate_postal_code(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidPostalCode(String::from(
            "postal code is required",
        )));
    }

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidPostalCode(String::from(
            "postal code must contain only digits",
        )));
    }

    if trimmed.len() != 4 {
        return Err(DomainError::InvalidPostalCode(String::from(
            "postal code must be 4 digits",
        )));
    }

    let value: u16 = trimmed.parse().map_err(|_| {
        DomainError::InvalidPostalCode(String::from("postal code must be 4 digits"))
    })?;

    if !(800..=9820).contains(&value) {
        return Err(DomainError::InvalidPostalCode(String::from(
            "not a valid Philippine postal code",
        )));
    }

    Ok(trimmed.to_string())
}
