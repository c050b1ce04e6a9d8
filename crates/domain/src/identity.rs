// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{
    validate_barangay, validate_city, validate_contact_number, validate_first_name,
    validate_middle_initial, validate_postal_code, validate_province, validate_street,
    validate_surname,
};
use std::str::FromStr;
use time::OffsetDateTime;

/// The fixed set of government id types accepted for verification.
///
/// Each type carries its own number shape. Numbers are validated against
/// the declared type's shape at construction and never displayed after
/// verification, only stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// LTO driver's license, `L##-##-##-######`.
    DriversLicense,
    /// Passport, one or two letters followed by 6-8 digits.
    Passport,
    /// PhilSys national id, 12 digits.
    NationalId,
    /// SSS id, 10 digits.
    Sss,
    /// GSIS id, 10 digits.
    Gsis,
    /// UMID, 12 digits.
    Umid,
    /// Postal id, two letters followed by 7 digits.
    PostalId,
    /// PRC id, 6-8 digits.
    Prc,
    /// Voter's id, 12 digits.
    VotersId,
}

impl IdKind {
    /// All accepted id types, in presentation order.
    pub const ALL: [Self; 9] = [
        Self::DriversLicense,
        Self::Passport,
        Self::NationalId,
        Self::Sss,
        Self::Gsis,
        Self::Umid,
        Self::PostalId,
        Self::Prc,
        Self::VotersId,
    ];

    /// Returns the display name of this id type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DriversLicense => "Driver's License",
            Self::Passport => "Passport",
            Self::NationalId => "National ID (PhilSys)",
            Self::Sss => "SSS ID",
            Self::Gsis => "GSIS ID",
            Self::Umid => "UMID",
            Self::PostalId => "Postal ID",
            Self::Prc => "PRC ID",
            Self::VotersId => "Voter's ID",
        }
    }

    /// Returns an example number in this type's shape, for prompts.
    #[must_use]
    pub const fn example(&self) -> &'static str {
        match self {
            Self::DriversLicense => "L12-34-56-789012",
            Self::Passport => "AB123456",
            Self::NationalId | Self::Umid | Self::VotersId => "123456789012",
            Self::Sss | Self::Gsis => "1234567890",
            Self::PostalId => "AB1234567",
            Self::Prc => "123456",
        }
    }

    /// Validates a candidate number against this type's shape.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdNumber` naming this type and the
    /// shape violation.
    pub fn validate_number(&self, number: &str) -> Result<(), DomainError> {
        let ok: bool = match self {
            Self::DriversLicense => Self::drivers_license_shape(number),
            Self::Passport => {
                let letters: usize = number.chars().take_while(char::is_ascii_uppercase).count();
                let digits: &str = &number[letters..];
                let shape_ok: bool = (1..=2).contains(&letters)
                    && (6..=8).contains(&digits.len())
                    && digits.chars().all(|c| c.is_ascii_digit());
                if !number.starts_with(|c: char| c.is_ascii_alphabetic()) {
                    return Err(DomainError::InvalidIdNumber {
                        kind: *self,
                        reason: String::from("passport must start with a letter"),
                    });
                }
                shape_ok
            }
            Self::NationalId | Self::Umid | Self::VotersId => fixed_digits(number, 12),
            Self::Sss | Self::Gsis => fixed_digits(number, 10),
            Self::PostalId => {
                let chars: Vec<char> = number.chars().collect();
                chars.len() == 9
                    && chars[..2].iter().all(char::is_ascii_uppercase)
                    && chars[2..].iter().all(char::is_ascii_digit)
            }
            Self::Prc => {
                (6..=8).contains(&number.len()) && number.chars().all(|c| c.is_ascii_digit())
            }
        };

        if ok {
            Ok(())
        } else {
            Err(DomainError::InvalidIdNumber {
                kind: *self,
                reason: format!("invalid format, example: {}", self.example()),
            })
        }
    }

    /// Strict LTO license shape: `LNN-NN-NN-NNNNNN`, first segment one
    /// letter and two digits.
    fn drivers_license_shape(number: &str) -> bool {
        let parts: Vec<&str> = number.split('-').collect();
        if parts.len() != 4 {
            return false;
        }

        let head: Vec<char> = parts[0].chars().collect();
        let head_ok: bool = head.len() == 3
            && head[0].is_ascii_uppercase()
            && head[1..].iter().all(char::is_ascii_digit);

        head_ok
            && parts[1..]
                .iter()
                .zip([2usize, 2, 6])
                .all(|(part, width)| part.chars().count() == width && fixed_digits(part, width))
    }
}

/// Returns whether `value` is exactly `len` ASCII digits.
fn fixed_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

impl FromStr for IdKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DomainError::UnknownIdType(s.to_string()))
    }
}

impl std::fmt::Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A verified government id: declared type plus the validated number.
///
/// The number is retained for the record but is never rendered into any
/// output shown to an end viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernmentId {
    kind: IdKind,
    number: String,
}

impl GovernmentId {
    /// Validates a raw number against the declared type and constructs the
    /// id. The number is trimmed and uppercased before validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdNumber` if the number is empty or does
    /// not match the declared type's shape.
    pub fn new(kind: IdKind, raw_number: &str) -> Result<Self, DomainError> {
        let number: String = raw_number.trim().to_uppercase();
        if number.is_empty() {
            return Err(DomainError::InvalidIdNumber {
                kind,
                reason: String::from("id number is required"),
            });
        }
        kind.validate_number(&number)?;
        Ok(Self { kind, number })
    }

    /// Returns the declared id type.
    #[must_use]
    pub const fn kind(&self) -> IdKind {
        self.kind
    }

    /// Returns the stored number. For persistence only; never display this.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }
}

/// A verified legal name: first name, optional middle initial, surname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    first: String,
    middle_initial: Option<char>,
    surname: String,
}

impl PersonName {
    /// Validates and normalizes the name parts.
    ///
    /// # Errors
    ///
    /// Returns the field-specific `DomainError` of the first failing part.
    pub fn new(first: &str, middle_initial: &str, surname: &str) -> Result<Self, DomainError> {
        Ok(Self {
            first: validate_first_name(first)?,
            middle_initial: validate_middle_initial(middle_initial)?,
            surname: validate_surname(surname)?,
        })
    }

    /// Returns the first name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the middle initial, if any.
    #[must_use]
    pub const fn middle_initial(&self) -> Option<char> {
        self.middle_initial
    }

    /// Returns the surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Composes the canonical display form: `First M. Surname`, or
    /// `First Surname` without a middle initial.
    #[must_use]
    pub fn display(&self) -> String {
        match self.middle_initial {
            Some(initial) => format!("{} {initial}. {}", self.first, self.surname),
            None => format!("{} {}", self.first, self.surname),
        }
    }
}

/// A verified contact number: 10-11 digits, separators stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Validates and normalizes a raw contact number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidContact` if the digit count is out of
    /// range.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        Ok(Self(validate_contact_number(raw)?))
    }

    /// Returns the normalized digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A verified structured Philippine address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    barangay: String,
    city: String,
    province: String,
    postal_code: String,
}

impl Address {
    /// Validates all five fields and constructs the address.
    ///
    /// # Errors
    ///
    /// Returns the field-specific `DomainError` of the first failing field.
    pub fn new(
        street: &str,
        barangay: &str,
        city: &str,
        province: &str,
        postal_code: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            street: validate_street(street)?,
            barangay: validate_barangay(barangay)?,
            city: validate_city(city)?,
            province: validate_province(province)?,
            postal_code: validate_postal_code(postal_code)?,
        })
    }

    /// Returns the street line.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Returns the barangay.
    #[must_use]
    pub fn barangay(&self) -> &str {
        &self.barangay
    }

    /// Returns the city or municipality.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the province.
    #[must_use]
    pub fn province(&self) -> &str {
        &self.province
    }

    /// Returns the postal code.
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Composes the single-line display form:
    /// `street, barangay, city, province postal_code`.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}, {}, {}, {} {}",
            self.street, self.barangay, self.city, self.province, self.postal_code
        )
    }
}

/// A fully verified customer identity attached to a taken seat.
///
/// An identity is immutable once verified; re-verification produces a new
/// value rather than mutating in place. It is retained only while its seat
/// is taken, and survives cancellation only as a redacted string inside the
/// audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: PersonName,
    government_id: GovernmentId,
    contact: ContactNumber,
    address: Address,
    verified_at: OffsetDateTime,
}

impl Identity {
    /// Assembles an identity from verified parts.
    #[must_use]
    pub const fn new(
        name: PersonName,
        government_id: GovernmentId,
        contact: ContactNumber,
        address: Address,
        verified_at: OffsetDateTime,
    ) -> Self {
        Self {
            name,
            government_id,
            contact,
            address,
            verified_at,
        }
    }

    /// Returns the verified legal name.
    #[must_use]
    pub const fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the verified government id.
    #[must_use]
    pub const fn government_id(&self) -> &GovernmentId {
        &self.government_id
    }

    /// Returns the verified contact number.
    #[must_use]
    pub const fn contact(&self) -> &ContactNumber {
        &self.contact
    }

    /// Returns the verified address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the verification timestamp.
    #[must_use]
    pub const fn verified_at(&self) -> OffsetDateTime {
        self.verified_at
    }

    /// Returns a copy with the contact and address replaced.
    ///
    /// Used when an operator updates contact details on an existing
    /// booking; the name and government id are untouched.
    #[must_use]
    pub fn with_contact_details(&self, contact: ContactNumber, address: Address) -> Self {
        Self {
            name: self.name.clone(),
            government_id: self.government_id.clone(),
            contact,
            address,
            verified_at: self.verified_at,
        }
    }

    /// A redacted one-line summary for the audit trail: display name and id
    /// type, never the id number.
    #[must_use]
    pub fn redacted_summary(&self) -> String {
        format!(
            "{} - ID: {}",
            self.name.display(),
            self.government_id.kind().name()
        )
    }
}
