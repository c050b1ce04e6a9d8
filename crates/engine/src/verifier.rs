// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The identity-verification intake pipeline.
//!
//! Verification is a cooperative, resumable sequence of field validators
//! driven by a coordinator: the caller feeds one raw field at a time, a
//! rejected value leaves the intake parked on the same step for re-entry,
//! and `back` unwinds to the previous step. The pipeline is all-or-
//! nothing: a complete [`Identity`] exists only once every step has
//! passed, and dropping the intake at any point aborts with no partial
//! identity retained anywhere.
//!
//! The coordinator is an explicit step machine with a per-field retry
//! contract, not a nest of blocking calls; there is no recursion and no
//! unbounded call stack regardless of how many times a field is
//! re-entered.

use crate::error::{EngineError, translate_domain_error};
use seatline_domain::{
    Address, ContactNumber, GovernmentId, IdKind, Identity, PersonName,
};
use time::OffsetDateTime;

/// The steps of the intake, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStep {
    /// The occupant's first name.
    FirstName,
    /// Optional middle initial; submit an empty value to skip.
    MiddleInitial,
    /// The occupant's surname.
    Surname,
    /// Which government id type will be presented.
    IdType,
    /// The id number, validated against the selected type's shape.
    IdNumber,
    /// The contact number.
    Contact,
    /// Street line of the address.
    Street,
    /// Barangay of the address.
    Barangay,
    /// City or municipality of the address.
    City,
    /// Province of the address.
    Province,
    /// Postal code of the address.
    PostalCode,
    /// Every field has passed; the identity can be finished.
    Complete,
}

impl VerifyStep {
    /// A short operator-facing label for the step.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::MiddleInitial => "Middle initial (optional)",
            Self::Surname => "Surname",
            Self::IdType => "Government id type",
            Self::IdNumber => "Government id number",
            Self::Contact => "Mobile number",
            Self::Street => "Street address",
            Self::Barangay => "Barangay",
            Self::City => "City/Municipality",
            Self::Province => "Province",
            Self::PostalCode => "Postal code",
            Self::Complete => "Verification complete",
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::FirstName | Self::MiddleInitial => Self::FirstName,
            Self::Surname => Self::MiddleInitial,
            Self::IdType => Self::Surname,
            Self::IdNumber => Self::IdType,
            Self::Contact => Self::IdNumber,
            Self::Street => Self::Contact,
            Self::Barangay => Self::Street,
            Self::City => Self::Barangay,
            Self::Province => Self::City,
            Self::PostalCode => Self::Province,
            Self::Complete => Self::PostalCode,
        }
    }
}

/// A resumable identity-verification session.
///
/// Create one per booking attempt, feed it fields with [`submit`], and
/// call [`finish`] once [`VerifyStep::Complete`] is reached. Dropping the
/// intake at any point is the abort path.
///
/// [`submit`]: VerificationIntake::submit
/// [`finish`]: VerificationIntake::finish
#[derive(Debug)]
pub struct VerificationIntake {
    step: VerifyStep,
    first_name: Option<String>,
    middle_initial: Option<char>,
    surname: Option<String>,
    id_kind: Option<IdKind>,
    government_id: Option<GovernmentId>,
    contact: Option<ContactNumber>,
    street: Option<String>,
    barangay: Option<String>,
    city: Option<String>,
    province: Option<String>,
    postal_code: Option<String>,
}

impl Default for VerificationIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationIntake {
    /// Starts a new intake at the first step.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: VerifyStep::FirstName,
            first_name: None,
            middle_initial: None,
            surname: None,
            id_kind: None,
            government_id: None,
            contact: None,
            street: None,
            barangay: None,
            city: None,
            province: None,
            postal_code: None,
        }
    }

    /// Returns the step awaiting input.
    #[must_use]
    pub const fn step(&self) -> VerifyStep {
        self.step
    }

    /// Returns whether every field has passed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.step() == VerifyStep::Complete
    }

    /// Submits the raw value for the current step.
    ///
    /// On success the intake advances and the new step is returned. On
    /// failure the field-specific validation error is returned and the
    /// intake stays parked on the same step, awaiting re-entry; nothing
    /// submitted earlier is lost.
    ///
    /// The id-type step accepts either the 1-based index into
    /// [`IdKind::ALL`] or the exact type name.
    ///
    /// # Errors
    ///
    /// `Validation` naming the offending field, or `StateConflict` if the
    /// intake is already complete.
    pub fn submit(&mut self, value: &str) -> Result<VerifyStep, EngineError> {
        let step: VerifyStep = self.step();
        match step {
            VerifyStep::FirstName => {
                self.first_name = Some(
                    seatline_domain::validate_first_name(value).map_err(translate_domain_error)?,
                );
            }
            VerifyStep::MiddleInitial => {
                self.middle_initial = seatline_domain::validate_middle_initial(value)
                    .map_err(translate_domain_error)?;
            }
            VerifyStep::Surname => {
                self.surname = Some(
                    seatline_domain::validate_surname(value).map_err(translate_domain_error)?,
                );
            }
            VerifyStep::IdType => {
                self.id_kind = Some(Self::parse_id_kind(value)?);
            }
            VerifyStep::IdNumber => {
                let kind: IdKind = self.id_kind.ok_or_else(|| EngineError::StateConflict {
                    message: String::from("no government id type selected"),
                })?;
                self.government_id =
                    Some(GovernmentId::new(kind, value).map_err(translate_domain_error)?);
            }
            VerifyStep::Contact => {
                self.contact =
                    Some(ContactNumber::new(value).map_err(translate_domain_error)?);
            }
            VerifyStep::Street => {
                self.street = Some(
                    seatline_domain::validate_street(value).map_err(translate_domain_error)?,
                );
            }
            VerifyStep::Barangay => {
                self.barangay = Some(
                    seatline_domain::validate_barangay(value).map_err(translate_domain_error)?,
                );
            }
            VerifyStep::City => {
                self.city =
                    Some(seatline_domain::validate_city(value).map_err(translate_domain_error)?);
            }
            VerifyStep::Province => {
                self.province = Some(
                    seatline_domain::validate_province(value).map_err(translate_domain_error)?,
                );
            }
            VerifyStep::PostalCode => {
                self.postal_code = Some(
                    seatline_domain::validate_postal_code(value)
                        .map_err(translate_domain_error)?,
                );
            }
            VerifyStep::Complete => {
                return Err(EngineError::StateConflict {
                    message: String::from("verification is already complete"),
                });
            }
        }

        let next: VerifyStep = Self::next_step(step);
        self.step = next;
        Ok(next)
    }

    /// Steps back to the previous field, clearing its stored value so it
    /// can be re-entered. At the first step this is a no-op.
    pub fn back(&mut self) -> VerifyStep {
        let previous: VerifyStep = self.step().previous();
        match previous {
            VerifyStep::FirstName => self.first_name = None,
            VerifyStep::MiddleInitial => self.middle_initial = None,
            VerifyStep::Surname => self.surname = None,
            VerifyStep::IdType => {
                self.id_kind = None;
                self.government_id = None;
            }
            VerifyStep::IdNumber => self.government_id = None,
            VerifyStep::Contact => self.contact = None,
            VerifyStep::Street => self.street = None,
            VerifyStep::Barangay => self.barangay = None,
            VerifyStep::City => self.city = None,
            VerifyStep::Province => self.province = None,
            VerifyStep::PostalCode => self.postal_code = None,
            VerifyStep::Complete => {}
        }
        self.step = previous;
        previous
    }

    /// Produces the complete, immutable identity.
    ///
    /// Consumes the intake; the identity exists only if every step
    /// passed.
    ///
    /// # Arguments
    ///
    /// * `verified_at` - The verification timestamp
    ///
    /// # Errors
    ///
    /// `StateConflict` if any step is still outstanding.
    pub fn finish(self, verified_at: OffsetDateTime) -> Result<Identity, EngineError> {
        if !self.is_complete() {
            return Err(EngineError::StateConflict {
                message: format!(
                    "verification is incomplete: awaiting {}",
                    self.step().label()
                ),
            });
        }

        let incomplete = || EngineError::StateConflict {
            message: String::from("verification is incomplete"),
        };

        let middle: String = self.middle_initial.map(String::from).unwrap_or_default();
        let name: PersonName = PersonName::new(
            &self.first_name.ok_or_else(incomplete)?,
            &middle,
            &self.surname.ok_or_else(incomplete)?,
        )
        .map_err(translate_domain_error)?;

        let address: Address = Address::new(
            &self.street.ok_or_else(incomplete)?,
            &self.barangay.ok_or_else(incomplete)?,
            &self.city.ok_or_else(incomplete)?,
            &self.province.ok_or_else(incomplete)?,
            &self.postal_code.ok_or_else(incomplete)?,
        )
        .map_err(translate_domain_error)?;

        Ok(Identity::new(
            name,
            self.government_id.ok_or_else(incomplete)?,
            self.contact.ok_or_else(incomplete)?,
            address,
            verified_at,
        ))
    }

    fn parse_id_kind(value: &str) -> Result<IdKind, EngineError> {
        let trimmed: &str = value.trim();

        // Accept the 1-based menu index as well as the exact type name.
        if let Ok(index) = trimmed.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| IdKind::ALL.get(i).copied())
                .ok_or_else(|| EngineError::Validation {
                    field: String::from("id_type"),
                    message: format!(
                        "selection must be between 1 and {}",
                        IdKind::ALL.len()
                    ),
                });
        }

        trimmed
            .parse::<IdKind>()
            .map_err(translate_domain_error)
    }

    const fn next_step(step: VerifyStep) -> VerifyStep {
        match step {
            VerifyStep::FirstName => VerifyStep::MiddleInitial,
            VerifyStep::MiddleInitial => VerifyStep::Surname,
            VerifyStep::Surname => VerifyStep::IdType,
            VerifyStep::IdType => VerifyStep::IdNumber,
            VerifyStep::IdNumber => VerifyStep::Contact,
            VerifyStep::Contact => VerifyStep::Street,
            VerifyStep::Street => VerifyStep::Barangay,
            VerifyStep::Barangay => VerifyStep::City,
            VerifyStep::City => VerifyStep::Province,
            VerifyStep::Province => VerifyStep::PostalCode,
            VerifyStep::PostalCode | VerifyStep::Complete => VerifyStep::Complete,
        }
    }
}
