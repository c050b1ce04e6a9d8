// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::identity::IdKind;

/// Errors that can occur during domain validation.
///
/// Every validation failure is field-specific; callers surface the exact
/// field and reason so the operator can correct the single offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The service key or name is not recognized.
    UnknownService(String),
    /// The seat id cannot be normalized into canonical form.
    InvalidSeatId(String),
    /// The ticket type is not configured for the service.
    UnknownTicketType {
        /// The service the lookup was scoped to.
        service: String,
        /// The unrecognized ticket type name.
        ticket_type: String,
    },
    /// A configured pricing value is not usable.
    InvalidPricingValue {
        /// The ticket type the value was configured for.
        ticket_type: String,
        /// Description of why the value was rejected.
        reason: String,
    },
    /// A discount rate outside the open interval (0, 1).
    InvalidDiscountRate {
        /// The rejected rate in basis points.
        basis_points: u16,
    },
    /// First name fails format rules.
    InvalidFirstName(String),
    /// Middle initial fails format rules.
    InvalidMiddleInitial(String),
    /// Surname fails format rules.
    InvalidSurname(String),
    /// The government id type name is not one of the accepted set.
    UnknownIdType(String),
    /// Government id number does not match its declared type's shape.
    InvalidIdNumber {
        /// The declared id type.
        kind: IdKind,
        /// Description of the shape violation.
        reason: String,
    },
    /// Contact number fails format rules.
    InvalidContact(String),
    /// Street address fails format rules.
    InvalidStreet(String),
    /// Barangay fails format rules.
    InvalidBarangay(String),
    /// City or municipality fails format rules.
    InvalidCity(String),
    /// Province fails format rules.
    InvalidProvince(String),
    /// Postal code fails format rules.
    InvalidPostalCode(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownService(key) => write!(f, "Unknown service: '{key}'"),
            Self::InvalidSeatId(msg) => write!(f, "Invalid seat id: {msg}"),
            Self::UnknownTicketType {
                service,
                ticket_type,
            } => {
                write!(
                    f,
                    "Ticket type '{ticket_type}' is not configured for service {service}"
                )
            }
            Self::InvalidPricingValue {
                ticket_type,
                reason,
            } => {
                write!(f, "Invalid pricing value for '{ticket_type}': {reason}")
            }
            Self::InvalidDiscountRate { basis_points } => {
                write!(
                    f,
                    "Discount rate must be between 0 and 1 exclusive, got {basis_points} basis points"
                )
            }
            Self::InvalidFirstName(msg) => write!(f, "Invalid first name: {msg}"),
            Self::InvalidMiddleInitial(msg) => write!(f, "Invalid middle initial: {msg}"),
            Self::InvalidSurname(msg) => write!(f, "Invalid surname: {msg}"),
            Self::UnknownIdType(name) => write!(f, "Unknown government id type: '{name}'"),
            Self::InvalidIdNumber { kind, reason } => {
                write!(f, "Invalid {} number: {reason}", kind.name())
            }
            Self::InvalidContact(msg) => write!(f, "Invalid contact number: {msg}"),
            Self::InvalidStreet(msg) => write!(f, "Invalid street address: {msg}"),
            Self::InvalidBarangay(msg) => write!(f, "Invalid barangay: {msg}"),
            Self::InvalidCity(msg) => write!(f, "Invalid city/municipality: {msg}"),
            Self::InvalidProvince(msg) => write!(f, "Invalid province: {msg}"),
            Self::InvalidPostalCode(msg) => write!(f, "Invalid postal code: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
