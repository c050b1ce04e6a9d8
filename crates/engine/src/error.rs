// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the engine boundary.
//!
//! Inner errors (domain, core, persistence) are translated explicitly
//! into this taxonomy and never leak through the public surface:
//!
//! - `NotFound` — unknown seat, service, or ticket type.
//! - `StateConflict` — the seat is not in the status the operation
//!   requires. Recoverable by retrying with a different seat.
//! - `Validation` — an identity, contact, address, or pricing field fails
//!   its format rules. Always field-specific; recoverable by re-entering
//!   the one offending field.
//! - `Storage` — the backing store failed. The in-flight operation is
//!   aborted with no partial effect.

use seatline::CoreError;
use seatline_domain::DomainError;

/// Engine-level errors surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A requested resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The seat is not in the status required by the operation.
    StateConflict {
        /// A human-readable description of the conflict, naming the seat.
        message: String,
    },
    /// A field failed its format rules.
    Validation {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The backing store failed; the operation was aborted entirely.
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, message } => {
                write!(f, "{resource} not found: {message}")
            }
            Self::StateConflict { message } => write!(f, "State conflict: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Storage { message } => write!(f, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<seatline_persistence::PersistenceError> for EngineError {
    fn from(err: seatline_persistence::PersistenceError) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an engine error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> EngineError {
    match err {
        DomainError::UnknownService(key) => EngineError::NotFound {
            resource: String::from("Service"),
            message: format!("Service '{key}' does not exist"),
        },
        DomainError::UnknownTicketType {
            service,
            ticket_type,
        } => EngineError::NotFound {
            resource: String::from("Ticket type"),
            message: format!("Ticket type '{ticket_type}' is not configured for {service}"),
        },
        DomainError::InvalidSeatId(msg) => EngineError::Validation {
            field: String::from("seat"),
            message: msg,
        },
        DomainError::InvalidPricingValue { ticket_type, reason } => EngineError::Validation {
            field: String::from("pricing"),
            message: format!("'{ticket_type}': {reason}"),
        },
        DomainError::InvalidDiscountRate { basis_points } => EngineError::Validation {
            field: String::from("pricing"),
            message: format!(
                "discount rate must be between 0 and 1 exclusive, got {basis_points} basis points"
            ),
        },
        DomainError::InvalidFirstName(msg) => EngineError::Validation {
            field: String::from("first_name"),
            message: msg,
        },
        DomainError::InvalidMiddleInitial(msg) => EngineError::Validation {
            field: String::from("middle_initial"),
            message: msg,
        },
        DomainError::InvalidSurname(msg) => EngineError::Validation {
            field: String::from("surname"),
            message: msg,
        },
        DomainError::UnknownIdType(name) => EngineError::Validation {
            field: String::from("id_type"),
            message: format!("unknown government id type '{name}'"),
        },
        DomainError::InvalidIdNumber { kind, reason } => EngineError::Validation {
            field: String::from("id_number"),
            message: format!("{}: {reason}", kind.name()),
        },
        DomainError::InvalidContact(msg) => EngineError::Validation {
            field: String::from("contact"),
            message: msg,
        },
        DomainError::InvalidStreet(msg) => EngineError::Validation {
            field: String::from("street"),
            message: msg,
        },
        DomainError::InvalidBarangay(msg) => EngineError::Validation {
            field: String::from("barangay"),
            message: msg,
        },
        DomainError::InvalidCity(msg) => EngineError::Validation {
            field: String::from("city"),
            message: msg,
        },
        DomainError::InvalidProvince(msg) => EngineError::Validation {
            field: String::from("province"),
            message: msg,
        },
        DomainError::InvalidPostalCode(msg) => EngineError::Validation {
            field: String::from("postal_code"),
            message: msg,
        },
    }
}

/// Translates a core error into an engine error.
///
/// Seat lookups map to `NotFound`; status preconditions map to
/// `StateConflict`; wrapped domain violations reuse the domain
/// translation.
#[must_use]
pub fn translate_core_error(err: CoreError) -> EngineError {
    match err {
        CoreError::SeatNotFound { service, seat } => EngineError::NotFound {
            resource: String::from("Seat"),
            message: format!("Seat {seat} does not exist in the {service} layout"),
        },
        CoreError::SeatAlreadyTaken { .. }
        | CoreError::SeatUnavailable { .. }
        | CoreError::SeatNotReserved { .. }
        | CoreError::TargetUnavailable { .. }
        | CoreError::SameSeat { .. }
        | CoreError::EmptyBulkRequest => EngineError::StateConflict {
            message: err.to_string(),
        },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
