// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatline_domain::{DomainError, SeatId, Service};

/// Errors that can occur during seat state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The seat id is not part of the service's layout.
    SeatNotFound {
        /// The service whose layout was checked.
        service: Service,
        /// The unknown seat.
        seat: SeatId,
    },
    /// The seat is already occupied.
    SeatAlreadyTaken {
        /// The occupied seat.
        seat: SeatId,
        /// Display name of the current occupant.
        occupant: String,
    },
    /// The seat is administratively blocked.
    SeatUnavailable {
        /// The blocked seat.
        seat: SeatId,
    },
    /// The operation requires a taken seat, but the seat holds no booking.
    SeatNotReserved {
        /// The seat without a booking.
        seat: SeatId,
    },
    /// The transfer target is not open for reservation.
    TargetUnavailable {
        /// The unusable target seat.
        seat: SeatId,
    },
    /// A transfer names the same seat as source and target.
    SameSeat {
        /// The repeated seat.
        seat: SeatId,
    },
    /// A bulk request names no seats.
    EmptyBulkRequest,
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SeatNotFound { service, seat } => {
                write!(f, "Seat {seat} does not exist in the {service} layout")
            }
            Self::SeatAlreadyTaken { seat, occupant } => {
                write!(f, "Seat {seat} is already taken by '{occupant}'")
            }
            Self::SeatUnavailable { seat } => write!(f, "Seat {seat} is unavailable"),
            Self::SeatNotReserved { seat } => write!(f, "Seat {seat} is not reserved"),
            Self::TargetUnavailable { seat } => {
                write!(f, "Target seat {seat} is not available")
            }
            Self::SameSeat { seat } => {
                write!(f, "Cannot transfer seat {seat} onto itself")
            }
            Self::EmptyBulkRequest => write!(f, "Bulk reservation names no seats"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
