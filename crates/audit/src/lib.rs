// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use seatline_domain::{SeatId, Service};
use std::str::FromStr;
use time::OffsetDateTime;

/// The kind of state-changing action an audit record describes.
///
/// The string forms are the wire names written to the audit table. Manual
/// and automatic cancellations are distinct kinds so expiry sweeps remain
/// distinguishable from operator actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// A single identity-verified reservation.
    Reservation,
    /// One seat of an atomic multi-seat reservation.
    BulkReservation,
    /// An operator-initiated cancellation.
    Cancellation,
    /// An expiry-sweep cancellation of an overdue booking.
    AutoCancellation,
    /// A booking moved from one seat to another.
    SeatMove,
    /// A booking re-priced under a different ticket type.
    TicketTypeChange,
    /// Contact details refreshed on an existing booking.
    ContactUpdate,
    /// A seat administratively blocked.
    SeatUnavailable,
    /// A seat administratively reset to available.
    SeatReset,
    /// One seat of an administrative whole-service reset.
    FullReset,
}

impl ActionKind {
    /// Returns the wire name of this action kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reservation => "VERIFIED_RESERVATION",
            Self::BulkReservation => "BULK_RESERVATION",
            Self::Cancellation => "CANCELLATION",
            Self::AutoCancellation => "AUTO_CANCELLATION",
            Self::SeatMove => "SEAT_MOVE",
            Self::TicketTypeChange => "TICKET_TYPE_UPDATE",
            Self::ContactUpdate => "CONTACT_UPDATE",
            Self::SeatUnavailable => "SEAT_UNAVAILABLE",
            Self::SeatReset => "SEAT_RESET",
            Self::FullReset => "FULL_RESET",
        }
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VERIFIED_RESERVATION" => Ok(Self::Reservation),
            "BULK_RESERVATION" => Ok(Self::BulkReservation),
            "CANCELLATION" => Ok(Self::Cancellation),
            "AUTO_CANCELLATION" => Ok(Self::AutoCancellation),
            "SEAT_MOVE" => Ok(Self::SeatMove),
            "TICKET_TYPE_UPDATE" => Ok(Self::TicketTypeChange),
            "CONTACT_UPDATE" => Ok(Self::ContactUpdate),
            "SEAT_UNAVAILABLE" => Ok(Self::SeatUnavailable),
            "SEAT_RESET" => Ok(Self::SeatReset),
            "FULL_RESET" => Ok(Self::FullReset),
            other => Err(format!("unknown action kind '{other}'")),
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable record of one completed state-changing action.
///
/// Records are append-only: once written they are never edited or deleted,
/// and the total order of the log is the append order. The details string
/// is already redacted by the producer; it never contains a government id
/// number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    /// When the action completed.
    pub recorded_at: OffsetDateTime,
    /// The service the seat belongs to.
    pub service: Service,
    /// The seat the action touched.
    pub seat: SeatId,
    /// What happened.
    pub action: ActionKind,
    /// Redacted, human-readable context for the action.
    pub details: String,
}

impl AuditRecord {
    /// Creates a new audit record.
    ///
    /// # Arguments
    ///
    /// * `recorded_at` - When the action completed
    /// * `service` - The service the seat belongs to
    /// * `seat` - The seat the action touched
    /// * `action` - What happened
    /// * `details` - Redacted context for the action
    #[must_use]
    pub const fn new(
        recorded_at: OffsetDateTime,
        service: Service,
        seat: SeatId,
        action: ActionKind,
        details: String,
    ) -> Self {
        Self {
            recorded_at,
            service,
            seat,
            action,
            details,
        }
    }
}
