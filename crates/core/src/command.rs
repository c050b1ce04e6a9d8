// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatline_domain::{Address, ContactNumber, Identity, SeatId, TicketType};
use time::Duration;

/// One seat of a bulk reservation: the seat plus its own verified occupant
/// and ticket type. Bulk bookings are not limited to a single passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRequest {
    /// The seat to reserve.
    pub seat: SeatId,
    /// The verified occupant for this seat.
    pub identity: Identity,
    /// The tier this seat is sold under.
    pub ticket_type: TicketType,
}

/// A command represents operator or system intent as data only.
///
/// Commands are the only way to request seat state changes; they carry no
/// behavior and are applied by [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reserve a single available seat for a verified identity.
    Reserve {
        /// The seat to reserve.
        seat: SeatId,
        /// The verified occupant.
        identity: Identity,
        /// The tier the seat is sold under.
        ticket_type: TicketType,
    },
    /// Reserve several seats atomically: all of them transition together
    /// or none do.
    BulkReserve {
        /// The per-seat occupants and tiers.
        requests: Vec<SeatRequest>,
    },
    /// Cancel a booking, returning the seat to available.
    Cancel {
        /// The taken seat to release.
        seat: SeatId,
    },
    /// Move a booking to another seat, preserving identity, ticket type,
    /// and prices.
    Transfer {
        /// The taken source seat.
        from: SeatId,
        /// The available target seat.
        to: SeatId,
    },
    /// Re-price a booking under a different ticket type.
    Retype {
        /// The taken seat to re-price.
        seat: SeatId,
        /// The new tier.
        ticket_type: TicketType,
    },
    /// Refresh the contact details of an existing booking.
    UpdateContact {
        /// The taken seat to update.
        seat: SeatId,
        /// The new verified contact number.
        contact: ContactNumber,
        /// The new verified address.
        address: Address,
    },
    /// Administratively block a seat, discarding any booking.
    SetUnavailable {
        /// The seat to block.
        seat: SeatId,
    },
    /// Administratively reset a seat to available, discarding any booking.
    ResetToAvailable {
        /// The seat to reset.
        seat: SeatId,
    },
    /// Administratively reset every non-available seat of the service.
    ResetAll,
    /// Release every booking older than the retention window.
    ExpireOverdue {
        /// How long a booking may be held before the sweep releases it.
        retention: Duration,
    },
}
