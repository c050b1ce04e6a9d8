// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::identity::Identity;
use crate::money::Money;
use crate::pricing::TicketType;
use std::str::FromStr;
use time::OffsetDateTime;

/// The three states a seat can be in. Exactly one applies at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatStatus {
    /// Open for reservation.
    Available,
    /// Occupied by a verified booking.
    Taken,
    /// Administratively blocked; not bookable.
    Unavailable,
}

impl SeatStatus {
    /// Returns the wire form used in the backing store.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Taken => "Taken",
            Self::Unavailable => "Unavailable",
        }
    }
}

impl FromStr for SeatStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "Taken" => Ok(Self::Taken),
            "Unavailable" => Ok(Self::Unavailable),
            other => Err(format!("unknown seat status '{other}'")),
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The occupant data of a taken seat.
///
/// Every field is mandatory: a booking cannot exist without a verified
/// identity, a priced ticket type, and a timestamp. This is what makes the
/// seat invariant (`Taken` iff all occupant fields present) structural
/// rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// The verified occupant identity.
    pub occupant: Identity,
    /// The priced tier this booking was sold under.
    pub ticket_type: TicketType,
    /// The service's Regular base price at booking time.
    pub base_price: Money,
    /// The amount charged.
    pub final_price: Money,
    /// Set on every taken-producing write, including transfers and
    /// re-pricing.
    pub booked_at: OffsetDateTime,
}

/// One seat of a service's layout.
///
/// Seats are never created or deleted after the layout is materialized;
/// they only move between these three states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seat {
    /// Open for reservation.
    Available,
    /// Occupied; carries the full booking record.
    Taken(Booking),
    /// Administratively blocked.
    Unavailable,
}

impl Seat {
    /// Returns the seat's status.
    #[must_use]
    pub const fn status(&self) -> SeatStatus {
        match self {
            Self::Available => SeatStatus::Available,
            Self::Taken(_) => SeatStatus::Taken,
            Self::Unavailable => SeatStatus::Unavailable,
        }
    }

    /// Returns the booking if the seat is taken.
    #[must_use]
    pub const fn booking(&self) -> Option<&Booking> {
        match self {
            Self::Taken(booking) => Some(booking),
            Self::Available | Self::Unavailable => None,
        }
    }

    /// Returns whether the seat is open for reservation.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns whether the seat is occupied.
    #[must_use]
    pub const fn is_taken(&self) -> bool {
        matches!(self, Self::Taken(_))
    }
}
