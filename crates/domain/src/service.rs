// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::seat_id::SeatId;
use std::str::FromStr;

/// A bookable service, each with its own fixed seat layout and pricing.
///
/// The single-letter keys (`C`, `B`, `A`) are the wire form used in the
/// backing store and the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Service {
    /// Cinema hall: rows 1-10, seats A-F.
    Cinema,
    /// Bus coach: rows 1-12, seats A-D.
    Bus,
    /// Airplane cabin: rows 1-16, seats A-F.
    Airplane,
}

impl Service {
    /// All services, in display order.
    pub const ALL: [Self; 3] = [Self::Cinema, Self::Bus, Self::Airplane];

    /// Returns the single-letter wire key for this service.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Cinema => "C",
            Self::Bus => "B",
            Self::Airplane => "A",
        }
    }

    /// Returns the human-readable service name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cinema => "Cinema",
            Self::Bus => "Bus",
            Self::Airplane => "Airplane",
        }
    }

    /// Returns the number of seat rows in this service's layout.
    #[must_use]
    pub const fn row_count(&self) -> u8 {
        match self {
            Self::Cinema => 10,
            Self::Bus => 12,
            Self::Airplane => 16,
        }
    }

    /// Returns the seat letters of each row, in fixed order.
    #[must_use]
    pub const fn row_letters(&self) -> &'static [char] {
        match self {
            Self::Cinema | Self::Airplane => &['A', 'B', 'C', 'D', 'E', 'F'],
            Self::Bus => &['A', 'B', 'C', 'D'],
        }
    }

    /// Returns the full ordered seat layout for this service.
    ///
    /// The layout is fixed at service definition time and deterministic
    /// across calls: row-major, increasing row number, then letter order.
    /// Any seat id not in this sequence is invalid for the service.
    #[must_use]
    pub fn layout(&self) -> Vec<SeatId> {
        let letters: &[char] = self.row_letters();
        let mut seats: Vec<SeatId> = Vec::with_capacity(self.seat_count());
        for row in 1..=self.row_count() {
            for &letter in letters {
                seats.push(SeatId::from_parts(row, letter));
            }
        }
        seats
    }

    /// Returns the total number of seats in this service's layout.
    #[must_use]
    pub const fn seat_count(&self) -> usize {
        self.row_count() as usize * self.row_letters().len()
    }
}

impl FromStr for Service {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" | "c" | "Cinema" | "cinema" => Ok(Self::Cinema),
            "B" | "b" | "Bus" | "bus" => Ok(Self::Bus),
            "A" | "a" | "Airplane" | "airplane" => Ok(Self::Airplane),
            other => Err(DomainError::UnknownService(other.to_string())),
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
