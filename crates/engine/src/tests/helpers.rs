// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::EngineConfig;
use crate::engine::ReservationEngine;
use seatline_domain::{
    Address, ContactNumber, GovernmentId, IdKind, Identity, PersonName, SeatId,
};
use time::OffsetDateTime;
use time::macros::datetime;

/// A fixed instant used as "now" in tests.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-02-01 12:00:00 UTC)
}

/// Shorthand for a canonical seat id.
pub fn seat(raw: &str) -> SeatId {
    SeatId::parse(raw).unwrap()
}

/// A complete verified identity for a given passenger name.
pub fn identity_for(first: &str, surname: &str) -> Identity {
    Identity::new(
        PersonName::new(first, "", surname).unwrap(),
        GovernmentId::new(IdKind::Passport, "AB123456").unwrap(),
        ContactNumber::new("09171234567").unwrap(),
        Address::new("123 Rizal St.", "San Isidro", "Quezon City", "Metro Manila", "1100").unwrap(),
        test_now(),
    )
}

/// An engine over a fresh in-memory store with the stock configuration.
pub fn test_engine() -> ReservationEngine {
    ReservationEngine::in_memory(EngineConfig::default()).unwrap()
}
