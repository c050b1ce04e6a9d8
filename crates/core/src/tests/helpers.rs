// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatline_domain::{
    Address, ContactNumber, GovernmentId, IdKind, Identity, PersonName, SeatId,
};
use time::OffsetDateTime;
use time::macros::datetime;

/// A fixed instant used as "now" in tests so transitions are reproducible.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-02-01 12:00:00 UTC)
}

/// A complete verified identity for a given passenger name.
pub fn identity_for(first: &str, surname: &str) -> Identity {
    Identity::new(
        PersonName::new(first, "", surname).unwrap(),
        GovernmentId::new(IdKind::NationalId, "123456789012").unwrap(),
        ContactNumber::new("09171234567").unwrap(),
        Address::new("123 Rizal St.", "San Isidro", "Quezon City", "Metro Manila", "1100").unwrap(),
        test_now(),
    )
}

/// Shorthand for a canonical seat id.
pub fn seat(raw: &str) -> SeatId {
    SeatId::parse(raw).unwrap()
}
