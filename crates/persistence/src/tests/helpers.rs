// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatline::{Command, ServiceState, TransitionResult, apply};
use seatline_domain::{
    Address, ContactNumber, GovernmentId, IdKind, Identity, PersonName, PricingTable, SeatId,
    Service, TicketType,
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
        PersonName::new(first, "D", surname).unwrap(),
        GovernmentId::new(IdKind::DriversLicense, "L12-34-56-789012").unwrap(),
        ContactNumber::new("09171234567").unwrap(),
        Address::new("123 Rizal St.", "San Isidro", "Quezon City", "Metro Manila", "1100").unwrap(),
        test_now(),
    )
}

/// Applies a reservation to a fresh service state, returning the
/// transition ready to persist.
pub fn reserve_transition(service: Service, seat_raw: &str, tier: &str) -> TransitionResult {
    let state: ServiceState = ServiceState::fresh(service);
    apply(
        &state,
        &PricingTable::standard(),
        Command::Reserve {
            seat: seat(seat_raw),
            identity: identity_for("Juan", "Cruz"),
            ticket_type: TicketType::new(tier),
        },
        test_now(),
    )
    .unwrap()
}
