// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{identity_for, seat, test_now};
use crate::{Command, ServiceState, TransitionResult, apply};
use seatline_audit::ActionKind;
use seatline_domain::{PricingTable, Service, TicketType};
use time::Duration;

#[test]
fn test_overdue_booking_is_released_with_auto_cancellation() {
    let state: ServiceState = ServiceState::fresh(Service::Cinema);
    let pricing: PricingTable = PricingTable::standard();

    let reserved: TransitionResult = apply(
        &state,
        &pricing,
        Command::Reserve {
            seat: seat("1A"),
            identity: identity_for("Juan", "Cruz"),
            ticket_type: TicketType::new("Regular"),
        },
        test_now(),
    )
    .unwrap();

    // 25 hours later, a 24-hour retention window has lapsed.
    let sweep_time = test_now() + Duration::hours(25);
    let swept: TransitionResult = apply(
        &reserved.new_state,
        &pricing,
        Command::ExpireOverdue {
            retention: Duration::hours(24),
        },
        sweep_time,
    )
    .unwrap();

    assert!(swept.new_state.seat(&seat("1A")).unwrap().is_available());
    assert_eq!(swept.records.len(), 1);

    let record = &swept.records[0];
    assert_eq!(record.action, ActionKind::AutoCancellation);
    assert_ne!(record.action, ActionKind::Cancellation);
    assert!(record.details.contains("booking expired"));
}

#[test]
fn test_fresh_bookings_survive_the_sweep() {
    let state: ServiceState = ServiceState::fresh(Service::Cinema);
    let pricing: PricingTable = PricingTable::standard();

    let reserved: TransitionResult = apply(
        &state,
        &pricing,
        Command::Reserve {
            seat: seat("1A"),
            identity: identity_for("Juan", "Cruz"),
            ticket_type: TicketType::new("Regular"),
        },
        test_now(),
    )
    .unwrap();

    let sweep_time = test_now() + Duration::hours(23);
    let swept: TransitionResult = apply(
        &reserved.new_state,
        &pricing,
        Command::ExpireOverdue {
            retention: Duration::hours(24),
        },
        sweep_time,
    )
    .unwrap();

    assert!(swept.new_state.seat(&seat("1A")).unwrap().is_taken());
    assert!(swept.records.is_empty());
}

#[test]
fn test_sweep_releases_only_overdue_seats_in_one_transition() {
    let state: ServiceState = ServiceState::fresh(Service::Bus);
    let pricing: PricingTable = PricingTable::standard();

    let old: TransitionResult = apply(
        &state,
        &pricing,
        Command::Reserve {
            seat: seat("1A"),
            identity: identity_for("Juan", "Cruz"),
            ticket_type: TicketType::new("Regular"),
        },
        test_now(),
    )
    .unwrap();

    let recent: TransitionResult = apply(
        &old.new_state,
        &pricing,
        Command::Reserve {
            seat: seat("1B"),
            identity: identity_for("Maria", "Santos"),
            ticket_type: TicketType::new("Regular"),
        },
        test_now() + Duration::hours(20),
    )
    .unwrap();

    let sweep_time = test_now() + Duration::hours(30);
    let swept: TransitionResult = apply(
        &recent.new_state,
        &pricing,
        Command::ExpireOverdue {
            retention: Duration::hours(24),
        },
        sweep_time,
    )
    .unwrap();

    assert!(swept.new_state.seat(&seat("1A")).unwrap().is_available());
    assert!(swept.new_state.seat(&seat("1B")).unwrap().is_taken());
    assert_eq!(swept.records.len(), 1);
    assert_eq!(swept.records[0].seat, seat("1A"));
}
