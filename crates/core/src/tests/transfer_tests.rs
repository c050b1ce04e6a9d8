// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{identity_for, seat, test_now};
use crate::{Command, CoreError, ServiceState, TransitionResult, apply};
use seatline_audit::ActionKind;
use seatline_domain::{Booking, PricingTable, Service, TicketType};

fn state_with_booking() -> (ServiceState, PricingTable) {
    let pricing: PricingTable = PricingTable::standard();
    let state: ServiceState = ServiceState::fresh(Service::Airplane);
    let reserved: TransitionResult = apply(
        &state,
        &pricing,
        Command::Reserve {
            seat: seat("7A"),
            identity: identity_for("Juan", "Cruz"),
            ticket_type: TicketType::new("VIP"),
        },
        test_now(),
    )
    .unwrap();
    (reserved.new_state, pricing)
}

#[test]
fn test_transfer_preserves_booking_and_frees_source() {
    let (state, pricing) = state_with_booking();
    let original: Booking = state.seat(&seat("7A")).unwrap().booking().unwrap().clone();

    let later = test_now() + time::Duration::hours(1);
    let moved: TransitionResult = apply(
        &state,
        &pricing,
        Command::Transfer {
            from: seat("7A"),
            to: seat("9C"),
        },
        later,
    )
    .unwrap();

    assert!(moved.new_state.seat(&seat("7A")).unwrap().is_available());

    let transferred: &Booking = moved.new_state.seat(&seat("9C")).unwrap().booking().unwrap();
    assert_eq!(transferred.occupant, original.occupant);
    assert_eq!(transferred.ticket_type, original.ticket_type);
    assert_eq!(transferred.base_price, original.base_price);
    assert_eq!(transferred.final_price, original.final_price);
    // Only the timestamp moves forward.
    assert_eq!(transferred.booked_at, later);

    let record = &moved.records[0];
    assert_eq!(record.action, ActionKind::SeatMove);
    assert_eq!(record.details, "Juan Cruz from 7A to 9C");
}

#[test]
fn test_transfer_to_same_seat_fails() {
    let (state, pricing) = state_with_booking();

    let result = apply(
        &state,
        &pricing,
        Command::Transfer {
            from: seat("7A"),
            to: seat("A7"),
        },
        test_now(),
    );

    // "A7" normalizes to "7A", so this is a same-seat transfer.
    assert!(matches!(result, Err(CoreError::SameSeat { .. })));
}

#[test]
fn test_transfer_from_unreserved_seat_fails() {
    let (state, pricing) = state_with_booking();

    let result = apply(
        &state,
        &pricing,
        Command::Transfer {
            from: seat("1B"),
            to: seat("2B"),
        },
        test_now(),
    );

    assert!(matches!(result, Err(CoreError::SeatNotReserved { .. })));
}

#[test]
fn test_transfer_to_taken_or_blocked_seat_fails() {
    let (state, pricing) = state_with_booking();

    let second: TransitionResult = apply(
        &state,
        &pricing,
        Command::Reserve {
            seat: seat("8B"),
            identity: identity_for("Maria", "Santos"),
            ticket_type: TicketType::new("Regular"),
        },
        test_now(),
    )
    .unwrap();

    let onto_taken = apply(
        &second.new_state,
        &pricing,
        Command::Transfer {
            from: seat("7A"),
            to: seat("8B"),
        },
        test_now(),
    );
    assert!(matches!(
        onto_taken,
        Err(CoreError::TargetUnavailable { .. })
    ));

    let blocked: TransitionResult = apply(
        &second.new_state,
        &pricing,
        Command::SetUnavailable { seat: seat("10F") },
        test_now(),
    )
    .unwrap();

    let onto_blocked = apply(
        &blocked.new_state,
        &pricing,
        Command::Transfer {
            from: seat("7A"),
            to: seat("10F"),
        },
        test_now(),
    );
    assert!(matches!(
        onto_blocked,
        Err(CoreError::TargetUnavailable { .. })
    ));
}
