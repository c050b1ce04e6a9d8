// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{identity_for, seat, test_now};
use crate::{Command, CoreError, ServiceState, TransitionResult, apply};
use seatline_audit::ActionKind;
use seatline_domain::{PricingTable, SeatStatus, Service, TicketType};

#[test]
fn test_set_unavailable_discards_any_booking() {
    let state: ServiceState = ServiceState::fresh(Service::Cinema);
    let pricing: PricingTable = PricingTable::standard();

    let reserved: TransitionResult = apply(
        &state,
        &pricing,
        Command::Reserve {
            seat: seat("4E"),
            identity: identity_for("Juan", "Cruz"),
            ticket_type: TicketType::new("Regular"),
        },
        test_now(),
    )
    .unwrap();

    let blocked: TransitionResult = apply(
        &reserved.new_state,
        &pricing,
        Command::SetUnavailable { seat: seat("4E") },
        test_now(),
    )
    .unwrap();

    let seat_state = blocked.new_state.seat(&seat("4E")).unwrap();
    assert_eq!(seat_state.status(), SeatStatus::Unavailable);
    assert!(seat_state.booking().is_none());
    assert_eq!(blocked.records[0].action, ActionKind::SeatUnavailable);
}

#[test]
fn test_reset_to_available_clears_blocked_seat() {
    let state: ServiceState = ServiceState::fresh(Service::Cinema);
    let pricing: PricingTable = PricingTable::standard();

    let blocked: TransitionResult = apply(
        &state,
        &pricing,
        Command::SetUnavailable { seat: seat("4E") },
        test_now(),
    )
    .unwrap();

    let reset: TransitionResult = apply(
        &blocked.new_state,
        &pricing,
        Command::ResetToAvailable { seat: seat("4E") },
        test_now(),
    )
    .unwrap();

    assert!(reset.new_state.seat(&seat("4E")).unwrap().is_available());
    assert_eq!(reset.records[0].action, ActionKind::SeatReset);
}

#[test]
fn test_admin_commands_reject_unknown_seats() {
    let state: ServiceState = ServiceState::fresh(Service::Bus);
    let pricing: PricingTable = PricingTable::standard();

    let unavailable = apply(
        &state,
        &pricing,
        Command::SetUnavailable { seat: seat("99A") },
        test_now(),
    );
    assert!(matches!(unavailable, Err(CoreError::SeatNotFound { .. })));

    let reset = apply(
        &state,
        &pricing,
        Command::ResetToAvailable { seat: seat("99A") },
        test_now(),
    );
    assert!(matches!(reset, Err(CoreError::SeatNotFound { .. })));
}

#[test]
fn test_reset_all_flips_every_non_available_seat() {
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
    let blocked: TransitionResult = apply(
        &reserved.new_state,
        &pricing,
        Command::SetUnavailable { seat: seat("2B") },
        test_now(),
    )
    .unwrap();

    let reset: TransitionResult =
        apply(&blocked.new_state, &pricing, Command::ResetAll, test_now()).unwrap();

    assert_eq!(
        reset.new_state.count_with_status(SeatStatus::Available),
        Service::Cinema.seat_count()
    );
    // One record per flipped seat, none for seats already available.
    assert_eq!(reset.records.len(), 2);
    assert!(
        reset
            .records
            .iter()
            .all(|r| r.action == ActionKind::FullReset)
    );
}
