// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use crate::tests::helpers::{identity_for, reserve_transition, seat, test_now};
use diesel::prelude::*;
use seatline::{Command, ServiceState, TransitionResult, apply};
use seatline_domain::{Booking, Money, PricingTable, SeatStatus, Service, TicketType};

#[test]
fn test_unknown_service_loads_as_fully_available_layout() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let state: ServiceState = persistence.load_state(Service::Cinema).unwrap();

    assert_eq!(state.seats().len(), Service::Cinema.seat_count());
    assert_eq!(
        state.count_with_status(SeatStatus::Available),
        Service::Cinema.seat_count()
    );
}

#[test]
fn test_persisted_booking_round_trips_every_field() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let transition: TransitionResult = reserve_transition(Service::Airplane, "12B", "VIP");
    persistence.persist_transition(&transition).unwrap();

    let loaded: ServiceState = persistence.load_state(Service::Airplane).unwrap();
    let booking: &Booking = loaded.seat(&seat("12B")).unwrap().booking().unwrap();

    assert_eq!(booking.occupant, identity_for("Juan", "Cruz"));
    assert_eq!(booking.ticket_type, TicketType::new("VIP"));
    assert_eq!(booking.base_price, Money::from_pesos(1_200));
    assert_eq!(booking.final_price, Money::from_pesos(2_000));
    assert_eq!(booking.booked_at, test_now());
}

#[test]
fn test_commit_covers_the_whole_service_seat_set() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let first: TransitionResult = reserve_transition(Service::Bus, "1A", "Regular");
    persistence.persist_transition(&first).unwrap();

    // A second transition built on the loaded state keeps the first
    // booking and adds another.
    let loaded: ServiceState = persistence.load_state(Service::Bus).unwrap();
    let second: TransitionResult = apply(
        &loaded,
        &PricingTable::standard(),
        Command::Reserve {
            seat: seat("2B"),
            identity: identity_for("Maria", "Santos"),
            ticket_type: TicketType::new("Senior"),
        },
        test_now(),
    )
    .unwrap();
    persistence.persist_transition(&second).unwrap();

    let final_state: ServiceState = persistence.load_state(Service::Bus).unwrap();
    assert!(final_state.seat(&seat("1A")).unwrap().is_taken());
    assert!(final_state.seat(&seat("2B")).unwrap().is_taken());
    assert_eq!(final_state.count_with_status(SeatStatus::Taken), 2);
}

#[test]
fn test_services_are_stored_independently() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let transition: TransitionResult = reserve_transition(Service::Cinema, "1A", "Regular");
    persistence.persist_transition(&transition).unwrap();

    let bus: ServiceState = persistence.load_state(Service::Bus).unwrap();
    assert_eq!(bus.count_with_status(SeatStatus::Taken), 0);

    let cinema: ServiceState = persistence.load_state(Service::Cinema).unwrap();
    assert_eq!(cinema.count_with_status(SeatStatus::Taken), 1);
}

#[test]
fn test_unavailable_seat_round_trips() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let state: ServiceState = ServiceState::fresh(Service::Cinema);
    let blocked: TransitionResult = apply(
        &state,
        &PricingTable::standard(),
        Command::SetUnavailable { seat: seat("3C") },
        test_now(),
    )
    .unwrap();
    persistence.persist_transition(&blocked).unwrap();

    let loaded: ServiceState = persistence.load_state(Service::Cinema).unwrap();
    assert_eq!(
        loaded.seat(&seat("3C")).unwrap().status(),
        SeatStatus::Unavailable
    );
}

#[test]
fn test_missing_price_columns_decode_as_zero() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let transition: TransitionResult = reserve_transition(Service::Cinema, "1A", "Regular");
    persistence.persist_transition(&transition).unwrap();

    // Simulate a malformed legacy row with blank price fields.
    diesel::update(
        crate::diesel_schema::seats::table
            .filter(crate::diesel_schema::seats::seat.eq("1A"))
            .filter(crate::diesel_schema::seats::service.eq("C")),
    )
    .set((
        crate::diesel_schema::seats::base_price_centavos.eq(None::<i64>),
        crate::diesel_schema::seats::final_price_centavos.eq(None::<i64>),
    ))
    .execute(&mut persistence.conn)
    .unwrap();

    let loaded: ServiceState = persistence.load_state(Service::Cinema).unwrap();
    let booking: &Booking = loaded.seat(&seat("1A")).unwrap().booking().unwrap();

    // Reports treat the missing amounts as zero rather than failing.
    assert_eq!(booking.base_price, Money::ZERO);
    assert_eq!(booking.final_price, Money::ZERO);
    assert_eq!(booking.occupant.name().display(), "Juan D. Cruz");
}

#[test]
fn test_failed_transition_leaves_store_unchanged() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let transition: TransitionResult = reserve_transition(Service::Cinema, "1A", "Regular");
    persistence.persist_transition(&transition).unwrap();

    let before_audit: i64 = persistence.audit_count().unwrap();

    // A conflicting reserve never reaches the store: apply() fails first.
    let loaded: ServiceState = persistence.load_state(Service::Cinema).unwrap();
    let conflict = apply(
        &loaded,
        &PricingTable::standard(),
        Command::Reserve {
            seat: seat("1A"),
            identity: identity_for("Maria", "Santos"),
            ticket_type: TicketType::new("Regular"),
        },
        test_now(),
    );
    assert!(conflict.is_err());

    assert_eq!(persistence.audit_count().unwrap(), before_audit);
    let unchanged: ServiceState = persistence.load_state(Service::Cinema).unwrap();
    let booking: &Booking = unchanged.seat(&seat("1A")).unwrap().booking().unwrap();
    assert_eq!(booking.occupant.name().display(), "Juan D. Cruz");
}
