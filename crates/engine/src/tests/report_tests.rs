// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::engine::ReservationEngine;
use crate::report::{OccupancySummary, RevenueSummary, SearchMatch, SystemSummary};
use crate::tests::helpers::{identity_for, seat, test_engine, test_now};
use seatline_domain::{Money, Service, TicketType};

fn seeded_engine() -> ReservationEngine {
    let engine: ReservationEngine = test_engine();
    engine
        .reserve(
            Service::Cinema,
            seat("1A"),
            identity_for("Juan", "Cruz"),
            TicketType::new("Regular"),
            test_now(),
        )
        .unwrap();
    engine
        .reserve(
            Service::Cinema,
            seat("1B"),
            identity_for("Maria", "Santos"),
            TicketType::new("VIP"),
            test_now(),
        )
        .unwrap();
    engine
        .reserve(
            Service::Cinema,
            seat("2A"),
            identity_for("Pedro", "Reyes"),
            TicketType::new("VIP"),
            test_now(),
        )
        .unwrap();
    engine
        .set_unavailable(Service::Cinema, seat("10F"), test_now())
        .unwrap();
    engine
}

#[test]
fn test_occupancy_counts_by_status() {
    let engine: ReservationEngine = seeded_engine();

    let summary: OccupancySummary = engine.occupancy(Service::Cinema).unwrap();
    assert_eq!(summary.total, 60);
    assert_eq!(summary.taken, 3);
    assert_eq!(summary.unavailable, 1);
    assert_eq!(summary.available, 56);
}

#[test]
fn test_revenue_totals_by_ticket_type() {
    let engine: ReservationEngine = seeded_engine();

    let summary: RevenueSummary = engine.revenue_summary(Service::Cinema).unwrap();
    assert_eq!(summary.bookings, 3);
    assert_eq!(summary.total, Money::from_pesos(750));

    let vip = summary
        .by_ticket_type
        .iter()
        .find(|line| line.ticket_type == TicketType::new("VIP"))
        .unwrap();
    assert_eq!(vip.bookings, 2);
    assert_eq!(vip.revenue, Money::from_pesos(600));
}

#[test]
fn test_system_summary_spans_services() {
    let engine: ReservationEngine = seeded_engine();
    engine
        .reserve(
            Service::Airplane,
            seat("1A"),
            identity_for("Ana", "Lopez"),
            TicketType::new("Regular"),
            test_now(),
        )
        .unwrap();

    let summary: SystemSummary = engine.system_summary().unwrap();
    assert_eq!(summary.total_bookings, 4);
    assert_eq!(summary.total_revenue, Money::from_pesos(1_950));
    assert_eq!(summary.services.len(), 3);

    let bus = summary
        .services
        .iter()
        .find(|line| line.service == Service::Bus)
        .unwrap();
    assert_eq!(bus.bookings, 0);
    assert_eq!(bus.revenue, Money::ZERO);
}

#[test]
fn test_search_by_name_substring_is_case_insensitive() {
    let engine: ReservationEngine = seeded_engine();

    let matches: Vec<SearchMatch> = engine.search(Service::Cinema, "maria").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].seat, seat("1B"));
    assert_eq!(matches[0].occupant, "Maria Santos");
}

#[test]
fn test_search_by_seat_id_accepts_either_raw_form() {
    let engine: ReservationEngine = seeded_engine();

    let matches: Vec<SearchMatch> = engine.search(Service::Cinema, "a2").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].seat, seat("2A"));
}

#[test]
fn test_search_misses_return_empty() {
    let engine: ReservationEngine = seeded_engine();

    assert!(engine.search(Service::Cinema, "nobody").unwrap().is_empty());
    assert!(engine.search(Service::Cinema, "").unwrap().is_empty());
    // 3C is in the layout but holds no booking.
    assert!(engine.search(Service::Cinema, "3C").unwrap().is_empty());
}
