// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::engine::ReservationEngine;
use crate::error::EngineError;
use crate::tests::helpers::{identity_for, seat, test_engine, test_now};
use crate::ticket::{CsvTicketSink, TicketSink, TicketSnapshot, verification_hash};
use seatline_domain::{IdKind, Service, TicketType};

fn snapshot_for_booking() -> TicketSnapshot {
    let engine: ReservationEngine = test_engine();
    engine
        .reserve(
            Service::Cinema,
            seat("6D"),
            identity_for("Juan", "Cruz"),
            TicketType::new("VIP"),
            test_now(),
        )
        .unwrap();
    engine.ticket_snapshot(Service::Cinema, seat("6D")).unwrap()
}

#[test]
fn test_snapshot_carries_booking_fields_but_not_id_number() {
    let snapshot: TicketSnapshot = snapshot_for_booking();

    assert_eq!(snapshot.passenger, "Juan Cruz");
    assert_eq!(snapshot.id_type, IdKind::Passport);
    assert_eq!(snapshot.address, "123 Rizal St., San Isidro, Quezon City, Metro Manila 1100");

    // The raw id number ("AB123456") must not appear anywhere in the
    // snapshot's rendered fields.
    let rendered: String = format!("{snapshot:?}");
    assert!(!rendered.contains("AB123456"));
}

#[test]
fn test_verification_hash_is_deterministic_and_fixed_length() {
    let snapshot: TicketSnapshot = snapshot_for_booking();

    let recomputed: String = verification_hash(
        snapshot.service,
        snapshot.seat,
        &snapshot.passenger,
        &snapshot.booked_at,
        snapshot.id_type,
    );

    assert_eq!(snapshot.verification_hash, recomputed);
    assert_eq!(snapshot.verification_hash.len(), 16);
    assert!(
        snapshot
            .verification_hash
            .chars()
            .all(|c| c.is_ascii_hexdigit())
    );
}

#[test]
fn test_verification_hash_detects_field_tampering() {
    let snapshot: TicketSnapshot = snapshot_for_booking();

    let tampered: String = verification_hash(
        snapshot.service,
        snapshot.seat,
        "Someone Else",
        &snapshot.booked_at,
        snapshot.id_type,
    );

    assert_ne!(snapshot.verification_hash, tampered);
}

#[test]
fn test_snapshot_of_unbooked_seat_is_a_state_conflict() {
    let engine: ReservationEngine = test_engine();

    let result = engine.ticket_snapshot(Service::Cinema, seat("1A"));
    assert!(matches!(result, Err(EngineError::StateConflict { .. })));

    let missing = engine.ticket_snapshot(Service::Bus, seat("13A"));
    assert!(matches!(missing, Err(EngineError::NotFound { .. })));
}

#[test]
fn test_csv_sink_writes_one_file_per_booking() {
    let snapshot: TicketSnapshot = snapshot_for_booking();

    let dir: std::path::PathBuf =
        std::env::temp_dir().join(format!("seatline_tickets_{}", std::process::id()));
    let sink: CsvTicketSink = CsvTicketSink::new(&dir);
    sink.deliver(&snapshot).unwrap();

    let path: std::path::PathBuf = dir.join(CsvTicketSink::file_name(&snapshot));
    let contents: String = std::fs::read_to_string(&path).unwrap();

    assert!(contents.contains("Juan Cruz"));
    assert!(contents.contains("Passport"));
    assert!(contents.contains(&snapshot.verification_hash));
    assert!(!contents.contains("AB123456"));

    std::fs::remove_dir_all(&dir).ok();
}
