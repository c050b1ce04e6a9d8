// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Address, ContactNumber, DomainError, GovernmentId, IdKind, Identity, PersonName};
use time::OffsetDateTime;
use time::macros::datetime;

fn sample_identity() -> Identity {
    let verified_at: OffsetDateTime = datetime!(2026-01-15 10:30:00 UTC);
    Identity::new(
        PersonName::new("Juan", "D", "Cruz").unwrap(),
        GovernmentId::new(IdKind::Passport, "AB123456").unwrap(),
        ContactNumber::new("0917 123 4567").unwrap(),
        Address::new("123 Rizal St.", "San Isidro", "quezon city", "metro manila", "1100").unwrap(),
        verified_at,
    )
}

#[test]
fn test_display_name_includes_middle_initial() {
    let name: PersonName = PersonName::new("juan", "d", "cruz").unwrap();
    assert_eq!(name.display(), "Juan D. Cruz");

    let plain: PersonName = PersonName::new("juan", "", "cruz").unwrap();
    assert_eq!(plain.display(), "Juan Cruz");
}

#[test]
fn test_drivers_license_shape() {
    assert!(GovernmentId::new(IdKind::DriversLicense, "L12-34-56-789012").is_ok());

    // Wrong segmenting, letter in a digit segment, missing letter.
    assert!(GovernmentId::new(IdKind::DriversLicense, "L123456789012").is_err());
    assert!(GovernmentId::new(IdKind::DriversLicense, "L12-3A-56-789012").is_err());
    assert!(GovernmentId::new(IdKind::DriversLicense, "112-34-56-789012").is_err());
}

#[test]
fn test_passport_shape() {
    assert!(GovernmentId::new(IdKind::Passport, "A123456").is_ok());
    assert!(GovernmentId::new(IdKind::Passport, "AB12345678").is_ok());

    assert!(matches!(
        GovernmentId::new(IdKind::Passport, "123456A"),
        Err(DomainError::InvalidIdNumber {
            kind: IdKind::Passport,
            ..
        })
    ));
    assert!(GovernmentId::new(IdKind::Passport, "ABC123456").is_err());
    assert!(GovernmentId::new(IdKind::Passport, "A12345").is_err());
}

#[test]
fn test_fixed_digit_id_shapes() {
    assert!(GovernmentId::new(IdKind::NationalId, "123456789012").is_ok());
    assert!(GovernmentId::new(IdKind::NationalId, "12345678901").is_err());
    assert!(GovernmentId::new(IdKind::Sss, "1234567890").is_ok());
    assert!(GovernmentId::new(IdKind::Sss, "123456789").is_err());
    assert!(GovernmentId::new(IdKind::PostalId, "AB1234567").is_ok());
    assert!(GovernmentId::new(IdKind::PostalId, "A1234567").is_err());
    assert!(GovernmentId::new(IdKind::Prc, "123456").is_ok());
    assert!(GovernmentId::new(IdKind::Prc, "12345").is_err());
}

#[test]
fn test_id_number_is_uppercased_before_validation() {
    let id: GovernmentId = GovernmentId::new(IdKind::Passport, " ab123456 ").unwrap();
    assert_eq!(id.number(), "AB123456");
}

#[test]
fn test_id_kind_name_round_trips() {
    for kind in IdKind::ALL {
        let parsed: IdKind = kind.name().parse().unwrap();
        assert_eq!(parsed, kind);
    }
    assert!(matches!(
        "Library Card".parse::<IdKind>(),
        Err(DomainError::UnknownIdType(_))
    ));
}

#[test]
fn test_address_normalizes_city_and_province() {
    let identity: Identity = sample_identity();
    assert_eq!(identity.address().city(), "Quezon City");
    assert_eq!(identity.address().province(), "Metro Manila");
    assert_eq!(
        identity.address().display(),
        "123 Rizal St., San Isidro, Quezon City, Metro Manila 1100"
    );
}

#[test]
fn test_redacted_summary_omits_id_number() {
    let identity: Identity = sample_identity();
    let summary: String = identity.redacted_summary();

    assert_eq!(summary, "Juan D. Cruz - ID: Passport");
    assert!(!summary.contains("AB123456"));
}

#[test]
fn test_contact_update_preserves_name_and_id() {
    let identity: Identity = sample_identity();
    let updated: Identity = identity.with_contact_details(
        ContactNumber::new("0998 765 4321").unwrap(),
        Address::new("45 Mabini Ave.", "Poblacion", "makati", "metro manila", "1210").unwrap(),
    );

    assert_eq!(updated.name(), identity.name());
    assert_eq!(updated.government_id(), identity.government_id());
    assert_eq!(updated.contact().as_str(), "09987654321");
    assert_eq!(updated.verified_at(), identity.verified_at());
}
