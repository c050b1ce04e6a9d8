// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::EngineError;
use crate::tests::helpers::test_now;
use crate::verifier::{VerificationIntake, VerifyStep};
use seatline_domain::{IdKind, Identity};

/// Walks a complete intake with valid values.
fn complete_intake() -> VerificationIntake {
    let mut intake: VerificationIntake = VerificationIntake::new();
    for value in [
        "juan",
        "d",
        "cruz",
        "Passport",
        "AB123456",
        "0917 123 4567",
        "123 Rizal St.",
        "San Isidro",
        "quezon city",
        "metro manila",
        "1100",
    ] {
        intake.submit(value).unwrap();
    }
    intake
}

#[test]
fn test_full_walkthrough_produces_verified_identity() {
    let intake: VerificationIntake = complete_intake();
    assert!(intake.is_complete());

    let identity: Identity = intake.finish(test_now()).unwrap();
    assert_eq!(identity.name().display(), "Juan D. Cruz");
    assert_eq!(identity.government_id().kind(), IdKind::Passport);
    assert_eq!(identity.contact().as_str(), "09171234567");
    assert_eq!(identity.address().city(), "Quezon City");
    assert_eq!(identity.verified_at(), test_now());
}

#[test]
fn test_rejected_field_stays_on_the_same_step() {
    let mut intake: VerificationIntake = VerificationIntake::new();

    // A name with digits is rejected and re-prompted, not coerced.
    let rejected = intake.submit("Juan2");
    assert!(matches!(
        rejected,
        Err(EngineError::Validation { ref field, .. }) if field == "first_name"
    ));
    assert_eq!(intake.step(), VerifyStep::FirstName);

    // Corrected input advances.
    assert_eq!(intake.submit("Juan").unwrap(), VerifyStep::MiddleInitial);
}

#[test]
fn test_id_number_is_checked_against_selected_type() {
    let mut intake: VerificationIntake = VerificationIntake::new();
    intake.submit("Juan").unwrap();
    intake.submit("").unwrap();
    intake.submit("Cruz").unwrap();

    // Select the driver's license by menu index.
    assert_eq!(intake.submit("1").unwrap(), VerifyStep::IdNumber);

    // A passport-shaped number does not match the license shape.
    let wrong_shape = intake.submit("AB123456");
    assert!(matches!(
        wrong_shape,
        Err(EngineError::Validation { ref field, .. }) if field == "id_number"
    ));
    assert_eq!(intake.step(), VerifyStep::IdNumber);

    assert_eq!(
        intake.submit("L12-34-56-789012").unwrap(),
        VerifyStep::Contact
    );
}

#[test]
fn test_back_unwinds_one_step_for_reentry() {
    let mut intake: VerificationIntake = VerificationIntake::new();
    intake.submit("Juan").unwrap();
    intake.submit("").unwrap();
    assert_eq!(intake.step(), VerifyStep::Surname);

    // Unwind to the middle initial and resubmit a different value.
    assert_eq!(intake.back(), VerifyStep::MiddleInitial);
    assert_eq!(intake.submit("D").unwrap(), VerifyStep::Surname);
    intake.submit("Cruz").unwrap();
    intake.submit("Passport").unwrap();
    intake.submit("AB123456").unwrap();
    intake.submit("09171234567").unwrap();
    intake.submit("123 Rizal St.").unwrap();
    intake.submit("San Isidro").unwrap();
    intake.submit("Quezon City").unwrap();
    intake.submit("Metro Manila").unwrap();
    intake.submit("1100").unwrap();

    let identity: Identity = intake.finish(test_now()).unwrap();
    assert_eq!(identity.name().display(), "Juan D. Cruz");
}

#[test]
fn test_back_at_first_step_is_a_no_op() {
    let mut intake: VerificationIntake = VerificationIntake::new();
    assert_eq!(intake.back(), VerifyStep::FirstName);
    assert_eq!(intake.step(), VerifyStep::FirstName);
}

#[test]
fn test_finish_before_completion_is_rejected() {
    let mut intake: VerificationIntake = VerificationIntake::new();
    intake.submit("Juan").unwrap();

    let result = intake.finish(test_now());
    assert!(matches!(result, Err(EngineError::StateConflict { .. })));
}

#[test]
fn test_id_type_accepts_index_or_name_and_rejects_junk() {
    let mut by_index: VerificationIntake = VerificationIntake::new();
    by_index.submit("Juan").unwrap();
    by_index.submit("").unwrap();
    by_index.submit("Cruz").unwrap();
    assert_eq!(by_index.submit("3").unwrap(), VerifyStep::IdNumber);

    let mut by_name: VerificationIntake = VerificationIntake::new();
    by_name.submit("Juan").unwrap();
    by_name.submit("").unwrap();
    by_name.submit("Cruz").unwrap();
    assert_eq!(
        by_name.submit("National ID (PhilSys)").unwrap(),
        VerifyStep::IdNumber
    );

    let mut junk: VerificationIntake = VerificationIntake::new();
    junk.submit("Juan").unwrap();
    junk.submit("").unwrap();
    junk.submit("Cruz").unwrap();
    assert!(junk.submit("42").is_err());
    assert!(junk.submit("Library Card").is_err());
    assert_eq!(junk.step(), VerifyStep::IdType);
}

#[test]
fn test_submit_after_completion_is_rejected() {
    let mut intake: VerificationIntake = complete_intake();
    let result = intake.submit("extra");
    assert!(matches!(result, Err(EngineError::StateConflict { .. })));
}
