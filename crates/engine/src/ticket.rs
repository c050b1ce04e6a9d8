// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Finalized ticket snapshots and the sink that receives them.
//!
//! A snapshot is the end-viewer rendering of a committed booking. It
//! never carries the raw government id number; tamper evidence comes from
//! a short deterministic hash instead.

use crate::error::EngineError;
use seatline_domain::{Booking, IdKind, Money, SeatId, Service, TicketType};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A finalized booking view, ready for a ticket sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSnapshot {
    /// The booked service.
    pub service: Service,
    /// The booked seat.
    pub seat: SeatId,
    /// The occupant's display name.
    pub passenger: String,
    /// The tier the seat was sold under.
    pub ticket_type: TicketType,
    /// The service's Regular base price at booking time.
    pub base_price: Money,
    /// The amount charged.
    pub final_price: Money,
    /// When the booking was committed, in RFC 3339 form.
    pub booked_at: String,
    /// The occupant's contact number.
    pub contact: String,
    /// The occupant's address, composed for display.
    pub address: String,
    /// The government id type presented. The number is never included.
    pub id_type: IdKind,
    /// When the identity was verified, in RFC 3339 form.
    pub verified_at: String,
    /// Short tamper-evidence digest; see [`verification_hash`].
    pub verification_hash: String,
}

impl TicketSnapshot {
    /// Builds the snapshot of a committed booking.
    ///
    /// # Errors
    ///
    /// Returns a `Storage` error if a timestamp cannot be formatted.
    pub fn from_booking(
        service: Service,
        seat: SeatId,
        booking: &Booking,
    ) -> Result<Self, EngineError> {
        let booked_at: String = format_rfc3339(booking.booked_at)?;
        let verified_at: String = format_rfc3339(booking.occupant.verified_at())?;

        let passenger: String = booking.occupant.name().display();
        let id_type: IdKind = booking.occupant.government_id().kind();
        let verification_hash: String =
            verification_hash(service, seat, &passenger, &booked_at, id_type);

        Ok(Self {
            service,
            seat,
            passenger,
            ticket_type: booking.ticket_type.clone(),
            base_price: booking.base_price,
            final_price: booking.final_price,
            booked_at,
            contact: booking.occupant.contact().as_str().to_string(),
            address: booking.occupant.address().display(),
            id_type,
            verified_at,
            verification_hash,
        })
    }
}

fn format_rfc3339(value: OffsetDateTime) -> Result<String, EngineError> {
    value.format(&Rfc3339).map_err(|err| EngineError::Storage {
        message: format!("cannot format ticket timestamp: {err}"),
    })
}

/// Computes the tamper-evidence digest of a ticket snapshot.
///
/// The digest is the first 16 hex characters of SHA-256 over the service
/// name, seat, passenger, booked-at timestamp, and id type. It is
/// deterministic so a re-printed ticket can be checked against the stored
/// booking; it is not a secret and carries no key material.
#[must_use]
pub fn verification_hash(
    service: Service,
    seat: SeatId,
    passenger: &str,
    booked_at: &str,
    id_type: IdKind,
) -> String {
    let input: String = format!(
        "{}{seat}{passenger}{booked_at}{}",
        service.name(),
        id_type.name()
    );
    let digest = Sha256::digest(input.as_bytes());
    let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    hex.chars().take(16).collect()
}

/// A sink that receives finalized booking snapshots.
///
/// Implementations are thin delivery adapters (files, printers, queues);
/// they never see the raw id number because the snapshot does not carry
/// it.
pub trait TicketSink {
    /// Delivers one snapshot.
    ///
    /// # Errors
    ///
    /// Returns a `Storage` error if delivery fails.
    fn deliver(&self, snapshot: &TicketSnapshot) -> Result<(), EngineError>;
}

/// Writes one CSV ticket file per booking into a directory.
#[derive(Debug, Clone)]
pub struct CsvTicketSink {
    directory: PathBuf,
}

impl CsvTicketSink {
    /// Creates a sink writing into the given directory. The directory is
    /// created on first delivery if missing.
    #[must_use]
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// The file name for a snapshot:
    /// `ticket_<service>_<seat>_<passenger>.csv` with the passenger name
    /// reduced to filesystem-safe characters.
    #[must_use]
    pub fn file_name(snapshot: &TicketSnapshot) -> String {
        let safe_name: String = snapshot
            .passenger
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '.'))
            .collect::<String>()
            .trim()
            .replace(' ', "_");
        format!(
            "ticket_{}_{}_{safe_name}.csv",
            snapshot.service.name().to_lowercase(),
            snapshot.seat
        )
    }
}

impl TicketSink for CsvTicketSink {
    fn deliver(&self, snapshot: &TicketSnapshot) -> Result<(), EngineError> {
        std::fs::create_dir_all(&self.directory).map_err(|err| EngineError::Storage {
            message: format!("cannot create ticket directory: {err}"),
        })?;

        let path: PathBuf = self.directory.join(Self::file_name(snapshot));
        let mut writer = csv::Writer::from_path(&path).map_err(|err| EngineError::Storage {
            message: format!("cannot create ticket file: {err}"),
        })?;

        let rows: [(&str, String); 12] = [
            ("Service", snapshot.service.name().to_string()),
            ("Seat", snapshot.seat.to_string()),
            ("Passenger", snapshot.passenger.clone()),
            ("TicketType", snapshot.ticket_type.to_string()),
            ("BasePrice", snapshot.base_price.to_string()),
            ("FinalPrice", snapshot.final_price.to_string()),
            ("Timestamp", snapshot.booked_at.clone()),
            ("Contact", snapshot.contact.clone()),
            ("Address", snapshot.address.clone()),
            ("IDType", snapshot.id_type.name().to_string()),
            ("VerifiedAt", snapshot.verified_at.clone()),
            ("VerificationHash", snapshot.verification_hash.clone()),
        ];

        for (field, value) in rows {
            writer
                .write_record([field, value.as_str()])
                .map_err(|err| EngineError::Storage {
                    message: format!("cannot write ticket file: {err}"),
                })?;
        }

        writer.flush().map_err(|err| EngineError::Storage {
            message: format!("cannot flush ticket file: {err}"),
        })?;

        Ok(())
    }
}
