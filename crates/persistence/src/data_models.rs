// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversions to and from domain values.
//!
//! The seat row keeps the occupant's name and address structured (rather
//! than pre-composed display strings) so a loaded `Identity` round-trips
//! losslessly. Non-taken seats store NULL in every occupant column.

use crate::error::PersistenceError;
use diesel::prelude::*;
use seatline_audit::{ActionKind, AuditRecord};
use seatline_domain::{
    Address, Booking, ContactNumber, GovernmentId, IdKind, Identity, Money, PersonName, Seat,
    SeatId, SeatStatus, Service, TicketType,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Formats a timestamp into its stored text form.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(value.format(&Rfc3339)?)
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns a `ReconstructionError` naming the bad value.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|err| {
        PersistenceError::ReconstructionError(format!("bad timestamp '{value}': {err}"))
    })
}

/// One stored seat record.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::diesel_schema::seats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SeatRow {
    pub service: String,
    pub seat: String,
    pub status: String,
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub surname: Option<String>,
    pub booked_at: Option<String>,
    pub ticket_type: Option<String>,
    pub base_price_centavos: Option<i64>,
    pub final_price_centavos: Option<i64>,
    pub contact: Option<String>,
    pub street: Option<String>,
    pub barangay: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub verified_at: Option<String>,
}

impl SeatRow {
    /// Builds the stored form of one seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be formatted.
    pub fn from_domain(
        service: Service,
        seat_id: SeatId,
        seat: &Seat,
    ) -> Result<Self, PersistenceError> {
        let mut row: Self = Self {
            service: service.key().to_string(),
            seat: seat_id.to_string(),
            status: seat.status().as_str().to_string(),
            first_name: None,
            middle_initial: None,
            surname: None,
            booked_at: None,
            ticket_type: None,
            base_price_centavos: None,
            final_price_centavos: None,
            contact: None,
            street: None,
            barangay: None,
            city: None,
            province: None,
            postal_code: None,
            id_type: None,
            id_number: None,
            verified_at: None,
        };

        if let Seat::Taken(booking) = seat {
            let identity: &Identity = &booking.occupant;
            row.first_name = Some(identity.name().first().to_string());
            row.middle_initial = identity.name().middle_initial().map(String::from);
            row.surname = Some(identity.name().surname().to_string());
            row.booked_at = Some(format_timestamp(booking.booked_at)?);
            row.ticket_type = Some(booking.ticket_type.as_str().to_string());
            row.base_price_centavos = Some(booking.base_price.centavos());
            row.final_price_centavos = Some(booking.final_price.centavos());
            row.contact = Some(identity.contact().as_str().to_string());
            row.street = Some(identity.address().street().to_string());
            row.barangay = Some(identity.address().barangay().to_string());
            row.city = Some(identity.address().city().to_string());
            row.province = Some(identity.address().province().to_string());
            row.postal_code = Some(identity.address().postal_code().to_string());
            row.id_type = Some(identity.government_id().kind().name().to_string());
            row.id_number = Some(identity.government_id().number().to_string());
            row.verified_at = Some(format_timestamp(identity.verified_at())?);
        }

        Ok(row)
    }

    /// Reconstructs the domain seat from its stored form.
    ///
    /// Missing price columns on a taken row decode as zero so that
    /// read-side reports never fail on malformed amounts. Missing identity
    /// columns cannot be repaired and fail reconstruction.
    ///
    /// # Errors
    ///
    /// Returns a `ReconstructionError` for unknown statuses, bad
    /// timestamps, or a taken row missing identity fields.
    pub fn into_domain(self) -> Result<(SeatId, Seat), PersistenceError> {
        let seat_id: SeatId = SeatId::parse(&self.seat).map_err(|err| {
            PersistenceError::ReconstructionError(format!("bad seat id '{}': {err}", self.seat))
        })?;

        let status: SeatStatus = self.status.parse().map_err(|err: String| {
            PersistenceError::ReconstructionError(format!("seat {seat_id}: {err}"))
        })?;

        let seat: Seat = match status {
            SeatStatus::Available => Seat::Available,
            SeatStatus::Unavailable => Seat::Unavailable,
            SeatStatus::Taken => Seat::Taken(self.booking(seat_id)?),
        };

        Ok((seat_id, seat))
    }

    fn required(value: Option<String>, seat_id: SeatId, field: &str) -> Result<String, PersistenceError> {
        value.ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "taken seat {seat_id} is missing its {field}"
            ))
        })
    }

    fn booking(self, seat_id: SeatId) -> Result<Booking, PersistenceError> {
        let first: String = Self::required(self.first_name, seat_id, "first name")?;
        let middle: String = self.middle_initial.unwrap_or_default();
        let surname: String = Self::required(self.surname, seat_id, "surname")?;

        let name: PersonName = PersonName::new(&first, &middle, &surname).map_err(|err| {
            PersistenceError::ReconstructionError(format!("taken seat {seat_id}: {err}"))
        })?;

        let id_type: String = Self::required(self.id_type, seat_id, "id type")?;
        let kind: IdKind = id_type.parse().map_err(|err| {
            PersistenceError::ReconstructionError(format!("taken seat {seat_id}: {err}"))
        })?;
        let number: String = Self::required(self.id_number, seat_id, "id number")?;
        let government_id: GovernmentId = GovernmentId::new(kind, &number).map_err(|err| {
            PersistenceError::ReconstructionError(format!("taken seat {seat_id}: {err}"))
        })?;

        let contact_raw: String = Self::required(self.contact, seat_id, "contact number")?;
        let contact: ContactNumber = ContactNumber::new(&contact_raw).map_err(|err| {
            PersistenceError::ReconstructionError(format!("taken seat {seat_id}: {err}"))
        })?;

        let address: Address = Address::new(
            &Self::required(self.street, seat_id, "street")?,
            &Self::required(self.barangay, seat_id, "barangay")?,
            &Self::required(self.city, seat_id, "city")?,
            &Self::required(self.province, seat_id, "province")?,
            &Self::required(self.postal_code, seat_id, "postal code")?,
        )
        .map_err(|err| {
            PersistenceError::ReconstructionError(format!("taken seat {seat_id}: {err}"))
        })?;

        let verified_at: OffsetDateTime =
            parse_timestamp(&Self::required(self.verified_at, seat_id, "verified-at")?)?;
        let booked_at: OffsetDateTime =
            parse_timestamp(&Self::required(self.booked_at, seat_id, "booked-at")?)?;

        let ticket_type: TicketType =
            TicketType::new(&Self::required(self.ticket_type, seat_id, "ticket type")?);

        // Missing amounts decode as zero rather than failing the load.
        let base_price: Money =
            Money::from_centavos(self.base_price_centavos.unwrap_or_default());
        let final_price: Money =
            Money::from_centavos(self.final_price_centavos.unwrap_or_default());

        Ok(Booking {
            occupant: Identity::new(name, government_id, contact, address, verified_at),
            ticket_type,
            base_price,
            final_price,
            booked_at,
        })
    }
}

/// One stored audit entry.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::diesel_schema::audit_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AuditRow {
    pub recorded_at: String,
    pub service: String,
    pub seat: String,
    pub action: String,
    pub details: String,
}

impl AuditRow {
    /// Builds the stored form of an audit record.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn from_domain(record: &AuditRecord) -> Result<Self, PersistenceError> {
        Ok(Self {
            recorded_at: format_timestamp(record.recorded_at)?,
            service: record.service.key().to_string(),
            seat: record.seat.to_string(),
            action: record.action.as_str().to_string(),
            details: record.details.clone(),
        })
    }

    /// Reconstructs the domain audit record.
    ///
    /// # Errors
    ///
    /// Returns a `ReconstructionError` for unknown services, seats, action
    /// kinds, or timestamps.
    pub fn into_domain(self) -> Result<AuditRecord, PersistenceError> {
        let recorded_at: OffsetDateTime = parse_timestamp(&self.recorded_at)?;
        let service: Service = self.service.parse().map_err(|err| {
            PersistenceError::ReconstructionError(format!("audit entry: {err}"))
        })?;
        let seat: SeatId = SeatId::parse(&self.seat).map_err(|err| {
            PersistenceError::ReconstructionError(format!("audit entry: {err}"))
        })?;
        let action: ActionKind = self.action.parse().map_err(|err: String| {
            PersistenceError::ReconstructionError(format!("audit entry: {err}"))
        })?;

        Ok(AuditRecord::new(
            recorded_at,
            service,
            seat,
            action,
            self.details,
        ))
    }
}
