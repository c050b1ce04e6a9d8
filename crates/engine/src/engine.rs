// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::EngineConfig;
use crate::error::{EngineError, translate_core_error};
use crate::report::{self, OccupancySummary, RevenueSummary, SearchMatch, SystemSummary};
use crate::ticket::TicketSnapshot;
use seatline::{Command, SeatRequest, ServiceState, TransitionResult, apply};
use seatline_audit::AuditRecord;
use seatline_domain::{
    Address, Booking, ContactNumber, Identity, Money, PricingTable, Quote, SeatId, Service,
    TicketType,
};
use seatline_persistence::Persistence;
use std::sync::{Mutex, MutexGuard};
use time::{Duration, OffsetDateTime};
use tracing::info;

/// The caller-facing summary of one committed booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    /// The booked service.
    pub service: Service,
    /// The booked seat.
    pub seat: SeatId,
    /// The occupant's display name.
    pub occupant: String,
    /// The tier the seat was sold under.
    pub ticket_type: TicketType,
    /// The service's Regular base price at booking time.
    pub base_price: Money,
    /// The amount charged.
    pub final_price: Money,
    /// When the booking was committed.
    pub booked_at: OffsetDateTime,
}

impl BookingReceipt {
    fn from_booking(service: Service, seat: SeatId, booking: &Booking) -> Self {
        Self {
            service,
            seat,
            occupant: booking.occupant.name().display(),
            ticket_type: booking.ticket_type.clone(),
            base_price: booking.base_price,
            final_price: booking.final_price,
            booked_at: booking.booked_at,
        }
    }
}

/// Orchestrates reservations against the seat store, the pricing table,
/// and the audit trail.
///
/// Every mutating operation runs the full load-validate-mutate-commit
/// sequence while holding the store lock, so two concurrent calls on the
/// same seat can never both observe it available and both commit. The
/// commit itself writes the seat set and the audit records as one atomic
/// unit.
pub struct ReservationEngine {
    persistence: Mutex<Persistence>,
    pricing: PricingTable,
    retention: Duration,
}

impl ReservationEngine {
    /// Creates an engine over an existing store with the given
    /// configuration.
    #[must_use]
    pub fn new(persistence: Persistence, config: EngineConfig) -> Self {
        Self {
            persistence: Mutex::new(persistence),
            pricing: config.pricing,
            retention: config.retention,
        }
    }

    /// Creates an engine over a fresh in-memory store. Intended for tests
    /// and demos.
    ///
    /// # Errors
    ///
    /// Returns a `Storage` error if the in-memory database cannot be
    /// initialized.
    pub fn in_memory(config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self::new(Persistence::new_in_memory()?, config))
    }

    /// Returns the configured expiry retention window.
    #[must_use]
    pub const fn retention(&self) -> Duration {
        self.retention
    }

    /// Returns the pricing table the engine quotes from.
    #[must_use]
    pub const fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    fn lock_store(&self) -> Result<MutexGuard<'_, Persistence>, EngineError> {
        self.persistence.lock().map_err(|_| EngineError::Storage {
            message: String::from("seat store lock poisoned by a failed writer"),
        })
    }

    /// Runs one command through load -> validate -> mutate -> commit while
    /// holding the store lock.
    fn run_command(
        &self,
        service: Service,
        command: Command,
        now: OffsetDateTime,
    ) -> Result<TransitionResult, EngineError> {
        let mut store: MutexGuard<'_, Persistence> = self.lock_store()?;
        let state: ServiceState = store.load_state(service)?;
        let result: TransitionResult =
            apply(&state, &self.pricing, command, now).map_err(translate_core_error)?;
        store.persist_transition(&result)?;
        Ok(result)
    }

    fn receipt_for(
        result: &TransitionResult,
        service: Service,
        seat: SeatId,
    ) -> Result<BookingReceipt, EngineError> {
        result
            .new_state
            .seat(&seat)
            .and_then(seatline_domain::Seat::booking)
            .map(|booking| BookingReceipt::from_booking(service, seat, booking))
            .ok_or_else(|| EngineError::Storage {
                message: format!("committed transition lost the booking on seat {seat}"),
            })
    }

    /// Reserves one available seat for a verified identity.
    ///
    /// # Arguments
    ///
    /// * `service` - The service to book
    /// * `seat` - The seat to reserve
    /// * `identity` - The verified occupant
    /// * `ticket_type` - The tier to sell the seat under
    /// * `now` - The operation timestamp
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown seat or ticket type, `StateConflict` if
    /// the seat is taken or blocked, `Storage` on store failure.
    pub fn reserve(
        &self,
        service: Service,
        seat: SeatId,
        identity: Identity,
        ticket_type: TicketType,
        now: OffsetDateTime,
    ) -> Result<BookingReceipt, EngineError> {
        let result: TransitionResult = self.run_command(
            service,
            Command::Reserve {
                seat,
                identity,
                ticket_type,
            },
            now,
        )?;

        let receipt: BookingReceipt = Self::receipt_for(&result, service, seat)?;
        info!(
            service = service.key(),
            seat = %seat,
            tier = %receipt.ticket_type,
            "Reserved seat"
        );
        Ok(receipt)
    }

    /// Reserves several seats atomically: either every requested seat is
    /// committed or none are.
    ///
    /// Availability of every seat is checked against the freshly loaded
    /// state under the store lock, and the whole batch commits in one
    /// store transaction.
    ///
    /// # Arguments
    ///
    /// * `service` - The service to book
    /// * `requests` - The per-seat occupants and tiers
    /// * `now` - The operation timestamp
    ///
    /// # Errors
    ///
    /// The first conflicting seat aborts the whole batch with a
    /// `StateConflict` (or `NotFound`) and no partial write.
    pub fn bulk_reserve(
        &self,
        service: Service,
        requests: Vec<SeatRequest>,
        now: OffsetDateTime,
    ) -> Result<Vec<BookingReceipt>, EngineError> {
        let seats: Vec<SeatId> = requests.iter().map(|request| request.seat).collect();
        let result: TransitionResult =
            self.run_command(service, Command::BulkReserve { requests }, now)?;

        let receipts: Vec<BookingReceipt> = seats
            .into_iter()
            .map(|seat| Self::receipt_for(&result, service, seat))
            .collect::<Result<Vec<BookingReceipt>, EngineError>>()?;

        info!(
            service = service.key(),
            seats = receipts.len(),
            "Bulk-reserved seats"
        );
        Ok(receipts)
    }

    /// Cancels a booking, returning the seat to available.
    ///
    /// # Errors
    ///
    /// `StateConflict` if the seat holds no booking, `NotFound` for an
    /// unknown seat, `Storage` on store failure.
    pub fn cancel(
        &self,
        service: Service,
        seat: SeatId,
        now: OffsetDateTime,
    ) -> Result<(), EngineError> {
        self.run_command(service, Command::Cancel { seat }, now)?;
        info!(service = service.key(), seat = %seat, "Cancelled booking");
        Ok(())
    }

    /// Moves a booking to another seat, preserving identity, ticket type,
    /// and prices.
    ///
    /// # Errors
    ///
    /// `StateConflict` if the source holds no booking, the target is not
    /// available, or source and target are the same seat.
    pub fn transfer(
        &self,
        service: Service,
        from: SeatId,
        to: SeatId,
        now: OffsetDateTime,
    ) -> Result<BookingReceipt, EngineError> {
        let result: TransitionResult =
            self.run_command(service, Command::Transfer { from, to }, now)?;

        let receipt: BookingReceipt = Self::receipt_for(&result, service, to)?;
        info!(service = service.key(), from = %from, to = %to, "Moved booking");
        Ok(receipt)
    }

    /// Re-prices a booking under a different ticket type.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown ticket type, `StateConflict` if the seat
    /// holds no booking.
    pub fn retype(
        &self,
        service: Service,
        seat: SeatId,
        ticket_type: TicketType,
        now: OffsetDateTime,
    ) -> Result<BookingReceipt, EngineError> {
        let result: TransitionResult =
            self.run_command(service, Command::Retype { seat, ticket_type }, now)?;

        let receipt: BookingReceipt = Self::receipt_for(&result, service, seat)?;
        info!(
            service = service.key(),
            seat = %seat,
            tier = %receipt.ticket_type,
            "Re-priced booking"
        );
        Ok(receipt)
    }

    /// Refreshes the contact details of an existing booking.
    ///
    /// # Errors
    ///
    /// `StateConflict` if the seat holds no booking.
    pub fn update_contact(
        &self,
        service: Service,
        seat: SeatId,
        contact: ContactNumber,
        address: Address,
        now: OffsetDateTime,
    ) -> Result<(), EngineError> {
        self.run_command(
            service,
            Command::UpdateContact {
                seat,
                contact,
                address,
            },
            now,
        )?;
        info!(service = service.key(), seat = %seat, "Updated contact details");
        Ok(())
    }

    /// Administratively blocks a seat, discarding any booking.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown seat, `Storage` on store failure.
    pub fn set_unavailable(
        &self,
        service: Service,
        seat: SeatId,
        now: OffsetDateTime,
    ) -> Result<(), EngineError> {
        self.run_command(service, Command::SetUnavailable { seat }, now)?;
        info!(service = service.key(), seat = %seat, "Marked seat unavailable");
        Ok(())
    }

    /// Administratively resets a seat to available, discarding any
    /// booking.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown seat, `Storage` on store failure.
    pub fn reset_to_available(
        &self,
        service: Service,
        seat: SeatId,
        now: OffsetDateTime,
    ) -> Result<(), EngineError> {
        self.run_command(service, Command::ResetToAvailable { seat }, now)?;
        info!(service = service.key(), seat = %seat, "Reset seat to available");
        Ok(())
    }

    /// Administratively resets every non-available seat of the service.
    ///
    /// # Returns
    ///
    /// The number of seats flipped back to available.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn reset_all(&self, service: Service, now: OffsetDateTime) -> Result<usize, EngineError> {
        let result: TransitionResult = self.run_command(service, Command::ResetAll, now)?;
        info!(
            service = service.key(),
            seats = result.records.len(),
            "Reset all seats to available"
        );
        Ok(result.records.len())
    }

    /// Releases every booking older than the configured retention window.
    ///
    /// The sweep is a bulk operation: every overdue seat flips in one
    /// atomic commit, each with its own auto-cancellation audit record.
    ///
    /// # Returns
    ///
    /// The number of bookings released.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn expire_overdue(
        &self,
        service: Service,
        now: OffsetDateTime,
    ) -> Result<usize, EngineError> {
        let result: TransitionResult = self.run_command(
            service,
            Command::ExpireOverdue {
                retention: self.retention,
            },
            now,
        )?;

        if !result.records.is_empty() {
            info!(
                service = service.key(),
                expired = result.records.len(),
                "Auto-cancelled expired bookings"
            );
        }
        Ok(result.records.len())
    }

    /// Runs the expiry sweep across every service. Typically called once
    /// at startup.
    ///
    /// # Returns
    ///
    /// The total number of bookings released.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn expire_all_services(&self, now: OffsetDateTime) -> Result<usize, EngineError> {
        let mut expired: usize = 0;
        for service in Service::ALL {
            expired += self.expire_overdue(service, now)?;
        }
        Ok(expired)
    }

    // ========================================================================
    // Read side
    // ========================================================================

    /// Loads the current seat map of a service.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn seat_map(&self, service: Service) -> Result<ServiceState, EngineError> {
        Ok(self.lock_store()?.load_state(service)?)
    }

    /// Quotes a (service, ticket type) pair without touching the store.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown service or ticket type.
    pub fn quote(&self, service: Service, ticket_type: &TicketType) -> Result<Quote, EngineError> {
        self.pricing
            .quote(service, ticket_type)
            .map_err(crate::error::translate_domain_error)
    }

    /// Returns the configured ticket types of a service.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown service.
    pub fn ticket_types(&self, service: Service) -> Result<Vec<TicketType>, EngineError> {
        self.pricing
            .service(service)
            .map(|pricing| pricing.ticket_types().into_iter().cloned().collect())
            .ok_or_else(|| EngineError::NotFound {
                resource: String::from("Service"),
                message: format!("Service '{}' has no pricing configured", service.key()),
            })
    }

    /// Occupancy counts by status for one service.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn occupancy(&self, service: Service) -> Result<OccupancySummary, EngineError> {
        Ok(report::occupancy(&self.seat_map(service)?))
    }

    /// Revenue totals by ticket type for one service.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn revenue_summary(&self, service: Service) -> Result<RevenueSummary, EngineError> {
        Ok(report::revenue_by_ticket_type(&self.seat_map(service)?))
    }

    /// Bookings and revenue across every service.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn system_summary(&self) -> Result<SystemSummary, EngineError> {
        let mut states: Vec<ServiceState> = Vec::with_capacity(Service::ALL.len());
        for service in Service::ALL {
            states.push(self.seat_map(service)?);
        }
        Ok(report::system_summary(&states))
    }

    /// Searches one service's bookings by occupant name substring
    /// (case-insensitive) or exact seat id.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn search(&self, service: Service, query: &str) -> Result<Vec<SearchMatch>, EngineError> {
        Ok(report::search(&self.seat_map(service)?, query))
    }

    /// Builds the finalized ticket snapshot of a taken seat.
    ///
    /// # Errors
    ///
    /// `StateConflict` if the seat holds no booking, `NotFound` for an
    /// unknown seat.
    pub fn ticket_snapshot(
        &self,
        service: Service,
        seat: SeatId,
    ) -> Result<TicketSnapshot, EngineError> {
        let state: ServiceState = self.seat_map(service)?;
        match state.seat(&seat) {
            None => Err(EngineError::NotFound {
                resource: String::from("Seat"),
                message: format!("Seat {seat} does not exist in the {service} layout"),
            }),
            Some(seatline_domain::Seat::Taken(booking)) => {
                TicketSnapshot::from_booking(service, seat, booking)
            }
            Some(_) => Err(EngineError::StateConflict {
                message: format!("Seat {seat} is not reserved"),
            }),
        }
    }

    /// Returns the last `limit` audit records across all services, in
    /// append order.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn recent_audit(&self, limit: i64) -> Result<Vec<AuditRecord>, EngineError> {
        Ok(self.lock_store()?.recent_audit(limit)?)
    }

    /// Returns every audit record of one service, in append order.
    ///
    /// # Errors
    ///
    /// `Storage` on store failure.
    pub fn audit_for_service(&self, service: Service) -> Result<Vec<AuditRecord>, EngineError> {
        Ok(self.lock_store()?.audit_for_service(service)?)
    }
}
