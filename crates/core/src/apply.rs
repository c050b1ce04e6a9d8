// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, SeatRequest};
use crate::error::CoreError;
use crate::state::{ServiceState, TransitionResult};
use seatline_audit::{ActionKind, AuditRecord};
use seatline_domain::{
    Booking, Identity, PricingTable, Quote, Seat, SeatId, TicketType,
};
use time::OffsetDateTime;

/// Applies a command to the current state, producing a new state and the
/// audit records describing what changed.
///
/// The input state is never mutated; on error the caller's state is
/// untouched and nothing must be committed. `now` stamps both bookings and
/// audit records, so a transition is reproducible from its inputs.
///
/// # Arguments
///
/// * `state` - The current seat state of the service (immutable)
/// * `pricing` - The pricing table used to quote reservations
/// * `command` - The command to apply
/// * `now` - The wall-clock instant of the operation
///
/// # Errors
///
/// Returns a `CoreError` if the command's precondition does not hold for
/// the current state, or if pricing rejects the requested ticket type.
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &ServiceState,
    pricing: &PricingTable,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Reserve {
            seat,
            identity,
            ticket_type,
        } => {
            let mut new_state: ServiceState = state.clone();
            let record: AuditRecord = reserve_seat(
                &mut new_state,
                pricing,
                SeatRequest {
                    seat,
                    identity,
                    ticket_type,
                },
                ActionKind::Reservation,
                now,
            )?;

            Ok(TransitionResult {
                new_state,
                records: vec![record],
            })
        }
        Command::BulkReserve { requests } => {
            if requests.is_empty() {
                return Err(CoreError::EmptyBulkRequest);
            }

            // Every request is validated against the same working copy, so
            // a duplicate seat inside one batch conflicts with itself and
            // the first failing seat aborts the whole batch.
            let mut new_state: ServiceState = state.clone();
            let mut records: Vec<AuditRecord> = Vec::with_capacity(requests.len());
            for request in requests {
                let record: AuditRecord = reserve_seat(
                    &mut new_state,
                    pricing,
                    request,
                    ActionKind::BulkReservation,
                    now,
                )?;
                records.push(record);
            }

            Ok(TransitionResult { new_state, records })
        }
        Command::Cancel { seat } => {
            let booking: Booking = take_booking(state, &seat)?;
            let mut new_state: ServiceState = state.clone();
            new_state.seats_mut().insert(seat, Seat::Available);

            let record: AuditRecord = AuditRecord::new(
                now,
                state.service(),
                seat,
                ActionKind::Cancellation,
                booking.occupant.redacted_summary(),
            );

            Ok(TransitionResult {
                new_state,
                records: vec![record],
            })
        }
        Command::Transfer { from, to } => {
            if from == to {
                return Err(CoreError::SameSeat { seat: from });
            }

            let booking: Booking = take_booking(state, &from)?;

            match state.seat(&to) {
                None => {
                    return Err(CoreError::SeatNotFound {
                        service: state.service(),
                        seat: to,
                    });
                }
                Some(Seat::Available) => {}
                Some(Seat::Taken(_) | Seat::Unavailable) => {
                    return Err(CoreError::TargetUnavailable { seat: to });
                }
            }

            let occupant_name: String = booking.occupant.name().display();

            // The booking moves intact; only the seat and timestamp change.
            let moved: Booking = Booking {
                booked_at: now,
                ..booking
            };

            let mut new_state: ServiceState = state.clone();
            new_state.seats_mut().insert(from, Seat::Available);
            new_state.seats_mut().insert(to, Seat::Taken(moved));

            let record: AuditRecord = AuditRecord::new(
                now,
                state.service(),
                from,
                ActionKind::SeatMove,
                format!("{occupant_name} from {from} to {to}"),
            );

            Ok(TransitionResult {
                new_state,
                records: vec![record],
            })
        }
        Command::Retype { seat, ticket_type } => {
            let booking: Booking = take_booking(state, &seat)?;
            let quote: Quote = pricing.quote(state.service(), &ticket_type)?;

            let previous: TicketType = booking.ticket_type.clone();
            let repriced: Booking = Booking {
                ticket_type: ticket_type.clone(),
                base_price: quote.base_price,
                final_price: quote.final_price,
                booked_at: now,
                occupant: booking.occupant,
            };

            let mut new_state: ServiceState = state.clone();
            new_state.seats_mut().insert(seat, Seat::Taken(repriced));

            let record: AuditRecord = AuditRecord::new(
                now,
                state.service(),
                seat,
                ActionKind::TicketTypeChange,
                format!("{previous} -> {ticket_type}"),
            );

            Ok(TransitionResult {
                new_state,
                records: vec![record],
            })
        }
        Command::UpdateContact {
            seat,
            contact,
            address,
        } => {
            let booking: Booking = take_booking(state, &seat)?;

            let updated_identity: Identity =
                booking.occupant.with_contact_details(contact, address);
            let updated: Booking = Booking {
                occupant: updated_identity,
                booked_at: now,
                ..booking
            };

            let mut new_state: ServiceState = state.clone();
            new_state.seats_mut().insert(seat, Seat::Taken(updated));

            let record: AuditRecord = AuditRecord::new(
                now,
                state.service(),
                seat,
                ActionKind::ContactUpdate,
                String::from("Contact details updated"),
            );

            Ok(TransitionResult {
                new_state,
                records: vec![record],
            })
        }
        Command::SetUnavailable { seat } => {
            require_in_layout(state, &seat)?;

            let mut new_state: ServiceState = state.clone();
            new_state.seats_mut().insert(seat, Seat::Unavailable);

            let record: AuditRecord = AuditRecord::new(
                now,
                state.service(),
                seat,
                ActionKind::SeatUnavailable,
                String::from("Marked as unavailable"),
            );

            Ok(TransitionResult {
                new_state,
                records: vec![record],
            })
        }
        Command::ResetToAvailable { seat } => {
            require_in_layout(state, &seat)?;

            let mut new_state: ServiceState = state.clone();
            new_state.seats_mut().insert(seat, Seat::Available);

            let record: AuditRecord = AuditRecord::new(
                now,
                state.service(),
                seat,
                ActionKind::SeatReset,
                String::from("Reset to available"),
            );

            Ok(TransitionResult {
                new_state,
                records: vec![record],
            })
        }
        Command::ResetAll => {
            let mut new_state: ServiceState = state.clone();
            let mut records: Vec<AuditRecord> = Vec::new();

            let to_reset: Vec<SeatId> = state
                .seats()
                .iter()
                .filter(|(_, seat)| !seat.is_available())
                .map(|(seat_id, _)| *seat_id)
                .collect();

            for seat_id in to_reset {
                new_state.seats_mut().insert(seat_id, Seat::Available);
                records.push(AuditRecord::new(
                    now,
                    state.service(),
                    seat_id,
                    ActionKind::FullReset,
                    String::from("All seats reset to available"),
                ));
            }

            Ok(TransitionResult { new_state, records })
        }
        Command::ExpireOverdue { retention } => {
            let mut new_state: ServiceState = state.clone();
            let mut records: Vec<AuditRecord> = Vec::new();

            let expired: Vec<(SeatId, String)> = state
                .seats()
                .iter()
                .filter_map(|(seat_id, seat)| match seat {
                    Seat::Taken(booking) if now - booking.booked_at > retention => {
                        Some((*seat_id, booking.occupant.name().display()))
                    }
                    _ => None,
                })
                .collect();

            for (seat_id, occupant_name) in expired {
                new_state.seats_mut().insert(seat_id, Seat::Available);
                records.push(AuditRecord::new(
                    now,
                    state.service(),
                    seat_id,
                    ActionKind::AutoCancellation,
                    format!("{occupant_name} - booking expired"),
                ));
            }

            Ok(TransitionResult { new_state, records })
        }
    }
}

/// Reserves one seat in the working state, shared by single and bulk
/// reservation paths. Returns the audit record for the seat.
fn reserve_seat(
    working: &mut ServiceState,
    pricing: &PricingTable,
    request: SeatRequest,
    action: ActionKind,
    now: OffsetDateTime,
) -> Result<AuditRecord, CoreError> {
    let SeatRequest {
        seat,
        identity,
        ticket_type,
    } = request;

    match working.seat(&seat) {
        None => {
            return Err(CoreError::SeatNotFound {
                service: working.service(),
                seat,
            });
        }
        Some(Seat::Taken(booking)) => {
            return Err(CoreError::SeatAlreadyTaken {
                seat,
                occupant: booking.occupant.name().display(),
            });
        }
        Some(Seat::Unavailable) => {
            return Err(CoreError::SeatUnavailable { seat });
        }
        Some(Seat::Available) => {}
    }

    let quote: Quote = pricing.quote(working.service(), &ticket_type)?;

    let details: String = format!(
        "{} - {ticket_type} - {} - ID: {}",
        identity.name().display(),
        quote.final_price,
        identity.government_id().kind().name(),
    );

    let booking: Booking = Booking {
        occupant: identity,
        ticket_type,
        base_price: quote.base_price,
        final_price: quote.final_price,
        booked_at: now,
    };
    let service = working.service();
    working.seats_mut().insert(seat, Seat::Taken(booking));

    Ok(AuditRecord::new(now, service, seat, action, details))
}

/// Returns the booking of a taken seat, or the appropriate error.
fn take_booking(state: &ServiceState, seat: &SeatId) -> Result<Booking, CoreError> {
    match state.seat(seat) {
        None => Err(CoreError::SeatNotFound {
            service: state.service(),
            seat: *seat,
        }),
        Some(Seat::Taken(booking)) => Ok(booking.clone()),
        Some(Seat::Available | Seat::Unavailable) => {
            Err(CoreError::SeatNotReserved { seat: *seat })
        }
    }
}

/// Validates that a seat id belongs to the service's layout.
fn require_in_layout(state: &ServiceState, seat: &SeatId) -> Result<(), CoreError> {
    if state.seat(seat).is_none() {
        return Err(CoreError::SeatNotFound {
            service: state.service(),
            seat: *seat,
        });
    }
    Ok(())
}
