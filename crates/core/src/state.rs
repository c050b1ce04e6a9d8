// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatline_audit::AuditRecord;
use seatline_domain::{Seat, SeatId, SeatStatus, Service};
use std::collections::BTreeMap;

/// The complete seat state of one service.
///
/// The map always covers exactly the service's layout: one entry per
/// layout seat, keyed by canonical seat id. `BTreeMap` plus the row-major
/// ordering of `SeatId` makes iteration deterministic and layout-ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceState {
    service: Service,
    seats: BTreeMap<SeatId, Seat>,
}

impl ServiceState {
    /// Materializes a brand-new state with every layout seat available.
    #[must_use]
    pub fn fresh(service: Service) -> Self {
        let seats: BTreeMap<SeatId, Seat> = service
            .layout()
            .into_iter()
            .map(|seat_id| (seat_id, Seat::Available))
            .collect();
        Self { service, seats }
    }

    /// Builds a state from already-loaded seats.
    ///
    /// The caller (the persistence layer) is responsible for covering the
    /// full layout; seats missing from the backing store are materialized
    /// as available before this is called.
    #[must_use]
    pub const fn from_seats(service: Service, seats: BTreeMap<SeatId, Seat>) -> Self {
        Self { service, seats }
    }

    /// Returns the service this state is scoped to.
    #[must_use]
    pub const fn service(&self) -> Service {
        self.service
    }

    /// Returns one seat, or `None` if the id is not in the layout.
    #[must_use]
    pub fn seat(&self, seat_id: &SeatId) -> Option<&Seat> {
        self.seats.get(seat_id)
    }

    /// Returns the full seat map in row-major order.
    #[must_use]
    pub const fn seats(&self) -> &BTreeMap<SeatId, Seat> {
        &self.seats
    }

    /// Counts seats currently in the given status.
    #[must_use]
    pub fn count_with_status(&self, status: SeatStatus) -> usize {
        self.seats
            .values()
            .filter(|seat| seat.status() == status)
            .count()
    }

    pub(crate) fn seats_mut(&mut self) -> &mut BTreeMap<SeatId, Seat> {
        &mut self.seats
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. Multi-seat commands (bulk reserve, expiry sweeps, full
/// resets) produce one audit record per affected seat, all of which commit
/// with the new state as a single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: ServiceState,
    /// The audit records describing this transition, in effect order.
    pub records: Vec<AuditRecord>,
}
