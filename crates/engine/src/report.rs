// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side aggregation over loaded seat states.
//!
//! Nothing here mutates the store. Revenue sums saturate instead of
//! overflowing, and zero-coerced amounts from malformed rows flow through
//! as zeros, so a report never fails on bad price data.

use seatline::ServiceState;
use seatline_domain::{
    Booking, IdKind, Money, SeatId, SeatStatus, Service, TicketType,
};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Occupancy counts of one service, by seat status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancySummary {
    /// Seats open for reservation.
    pub available: usize,
    /// Seats occupied by bookings.
    pub taken: usize,
    /// Administratively blocked seats.
    pub unavailable: usize,
    /// Total layout size.
    pub total: usize,
}

/// Revenue of one ticket type within a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueLine {
    /// The tier.
    pub ticket_type: TicketType,
    /// Number of bookings sold under the tier.
    pub bookings: usize,
    /// Sum of final prices.
    pub revenue: Money,
}

/// Revenue totals of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueSummary {
    /// Total bookings counted.
    pub bookings: usize,
    /// Sum of all final prices.
    pub total: Money,
    /// Per-tier breakdown, ordered by tier name.
    pub by_ticket_type: Vec<RevenueLine>,
}

/// One booking matched by a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// The matched seat.
    pub seat: SeatId,
    /// The occupant's display name.
    pub occupant: String,
    /// The occupant's government id type. The number is never surfaced.
    pub id_type: IdKind,
    /// The occupant's contact number.
    pub contact: String,
    /// The tier the seat was sold under.
    pub ticket_type: TicketType,
    /// The amount charged.
    pub final_price: Money,
    /// When the booking was committed.
    pub booked_at: OffsetDateTime,
}

/// Bookings and revenue of one service, for the cross-service overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRevenue {
    /// The service.
    pub service: Service,
    /// Number of bookings.
    pub bookings: usize,
    /// Sum of final prices.
    pub revenue: Money,
}

/// The cross-service overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSummary {
    /// Per-service lines, in service display order.
    pub services: Vec<ServiceRevenue>,
    /// Bookings across all services.
    pub total_bookings: usize,
    /// Revenue across all services.
    pub total_revenue: Money,
}

/// Counts seats of one service by status.
#[must_use]
pub fn occupancy(state: &ServiceState) -> OccupancySummary {
    OccupancySummary {
        available: state.count_with_status(SeatStatus::Available),
        taken: state.count_with_status(SeatStatus::Taken),
        unavailable: state.count_with_status(SeatStatus::Unavailable),
        total: state.seats().len(),
    }
}

/// Sums revenue of one service by ticket type.
#[must_use]
pub fn revenue_by_ticket_type(state: &ServiceState) -> RevenueSummary {
    let mut by_tier: BTreeMap<TicketType, (usize, Money)> = BTreeMap::new();
    let mut bookings: usize = 0;
    let mut total: Money = Money::ZERO;

    for seat in state.seats().values() {
        if let Some(booking) = seat.booking() {
            bookings += 1;
            total = total.saturating_add(booking.final_price);
            let line = by_tier
                .entry(booking.ticket_type.clone())
                .or_insert((0, Money::ZERO));
            line.0 += 1;
            line.1 = line.1.saturating_add(booking.final_price);
        }
    }

    RevenueSummary {
        bookings,
        total,
        by_ticket_type: by_tier
            .into_iter()
            .map(|(ticket_type, (count, revenue))| RevenueLine {
                ticket_type,
                bookings: count,
                revenue,
            })
            .collect(),
    }
}

/// Searches bookings by occupant name substring (case-insensitive) or
/// exact seat id.
///
/// A query that normalizes to a valid seat id matches that seat exactly;
/// any query also matches every occupant whose display name contains it,
/// ignoring case.
#[must_use]
pub fn search(state: &ServiceState, query: &str) -> Vec<SearchMatch> {
    let needle: String = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let seat_query: Option<SeatId> = SeatId::parse(query).ok();

    state
        .seats()
        .iter()
        .filter_map(|(seat_id, seat)| {
            let booking: &Booking = seat.booking()?;
            let by_seat: bool = seat_query.is_some_and(|wanted| wanted == *seat_id);
            let by_name: bool = booking
                .occupant
                .name()
                .display()
                .to_lowercase()
                .contains(&needle);
            (by_seat || by_name).then(|| SearchMatch {
                seat: *seat_id,
                occupant: booking.occupant.name().display(),
                id_type: booking.occupant.government_id().kind(),
                contact: booking.occupant.contact().as_str().to_string(),
                ticket_type: booking.ticket_type.clone(),
                final_price: booking.final_price,
                booked_at: booking.booked_at,
            })
        })
        .collect()
}

/// Builds the cross-service overview from loaded states.
#[must_use]
pub fn system_summary(states: &[ServiceState]) -> SystemSummary {
    let mut services: Vec<ServiceRevenue> = Vec::with_capacity(states.len());
    let mut total_bookings: usize = 0;
    let mut total_revenue: Money = Money::ZERO;

    for state in states {
        let summary: RevenueSummary = revenue_by_ticket_type(state);
        total_bookings += summary.bookings;
        total_revenue = total_revenue.saturating_add(summary.total);
        services.push(ServiceRevenue {
            service: state.service(),
            bookings: summary.bookings,
            revenue: summary.total,
        });
    }

    SystemSummary {
        services,
        total_bookings,
        total_revenue,
    }
}
