// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation engine and reporting boundary for the Seatline
//! Reservation System.
//!
//! This crate orchestrates the pure seat state machine (`seatline`)
//! against the `SQLite` store (`seatline-persistence`): every mutating
//! operation runs load -> validate -> mutate -> commit under an exclusive
//! store lock and commits seats plus audit records atomically. It also
//! hosts the identity-verification intake pipeline, read-side reports,
//! ticket snapshots, and configuration loading.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod engine;
mod error;
mod report;
mod ticket;
mod verifier;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, EngineConfig};
pub use engine::{BookingReceipt, ReservationEngine};
pub use error::{EngineError, translate_core_error, translate_domain_error};
pub use report::{
    OccupancySummary, RevenueLine, RevenueSummary, SearchMatch, ServiceRevenue, SystemSummary,
    occupancy, revenue_by_ticket_type, search, system_summary,
};
pub use ticket::{CsvTicketSink, TicketSink, TicketSnapshot, verification_hash};
pub use verifier::{VerificationIntake, VerifyStep};
