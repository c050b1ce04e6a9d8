// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Seatline Reservation System.
//!
//! This crate stores seat states and the audit trail in `SQLite` via
//! Diesel, with embedded migrations. It is the concrete realization of
//! the abstract seat store contract:
//!
//! - `load_state` is total: a service with no backing rows loads as a
//!   fully available layout, never an error.
//! - `persist_transition` is atomic: the service's whole seat set and the
//!   transition's audit records commit in one transaction, so a crash
//!   mid-write can never leave a partially-updated seat map or a mutation
//!   without its audit trail.
//! - The audit log is append-only and is never truncated or rewritten.
//!
//! ## Testing Philosophy
//!
//! Standard tests run against unique in-memory `SQLite` databases (an
//! atomic counter keeps them isolated and deterministic); no external
//! infrastructure is ever required.

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

use diesel::Connection;
use diesel::SqliteConnection;
use seatline::{ServiceState, TransitionResult};
use seatline_audit::AuditRecord;
use seatline_domain::{Seat, SeatId, Service};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for seat states and the audit trail.
///
/// The adapter owns a single `SQLite` connection; callers that need
/// exclusive write access across a load-validate-commit sequence hold the
/// adapter behind their own lock.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based
    /// collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_seatline_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Loads the complete seat state of a service.
    ///
    /// This is a total function: seats absent from the backing store are
    /// materialized as available, and a service that has never been
    /// committed loads as a fresh, fully available layout. Stored rows
    /// whose seat id falls outside the service's layout are ignored.
    ///
    /// # Arguments
    ///
    /// * `service` - The service to load
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored taken seat cannot
    /// be reconstructed.
    pub fn load_state(&mut self, service: Service) -> Result<ServiceState, PersistenceError> {
        let rows = queries::load_seat_rows(&mut self.conn, service)?;

        let mut stored: BTreeMap<SeatId, Seat> = BTreeMap::new();
        for row in rows {
            let (seat_id, seat) = row.into_domain()?;
            stored.insert(seat_id, seat);
        }

        let seats: BTreeMap<SeatId, Seat> = service
            .layout()
            .into_iter()
            .map(|seat_id| {
                let seat: Seat = stored.remove(&seat_id).unwrap_or(Seat::Available);
                (seat_id, seat)
            })
            .collect();

        Ok(ServiceState::from_seats(service, seats))
    }

    /// Persists a transition: the new seat state and its audit records,
    /// atomically.
    ///
    /// The service's whole seat row set is replaced and every audit
    /// record appended inside one transaction. If any part fails, nothing
    /// is committed: the mutation is not durable without its audit trail.
    ///
    /// # Arguments
    ///
    /// * `result` - The transition result to persist
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any statement fails; the
    /// database is left unchanged in that case.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<(), PersistenceError> {
        self.conn
            .transaction::<(), PersistenceError, _>(|conn| {
                mutations::replace_service_seats(conn, &result.new_state)?;
                for record in &result.records {
                    mutations::append_audit_record(conn, record)?;
                }
                Ok(())
            })?;

        debug!(
            service = result.new_state.service().key(),
            records = result.records.len(),
            "Persisted transition"
        );

        Ok(())
    }

    /// Appends a single audit record outside of a seat transition.
    ///
    /// # Arguments
    ///
    /// * `record` - The audit record to append
    ///
    /// # Returns
    ///
    /// The entry ID assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn append_audit(&mut self, record: &AuditRecord) -> Result<i64, PersistenceError> {
        mutations::append_audit_record(&mut self.conn, record)
    }

    /// Returns the last `limit` audit records, in append order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent_audit(&mut self, limit: i64) -> Result<Vec<AuditRecord>, PersistenceError> {
        queries::recent_audit(&mut self.conn, limit)
    }

    /// Returns every audit record of one service, in append order.
    ///
    /// # Arguments
    ///
    /// * `service` - The service whose records to return
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn audit_for_service(
        &mut self,
        service: Service,
    ) -> Result<Vec<AuditRecord>, PersistenceError> {
        queries::audit_for_service(&mut self.conn, service)
    }

    /// Counts all audit entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn audit_count(&mut self) -> Result<i64, PersistenceError> {
        queries::count_audit_entries(&mut self.conn)
    }
}
