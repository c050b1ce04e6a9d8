// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use seatline_audit::AuditRecord;
use seatline_domain::Service;

use crate::data_models::AuditRow;
use crate::diesel_schema;
use crate::error::PersistenceError;

/// Returns the last `limit` audit records, in append order.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `limit` - The maximum number of records to return
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn recent_audit(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<AuditRecord>, PersistenceError> {
    let rows: Vec<AuditRow> = diesel_schema::audit_log::table
        .order(diesel_schema::audit_log::entry_id.desc())
        .limit(limit)
        .select(AuditRow::as_select())
        .load(conn)?;

    // Rows come back newest-first; reverse into append order.
    rows.into_iter()
        .rev()
        .map(AuditRow::into_domain)
        .collect::<Result<Vec<AuditRecord>, PersistenceError>>()
}

/// Returns every audit record of one service, in append order.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `service` - The service whose records to return
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn audit_for_service(
    conn: &mut SqliteConnection,
    service: Service,
) -> Result<Vec<AuditRecord>, PersistenceError> {
    let rows: Vec<AuditRow> = diesel_schema::audit_log::table
        .filter(diesel_schema::audit_log::service.eq(service.key()))
        .order(diesel_schema::audit_log::entry_id.asc())
        .select(AuditRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(AuditRow::into_domain)
        .collect::<Result<Vec<AuditRecord>, PersistenceError>>()
}

/// Counts all audit entries.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_audit_entries(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel_schema::audit_log::table.count().get_result(conn)?)
}
