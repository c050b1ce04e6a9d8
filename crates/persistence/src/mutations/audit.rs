// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use seatline_audit::AuditRecord;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::AuditRow;
use crate::diesel_schema;
use crate::error::PersistenceError;

/// Appends one audit record to the log.
///
/// The log is append-only: no mutation in this crate ever updates or
/// deletes an `audit_log` row.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `record` - The audit record to append
///
/// # Returns
///
/// The entry ID assigned by the database.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn append_audit_record(
    conn: &mut SqliteConnection,
    record: &AuditRecord,
) -> Result<i64, PersistenceError> {
    let row: AuditRow = AuditRow::from_domain(record)?;

    diesel::insert_into(diesel_schema::audit_log::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
