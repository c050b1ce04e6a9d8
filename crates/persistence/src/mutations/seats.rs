// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use seatline::ServiceState;

use crate::data_models::SeatRow;
use crate::diesel_schema;
use crate::error::PersistenceError;

/// Replaces a service's entire seat row set with the given state.
///
/// The whole seat set is written in one statement pair (delete + batch
/// insert), mirroring the state model: a commit covers the full layout,
/// never a partial subset. Callers run this inside a transaction.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `state` - The new seat state to store
///
/// # Errors
///
/// Returns an error if serialization or either statement fails.
pub fn replace_service_seats(
    conn: &mut SqliteConnection,
    state: &ServiceState,
) -> Result<(), PersistenceError> {
    let rows: Vec<SeatRow> = state
        .seats()
        .iter()
        .map(|(seat_id, seat)| SeatRow::from_domain(state.service(), *seat_id, seat))
        .collect::<Result<Vec<SeatRow>, PersistenceError>>()?;

    diesel::delete(
        diesel_schema::seats::table
            .filter(diesel_schema::seats::service.eq(state.service().key())),
    )
    .execute(conn)?;

    diesel::insert_into(diesel_schema::seats::table)
        .values(&rows)
        .execute(conn)?;

    Ok(())
}
