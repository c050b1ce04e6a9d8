// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use seatline_domain::Service;

use crate::data_models::SeatRow;
use crate::diesel_schema;
use crate::error::PersistenceError;

/// Loads all stored seat rows of one service.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `service` - The service whose rows to load
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn load_seat_rows(
    conn: &mut SqliteConnection,
    service: Service,
) -> Result<Vec<SeatRow>, PersistenceError> {
    Ok(diesel_schema::seats::table
        .filter(diesel_schema::seats::service.eq(service.key()))
        .select(SeatRow::as_select())
        .load(conn)?)
}
