// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only database operations.

mod audit;
mod seats;

pub use audit::{audit_for_service, count_audit_entries, recent_audit};
pub use seats::load_seat_rows;
