// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod identity;
mod money;
mod pricing;
mod seat;
mod seat_id;
mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use identity::{Address, ContactNumber, GovernmentId, IdKind, Identity, PersonName};
pub use money::Money;
pub use pricing::{DiscountRate, PricingEntry, PricingTable, Quote, ServicePricing, TicketType};
pub use seat::{Booking, Seat, SeatStatus};
pub use seat_id::SeatId;
pub use service::Service;
pub use validation::{
    collapse_whitespace, title_case, validate_barangay, validate_city, validate_contact_number,
    validate_first_name, validate_middle_initial, validate_postal_code, validate_province,
    validate_street, validate_surname,
};
