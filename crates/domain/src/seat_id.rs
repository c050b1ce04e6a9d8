// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use std::str::FromStr;

/// A seat identifier in canonical `<row-number><row-letter>` form (e.g. `12B`).
///
/// Operators enter seat ids in either order (`12B` or `B12`), with arbitrary
/// case and stray whitespace. Both raw forms normalize to the same canonical
/// value, so `SeatId` can be used directly as a map key.
///
/// Ordering is row-major: first by row number, then by seat letter. Iterating
/// a sorted collection of seat ids therefore walks the layout the way it is
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId {
    /// The row number (1-99).
    row: u8,
    /// The seat letter within the row (uppercase).
    letter: char,
}

impl SeatId {
    /// Parses and normalizes a raw seat id.
    ///
    /// Normalization strips whitespace, uppercases, and reorders the digit
    /// and letter portions into digits-then-letter canonical form.
    ///
    /// # Arguments
    ///
    /// * `raw` - The operator-entered seat id in any accepted form
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSeatId` if the input does not contain
    /// exactly one row number (1-99) and exactly one seat letter, or contains
    /// any other character.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut digits: String = String::new();
        let mut letters: String = String::new();

        for c in raw.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if c.is_ascii_alphabetic() {
                letters.push(c.to_ascii_uppercase());
            } else if !c.is_whitespace() {
                return Err(DomainError::InvalidSeatId(format!(
                    "Seat id '{raw}' contains invalid character '{c}'"
                )));
            }
        }

        if digits.is_empty() || letters.is_empty() {
            return Err(DomainError::InvalidSeatId(format!(
                "Seat id '{raw}' must contain a row number and a seat letter"
            )));
        }

        if letters.len() > 1 {
            return Err(DomainError::InvalidSeatId(format!(
                "Seat id '{raw}' must contain exactly one seat letter"
            )));
        }

        let row: u8 = digits.parse().map_err(|_| {
            DomainError::InvalidSeatId(format!("Seat id '{raw}' has an out-of-range row number"))
        })?;

        if row == 0 {
            return Err(DomainError::InvalidSeatId(format!(
                "Seat id '{raw}' has row number zero"
            )));
        }

        let letter: char = letters.chars().next().unwrap_or('A');

        Ok(Self { row, letter })
    }

    /// Builds a seat id from already-validated layout parts.
    ///
    /// Used by layout generation, where row and letter come from the fixed
    /// service definition rather than operator input.
    #[must_use]
    pub const fn from_parts(row: u8, letter: char) -> Self {
        Self { row, letter }
    }

    /// Returns the row number.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the seat letter.
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }
}

impl FromStr for SeatId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}
