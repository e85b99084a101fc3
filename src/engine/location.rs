//! Grid cell identifiers.
//!
//! A location prints as its column letter followed by its row number, so the
//! top-left cell is `A1` and the bottom-right one is `J10`.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use super::common::LocationError;
use super::config::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location {
    row: u8,
    col: u8,
}

impl Location {
    /// Zero-based `row` and `col`, both below `BOARD_SIZE`.
    pub fn new(row: u8, col: u8) -> Result<Self, LocationError> {
        if row >= BOARD_SIZE {
            return Err(LocationError::BadRow);
        }
        if col >= BOARD_SIZE {
            return Err(LocationError::BadColumn((b'A' + col.min(25)) as char));
        }
        Ok(Location { row, col })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Every cell of the grid, row-major.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Location { row, col }))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(LocationError::Empty)?;
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() || (upper as u8 - b'A') >= BOARD_SIZE {
            return Err(LocationError::BadColumn(letter));
        }
        // plain decimal digits only: no sign, no leading zero
        let digits = chars.as_str();
        let plain = !digits.is_empty()
            && !digits.starts_with('0')
            && digits.bytes().all(|b| b.is_ascii_digit());
        if !plain {
            return Err(LocationError::BadRow);
        }
        let row: u8 = digits.parse().map_err(|_| LocationError::BadRow)?;
        Location::new(row - 1, upper as u8 - b'A')
    }
}

impl TryFrom<String> for Location {
    type Error = LocationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Location> for String {
    fn from(loc: Location) -> Self {
        loc.to_string()
    }
}
