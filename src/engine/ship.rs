//! Ship types and placed ships.

use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use super::cellset::Cells;
use super::common::PlacementError;
use super::config::BOARD_SIZE;
use super::location::Location;

/// Orientation of a straight ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The five kinds of ship in a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipType {
    Carrier,
    Battleship,
    Submarine,
    Destroyer,
    PatrolBoat,
}

impl ShipType {
    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Submarine => 3,
            ShipType::Destroyer => 3,
            ShipType::PatrolBoat => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "Carrier",
            ShipType::Battleship => "Battleship",
            ShipType::Submarine => "Submarine",
            ShipType::Destroyer => "Destroyer",
            ShipType::PatrolBoat => "Patrol Boat",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship as submitted by a side: its type and the cells it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    #[serde(rename = "type")]
    ship_type: ShipType,
    locations: Vec<Location>,
}

impl Ship {
    /// Ship covering `locations`. Nothing is checked here; a fleet validates
    /// its ships as a whole when it is placed.
    pub fn new(ship_type: ShipType, locations: Vec<Location>) -> Self {
        Ship {
            ship_type,
            locations,
        }
    }

    /// Straight ship starting at `origin` and extending right or down.
    pub fn line(
        ship_type: ShipType,
        origin: Location,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        let len = ship_type.length() as u8;
        let (row, col) = (origin.row(), origin.col());
        let end = match orientation {
            Orientation::Horizontal => col + len,
            Orientation::Vertical => row + len,
        };
        if end > BOARD_SIZE {
            return Err(PlacementError::OutOfBounds(ship_type));
        }

        let mut locations = Vec::with_capacity(len as usize);
        for i in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            locations.push(Location::new(r, c).map_err(|_| PlacementError::OutOfBounds(ship_type))?);
        }
        Ok(Ship {
            ship_type,
            locations,
        })
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Occupancy of the ship on the grid.
    pub fn cells(&self) -> Cells {
        Cells::from_locations(&self.locations)
    }
}
