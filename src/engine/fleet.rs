//! A side's fleet and the placement rules it must satisfy.

use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cellset::Cells;
use super::common::PlacementError;
use super::config::{BOARD_SIZE, FLEET};
use super::location::Location;
use super::ship::{Orientation, Ship, ShipType};

/// The ships of one side. Either empty (not placed yet) or a complete,
/// valid fleet; there is no in-between.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Ship>", into = "Vec<Ship>")]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Fleet of a side that has not placed its ships.
    pub fn empty() -> Self {
        Fleet { ships: Vec::new() }
    }

    /// Validate `ships` and build a placed fleet from them.
    pub fn place(ships: Vec<Ship>) -> Result<Self, PlacementError> {
        Self::validate(&ships)?;
        Ok(Fleet { ships })
    }

    /// Check a fleet submission: every ship type exactly once, each with its
    /// exact cell count, no cell shared between ships.
    pub fn validate(ships: &[Ship]) -> Result<(), PlacementError> {
        let mut seen: Vec<ShipType> = Vec::with_capacity(FLEET.len());
        let mut occupied = Cells::new();

        for ship in ships {
            let ship_type = ship.ship_type();
            if seen.contains(&ship_type) {
                return Err(PlacementError::DuplicateShip(ship_type));
            }
            seen.push(ship_type);

            let actual = ship.locations().len();
            if actual != ship_type.length() {
                return Err(PlacementError::WrongLength {
                    ship_type,
                    expected: ship_type.length(),
                    actual,
                });
            }

            let mut cells = Cells::new();
            for loc in ship.locations() {
                if !cells.insert(*loc) {
                    return Err(PlacementError::RepeatedCell {
                        ship_type,
                        location: *loc,
                    });
                }
                if occupied.contains(*loc) {
                    return Err(PlacementError::Overlap(*loc));
                }
            }
            occupied |= cells;
        }

        for ship_type in FLEET {
            if !seen.contains(&ship_type) {
                return Err(PlacementError::MissingShip(ship_type));
            }
        }
        Ok(())
    }

    /// Random straight-line fleet with no overlaps.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, PlacementError> {
        let mut ships = Vec::with_capacity(FLEET.len());
        let mut occupied = Cells::new();
        for ship_type in FLEET {
            let ship = random_line(rng, ship_type, occupied)?;
            occupied |= ship.cells();
            ships.push(ship);
        }
        Self::place(ships)
    }

    pub fn is_placed(&self) -> bool {
        !self.ships.is_empty()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, ship_type: ShipType) -> Option<&Ship> {
        self.ships.iter().find(|s| s.ship_type() == ship_type)
    }

    /// Union of all ship cells.
    pub fn cells(&self) -> Cells {
        self.ships
            .iter()
            .fold(Cells::new(), |acc, ship| acc | ship.cells())
    }
}

fn random_line<R: Rng>(
    rng: &mut R,
    ship_type: ShipType,
    occupied: Cells,
) -> Result<Ship, PlacementError> {
    let span = BOARD_SIZE - ship_type.length() as u8;
    for _ in 0..100 {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (BOARD_SIZE - 1, span),
            Orientation::Vertical => (span, BOARD_SIZE - 1),
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let origin = Location::new(r, c).map_err(|_| PlacementError::OutOfBounds(ship_type))?;
        let ship = Ship::line(ship_type, origin, orientation)?;
        if !ship.cells().intersects(occupied) {
            return Ok(ship);
        }
    }
    Err(PlacementError::OutOfBounds(ship_type))
}

impl TryFrom<Vec<Ship>> for Fleet {
    type Error = PlacementError;

    fn try_from(ships: Vec<Ship>) -> Result<Self, Self::Error> {
        if ships.is_empty() {
            Ok(Fleet::empty())
        } else {
            Fleet::place(ships)
        }
    }
}

impl From<Fleet> for Vec<Ship> {
    fn from(fleet: Fleet) -> Self {
        fleet.ships
    }
}
