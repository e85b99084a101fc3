//! Replays a salvo history against a fleet.
//!
//! Nothing is cached: every query resolves the full history again, which is
//! bounded by the grid size and the number of turns.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use super::cellset::Cells;
use super::config::FLEET;
use super::fleet::Fleet;
use super::location::Location;
use super::salvo::Salvo;
use super::ship::ShipType;

/// One counter per ship type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageTally {
    pub carrier: usize,
    pub battleship: usize,
    pub submarine: usize,
    pub destroyer: usize,
    #[serde(rename = "patrolboat")]
    pub patrol_boat: usize,
}

impl DamageTally {
    pub fn get(&self, ship_type: ShipType) -> usize {
        match ship_type {
            ShipType::Carrier => self.carrier,
            ShipType::Battleship => self.battleship,
            ShipType::Submarine => self.submarine,
            ShipType::Destroyer => self.destroyer,
            ShipType::PatrolBoat => self.patrol_boat,
        }
    }

    pub fn add(&mut self, ship_type: ShipType, shots: usize) {
        let slot = match ship_type {
            ShipType::Carrier => &mut self.carrier,
            ShipType::Battleship => &mut self.battleship,
            ShipType::Submarine => &mut self.submarine,
            ShipType::Destroyer => &mut self.destroyer,
            ShipType::PatrolBoat => &mut self.patrol_boat,
        };
        *slot += shots;
    }

    pub fn total(&self) -> usize {
        FLEET.iter().map(|t| self.get(*t)).sum()
    }

    /// `(type, count)` pairs in fleet order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipType, usize)> + '_ {
        FLEET.iter().map(move |t| (*t, self.get(*t)))
    }
}

/// Outcome of one attacker turn against the defender's fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub turn: u32,
    /// Targets that landed on a ship, in firing order.
    pub hit_locations: Vec<Location>,
    /// Shots that landed on each ship type this turn.
    pub hits: DamageTally,
    /// Shots that have landed on each ship type up to and including this turn.
    pub damage: DamageTally,
    pub missed: usize,
}

/// Resolve every salvo of `attacker` against `defender`, in turn order.
pub fn resolve(attacker: &[Salvo], defender: &Fleet) -> Vec<TurnResult> {
    let occupied = defender.cells();
    let mut damage = DamageTally::default();
    let mut results = Vec::with_capacity(attacker.len());

    for salvo in attacker {
        let hit_locations: Vec<Location> = salvo
            .locations()
            .iter()
            .copied()
            .filter(|loc| occupied.contains(*loc))
            .collect();

        let mut hits = DamageTally::default();
        for ship in defender.ships() {
            let cells = ship.cells();
            let shots = salvo
                .locations()
                .iter()
                .filter(|loc| cells.contains(**loc))
                .count();
            hits.add(ship.ship_type(), shots);
            damage.add(ship.ship_type(), shots);
        }

        results.push(TurnResult {
            turn: salvo.turn(),
            missed: salvo.locations().len() - hit_locations.len(),
            hit_locations,
            hits,
            damage,
        });
    }
    results
}

/// Distinct cells of `defender` targeted at least once by `attacker`.
pub fn hit_cells(attacker: &[Salvo], defender: &Fleet) -> usize {
    let targeted = attacker
        .iter()
        .fold(Cells::new(), |acc, s| acc | s.cells());
    (defender.cells() & targeted).len()
}

/// Ship types of `defender` whose every cell has been targeted.
pub fn sunk_ships(attacker: &[Salvo], defender: &Fleet) -> Vec<ShipType> {
    let targeted = attacker
        .iter()
        .fold(Cells::new(), |acc, s| acc | s.cells());
    defender
        .ships()
        .iter()
        .filter(|ship| ship.cells().is_subset(targeted))
        .map(|ship| ship.ship_type())
        .collect()
}
