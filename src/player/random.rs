use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::engine::{Cells, Fleet, Location, MatchSummary, PlacementError, Ship, BOARD_SIZE};

use super::Player;

/// Fires at untouched cells picked uniformly at random.
pub struct RandomPlayer {
    shots: usize,
}

impl RandomPlayer {
    pub fn new(shots: usize) -> Self {
        Self { shots }
    }
}

/// Cells this side has already fired at.
fn fired(view: &MatchSummary) -> Cells {
    view.salvoes
        .iter()
        .fold(Cells::new(), |acc, s| acc | s.cells())
}

fn random_targets(rng: &mut SmallRng, exclude: Cells, count: usize) -> Vec<Location> {
    let mut open: Vec<Location> = Location::all().filter(|l| !exclude.contains(*l)).collect();
    open.shuffle(rng);
    open.truncate(count);
    open
}

impl Player for RandomPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<Vec<Ship>, PlacementError> {
        Ok(Fleet::random(rng)?.into())
    }

    fn select_salvo(&mut self, rng: &mut SmallRng, view: &MatchSummary) -> Vec<Location> {
        random_targets(rng, fired(view), self.shots)
    }
}

/// Hunt/target player: fires next to earlier hits first and falls back to
/// random cells.
pub struct HuntPlayer {
    shots: usize,
}

impl HuntPlayer {
    pub fn new(shots: usize) -> Self {
        Self { shots }
    }
}

fn neighbours(loc: Location) -> impl Iterator<Item = Location> {
    let (r, c) = (loc.row() as i16, loc.col() as i16);
    [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
        .into_iter()
        .filter(|(r, c)| (0..BOARD_SIZE as i16).contains(r) && (0..BOARD_SIZE as i16).contains(c))
        .filter_map(|(r, c)| Location::new(r as u8, c as u8).ok())
}

impl Player for HuntPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<Vec<Ship>, PlacementError> {
        Ok(Fleet::random(rng)?.into())
    }

    fn select_salvo(&mut self, rng: &mut SmallRng, view: &MatchSummary) -> Vec<Location> {
        let mut taken = fired(view);
        let mut targets = Vec::with_capacity(self.shots);

        for hit in view.inflicted.iter().flat_map(|t| t.hit_locations.iter()) {
            for next in neighbours(*hit) {
                if targets.len() == self.shots {
                    return targets;
                }
                if taken.insert(next) {
                    targets.push(next);
                }
            }
        }

        let rest = self.shots - targets.len();
        targets.extend(random_targets(rng, taken, rest));
        targets
    }
}
