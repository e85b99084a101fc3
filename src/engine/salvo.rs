//! Salvoes, salvo histories and the rules for accepting a new salvo.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use super::cellset::Cells;
use super::combat;
use super::common::{GameError, SalvoError};
use super::config::TOTAL_SHIP_CELLS;
use super::game::{PlayerId, SideState};
use super::location::Location;

/// One accepted turn of shots. Immutable once appended to a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salvo {
    turn: u32,
    locations: Vec<Location>,
}

impl Salvo {
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn cells(&self) -> Cells {
        Cells::from_locations(&self.locations)
    }
}

/// A salvo as submitted by a client. The turn number is advisory: it is only
/// used to detect resubmission of a turn already fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalvoRequest {
    #[serde(default)]
    pub turn: Option<u32>,
    pub locations: Vec<Location>,
}

impl SalvoRequest {
    pub fn new(locations: Vec<Location>) -> Self {
        SalvoRequest {
            turn: None,
            locations,
        }
    }

    pub fn with_turn(mut self, turn: u32) -> Self {
        self.turn = Some(turn);
        self
    }

    fn check_targets(&self) -> Result<(), SalvoError> {
        if self.locations.is_empty() {
            return Err(SalvoError::Empty);
        }
        let mut seen = Cells::new();
        for loc in &self.locations {
            if !seen.insert(*loc) {
                return Err(SalvoError::DuplicateTarget(*loc));
            }
        }
        Ok(())
    }
}

/// A side's salvoes, ordered by turn and numbered `1..=N` without gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Salvo>", into = "Vec<Salvo>")]
pub struct SalvoHistory {
    salvoes: Vec<Salvo>,
}

impl SalvoHistory {
    pub fn new() -> Self {
        SalvoHistory {
            salvoes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.salvoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.salvoes.is_empty()
    }

    pub fn as_slice(&self) -> &[Salvo] {
        &self.salvoes
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Salvo> {
        self.salvoes.iter()
    }

    pub fn contains_turn(&self, turn: u32) -> bool {
        self.salvoes.iter().any(|s| s.turn == turn)
    }

    /// Turn number the next accepted salvo receives.
    pub fn next_turn(&self) -> u32 {
        self.salvoes.len() as u32 + 1
    }

    /// Every cell targeted by any salvo so far.
    pub fn targeted(&self) -> Cells {
        self.salvoes
            .iter()
            .fold(Cells::new(), |acc, s| acc | s.cells())
    }

    /// Appends `locations` as the next turn and returns its number. Callers
    /// validate first with [`validate_salvo`].
    pub(crate) fn append(&mut self, locations: Vec<Location>) -> u32 {
        let turn = self.next_turn();
        self.salvoes.push(Salvo { turn, locations });
        turn
    }
}

impl TryFrom<Vec<Salvo>> for SalvoHistory {
    type Error = SalvoError;

    fn try_from(mut salvoes: Vec<Salvo>) -> Result<Self, Self::Error> {
        salvoes.sort_by_key(|s| s.turn);
        for (i, salvo) in salvoes.iter().enumerate() {
            let expected = i as u32 + 1;
            if salvo.turn != expected {
                return Err(SalvoError::TurnGap {
                    expected,
                    found: salvo.turn,
                });
            }
        }
        Ok(SalvoHistory { salvoes })
    }
}

impl From<SalvoHistory> for Vec<Salvo> {
    fn from(history: SalvoHistory) -> Self {
        history.salvoes
    }
}

/// Decide whether `side` may fire `request`, and if so which turn it gets.
///
/// Rules apply in order: ownership, fleet placed, turn not already used,
/// alternation, match still open, salvo content.
pub fn validate_salvo(
    identity: PlayerId,
    side: &SideState,
    opponent: Option<&SideState>,
    request: &SalvoRequest,
) -> Result<u32, GameError> {
    if side.player() != identity {
        return Err(GameError::NotAuthorized);
    }
    if !side.fleet().is_placed() {
        return Err(GameError::FleetNotPlaced);
    }
    if let Some(turn) = request.turn {
        if side.salvoes().contains_turn(turn) {
            return Err(GameError::DuplicateTurn(turn));
        }
    }

    let opponent = match opponent {
        Some(o) if o.fleet().is_placed() => o,
        _ => return Err(GameError::OutOfTurn),
    };
    let own = side.salvoes().len();
    let theirs = opponent.salvoes().len();
    if own > theirs {
        return Err(GameError::OutOfTurn);
    }

    // Once a fleet is sunk only the side that is behind may fire, to close
    // out the round.
    let own_sunk = combat::hit_cells(opponent.salvoes().as_slice(), side.fleet());
    let their_sunk = combat::hit_cells(side.salvoes().as_slice(), opponent.fleet());
    if (own_sunk == TOTAL_SHIP_CELLS || their_sunk == TOTAL_SHIP_CELLS) && own >= theirs {
        return Err(GameError::MatchOver);
    }

    request.check_targets()?;
    Ok(side.salvoes().next_turn())
}
