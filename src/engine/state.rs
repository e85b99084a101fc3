use core::fmt;
use serde::{Deserialize, Serialize};

use super::combat;
use super::config::TOTAL_SHIP_CELLS;
use super::game::SideState;

/// Phase of a match as seen from one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    PlacingShips,
    WaitingForOpponent,
    YourTurn,
    OpponentTurn,
    Won,
    Tied,
    Lost,
}

impl GameState {
    /// `true` for `Won`, `Tied` and `Lost`.
    pub fn is_over(self) -> bool {
        matches!(self, GameState::Won | GameState::Tied | GameState::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::PlacingShips => "PLACING_SHIPS",
            GameState::WaitingForOpponent => "WAITING_FOR_OPPONENT",
            GameState::YourTurn => "YOUR_TURN",
            GameState::OpponentTurn => "OPPONENT_TURN",
            GameState::Won => "WON",
            GameState::Tied => "TIED",
            GameState::Lost => "LOST",
        };
        f.write_str(name)
    }
}

/// Derive the state of `side` from both fleets and salvo histories.
///
/// Nothing is stored: the same inputs always give the same state.
pub fn derive_state(side: &SideState, opponent: Option<&SideState>) -> GameState {
    if !side.fleet().is_placed() {
        return GameState::PlacingShips;
    }
    let opponent = match opponent {
        Some(o) => o,
        None => return GameState::WaitingForOpponent,
    };
    if !opponent.fleet().is_placed() {
        return GameState::OpponentTurn;
    }

    let self_sunk = combat::hit_cells(opponent.salvoes().as_slice(), side.fleet());
    let opp_sunk = combat::hit_cells(side.salvoes().as_slice(), opponent.fleet());

    if self_sunk < TOTAL_SHIP_CELLS && opp_sunk < TOTAL_SHIP_CELLS {
        return if side.salvoes().len() <= opponent.salvoes().len() {
            GameState::YourTurn
        } else {
            GameState::OpponentTurn
        };
    }

    if opp_sunk == TOTAL_SHIP_CELLS && self_sunk < TOTAL_SHIP_CELLS {
        GameState::Won
    } else if opp_sunk == TOTAL_SHIP_CELLS && self_sunk == TOTAL_SHIP_CELLS {
        GameState::Tied
    } else {
        GameState::Lost
    }
}
