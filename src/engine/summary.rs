//! The per-side view of a match handed to outer layers.

use alloc::vec::Vec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::combat::{resolve, sunk_ships, TurnResult};
use super::game::{Match, MatchId, PlayerId, SideId, SideState};
use super::salvo::Salvo;
use super::ship::{Ship, ShipType};
use super::state::{derive_state, GameState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideInfo {
    pub side: SideId,
    pub player: PlayerId,
    pub joined: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunkShips {
    pub own: Vec<ShipType>,
    pub opponent: Vec<ShipType>,
}

/// Everything one side may see. Opponent ship cells only show up as hit
/// locations in `inflicted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub created: DateTime<Utc>,
    pub state: GameState,
    pub sides: Vec<SideInfo>,
    pub ships: Vec<Ship>,
    pub salvoes: Vec<Salvo>,
    pub opponent_salvoes: Vec<Salvo>,
    /// Opponent salvoes resolved against our fleet.
    pub received: Vec<TurnResult>,
    /// Our salvoes resolved against the opponent's fleet.
    pub inflicted: Vec<TurnResult>,
    pub sunk: SunkShips,
}

pub fn build_summary(m: &Match, side: &SideState, opponent: Option<&SideState>) -> MatchSummary {
    let sides = m
        .sides()
        .iter()
        .map(|s| SideInfo {
            side: s.id(),
            player: s.player(),
            joined: s.joined(),
        })
        .collect();

    let (opponent_salvoes, received, inflicted, sunk) = match opponent {
        Some(o) => (
            o.salvoes().as_slice().to_vec(),
            resolve(o.salvoes().as_slice(), side.fleet()),
            resolve(side.salvoes().as_slice(), o.fleet()),
            SunkShips {
                own: sunk_ships(o.salvoes().as_slice(), side.fleet()),
                opponent: sunk_ships(side.salvoes().as_slice(), o.fleet()),
            },
        ),
        None => (Vec::new(), Vec::new(), Vec::new(), SunkShips::default()),
    };

    MatchSummary {
        match_id: m.id(),
        created: m.created(),
        state: derive_state(side, opponent),
        sides,
        ships: side.fleet().ships().to_vec(),
        salvoes: side.salvoes().as_slice().to_vec(),
        opponent_salvoes,
        received,
        inflicted,
        sunk,
    }
}
