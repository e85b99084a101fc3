//! Matches and the sides taking part in them.
//!
//! A `Match` only holds history: fleets and salvoes. Turn order and outcome
//! are derived on demand by [`derive_state`], never stored.

use alloc::vec::Vec;
use chrono::{DateTime, Utc};
use core::fmt;
use serde::{Deserialize, Serialize};

use super::common::{GameError, PlacementError};
use super::config::MAX_SIDES;
use super::fleet::Fleet;
use super::salvo::{validate_salvo, SalvoHistory, SalvoRequest};
use super::ship::Ship;
use super::state::{derive_state, GameState};
use super::summary::{build_summary, MatchSummary};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifies a match.
    MatchId
);
id_type!(
    /// Identifies one side of one match.
    SideId
);
id_type!(
    /// Authenticated identity of a player, supplied by the caller.
    PlayerId
);

/// One player's participation in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideState {
    id: SideId,
    player: PlayerId,
    joined: DateTime<Utc>,
    fleet: Fleet,
    salvoes: SalvoHistory,
}

impl SideState {
    pub fn new(id: SideId, player: PlayerId, joined: DateTime<Utc>) -> Self {
        SideState {
            id,
            player,
            joined,
            fleet: Fleet::empty(),
            salvoes: SalvoHistory::new(),
        }
    }

    pub fn id(&self) -> SideId {
        self.id
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn joined(&self) -> DateTime<Utc> {
        self.joined
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn salvoes(&self) -> &SalvoHistory {
        &self.salvoes
    }
}

/// Two sides (at most) and the time the match was created.
///
/// A deserialized match is checked against the same rules live play obeys,
/// see [`Match::try_from`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchRecord")]
pub struct Match {
    id: MatchId,
    created: DateTime<Utc>,
    sides: Vec<SideState>,
}

/// Unchecked wire form of a [`Match`].
#[derive(Deserialize)]
struct MatchRecord {
    id: MatchId,
    created: DateTime<Utc>,
    sides: Vec<SideState>,
}

impl TryFrom<MatchRecord> for Match {
    type Error = GameError;

    /// Rejects more than two sides, a side id or player listed twice, salvoes
    /// fired before both fleets were placed, and a side more than one salvo
    /// ahead of its opponent.
    fn try_from(record: MatchRecord) -> Result<Self, Self::Error> {
        let MatchRecord { id, created, sides } = record;
        if sides.len() > MAX_SIDES {
            return Err(GameError::MatchFull);
        }
        for (i, side) in sides.iter().enumerate() {
            if sides[..i]
                .iter()
                .any(|s| s.id == side.id || s.player == side.player)
            {
                return Err(GameError::AlreadyJoined);
            }
        }

        let m = Match { id, created, sides };
        for side in &m.sides {
            if side.salvoes.is_empty() {
                continue;
            }
            if !side.fleet.is_placed() {
                return Err(GameError::FleetNotPlaced);
            }
            let theirs = match m.opponent(side.id) {
                Some(o) if o.fleet.is_placed() => o.salvoes.len(),
                _ => return Err(GameError::OutOfTurn),
            };
            if side.salvoes.len() > theirs + 1 {
                return Err(GameError::OutOfTurn);
            }
        }
        Ok(m)
    }
}

impl Match {
    pub fn new(id: MatchId, created: DateTime<Utc>) -> Self {
        Match {
            id,
            created,
            sides: Vec::with_capacity(MAX_SIDES),
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn sides(&self) -> &[SideState] {
        &self.sides
    }

    pub fn side(&self, id: SideId) -> Option<&SideState> {
        self.sides.iter().find(|s| s.id == id)
    }

    /// The other side of the match, if one has joined.
    pub fn opponent(&self, id: SideId) -> Option<&SideState> {
        self.sides.iter().find(|s| s.id != id)
    }

    fn index_of(&self, id: SideId) -> Result<usize, GameError> {
        self.sides
            .iter()
            .position(|s| s.id == id)
            .ok_or(GameError::NotAuthorized)
    }

    /// Add a side for `player`.
    pub fn join(
        &mut self,
        id: SideId,
        player: PlayerId,
        joined: DateTime<Utc>,
    ) -> Result<&SideState, GameError> {
        if self.sides.len() >= MAX_SIDES {
            return Err(GameError::MatchFull);
        }
        if self.sides.iter().any(|s| s.player == player || s.id == id) {
            return Err(GameError::AlreadyJoined);
        }
        self.sides.push(SideState::new(id, player, joined));
        Ok(&self.sides[self.sides.len() - 1])
    }

    /// Place the fleet of `side`. A side places its ships exactly once.
    pub fn place_fleet(
        &mut self,
        side: SideId,
        identity: PlayerId,
        ships: Vec<Ship>,
    ) -> Result<(), GameError> {
        let idx = self.index_of(side)?;
        let state = &mut self.sides[idx];
        if state.player != identity {
            return Err(GameError::NotAuthorized);
        }
        if state.fleet.is_placed() {
            return Err(PlacementError::AlreadyPlaced.into());
        }
        state.fleet = Fleet::place(ships)?;
        Ok(())
    }

    /// Validate and append a salvo for `side`; returns the assigned turn.
    pub fn submit_salvo(
        &mut self,
        side: SideId,
        identity: PlayerId,
        request: SalvoRequest,
    ) -> Result<u32, GameError> {
        let idx = self.index_of(side)?;
        let turn = validate_salvo(identity, &self.sides[idx], self.opponent(side), &request)?;
        let assigned = self.sides[idx].salvoes.append(request.locations);
        debug_assert_eq!(turn, assigned);
        Ok(assigned)
    }

    pub fn state(&self, side: SideId) -> Result<GameState, GameError> {
        let state = self.side(side).ok_or(GameError::NotAuthorized)?;
        Ok(derive_state(state, self.opponent(side)))
    }

    pub fn summary(&self, side: SideId) -> Result<MatchSummary, GameError> {
        let state = self.side(side).ok_or(GameError::NotAuthorized)?;
        Ok(build_summary(self, state, self.opponent(side)))
    }
}
