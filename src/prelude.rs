//! Commonly used types and utilities for ease of import.

pub use crate::engine::{
    derive_state, resolve, validate_salvo, Fleet, GameError, GameState, Location, Match,
    MatchSummary, PlayerId, SalvoRequest, Ship, ShipType, SideId,
};
pub use crate::player::{HuntPlayer, Player, RandomPlayer};

#[cfg(feature = "std")]
pub use crate::{
    protocol::{dispatch, MatchApi, Request, Response},
    service::InMemoryMatches,
};
