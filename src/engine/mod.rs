//! Core salvo engine (no_std compatible)
//!
//! Fleet placement rules, salvo acceptance, combat resolution and the
//! lifecycle state of a match. Everything here is a pure function of the
//! fleets and salvo histories handed in; storage and transport live outside.

pub mod cellset;
pub mod combat;
pub mod common;
pub mod config;
pub mod fleet;
pub mod game;
pub mod location;
pub mod salvo;
pub mod ship;
pub mod state;
pub mod summary;

pub use cellset::{CellSet, Cells};
pub use combat::{hit_cells, resolve, sunk_ships, DamageTally, TurnResult};
pub use common::{GameError, LocationError, PlacementError, SalvoError};
pub use config::*;
pub use fleet::Fleet;
pub use game::{Match, MatchId, PlayerId, SideId, SideState};
pub use location::Location;
pub use salvo::{validate_salvo, Salvo, SalvoHistory, SalvoRequest};
pub use ship::{Orientation, Ship, ShipType};
pub use state::{derive_state, GameState};
pub use summary::{build_summary, MatchSummary, SideInfo, SunkShips};
