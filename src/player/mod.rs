//! Automated players
//!
//! A player decides where its ships go and which cells each salvo targets.
//! It only ever sees its own [`MatchSummary`], the same view a remote client
//! gets.

use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::engine::{Location, MatchSummary, PlacementError, Ship};

pub trait Player: Send {
    /// Ships to submit for placement.
    fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<Vec<Ship>, PlacementError>;

    /// Targets for the next salvo. An empty list means nothing is left to
    /// shoot at.
    fn select_salvo(&mut self, rng: &mut SmallRng, view: &MatchSummary) -> Vec<Location>;
}

pub mod random;
pub use random::{HuntPlayer, RandomPlayer};
