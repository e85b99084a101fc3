#![cfg(feature = "std")]
//! In-memory match registry implementing [`MatchApi`].
//!
//! All matches sit behind one async mutex. Holding it across
//! validate-then-append makes every accepted salvo see the history it was
//! validated against, so two concurrent submissions for the same side can
//! never both take the same turn.

use std::collections::BTreeMap;

use anyhow::Context;
use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::engine::{
    GameError, GameState, Match, MatchId, MatchSummary, PlayerId, SalvoRequest, Ship, SideId,
};
use crate::protocol::MatchApi;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Registry {
    next_id: u64,
    matches: BTreeMap<MatchId, Match>,
    sides: BTreeMap<SideId, MatchId>,
}

impl Registry {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn insert(&mut self, m: Match) {
        for side in m.sides() {
            self.sides.insert(side.id(), m.id());
            self.next_id = self.next_id.max(side.id().0);
        }
        self.next_id = self.next_id.max(m.id().0);
        self.matches.insert(m.id(), m);
    }

    /// Match holding `side`, checked to belong to `identity`.
    fn owned(&self, identity: PlayerId, side: SideId) -> Result<&Match, GameError> {
        let m = self
            .sides
            .get(&side)
            .and_then(|id| self.matches.get(id))
            .ok_or(GameError::NotAuthorized)?;
        match m.side(side) {
            Some(s) if s.player() == identity => Ok(m),
            _ => Err(GameError::NotAuthorized),
        }
    }

    fn match_of_mut(&mut self, side: SideId) -> Result<&mut Match, GameError> {
        let id = self.sides.get(&side).ok_or(GameError::NotAuthorized)?;
        self.matches.get_mut(id).ok_or(GameError::NotAuthorized)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryMatches {
    inner: Mutex<Registry>,
}

impl InMemoryMatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with previously stored matches.
    pub fn from_matches<I: IntoIterator<Item = Match>>(matches: I) -> Self {
        let mut registry = Registry::default();
        for m in matches {
            registry.insert(m);
        }
        Self {
            inner: Mutex::new(registry),
        }
    }

    /// Encode every match with bincode.
    pub async fn export(&self) -> anyhow::Result<Vec<u8>> {
        let registry = self.inner.lock().await;
        bincode::serialize(&*registry).context("encoding match registry")
    }

    /// Rebuild a registry from [`InMemoryMatches::export`] output.
    pub fn import(bytes: &[u8]) -> anyhow::Result<Self> {
        let registry: Registry = bincode::deserialize(bytes).context("decoding match registry")?;
        Ok(Self {
            inner: Mutex::new(registry),
        })
    }
}

fn logged<T>(op: &str, side: SideId, result: Result<T, GameError>) -> Result<T, GameError> {
    if let Err(e) = &result {
        warn!("{} rejected for side {}: {}", op, side, e);
    }
    result
}

#[async_trait::async_trait]
impl MatchApi for InMemoryMatches {
    async fn create_match(&self, player: PlayerId) -> Result<(MatchId, SideId), GameError> {
        let mut registry = self.inner.lock().await;
        let match_id = MatchId(registry.allocate());
        let side = SideId(registry.allocate());
        let now = Utc::now();
        let mut m = Match::new(match_id, now);
        m.join(side, player, now)?;
        registry.insert(m);
        info!("match {} created by player {} (side {})", match_id, player, side);
        Ok((match_id, side))
    }

    async fn join_match(&self, id: MatchId, player: PlayerId) -> Result<SideId, GameError> {
        let mut registry = self.inner.lock().await;
        let side = SideId(registry.allocate());
        let m = registry
            .matches
            .get_mut(&id)
            .ok_or(GameError::UnknownMatch(id))?;
        if let Err(e) = m.join(side, player, Utc::now()) {
            warn!("player {} could not join match {}: {}", player, id, e);
            return Err(e);
        }
        registry.sides.insert(side, id);
        info!("player {} joined match {} (side {})", player, id, side);
        Ok(side)
    }

    async fn place_fleet(
        &self,
        identity: PlayerId,
        side: SideId,
        ships: Vec<Ship>,
    ) -> Result<(), GameError> {
        let mut registry = self.inner.lock().await;
        let result = registry
            .match_of_mut(side)
            .and_then(|m| m.place_fleet(side, identity, ships));
        let result = logged("fleet placement", side, result);
        if result.is_ok() {
            info!("side {} placed its fleet", side);
        }
        result
    }

    async fn submit_salvo(
        &self,
        identity: PlayerId,
        side: SideId,
        salvo: SalvoRequest,
    ) -> Result<u32, GameError> {
        let mut registry = self.inner.lock().await;
        let shots = salvo.locations.len();
        let result = registry
            .match_of_mut(side)
            .and_then(|m| m.submit_salvo(side, identity, salvo));
        let turn = logged("salvo", side, result)?;
        info!("side {} fired turn {} ({} shots)", side, turn, shots);
        Ok(turn)
    }

    async fn state(&self, identity: PlayerId, side: SideId) -> Result<GameState, GameError> {
        let registry = self.inner.lock().await;
        let state = registry.owned(identity, side)?.state(side)?;
        debug!("side {} is {}", side, state);
        Ok(state)
    }

    async fn summary(&self, identity: PlayerId, side: SideId) -> Result<MatchSummary, GameError> {
        let registry = self.inner.lock().await;
        registry.owned(identity, side)?.summary(side)
    }

    async fn snapshot(&self, id: MatchId) -> Result<Match, GameError> {
        let registry = self.inner.lock().await;
        registry
            .matches
            .get(&id)
            .cloned()
            .ok_or(GameError::UnknownMatch(id))
    }
}
