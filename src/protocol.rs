#![cfg(feature = "std")]
//! Operations offered to the transport and storage layers.
//!
//! Callers authenticate first and pass the resulting [`PlayerId`]; a raw
//! client-supplied side id is never trusted on its own.

use serde::{Deserialize, Serialize};

use crate::engine::{
    GameError, GameState, Match, MatchId, MatchSummary, PlayerId, SalvoRequest, Ship, SideId,
};

#[async_trait::async_trait]
pub trait MatchApi: Send + Sync {
    /// Create a match with `player` holding its first side.
    async fn create_match(&self, player: PlayerId) -> Result<(MatchId, SideId), GameError>;
    async fn join_match(&self, id: MatchId, player: PlayerId) -> Result<SideId, GameError>;
    async fn place_fleet(
        &self,
        identity: PlayerId,
        side: SideId,
        ships: Vec<Ship>,
    ) -> Result<(), GameError>;
    /// Returns the turn number assigned to the accepted salvo.
    async fn submit_salvo(
        &self,
        identity: PlayerId,
        side: SideId,
        salvo: SalvoRequest,
    ) -> Result<u32, GameError>;
    async fn state(&self, identity: PlayerId, side: SideId) -> Result<GameState, GameError>;
    async fn summary(&self, identity: PlayerId, side: SideId) -> Result<MatchSummary, GameError>;
    /// Copy of the stored match, for persistence.
    async fn snapshot(&self, id: MatchId) -> Result<Match, GameError>;
}

/// Requests a transport decodes and hands to [`dispatch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    CreateMatch,
    JoinMatch { match_id: MatchId },
    PlaceFleet { side: SideId, ships: Vec<Ship> },
    Salvo { side: SideId, salvo: SalvoRequest },
    State { side: SideId },
    Summary { side: SideId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Response {
    Created { match_id: MatchId, side: SideId },
    Joined { side: SideId },
    FleetPlaced,
    SalvoAccepted { turn: u32 },
    State { state: GameState },
    Summary { summary: Box<MatchSummary> },
    Rejected { code: String, reason: String },
}

impl From<GameError> for Response {
    fn from(err: GameError) -> Self {
        Response::Rejected {
            code: err.code().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Run one request for `identity` against `api`. Rejections become
/// [`Response::Rejected`] rather than errors.
pub async fn dispatch<A: MatchApi + ?Sized>(
    api: &A,
    identity: PlayerId,
    request: Request,
) -> Response {
    let result = match request {
        Request::CreateMatch => api
            .create_match(identity)
            .await
            .map(|(match_id, side)| Response::Created { match_id, side }),
        Request::JoinMatch { match_id } => api
            .join_match(match_id, identity)
            .await
            .map(|side| Response::Joined { side }),
        Request::PlaceFleet { side, ships } => api
            .place_fleet(identity, side, ships)
            .await
            .map(|()| Response::FleetPlaced),
        Request::Salvo { side, salvo } => api
            .submit_salvo(identity, side, salvo)
            .await
            .map(|turn| Response::SalvoAccepted { turn }),
        Request::State { side } => api
            .state(identity, side)
            .await
            .map(|state| Response::State { state }),
        Request::Summary { side } => api
            .summary(identity, side)
            .await
            .map(|summary| Response::Summary {
                summary: Box::new(summary),
            }),
    };
    result.unwrap_or_else(Response::from)
}
