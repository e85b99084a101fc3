//! Errors returned by engine operations.
//!
//! Every failure is a rejected operation carrying a reason; none of them
//! leave a match partially updated.

use core::fmt;

use super::game::MatchId;
use super::location::Location;
use super::ship::ShipType;

/// Errors returned when parsing a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    /// Nothing to parse.
    Empty,
    /// Column letter is not within `A`..`J`.
    BadColumn(char),
    /// Row number is missing or not within `1`..`10`.
    BadRow,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Empty => write!(f, "Location is empty"),
            LocationError::BadColumn(c) => write!(f, "Column '{}' is off the grid", c),
            LocationError::BadRow => write!(f, "Row is missing or off the grid"),
        }
    }
}

/// Reasons a fleet submission is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The side already has a fleet.
    AlreadyPlaced,
    /// The same ship type was submitted twice.
    DuplicateShip(ShipType),
    /// A ship type is absent from the submission.
    MissingShip(ShipType),
    /// A ship covers the wrong number of cells.
    WrongLength {
        ship_type: ShipType,
        expected: usize,
        actual: usize,
    },
    /// A ship lists the same cell more than once.
    RepeatedCell {
        ship_type: ShipType,
        location: Location,
    },
    /// Two ships share a cell.
    Overlap(Location),
    /// A straight ship would run off the grid.
    OutOfBounds(ShipType),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::AlreadyPlaced => write!(f, "The side already has ships placed"),
            PlacementError::DuplicateShip(t) => write!(f, "{} was placed more than once", t),
            PlacementError::MissingShip(t) => write!(f, "{} is missing from the fleet", t),
            PlacementError::WrongLength {
                ship_type,
                expected,
                actual,
            } => write!(
                f,
                "{} must cover {} cells, got {}",
                ship_type, expected, actual
            ),
            PlacementError::RepeatedCell {
                ship_type,
                location,
            } => write!(f, "{} lists {} more than once", ship_type, location),
            PlacementError::Overlap(loc) => write!(f, "Ships overlap at {}", loc),
            PlacementError::OutOfBounds(t) => write!(f, "{} does not fit on the grid", t),
        }
    }
}

/// Problems with the content of a salvo or a salvo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalvoError {
    /// No target cells.
    Empty,
    /// The same cell is targeted twice in one salvo.
    DuplicateTarget(Location),
    /// A stored history does not number its turns `1..=N`.
    TurnGap { expected: u32, found: u32 },
}

impl fmt::Display for SalvoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalvoError::Empty => write!(f, "Salvo has no targets"),
            SalvoError::DuplicateTarget(loc) => write!(f, "Salvo targets {} more than once", loc),
            SalvoError::TurnGap { expected, found } => {
                write!(f, "Expected turn {}, found turn {}", expected, found)
            }
        }
    }
}

/// Rejection reasons for match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Fleet submission broke a placement rule.
    InvalidPlacement(PlacementError),
    /// The caller does not own the side, or the side does not exist.
    NotAuthorized,
    /// The side tried to fire before placing its ships.
    FleetNotPlaced,
    /// The side already fired a salvo for this turn.
    DuplicateTurn(u32),
    /// The side must wait for its opponent.
    OutOfTurn,
    /// A fleet is sunk and the round is complete.
    MatchOver,
    /// The salvo content is unusable.
    InvalidSalvo(SalvoError),
    /// Both sides are taken.
    MatchFull,
    /// The player already holds a side in this match.
    AlreadyJoined,
    /// No match with this id.
    UnknownMatch(MatchId),
}

impl GameError {
    /// Stable reason code for outer layers.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidPlacement(_) => "INVALID_PLACEMENT",
            GameError::NotAuthorized => "NOT_AUTHORIZED",
            GameError::FleetNotPlaced => "FLEET_NOT_PLACED",
            GameError::DuplicateTurn(_) => "DUPLICATE_TURN",
            GameError::OutOfTurn => "OUT_OF_TURN",
            GameError::MatchOver => "MATCH_OVER",
            GameError::InvalidSalvo(_) => "INVALID_SALVO",
            GameError::MatchFull => "MATCH_FULL",
            GameError::AlreadyJoined => "ALREADY_JOINED",
            GameError::UnknownMatch(_) => "UNKNOWN_MATCH",
        }
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl From<SalvoError> for GameError {
    fn from(err: SalvoError) -> Self {
        GameError::InvalidSalvo(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            GameError::NotAuthorized => write!(f, "The current player does not own this side"),
            GameError::FleetNotPlaced => write!(f, "Ships must be placed before firing"),
            GameError::DuplicateTurn(turn) => {
                write!(f, "A salvo was already submitted for turn {}", turn)
            }
            GameError::OutOfTurn => write!(f, "It is not this side's turn"),
            GameError::MatchOver => write!(f, "The match is over"),
            GameError::InvalidSalvo(e) => write!(f, "Invalid salvo: {}", e),
            GameError::MatchFull => write!(f, "The match is full"),
            GameError::AlreadyJoined => write!(f, "The player already joined this match"),
            GameError::UnknownMatch(id) => write!(f, "No match with id {}", id),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LocationError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for SalvoError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
