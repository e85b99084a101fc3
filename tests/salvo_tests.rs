use chrono::{DateTime, Utc};
use salvo::{
    GameError, GameState, Location, Match, MatchId, Orientation, PlayerId, SalvoError,
    SalvoHistory, SalvoRequest, Ship, ShipType, SideId,
};

const S1: SideId = SideId(1);
const S2: SideId = SideId(2);
const P1: PlayerId = PlayerId(10);
const P2: PlayerId = PlayerId(20);

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

fn locs(names: &[&str]) -> Vec<Location> {
    names.iter().map(|n| loc(n)).collect()
}

fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn standard_ships() -> Vec<Ship> {
    [
        (ShipType::Carrier, "A1"),
        (ShipType::Battleship, "A2"),
        (ShipType::Submarine, "A3"),
        (ShipType::Destroyer, "A4"),
        (ShipType::PatrolBoat, "A5"),
    ]
    .iter()
    .map(|(t, o)| Ship::line(*t, loc(o), Orientation::Horizontal).unwrap())
    .collect()
}

fn ready_match() -> Match {
    let mut m = Match::new(MatchId(1), epoch());
    m.join(S1, P1, epoch()).unwrap();
    m.join(S2, P2, epoch()).unwrap();
    m.place_fleet(S1, P1, standard_ships()).unwrap();
    m.place_fleet(S2, P2, standard_ships()).unwrap();
    m
}

fn miss(names: &[&str]) -> SalvoRequest {
    SalvoRequest::new(locs(names))
}

#[test]
fn test_first_salvo_gets_turn_one() {
    let mut m = ready_match();
    assert_eq!(m.submit_salvo(S1, P1, miss(&["J10", "I10"])).unwrap(), 1);
    assert_eq!(m.side(S1).unwrap().salvoes().len(), 1);
    assert_eq!(m.side(S1).unwrap().salvoes().as_slice()[0].turn(), 1);
}

#[test]
fn test_turns_assigned_by_position() {
    let mut m = ready_match();
    // the client's turn number is advisory
    let turn = m
        .submit_salvo(S1, P1, miss(&["J10"]).with_turn(7))
        .unwrap();
    assert_eq!(turn, 1);
    m.submit_salvo(S2, P2, miss(&["J10"])).unwrap();
    let turn = m
        .submit_salvo(S1, P1, miss(&["J9"]).with_turn(2))
        .unwrap();
    assert_eq!(turn, 2);
}

#[test]
fn test_duplicate_turn_rejected() {
    let mut m = ready_match();
    m.submit_salvo(S1, P1, miss(&["J10"])).unwrap();
    m.submit_salvo(S2, P2, miss(&["J10"])).unwrap();
    assert_eq!(
        m.submit_salvo(S1, P1, miss(&["J9"]).with_turn(1)),
        Err(GameError::DuplicateTurn(1))
    );
    assert_eq!(m.side(S1).unwrap().salvoes().len(), 1, "history untouched");
}

#[test]
fn test_duplicate_turn_checked_before_alternation() {
    let mut m = ready_match();
    m.submit_salvo(S1, P1, miss(&["J10"])).unwrap();
    assert_eq!(
        m.submit_salvo(S1, P1, miss(&["J9"]).with_turn(1)),
        Err(GameError::DuplicateTurn(1))
    );
    assert_eq!(
        m.submit_salvo(S1, P1, miss(&["J9"])),
        Err(GameError::OutOfTurn)
    );
}

#[test]
fn test_not_authorized() {
    let mut m = ready_match();
    assert_eq!(
        m.submit_salvo(S1, P2, miss(&["J10"])),
        Err(GameError::NotAuthorized)
    );
    assert_eq!(
        m.submit_salvo(SideId(99), P1, miss(&["J10"])),
        Err(GameError::NotAuthorized)
    );
}

#[test]
fn test_fleet_not_placed() {
    let mut m = Match::new(MatchId(1), epoch());
    m.join(S1, P1, epoch()).unwrap();
    m.join(S2, P2, epoch()).unwrap();
    m.place_fleet(S2, P2, standard_ships()).unwrap();
    assert_eq!(
        m.submit_salvo(S1, P1, miss(&["J10"])),
        Err(GameError::FleetNotPlaced)
    );
}

#[test]
fn test_no_opponent_is_out_of_turn() {
    let mut m = Match::new(MatchId(1), epoch());
    m.join(S1, P1, epoch()).unwrap();
    m.place_fleet(S1, P1, standard_ships()).unwrap();
    assert_eq!(
        m.submit_salvo(S1, P1, miss(&["J10"])),
        Err(GameError::OutOfTurn)
    );

    m.join(S2, P2, epoch()).unwrap();
    assert_eq!(
        m.submit_salvo(S1, P1, miss(&["J10"])),
        Err(GameError::OutOfTurn)
    );
}

#[test]
fn test_bad_salvo_content() {
    let mut m = ready_match();
    assert_eq!(
        m.submit_salvo(S1, P1, miss(&[])),
        Err(GameError::InvalidSalvo(SalvoError::Empty))
    );
    assert_eq!(
        m.submit_salvo(S1, P1, miss(&["B2", "C3", "B2"])),
        Err(GameError::InvalidSalvo(SalvoError::DuplicateTarget(loc("B2"))))
    );
    assert!(m.side(S1).unwrap().salvoes().is_empty());
}

#[test]
fn test_closing_salvo_after_sinking() {
    let mut m = ready_match();
    let all = [
        ["A1", "B1", "C1", "D1", "E1"],
        ["A2", "B2", "C2", "D2", "A3"],
        ["B3", "C3", "A4", "B4", "C4"],
    ];
    for (i, chunk) in all.iter().enumerate() {
        m.submit_salvo(S1, P1, miss(chunk)).unwrap();
        let misses = [format!("J{}", i + 1), format!("I{}", i + 1)];
        let names: Vec<&str> = misses.iter().map(|s| s.as_str()).collect();
        m.submit_salvo(S2, P2, miss(&names)).unwrap();
    }
    m.submit_salvo(S1, P1, miss(&["A5", "B5"])).unwrap();
    assert_eq!(m.state(S1).unwrap(), GameState::Won);
    assert_eq!(m.state(S2).unwrap(), GameState::Lost);

    // the side that is behind may still close the round
    assert_eq!(m.submit_salvo(S2, P2, miss(&["H1"])).unwrap(), 4);
    assert_eq!(
        m.submit_salvo(S2, P2, miss(&["H2"])),
        Err(GameError::MatchOver)
    );
    assert_eq!(
        m.submit_salvo(S1, P1, miss(&["H3"])),
        Err(GameError::MatchOver)
    );
    assert_eq!(m.state(S1).unwrap(), GameState::Won);
}

#[test]
fn test_history_deserialize_checks_turns() {
    let ok = r#"[{"turn":2,"locations":["B1"]},{"turn":1,"locations":["A1"]}]"#;
    let history: SalvoHistory = serde_json::from_str(ok).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.as_slice()[0].turn(), 1);
    assert_eq!(history.next_turn(), 3);

    let gap = r#"[{"turn":1,"locations":["A1"]},{"turn":3,"locations":["B1"]}]"#;
    assert!(serde_json::from_str::<SalvoHistory>(gap).is_err());
}
