use chrono::{DateTime, Utc};
use salvo::{
    GameState, Location, Match, MatchId, Orientation, PlayerId, SalvoRequest, Ship, ShipType,
    SideId,
};

const S1: SideId = SideId(1);
const S2: SideId = SideId(2);
const P1: PlayerId = PlayerId(10);
const P2: PlayerId = PlayerId(20);

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

fn fire(names: &[&str]) -> SalvoRequest {
    SalvoRequest::new(names.iter().map(|n| loc(n)).collect())
}

fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn ships(row: &str, orientation: Orientation) -> Vec<Ship> {
    // five ships side by side, one per line starting at column A / row 1
    [
        ShipType::Carrier,
        ShipType::Battleship,
        ShipType::Submarine,
        ShipType::Destroyer,
        ShipType::PatrolBoat,
    ]
    .iter()
    .enumerate()
    .map(|(i, t)| {
        let origin = match orientation {
            Orientation::Horizontal => format!("A{}", i + 1),
            Orientation::Vertical => format!("{}{}", (b'A' + i as u8) as char, row),
        };
        Ship::line(*t, loc(&origin), orientation).unwrap()
    })
    .collect()
}

fn ready_match() -> Match {
    let mut m = Match::new(MatchId(3), epoch());
    m.join(S1, P1, epoch()).unwrap();
    m.join(S2, P2, epoch()).unwrap();
    m.place_fleet(S1, P1, ships("1", Orientation::Horizontal)).unwrap();
    m.place_fleet(S2, P2, ships("6", Orientation::Vertical)).unwrap();
    m
}

#[test]
fn test_summary_before_opponent_joins() {
    let mut m = Match::new(MatchId(3), epoch());
    m.join(S1, P1, epoch()).unwrap();
    let view = m.summary(S1).unwrap();
    assert_eq!(view.match_id, MatchId(3));
    assert_eq!(view.state, GameState::PlacingShips);
    assert_eq!(view.sides.len(), 1);
    assert!(view.ships.is_empty());
    assert!(view.opponent_salvoes.is_empty());
    assert!(view.received.is_empty() && view.inflicted.is_empty());
}

#[test]
fn test_summary_reports_both_directions() {
    let mut m = ready_match();
    // S2's fleet stands in columns A..E from row 6 down
    m.submit_salvo(S1, P1, fire(&["A6", "A7", "J1"])).unwrap();
    m.submit_salvo(S2, P2, fire(&["A5", "B5", "C5"])).unwrap();
    m.submit_salvo(S1, P1, fire(&["E6", "E7"])).unwrap();

    let view = m.summary(S1).unwrap();
    assert_eq!(view.state, GameState::OpponentTurn);
    assert_eq!(view.salvoes.len(), 2);
    assert_eq!(view.opponent_salvoes.len(), 1);

    assert_eq!(view.inflicted.len(), 2);
    assert_eq!(view.inflicted[0].hit_locations, vec![loc("A6"), loc("A7")]);
    assert_eq!(view.inflicted[0].hits.carrier, 2);
    assert_eq!(view.inflicted[0].missed, 1);
    assert_eq!(view.inflicted[1].damage.carrier, 2);
    assert_eq!(view.inflicted[1].damage.patrol_boat, 2);

    assert_eq!(view.received.len(), 1);
    assert_eq!(view.received[0].hits.patrol_boat, 2);
    assert_eq!(view.received[0].missed, 1);

    assert_eq!(view.sunk.opponent, vec![ShipType::PatrolBoat]);
    assert_eq!(view.sunk.own, vec![ShipType::PatrolBoat]);

    let other = m.summary(S2).unwrap();
    assert_eq!(other.state, GameState::YourTurn);
    assert_eq!(other.received, view.inflicted);
    assert_eq!(other.inflicted, view.received);
}

#[test]
fn test_summary_never_shows_opponent_ships() {
    let m = ready_match();
    let view = m.summary(S1).unwrap();
    assert_eq!(view.ships, ships("1", Orientation::Horizontal));

    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"state\":\"YOUR_TURN\""));
    assert!(json.contains("\"match_id\":3"));
    assert!(!json.contains("\"A6\""), "opponent carrier leaked: {}", json);
}

#[test]
fn test_match_survives_bincode() {
    let mut m = ready_match();
    m.submit_salvo(S1, P1, fire(&["A6", "B2"])).unwrap();
    let bytes = bincode::serialize(&m).unwrap();
    let back: Match = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, m);
    assert_eq!(back.summary(S2).unwrap(), m.summary(S2).unwrap());
}

#[test]
fn test_stored_match_with_bad_history_is_refused() {
    let m = ready_match();
    let mut json = serde_json::to_value(&m).unwrap();
    json["sides"][0]["salvoes"] = serde_json::json!([{ "turn": 2, "locations": ["A1"] }]);
    assert!(serde_json::from_value::<Match>(json).is_err());
}

#[test]
fn test_stored_match_with_third_side_is_refused() {
    let m = ready_match();
    let mut json = serde_json::to_value(&m).unwrap();
    let mut extra = json["sides"][1].clone();
    extra["id"] = serde_json::json!(9);
    extra["player"] = serde_json::json!(90);
    json["sides"].as_array_mut().unwrap().push(extra);
    assert!(serde_json::from_value::<Match>(json).is_err());
}

#[test]
fn test_stored_match_with_repeated_side_is_refused() {
    let m = ready_match();
    let mut json = serde_json::to_value(&m).unwrap();
    json["sides"][1]["player"] = json["sides"][0]["player"].clone();
    assert!(serde_json::from_value::<Match>(json).is_err());
}

#[test]
fn test_stored_match_must_alternate() {
    let mut m = ready_match();
    m.submit_salvo(S1, P1, fire(&["J1"])).unwrap();
    m.submit_salvo(S2, P2, fire(&["J1"])).unwrap();
    m.submit_salvo(S1, P1, fire(&["J2"])).unwrap();
    let mut json = serde_json::to_value(&m).unwrap();
    let back: Match = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(back, m);

    // side 2 three salvoes ahead of side 1
    json["sides"][0]["salvoes"] = serde_json::json!([]);
    json["sides"][1]["salvoes"] = serde_json::json!([
        { "turn": 1, "locations": ["J1"] },
        { "turn": 2, "locations": ["J2"] },
        { "turn": 3, "locations": ["J3"] },
    ]);
    assert!(serde_json::from_value::<Match>(json).is_err());
}

#[test]
fn test_stored_salvoes_need_both_fleets() {
    let mut m = Match::new(MatchId(3), epoch());
    m.join(S1, P1, epoch()).unwrap();
    m.place_fleet(S1, P1, ships("1", Orientation::Horizontal)).unwrap();
    let mut json = serde_json::to_value(&m).unwrap();
    json["sides"][0]["salvoes"] = serde_json::json!([{ "turn": 1, "locations": ["J1"] }]);
    assert!(serde_json::from_value::<Match>(json).is_err());

    let bytes = bincode::serialize(&m).unwrap();
    assert!(bincode::deserialize::<Match>(&bytes).is_ok());
}
