use super::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::Carrier,
    ShipType::Battleship,
    ShipType::Submarine,
    ShipType::Destroyer,
    ShipType::PatrolBoat,
];

/// Total number of ship cells in a complete fleet. A side whose every one of
/// these cells has been targeted is sunk.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Sides per match.
pub const MAX_SIDES: usize = 2;
