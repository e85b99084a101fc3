use salvo::{CellSet, Cells, Location};

#[test]
fn test_fits() {
    assert!(CellSet::<u64, 8>::fits());
    assert!(Cells::fits());
    assert!(!CellSet::<u8, 3>::fits());
}

#[test]
fn test_insert_contains() {
    let mut set = CellSet::<u16, 4>::new();
    assert!(set.is_empty());

    assert!(set.insert_cell(1, 1));
    assert!(!set.insert_cell(1, 1), "second insert is a no-op");
    assert!(set.contains_cell(1, 1));
    assert!(!set.contains_cell(2, 2));

    // off the grid
    assert!(!set.insert_cell(4, 0));
    assert!(!set.contains_cell(0, 4));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_iter_row_major() {
    let mut set = CellSet::<u16, 4>::new();
    set.insert_cell(3, 3);
    set.insert_cell(0, 1);
    let cells: Vec<_> = set.iter_cells().collect();
    assert_eq!(cells, vec![(0, 1), (3, 3)]);
    assert_eq!(format!("{:?}", set), "{(0, 1), (3, 3)}");
}

#[test]
fn test_set_algebra() {
    let locs = |names: &[&str]| -> Vec<Location> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    };
    let a = Cells::from_locations(&locs(&["A1", "B1", "C1"]));
    let b = Cells::from_locations(&locs(&["C1", "D1"]));

    assert_eq!((a & b).len(), 1);
    assert_eq!((a | b).len(), 4);
    assert!(a.intersects(b));
    assert!(Cells::from_locations(&locs(&["A1", "C1"])).is_subset(a));
    assert!(!b.is_subset(a));

    let listed: Vec<String> = (a | b).locations().map(|l| l.to_string()).collect();
    assert_eq!(listed, vec!["A1", "B1", "C1", "D1"]);
}
