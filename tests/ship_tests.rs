use sea_battle::{Coordinate, Orientation, Ship};

#[test]
fn test_horizontal_cells_advance_column() {
    let ship = Ship::new(Coordinate::new(0, 0), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.occupied_cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)]
    );
}

#[test]
fn test_vertical_cells_advance_row() {
    let ship = Ship::new(Coordinate::new(2, 4), 2, Orientation::Vertical);
    let cells: Vec<_> = ship.occupied_cells().collect();
    assert_eq!(cells, vec![Coordinate::new(2, 4), Coordinate::new(3, 4)]);
}

#[test]
fn test_cells_may_run_off_grid() {
    // Bounds belong to the board; the ship just extends from its bow.
    let ship = Ship::new(Coordinate::new(5, 5), 3, Orientation::Horizontal);
    assert!(ship.occupied_cells().any(|c| c == Coordinate::new(5, 7)));
}

#[test]
fn test_is_hit_by() {
    let ship = Ship::new(Coordinate::new(1, 1), 4, Orientation::Vertical);
    for r in 1..5 {
        assert!(ship.is_hit_by(Coordinate::new(r, 1)));
    }
    assert!(!ship.is_hit_by(Coordinate::new(5, 1)));
    assert!(!ship.is_hit_by(Coordinate::new(1, 2)));
}

#[test]
fn test_new_ship_is_intact() {
    let ship = Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal);
    assert_eq!(ship.remaining_hits(), 2);
    assert_eq!(ship.length(), 2);
    assert_eq!(ship.bow(), Coordinate::new(0, 0));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert!(!ship.is_sunk());
}

#[test]
fn test_neighbourhood_and_distance() {
    let c = Coordinate::new(0, 0);
    let around: Vec<_> = c.neighbourhood().collect();
    assert_eq!(around.len(), 9);
    assert!(around.contains(&c));
    assert!(around.contains(&Coordinate::new(-1, -1)));
    assert_eq!(c.chebyshev(Coordinate::new(2, -1)), 2);
    assert_eq!(Coordinate::new(0, 6).to_string(), "1 7");
}
