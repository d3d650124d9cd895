//! Grid tests - placement checks, commits and line clears

use tui_blocks::core::{GridState, PlacementError, Shape};

fn grid_with(cells: &[(i32, i32)]) -> GridState {
    let mut grid = GridState::new(8);
    for &(row, col) in cells {
        assert!(grid.set(row, col, true));
    }
    grid
}

#[test]
fn test_grid_new_empty() {
    let grid = GridState::new(8);
    assert_eq!(grid.size(), 8);
    assert!(grid.is_empty());
    for row in 0..8 {
        for col in 0..8 {
            assert_eq!(grid.get(row, col), Some(false));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = GridState::new(8);
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(8, 0), None);
    assert_eq!(grid.get(0, 8), None);
    assert!(!grid.is_occupied(-1, -1));
}

#[test]
fn test_full_row_bar_clears_row() {
    let mut grid = GridState::new(8);
    let bar = Shape::parse(&["########"]);

    assert!(grid.can_place(&bar, 3, 0));
    grid.commit(&bar, 3, 0);
    assert!(grid.is_row_full(3));

    let cleared = grid.clear_full_lines();
    assert_eq!(cleared.rows.as_slice(), &[3]);
    assert!(cleared.cols.is_empty());
    for col in 0..8 {
        assert!(!grid.is_occupied(3, col));
    }
    assert!(grid.is_empty());
}

#[test]
fn test_square_collides_with_occupied_corner() {
    let grid = grid_with(&[(0, 0)]);
    let square = Shape::parse(&["##", "##"]);

    assert!(!grid.can_place(&square, 0, 0));
    assert_eq!(
        grid.check_placement(&square, 0, 0),
        Err(PlacementError::Collision { row: 0, col: 0 })
    );
    assert!(grid.can_place(&square, 0, 1));
}

#[test]
fn test_out_of_bounds_reports_first_cell() {
    let grid = GridState::new(8);
    let bar = Shape::parse(&["###"]);

    assert_eq!(
        grid.check_placement(&bar, 0, 6),
        Err(PlacementError::OutOfBounds { row: 0, col: 8 })
    );
    assert_eq!(
        grid.check_placement(&bar, -1, 0),
        Err(PlacementError::OutOfBounds { row: -1, col: 0 })
    );
    let err = grid.check_placement(&bar, 0, 7).unwrap_err();
    assert_eq!(err.code(), "out_of_bounds");
    assert!(!err.message().is_empty());
}

#[test]
fn test_row_and_column_clear_share_a_cell() {
    // Row 3 and column 4 are full except their shared cell
    let mut cells = Vec::new();
    for i in 0..8 {
        if i != 4 {
            cells.push((3, i));
        }
        if i != 3 {
            cells.push((i, 4));
        }
    }
    let mut grid = grid_with(&cells);
    grid.set(7, 7, true);

    let dot = Shape::parse(&["#"]);
    grid.commit(&dot, 3, 4);
    let cleared = grid.clear_full_lines();

    assert_eq!(cleared.rows.as_slice(), &[3]);
    assert_eq!(cleared.cols.as_slice(), &[4]);
    assert_eq!(cleared.line_count(), 2);
    // Only the unrelated cell survives
    assert_eq!(grid.occupied_count(), 1);
    assert!(grid.is_occupied(7, 7));
}

#[test]
fn test_no_full_lines_clears_nothing() {
    let mut grid = grid_with(&[(0, 0), (5, 5)]);
    let cleared = grid.clear_full_lines();
    assert!(cleared.is_empty());
    assert_eq!(grid.occupied_count(), 2);
}

#[test]
fn test_multiple_rows_clear_together() {
    let mut grid = GridState::from_pattern(&[
        "########", "........", "########", "#.......", "........", "........", "........",
        "........",
    ]);
    let cleared = grid.clear_full_lines();
    assert_eq!(cleared.rows.as_slice(), &[0, 2]);
    assert_eq!(grid.occupied_count(), 1);
    assert!(grid.is_occupied(3, 0));
}

#[test]
fn test_has_room_for_scans_every_anchor() {
    // Only the bottom-right corner is free
    let mut grid = GridState::new(8);
    for row in 0..8 {
        for col in 0..8 {
            grid.set(row, col, true);
        }
    }
    grid.set(7, 7, false);

    assert!(grid.has_room_for(&Shape::parse(&["#"])));
    assert!(!grid.has_room_for(&Shape::parse(&["##"])));
    assert!(!grid.has_room_for(&Shape::parse(&["#", "#"])));
}

#[test]
fn test_smaller_grid_sizes_work() {
    let mut grid = GridState::new(4);
    let bar = Shape::parse(&["####"]);
    assert!(!grid.can_place(&Shape::parse(&["#####"]), 0, 0));
    grid.commit(&bar, 1, 0);
    assert_eq!(grid.clear_full_lines().rows.as_slice(), &[1]);
}
