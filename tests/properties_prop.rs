//! Property tests for placement validation and line clearing.
//!
//! Random 8x8 occupancy matrices and random shapes up to 4x4 are checked
//! against direct cell-by-cell definitions of the rules.
use proptest::prelude::*;
use tui_blocks::core::{GridState, Shape};

const N: i32 = 8;

fn grid_strategy() -> impl Strategy<Value = GridState> {
    prop::collection::vec(any::<bool>(), (N * N) as usize).prop_map(|cells| {
        let mut grid = GridState::new(N as u8);
        for (i, occupied) in cells.into_iter().enumerate() {
            grid.set(i as i32 / N, i as i32 % N, occupied);
        }
        grid
    })
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (1usize..=4, 1usize..=4)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
        })
        .prop_filter_map("shape needs a filled cell", |rows| Shape::from_rows(&rows))
}

proptest! {
    #![proptest_config(ProptestConfig {
        max_global_rejects: 1 << 16,
        ..ProptestConfig::default()
    })]

    #[test]
    fn can_place_matches_cellwise_definition(
        grid in grid_strategy(),
        shape in shape_strategy(),
        row in -4i32..12,
        col in -4i32..12,
    ) {
        let expected = shape.cells().all(|(dr, dc)| {
            let (r, c) = (row + dr as i32, col + dc as i32);
            (0..N).contains(&r) && (0..N).contains(&c) && !grid.is_occupied(r, c)
        });
        prop_assert_eq!(grid.can_place(&shape, row, col), expected);
    }

    #[test]
    fn validated_commit_never_collides(
        grid in grid_strategy(),
        shape in shape_strategy(),
        row in 0i32..8,
        col in 0i32..8,
    ) {
        prop_assume!(grid.can_place(&shape, row, col));
        let before = grid.occupied_count();
        let mut after = grid.clone();
        after.commit(&shape, row, col);
        prop_assert_eq!(after.occupied_count(), before + shape.cell_count() as usize);
        for (dr, dc) in shape.cells() {
            prop_assert!(after.is_occupied(row + dr as i32, col + dc as i32));
        }
    }

    #[test]
    fn clear_full_lines_clears_exactly_the_full_lines(grid in grid_strategy()) {
        let full_rows: Vec<u8> = (0..N as u8).filter(|&r| grid.is_row_full(r)).collect();
        let full_cols: Vec<u8> = (0..N as u8).filter(|&c| grid.is_col_full(c)).collect();

        let mut cleared_grid = grid.clone();
        let cleared = cleared_grid.clear_full_lines();
        prop_assert_eq!(cleared.rows.as_slice(), full_rows.as_slice());
        prop_assert_eq!(cleared.cols.as_slice(), full_cols.as_slice());

        for r in 0..N {
            for c in 0..N {
                let in_line = full_rows.contains(&(r as u8)) || full_cols.contains(&(c as u8));
                let expected = grid.is_occupied(r, c) && !in_line;
                prop_assert_eq!(cleared_grid.is_occupied(r, c), expected);
            }
        }
    }

    #[test]
    fn clearing_twice_is_a_no_op(grid in grid_strategy()) {
        let mut once = grid.clone();
        once.clear_full_lines();
        let mut twice = once.clone();
        let second = twice.clear_full_lines();
        prop_assert!(second.is_empty());
        prop_assert_eq!(once, twice);
    }
}
