//! Grid module - the N x N occupancy matrix
//!
//! Cells are either empty or occupied, stored in a flat row-major array.
//! Coordinates are `(row, col)` with `(0, 0)` at the top-left; anchors are
//! signed because a snapped piece may hang off the grid before validation.
//!
//! Placement is split into a pure check ([`GridState::can_place`]) and a
//! commit, so callers can preview validity before mutating anything.

use arrayvec::ArrayVec;

use crate::catalog::Shape;
use crate::types::MAX_GRID_SIZE;

/// Why a placement was refused
///
/// Carries the first offending absolute cell in row-major shape order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds { row: i32, col: i32 },
    Collision { row: i32, col: i32 },
}

impl PlacementError {
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::OutOfBounds { .. } => "out_of_bounds",
            PlacementError::Collision { .. } => "collision",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlacementError::OutOfBounds { .. } => "piece would extend past the grid edge",
            PlacementError::Collision { .. } => "piece would overlap an occupied cell",
        }
    }

    /// The offending absolute cell as `(row, col)`
    pub fn cell(self) -> (i32, i32) {
        match self {
            PlacementError::OutOfBounds { row, col } | PlacementError::Collision { row, col } => {
                (row, col)
            }
        }
    }
}

/// Rows and columns removed by one [`GridState::clear_full_lines`] call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Cleared row indices, ascending
    pub rows: ArrayVec<u8, { MAX_GRID_SIZE as usize }>,
    /// Cleared column indices, ascending
    pub cols: ArrayVec<u8, { MAX_GRID_SIZE as usize }>,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// Cleared rows plus cleared columns
    pub fn line_count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }
}

/// The occupancy matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    size: u8,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<bool>,
}

impl GridState {
    /// Create an empty `size` x `size` grid
    ///
    /// Panics when `size` is zero or above [`MAX_GRID_SIZE`].
    pub fn new(size: u8) -> Self {
        assert!(
            size > 0 && size <= MAX_GRID_SIZE,
            "grid size must be in 1..={MAX_GRID_SIZE}, got {size}"
        );
        Self {
            size,
            cells: vec![false; size as usize * size as usize],
        }
    }

    /// Build a grid from row patterns, `#` occupied and `.` empty
    ///
    /// Intended for fixtures and puzzle setups. Panics unless the pattern is
    /// square and uses only those two characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_core::GridState;
    ///
    /// let grid = GridState::from_pattern(&["#..", "...", "..#"]);
    /// assert_eq!(grid.size(), 3);
    /// assert!(grid.is_occupied(0, 0));
    /// assert!(!grid.is_occupied(1, 1));
    /// ```
    pub fn from_pattern(rows: &[&str]) -> Self {
        let mut grid = Self::new(rows.len() as u8);
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), rows.len(), "grid pattern must be square");
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    '#' => grid.cells[r * rows.len() + c] = true,
                    '.' => {}
                    other => panic!("unexpected grid pattern character {other:?}"),
                }
            }
        }
        grid
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let n = self.size as i32;
        if row < 0 || row >= n || col < 0 || col >= n {
            return None;
        }
        Some(row as usize * self.size as usize + col as usize)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Occupancy at (row, col); `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Check if position is within bounds and occupied
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.get(row, col) == Some(true)
    }

    /// Set a single cell; returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, occupied: bool) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = occupied;
                true
            }
            None => false,
        }
    }

    /// Validate a placement of `shape` with its origin at (row, col)
    pub fn check_placement(&self, shape: &Shape, row: i32, col: i32) -> Result<(), PlacementError> {
        for (dr, dc) in shape.cells() {
            let r = row + dr as i32;
            let c = col + dc as i32;
            match self.get(r, c) {
                None => return Err(PlacementError::OutOfBounds { row: r, col: c }),
                Some(true) => return Err(PlacementError::Collision { row: r, col: c }),
                Some(false) => {}
            }
        }
        Ok(())
    }

    /// True iff every filled cell of `shape` lands on an in-bounds empty cell
    pub fn can_place(&self, shape: &Shape, row: i32, col: i32) -> bool {
        self.check_placement(shape, row, col).is_ok()
    }

    /// Mark every filled cell of `shape` as occupied
    ///
    /// Panics if the placement is not legal; callers validate first.
    pub fn commit(&mut self, shape: &Shape, row: i32, col: i32) {
        if let Err(err) = self.check_placement(shape, row, col) {
            panic!(
                "commit at ({row}, {col}) without a legal placement: {} at {:?}",
                err.message(),
                err.cell()
            );
        }
        for (dr, dc) in shape.cells() {
            self.set(row + dr as i32, col + dc as i32, true);
        }
    }

    /// Whether some anchor on the grid admits `shape`
    pub fn has_room_for(&self, shape: &Shape) -> bool {
        let n = self.size as i32;
        (0..n).any(|row| (0..n).any(|col| self.can_place(shape, row, col)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: u8) -> bool {
        if row >= self.size {
            return false;
        }
        let n = self.size as usize;
        let start = row as usize * n;
        self.cells[start..start + n].iter().all(|&c| c)
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: u8) -> bool {
        if col >= self.size {
            return false;
        }
        let n = self.size as usize;
        (0..n).all(|r| self.cells[r * n + col as usize])
    }

    /// Full rows and columns of the current matrix, without clearing them
    pub fn full_lines(&self) -> LineClear {
        let mut lines = LineClear::default();
        for i in 0..self.size {
            if self.is_row_full(i) {
                lines.rows.push(i);
            }
            if self.is_col_full(i) {
                lines.cols.push(i);
            }
        }
        lines
    }

    /// Empty every full row and every full column
    ///
    /// Both kinds of line are detected on the matrix as it is before any
    /// clearing, so a cell at the crossing of a full row and a full column is
    /// cleared once and both lines are reported.
    pub fn clear_full_lines(&mut self) -> LineClear {
        let lines = self.full_lines();
        let n = self.size as usize;
        for &row in &lines.rows {
            let start = row as usize * n;
            self.cells[start..start + n].fill(false);
        }
        for &col in &lines.cols {
            for r in 0..n {
                self.cells[r * n + col as usize] = false;
            }
        }
        lines
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| !c)
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Empty the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}
