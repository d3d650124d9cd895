//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the block-placement puzzle: shapes, the
//! occupancy grid, the offering of pieces, scoring and surface geometry. It
//! has **no dependencies** on rendering, input devices, timers or I/O, making
//! it:
//!
//! - **Deterministic**: Same seed deals the same pieces
//! - **Testable**: Every rule is a plain function or method
//! - **Portable**: Runs headless, in a terminal, or behind any other front end
//!
//! # Module Structure
//!
//! - [`catalog`]: Polyomino shapes grouped into families, two-stage random draw
//! - [`grid`]: N x N occupancy matrix with placement checks and line clears
//! - [`layout`]: Surface geometry, snapping, clamping and hit testing
//! - [`piece_set`]: The offering of up to K unplaced pieces
//! - [`rng`]: Seeded LCG
//! - [`scoring`]: Point rules and the smoothed score counter
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{GridState, Shape};
//!
//! let mut grid = GridState::new(8);
//! let bar = Shape::parse(&["########"]);
//!
//! assert!(grid.can_place(&bar, 3, 0));
//! grid.commit(&bar, 3, 0);
//!
//! let cleared = grid.clear_full_lines();
//! assert_eq!(cleared.rows.as_slice(), &[3]);
//! assert!(cleared.cols.is_empty());
//! assert!(grid.is_empty());
//! ```

pub mod catalog;
pub mod grid;
pub mod layout;
pub mod piece_set;
pub mod rng;
pub mod scoring;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use catalog::{variants, PieceCatalog, Shape};
pub use grid::{GridState, LineClear, PlacementError};
pub use layout::Layout;
pub use piece_set::{Piece, PieceId, PieceSet};
pub use rng::SimpleRng;
pub use scoring::{line_clear_bonus, placement_points, ScoreIncrement, ScoreSteps, ScoreTracker};
