//! Session module - the state owned by one game
//!
//! A `GameSession` is thrown away and rebuilt on restart; nothing in it
//! outlives a game.

use crate::core::{GridState, Layout, PieceCatalog, PieceSet, ScoreTracker, SimpleRng};
use crate::types::GameConfig;

#[derive(Debug, Clone)]
pub struct GameSession {
    /// Authoritative occupancy; line clears apply here atomically
    pub(crate) grid: GridState,
    /// What the renderer sees; clears and the game-over fill animate here
    pub(crate) display: GridState,
    pub(crate) pieces: PieceSet,
    pub(crate) score: ScoreTracker,
    pub(crate) placements: u32,
}

impl GameSession {
    /// Empty grid and a freshly dealt offering
    pub fn new(
        config: &GameConfig,
        catalog: &PieceCatalog,
        rng: &mut SimpleRng,
        layout: &Layout,
    ) -> Self {
        let mut pieces = PieceSet::new(config.offer_slots);
        pieces.regenerate_all(catalog, rng, layout);
        Self {
            grid: GridState::new(config.grid_size),
            display: GridState::new(config.grid_size),
            pieces,
            score: ScoreTracker::new(config.score_steps, config.score_duration_ms),
            placements: 0,
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn display(&self) -> &GridState {
        &self.display
    }

    pub fn pieces(&self) -> &PieceSet {
        &self.pieces
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    /// Successful placements this session
    pub fn placements(&self) -> u32 {
        self.placements
    }
}
