//! Rendering seam between the engine and any front end.

use crate::core::{GridState, Layout, Piece};
use crate::quiz::QuizPrompt;

/// Everything a status area might show
#[derive(Debug, Clone, Copy)]
pub struct StatusView<'a> {
    /// Smoothed score as currently displayed
    pub score: u32,
    pub placements: u32,
    pub game_over: bool,
    /// Slot of the selected piece, if any
    pub selected_slot: Option<usize>,
    pub quiz: Option<&'a QuizPrompt>,
}

/// Draw sink driven by [`GameEngine::present`](crate::GameEngine::present)
///
/// Calls arrive in order: `clear`, `draw_grid`, one `draw_piece` per offered
/// piece (the selected piece last), then `draw_status`.
pub trait Renderer {
    fn clear(&mut self);

    fn draw_grid(&mut self, grid: &GridState, layout: &Layout);

    fn draw_piece(&mut self, piece: &Piece, layout: &Layout, selected: bool);

    fn draw_status(&mut self, _status: &StatusView<'_>, _layout: &Layout) {}
}
