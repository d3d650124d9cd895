//! Game engine module - the turn state machine
//!
//! `GameEngine` binds the session state to input, timing and presentation:
//!
//! - input arrives as abstract [`InputEvent`]s through [`GameEngine::handle`]
//! - timed effects are queued on a [`Timeline`] and applied by [`GameEngine::tick`]
//! - the current state is drawn through any [`Renderer`] by [`GameEngine::present`]
//!
//! A placement attempt runs synchronously: snap, validate, commit, score,
//! clear, remove, regenerate, notify the quiz, evaluate game over. Only the
//! *visible* consequences (the cell-by-cell clear sweep, the smoothed score,
//! the game-over fill) are deferred.

use crate::core::{
    line_clear_bonus, placement_points, GridState, Layout, LineClear, PieceCatalog, PieceId,
    PlacementError, ScoreTracker, Shape, SimpleRng,
};
use crate::quiz::{NoQuiz, QuizService};
use crate::render::{Renderer, StatusView};
use crate::session::GameSession;
use crate::timeline::{Step, Timeline};
use crate::types::{ConfigError, Direction, GameConfig, InputEvent, Point, ShapeFamily, Size};

/// Where the engine is in the turn cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// No candidate piece
    Idle,
    /// A piece follows the pointer
    Dragging {
        slot: usize,
        /// Offset from the piece's top-left corner to the pointer
        grab: Point,
        /// Position to return to when the placement is refused
        origin: Point,
    },
    /// A piece chosen by keyboard, moved by nudges
    Selected { slot: usize, origin: Point },
    /// Terminal until restart
    GameOver,
}

impl Phase {
    /// Slot of the candidate piece, if any
    pub fn slot(&self) -> Option<usize> {
        match *self {
            Phase::Dragging { slot, .. } | Phase::Selected { slot, .. } => Some(slot),
            Phase::Idle | Phase::GameOver => None,
        }
    }
}

/// Outcome of a committed placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    pub piece: PieceId,
    pub family: ShapeFamily,
    /// Snapped anchor `(row, col)`
    pub anchor: (i32, i32),
    /// Filled cells committed
    pub cells: u32,
    pub cleared: LineClear,
    /// Cell points plus line bonuses
    pub points: u32,
    /// The offering ran out and was dealt again
    pub regenerated: bool,
    /// This placement hit a quiz milestone
    pub milestone: bool,
    /// No offered piece fits anywhere any more
    pub game_over: bool,
}

/// What an input event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing changed
    Ignored,
    /// Selection, position or session changed
    Updated,
    Placed(PlacementReport),
    /// Placement refused; the piece went back to where it came from
    Rejected(PlacementError),
}

pub struct GameEngine<Q: QuizService = NoQuiz> {
    config: GameConfig,
    catalog: PieceCatalog,
    rng: SimpleRng,
    layout: Layout,
    session: GameSession,
    phase: Phase,
    timeline: Timeline,
    /// Cleared lines whose sweep has not finished
    animations: u32,
    quiz: Q,
    redraw: bool,
}

impl GameEngine<NoQuiz> {
    /// Engine without a quiz hook
    ///
    /// `surface` is the drawable area and `cell` the size of one grid cell,
    /// both in surface units.
    pub fn new(
        config: GameConfig,
        seed: u32,
        surface: Size,
        cell: Size,
    ) -> Result<Self, ConfigError> {
        Self::with_quiz(config, seed, surface, cell, NoQuiz)
    }
}

impl<Q: QuizService> GameEngine<Q> {
    pub fn with_quiz(
        config: GameConfig,
        seed: u32,
        surface: Size,
        cell: Size,
        quiz: Q,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = PieceCatalog::new(&config.families).ok_or(ConfigError::NoFamilies)?;
        let mut rng = SimpleRng::new(seed);
        let layout = Layout::new(surface, cell, config.grid_size, config.offer_slots);
        let session = GameSession::new(&config, &catalog, &mut rng, &layout);

        tracing::info!(
            seed,
            grid_size = config.grid_size,
            offer_slots = config.offer_slots,
            "session started"
        );

        Ok(Self {
            config,
            catalog,
            rng,
            layout,
            session,
            phase: Phase::Idle,
            timeline: Timeline::new(),
            animations: 0,
            quiz,
            redraw: true,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Authoritative occupancy
    pub fn grid(&self) -> &GridState {
        &self.session.grid
    }

    /// Occupancy as currently shown, animations included
    pub fn display_grid(&self) -> &GridState {
        &self.session.display
    }

    pub fn pieces(&self) -> &crate::core::PieceSet {
        &self.session.pieces
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.session.score
    }

    pub fn placements(&self) -> u32 {
        self.session.placements
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Whether a line-clear sweep is still running
    pub fn is_animating(&self) -> bool {
        self.animations > 0
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn quiz(&self) -> &Q {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut Q {
        &mut self.quiz
    }

    /// Feed one input event
    pub fn handle(&mut self, event: InputEvent) -> Response {
        let response = match event {
            InputEvent::Restart => {
                self.restart();
                Response::Updated
            }
            InputEvent::SelectSlot(choice) if self.quiz.is_blocking() => {
                match self.quiz.answer(choice as usize) {
                    Some(right) => {
                        tracing::info!(choice, right, "quiz answered");
                        Response::Updated
                    }
                    None => Response::Ignored,
                }
            }
            _ if self.quiz.is_blocking() => Response::Ignored,
            InputEvent::SelectAt(point) => self.select_at(point),
            InputEvent::DragTo(point) => self.drag_to(point),
            InputEvent::Release => match self.phase {
                Phase::Dragging { slot, origin, .. } => self.attempt_placement(slot, origin),
                _ => Response::Ignored,
            },
            InputEvent::SelectSlot(slot) => self.select_slot(slot as usize),
            InputEvent::Nudge(dir) => self.nudge(dir),
            InputEvent::Confirm => match self.phase {
                Phase::Selected { slot, origin } | Phase::Dragging { slot, origin, .. } => {
                    self.attempt_placement(slot, origin)
                }
                _ => Response::Ignored,
            },
        };

        // Zero-delay steps (first score increments, etc.) land immediately
        self.flush_due();
        if response != Response::Ignored {
            self.redraw = true;
        }
        response
    }

    /// Advance the virtual clock and apply every step that came due
    ///
    /// Returns whether anything visible changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.timeline.advance(elapsed_ms);
        let changed = self.flush_due();
        if changed {
            self.redraw = true;
        }
        changed
    }

    /// Discard the session and deal a new one
    pub fn restart(&mut self) {
        self.session = GameSession::new(&self.config, &self.catalog, &mut self.rng, &self.layout);
        self.timeline.clear();
        self.animations = 0;
        self.phase = Phase::Idle;
        self.redraw = true;
        tracing::info!("session restarted");
    }

    /// Recompute geometry for a new surface size
    ///
    /// Any candidate is dropped and every piece returns to its new home.
    pub fn resize(&mut self, surface: Size) {
        self.layout = self.layout.resized(surface);
        if self.phase.slot().is_some() {
            self.phase = Phase::Idle;
        }
        self.session.pieces.rehome(&self.layout);
        self.redraw = true;
    }

    /// Replace the board and offering
    ///
    /// Pending animations are dropped, the displayed score jumps to the
    /// total and the engine returns to `Idle`. Game over is not evaluated
    /// until the next placement.
    ///
    /// Panics if `grid` does not match the configured size.
    pub fn set_position(&mut self, grid: GridState, shapes: &[Option<Shape>]) {
        assert_eq!(
            grid.size(),
            self.config.grid_size,
            "set_position grid does not match the configured size"
        );
        self.session.display = grid.clone();
        self.session.grid = grid;
        self.session.pieces.replace(shapes, &self.layout);
        self.timeline.clear();
        // Dropped score steps would leave the display short of the total
        self.session.score.settle();
        self.animations = 0;
        self.phase = Phase::Idle;
        self.redraw = true;
    }

    /// Whether state changed since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Draw the current state: clear, grid, pieces, status
    pub fn present<R: Renderer>(&self, renderer: &mut R) {
        let selected = self.phase.slot();

        renderer.clear();
        renderer.draw_grid(&self.session.display, &self.layout);
        for (slot, piece) in self.session.pieces.slots().iter().enumerate() {
            if let Some(piece) = piece {
                if selected != Some(slot) {
                    renderer.draw_piece(piece, &self.layout, false);
                }
            }
        }
        if let Some(piece) = selected.and_then(|slot| self.session.pieces.get(slot)) {
            renderer.draw_piece(piece, &self.layout, true);
        }
        renderer.draw_status(
            &StatusView {
                score: self.session.score.displayed(),
                placements: self.session.placements,
                game_over: self.is_game_over(),
                selected_slot: selected,
                quiz: self.quiz.prompt(),
            },
            &self.layout,
        );
    }

    /// Selection and placement are suspended during sweeps and after game over
    fn input_locked(&self) -> bool {
        self.phase == Phase::GameOver || self.animations > 0
    }

    fn select_at(&mut self, point: Point) -> Response {
        if self.input_locked() {
            return Response::Ignored;
        }
        let Some(slot) = self.session.pieces.slot_at(point, &self.layout) else {
            return Response::Ignored;
        };
        self.drop_candidate();
        let Some(piece) = self.session.pieces.get(slot) else {
            return Response::Ignored;
        };
        self.phase = Phase::Dragging {
            slot,
            grab: point - piece.position,
            origin: piece.position,
        };
        Response::Updated
    }

    fn drag_to(&mut self, point: Point) -> Response {
        let Phase::Dragging { slot, grab, .. } = self.phase else {
            return Response::Ignored;
        };
        let layout = self.layout;
        match self.session.pieces.get_mut(slot) {
            Some(piece) => {
                piece.position = layout.clamp(point - grab, &piece.shape);
                Response::Updated
            }
            None => Response::Ignored,
        }
    }

    fn select_slot(&mut self, slot: usize) -> Response {
        if self.input_locked() {
            return Response::Ignored;
        }
        let Some(origin) = self.session.pieces.get(slot).map(|p| p.position) else {
            return Response::Ignored;
        };
        self.drop_candidate();
        self.phase = Phase::Selected { slot, origin };
        Response::Updated
    }

    fn nudge(&mut self, dir: Direction) -> Response {
        if self.input_locked() {
            return Response::Ignored;
        }
        let Phase::Selected { slot, .. } = self.phase else {
            return Response::Ignored;
        };
        let layout = self.layout;
        let Some(piece) = self.session.pieces.get_mut(slot) else {
            return Response::Ignored;
        };

        let (dx, dy) = dir.delta();
        let cell = layout.cell();
        let moved = piece.position + Point::new(dx as f32 * cell.width, dy as f32 * cell.height);
        let (row, col) = layout.snap(moved);
        piece.position = layout.clamp(layout.anchor_position(row, col), &piece.shape);
        Response::Updated
    }

    /// Put an abandoned candidate back where it was picked up
    fn drop_candidate(&mut self) {
        if let Phase::Dragging { slot, origin, .. } | Phase::Selected { slot, origin } =
            self.phase
        {
            if let Some(piece) = self.session.pieces.get_mut(slot) {
                piece.position = origin;
            }
        }
        self.phase = Phase::Idle;
    }

    fn attempt_placement(&mut self, slot: usize, origin: Point) -> Response {
        if self.input_locked() {
            self.drop_candidate();
            return Response::Ignored;
        }
        self.phase = Phase::Idle;
        let Some(piece) = self.session.pieces.get(slot).copied() else {
            return Response::Ignored;
        };
        // A candidate that never left its origin is not a placement attempt
        if piece.position == origin {
            return Response::Ignored;
        }

        let (row, col) = self.layout.snap(piece.position);
        if let Err(err) = self.session.grid.check_placement(&piece.shape, row, col) {
            if let Some(p) = self.session.pieces.get_mut(slot) {
                p.position = origin;
            }
            tracing::debug!(
                piece = piece.id.0,
                row,
                col,
                reason = err.code(),
                "placement rejected"
            );
            return Response::Rejected(err);
        }

        self.session.grid.commit(&piece.shape, row, col);
        for (dr, dc) in piece.shape.cells() {
            self.session.display.set(row + dr as i32, col + dc as i32, true);
        }
        let cells = placement_points(&piece.shape);
        self.award(cells);
        tracing::debug!(
            piece = piece.id.0,
            family = piece.family.as_str(),
            row,
            col,
            cells,
            "piece placed"
        );

        let cleared = self.session.grid.clear_full_lines();
        let bonus = line_clear_bonus(&cleared, self.config.line_bonus);
        if bonus > 0 {
            self.award(bonus);
        }
        if !cleared.is_empty() {
            tracing::debug!(rows = ?cleared.rows, cols = ?cleared.cols, "lines cleared");
            self.schedule_sweep(&cleared);
        }
        let points = cells.saturating_add(bonus);

        self.session.pieces.remove(piece.id);
        let regenerated = self.session.pieces.is_exhausted();
        if regenerated {
            self.session
                .pieces
                .regenerate_all(&self.catalog, &mut self.rng, &self.layout);
            tracing::debug!("offering regenerated");
        }

        self.session.placements += 1;
        let placements = self.session.placements;
        let interval = self.config.quiz_interval;
        let milestone = interval > 0 && placements % interval == 0;
        if milestone {
            tracing::info!(placements, "placement milestone");
            self.quiz.on_placement_milestone(placements);
        }

        let game_over = !self.session.pieces.any_has_legal_move(&self.session.grid);
        if game_over {
            self.enter_game_over();
        }

        Response::Placed(PlacementReport {
            piece: piece.id,
            family: piece.family,
            anchor: (row, col),
            cells,
            cleared,
            points,
            regenerated,
            milestone,
            game_over,
        })
    }

    /// Add points now and schedule the smoothed display update
    fn award(&mut self, points: u32) {
        for step in self.session.score.add_score(points) {
            self.timeline.schedule(step.offset_ms, Step::Score(step));
        }
    }

    /// Per cleared line, empty the display cells one by one, then release the
    /// input lock for that line
    fn schedule_sweep(&mut self, cleared: &LineClear) {
        let n = self.config.grid_size;
        let delay = self.config.clear_step_ms;
        for &row in &cleared.rows {
            for col in 0..n {
                let due = delay.saturating_mul(col as u32 + 1);
                self.timeline.schedule(due, Step::ClearCell { row, col });
            }
            self.timeline
                .schedule(delay.saturating_mul(n as u32 + 1), Step::AnimationDone);
            self.animations += 1;
        }
        for &col in &cleared.cols {
            for row in 0..n {
                let due = delay.saturating_mul(row as u32 + 1);
                self.timeline.schedule(due, Step::ClearCell { row, col });
            }
            self.timeline
                .schedule(delay.saturating_mul(n as u32 + 1), Step::AnimationDone);
            self.animations += 1;
        }
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        let score = self.session.score.total();
        tracing::info!(score, placements = self.session.placements, "game over");
        self.quiz.on_game_over(score);

        let n = self.config.grid_size;
        let start = self.config.game_over_delay_ms;
        let delay = self.config.clear_step_ms;
        for row in 0..n {
            for col in 0..n {
                let rank = row as u32 + col as u32;
                let due = start.saturating_add(rank.saturating_mul(delay));
                self.timeline.schedule(due, Step::FillCell { row, col });
            }
        }
    }

    fn flush_due(&mut self) -> bool {
        let mut changed = false;
        while let Some(step) = self.timeline.pop_due() {
            self.apply(step);
            changed = true;
        }
        changed
    }

    fn apply(&mut self, step: Step) {
        match step {
            Step::ClearCell { row, col } => {
                self.session.display.set(row as i32, col as i32, false);
            }
            Step::FillCell { row, col } => {
                self.session.display.set(row as i32, col as i32, true);
            }
            Step::Score(increment) => self.session.score.apply_increment(increment),
            Step::AnimationDone => self.animations = self.animations.saturating_sub(1),
        }
    }
}
