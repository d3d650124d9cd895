//! Scoring module - point rules and the smoothed score counter
//!
//! The exact total moves as soon as points are awarded. The displayed value
//! catches up in equal sub-increments spread over a fixed duration; the
//! caller schedules those increments (see [`ScoreTracker::add_score`]) and
//! feeds them back through [`ScoreTracker::apply_increment`].
//!
//! Sub-increments are tracked in fixed point (1/steps of a point), so the
//! displayed value is monotonic and lands on the exact total once every
//! increment has been applied, however many updates overlap.

use crate::catalog::Shape;
use crate::grid::LineClear;

/// Points for committing a shape: one per filled cell
pub fn placement_points(shape: &Shape) -> u32 {
    shape.cell_count()
}

/// Bonus for a clear: `bonus` per cleared row plus `bonus` per cleared column
///
/// A clear that completes a row and a column at once earns both bonuses.
pub fn line_clear_bonus(lines: &LineClear, bonus: u32) -> u32 {
    (lines.line_count() as u32).saturating_mul(bonus)
}

/// One scheduled sub-increment of a smoothed score update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreIncrement {
    /// Delay from the moment the points were awarded
    pub offset_ms: u32,
    /// Amount in fixed-point units (1/steps of a point)
    pub units: u64,
}

/// Schedule of sub-increments produced by one [`ScoreTracker::add_score`]
#[derive(Debug, Clone)]
pub struct ScoreSteps {
    units: u64,
    interval_ms: u32,
    next: u32,
    steps: u32,
}

impl Iterator for ScoreSteps {
    type Item = ScoreIncrement;

    fn next(&mut self) -> Option<ScoreIncrement> {
        if self.next >= self.steps {
            return None;
        }
        let offset_ms = self.interval_ms * self.next;
        self.next += 1;
        Some(ScoreIncrement {
            offset_ms,
            units: self.units,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ScoreSteps {}

/// Accumulated score with a smoothed display value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    total: u32,
    shown_units: u64,
    steps: u32,
    duration_ms: u32,
}

impl ScoreTracker {
    /// `steps` sub-increments spread over `duration_ms` per update
    ///
    /// Panics when `steps` is zero.
    pub fn new(steps: u32, duration_ms: u32) -> Self {
        assert!(steps > 0, "score smoothing needs at least one step");
        Self {
            total: 0,
            shown_units: 0,
            steps,
            duration_ms,
        }
    }

    /// Award `delta` points
    ///
    /// The exact total increases immediately; the returned schedule describes
    /// how the displayed value should follow. Overlapping updates simply add.
    pub fn add_score(&mut self, delta: u32) -> ScoreSteps {
        self.total = self.total.saturating_add(delta);
        ScoreSteps {
            units: delta as u64,
            interval_ms: self.duration_ms / self.steps,
            next: 0,
            steps: self.steps,
        }
    }

    /// Apply one scheduled sub-increment to the displayed value
    pub fn apply_increment(&mut self, increment: ScoreIncrement) {
        let cap = self.total as u64 * self.steps as u64;
        self.shown_units = (self.shown_units + increment.units).min(cap);
    }

    /// Exact accumulated score
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Displayed score, rounded to the nearest point
    pub fn displayed(&self) -> u32 {
        let steps = self.steps as u64;
        ((self.shown_units + steps / 2) / steps) as u32
    }

    /// Jump the displayed value to the exact total
    ///
    /// For callers that drop scheduled increments before they are applied.
    pub fn settle(&mut self) {
        self.shown_units = self.total as u64 * self.steps as u64;
    }

    /// Whether the displayed value has caught up with the total
    pub fn is_settled(&self) -> bool {
        self.shown_units == self.total as u64 * self.steps as u64
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        use crate::types::{DEFAULT_SCORE_DURATION_MS, DEFAULT_SCORE_STEPS};
        Self::new(DEFAULT_SCORE_STEPS, DEFAULT_SCORE_DURATION_MS)
    }
}
