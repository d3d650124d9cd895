//! Timeline module - scheduled animation steps on a virtual clock
//!
//! Every timed effect (line-clear sweeps, the game-over fill, smoothed score
//! increments) is queued here as a `(due time, step)` pair. Nothing runs on
//! its own: the owner advances the clock with [`Timeline::advance`] and pops
//! due steps one at a time, so sequences can be inspected and tested without
//! real time passing.

use std::collections::VecDeque;

use crate::core::ScoreIncrement;

/// One deferred mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Empty one cell of the displayed grid
    ClearCell { row: u8, col: u8 },
    /// Fill one cell of the displayed grid
    FillCell { row: u8, col: u8 },
    /// Move the displayed score towards the total
    Score(ScoreIncrement),
    /// One cleared line finished animating
    AnimationDone,
}

/// A step with its absolute due time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub due_ms: u64,
    pub step: Step,
}

/// Ordered queue of scheduled steps
///
/// Steps fire in due-time order; steps due at the same time fire in the
/// order they were scheduled.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    now_ms: u64,
    queue: VecDeque<ScheduledStep>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queue `step` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u32, step: Step) {
        let due_ms = self.now_ms + delay_ms as u64;
        let at = self.queue.partition_point(|s| s.due_ms <= due_ms);
        self.queue.insert(at, ScheduledStep { due_ms, step });
    }

    /// Move the clock forward
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.now_ms += elapsed_ms as u64;
    }

    /// Remove and return the next step whose due time has passed
    pub fn pop_due(&mut self) -> Option<Step> {
        if self.queue.front()?.due_ms <= self.now_ms {
            self.queue.pop_front().map(|s| s.step)
        } else {
            None
        }
    }

    /// Steps still waiting, in firing order
    pub fn pending(&self) -> impl Iterator<Item = &ScheduledStep> + '_ {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending step; the clock keeps running
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
