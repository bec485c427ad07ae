//! Animation domain: the one-shot backdrop cycle.

use bevy::prelude::*;
use std::time::Duration;

use super::state::AnimationState;

/// A backdrop frame change produced by one timer fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropStep {
    pub frame: usize,
    /// The cycle reached its last frame and must stop.
    pub finished: bool,
}

/// Advance the backdrop frame by one timer fire.
pub fn advance_backdrop(
    state: AnimationState,
    frame_count: usize,
) -> (AnimationState, Option<BackdropStep>) {
    if frame_count == 0 {
        return (state, None);
    }
    let mut next = state;
    next.backdrop_frame = (next.backdrop_frame + 1) % frame_count;
    let step = BackdropStep {
        frame: next.backdrop_frame,
        finished: next.backdrop_frame == frame_count - 1,
    };
    (next, Some(step))
}

/// The running backdrop timer. Present only between trigger and last frame.
#[derive(Resource, Debug)]
pub struct BackdropCycle {
    timer: Timer,
    finished: bool,
}

impl BackdropCycle {
    pub fn new(interval: Duration) -> Self {
        Self {
            timer: Timer::new(interval, TimerMode::Repeating),
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Tick the wall clock and apply every fire that elapsed.
    ///
    /// Returns the frames shown, in order. A delta spanning several intervals
    /// fires several times, but never past the last frame.
    pub fn tick(
        &mut self,
        delta: Duration,
        state: &mut AnimationState,
        frame_count: usize,
    ) -> Vec<usize> {
        if self.finished {
            return Vec::new();
        }
        self.timer.tick(delta);

        let mut shown = Vec::new();
        for _ in 0..self.timer.times_finished_this_tick() {
            let (next, step) = advance_backdrop(*state, frame_count);
            *state = next;
            let Some(step) = step else {
                self.finished = true;
                break;
            };
            shown.push(step.frame);
            if step.finished {
                self.finished = true;
                break;
            }
        }
        shown
    }
}
