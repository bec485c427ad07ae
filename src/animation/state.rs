//! Animation domain: the walking state machine.
//!
//! Two clocks drive the scene. The walking cycle counts render ticks, so its
//! speed follows the display refresh rate. The backdrop cycle (see
//! `backdrop.rs`) runs on wall-clock time. They share `AnimationState` but are
//! never merged into one clock.

use bevy::prelude::*;

use crate::core::SceneTuning;

/// Everything that changes while the scene runs.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Walking frame on display, in `[0, frame_count)`.
    pub frame: usize,
    /// Render ticks since the walking frame last changed.
    pub frame_counter: u32,
    /// Character x. Only ever grows. Kept in f64: an f32 accumulator drifts
    /// within an hour and stops moving once the step rounds away.
    pub position_x: f64,
    /// Set once when the character reaches the backdrop; never cleared.
    pub backdrop_started: bool,
    /// Backdrop frame on display, in `[0, backdrop_frame_count)`.
    pub backdrop_frame: usize,
}

/// Side effects of one tick, for the caller to apply to the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// New walking frame, when it changed this tick.
    pub frame_changed: Option<usize>,
    /// True on the single tick that sets the backdrop latch.
    pub backdrop_triggered: bool,
    pub camera_x: f64,
}

/// Advance the walking state by one render tick.
///
/// The backdrop trigger sees the position from before this tick's step.
pub fn advance(
    state: AnimationState,
    frame_count: usize,
    tuning: &SceneTuning,
) -> (AnimationState, TickOutcome) {
    let mut next = state;
    let mut frame_changed = None;

    next.frame_counter += 1;
    if next.frame_counter >= tuning.frame_delay_ticks {
        next.frame_counter = 0;
        if frame_count > 0 {
            next.frame = (next.frame + 1) % frame_count;
            frame_changed = Some(next.frame);
        }
    }

    let backdrop_triggered =
        !next.backdrop_started && next.position_x >= tuning.backdrop_trigger_x;
    if backdrop_triggered {
        next.backdrop_started = true;
    }

    next.position_x += tuning.walk_step;

    let outcome = TickOutcome {
        frame_changed,
        backdrop_triggered,
        camera_x: next.position_x,
    };
    (next, outcome)
}

/// Display scale for a walking frame.
///
/// Every frame shares `sprite_height`; widths keep each frame's aspect
/// relative to the tallest frame.
pub fn frame_scale(width: u32, max_height: u32, sprite_height: f32) -> Vec3 {
    if max_height == 0 {
        return Vec3::new(sprite_height, sprite_height, 1.0);
    }
    Vec3::new(
        width as f32 / max_height as f32 * sprite_height,
        sprite_height,
        1.0,
    )
}
