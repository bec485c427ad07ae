//! Animation domain: the tick-counted walk and the timed backdrop cycle.

mod backdrop;
mod components;
mod events;
mod state;
mod systems;


pub use components::{Backdrop, BackdropFrames, WalkCycle, WalkFrame, Walker};
pub use state::{AnimationState, frame_scale};

use bevy::prelude::*;

use crate::animation::events::BackdropTriggered;
use crate::animation::systems::{drive_walker, start_backdrop_cycle, tick_backdrop_cycle};
use crate::core::SceneState;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BackdropTriggered>()
            .add_systems(
                Update,
                (drive_walker, start_backdrop_cycle, tick_backdrop_cycle)
                    .chain()
                    .run_if(in_state(SceneState::Running))
                    .run_if(resource_exists::<AnimationState>),
            );
    }
}
