//! Core domain: scene lifecycle, tuning, camera and window handling.

mod resources;
mod state;
mod systems;

pub use resources::{SceneTuning, StarBounds, StarFieldSeed};
pub use state::SceneState;
pub use systems::SceneCamera;

use bevy::prelude::*;

use crate::core::systems::{handle_window_resized, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SceneState>()
            .init_resource::<SceneTuning>()
            .init_resource::<StarFieldSeed>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, handle_window_resized);
    }
}
