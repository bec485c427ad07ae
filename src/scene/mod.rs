//! Scene domain: grid floor, star field, character and backdrop assembly.

mod grid;
mod plan;
mod spawn;
mod stars;


use bevy::prelude::*;

use crate::core::SceneState;
use crate::scene::spawn::spawn_scene;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SceneState::Running), spawn_scene);
    }
}
