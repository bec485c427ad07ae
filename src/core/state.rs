//! Core domain: scene lifecycle states.

use bevy::prelude::*;

/// Lifecycle of the scene.
///
/// `Loading` polls the texture barrier, `Running` drives the animation every
/// frame, `Failed` is terminal: a texture failed to load and the scene is never
/// assembled.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum SceneState {
    #[default]
    Loading,
    Running,
    Failed,
}
