//! Assets domain: concurrent texture loading joined behind a fail-fast barrier.

mod barrier;
mod error;
mod group;
mod manifest;
mod systems;

#[cfg(test)]
mod tests;

pub use barrier::LoadedAssets;
pub use group::{AssetGroup, TextureAsset};

#[cfg(test)]
pub use barrier::LoadBarrier;
#[cfg(test)]
pub use group::{LoadPoll, LoadStatus};
#[cfg(test)]
pub use manifest::AssetGroupKind;

use bevy::prelude::*;

use crate::assets::systems::{poll_textures, request_textures};
use crate::core::SceneState;

/// The scene's loaded textures.
pub type SceneTextures = LoadedAssets<TextureAsset>;

pub struct AssetsPlugin;

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, request_textures).add_systems(
            Update,
            poll_textures.run_if(in_state(SceneState::Loading)),
        );
    }
}
