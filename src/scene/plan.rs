//! Scene domain: everything decided about the static scene before spawning.

use rand::Rng;

use crate::assets::{AssetGroup, LoadedAssets, TextureAsset};
use crate::core::SceneTuning;

use super::grid::{GridTexture, grid_texture};
use super::stars::{StarPlacement, scatter_stars};

/// The static scene, independent of the ECS world.
#[derive(Debug, Clone)]
pub struct ScenePlan {
    pub grid: GridTexture,
    pub stars: Vec<StarPlacement>,
    /// Tallest walking frame in pixels, the scale normalization constant.
    pub walk_max_height: u32,
}

/// Tallest texture in a group, or 0 for an empty group.
pub fn max_height(group: &AssetGroup<TextureAsset>) -> u32 {
    group.iter().map(|texture| texture.height).max().unwrap_or(0)
}

/// Plan the static scene from the loaded textures.
///
/// Star placement is the only random part; everything else is a pure function
/// of the tuning and the texture sizes.
pub fn plan_scene(
    textures: &LoadedAssets<TextureAsset>,
    tuning: &SceneTuning,
    rng: &mut impl Rng,
) -> ScenePlan {
    ScenePlan {
        grid: grid_texture(tuning.grid_size, tuning.grid_lines),
        stars: scatter_stars(
            rng,
            tuning.star_count,
            &tuning.star_bounds,
            textures.stars.len(),
        ),
        walk_max_height: max_height(&textures.walking),
    }
}
