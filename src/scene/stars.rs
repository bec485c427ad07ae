//! Scene domain: random star field placement.

use bevy::prelude::*;
use rand::Rng;

use crate::core::StarBounds;

/// Where one star goes and which star material it wears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPlacement {
    pub translation: Vec3,
    pub material: usize,
}

/// Scatter `count` stars uniformly inside `bounds`, each picking one of
/// `material_count` materials uniformly. No materials means no stars.
pub fn scatter_stars(
    rng: &mut impl Rng,
    count: usize,
    bounds: &StarBounds,
    material_count: usize,
) -> Vec<StarPlacement> {
    if material_count == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let material = rng.random_range(0..material_count);
            let translation = Vec3::new(
                rng.random_range(bounds.min.x..=bounds.max.x),
                rng.random_range(bounds.min.y..=bounds.max.y),
                rng.random_range(bounds.min.z..=bounds.max.z),
            );
            StarPlacement {
                translation,
                material,
            }
        })
        .collect()
}
