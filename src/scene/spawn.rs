//! Scene domain: spawning the planned scene into the world.

use bevy::math::Affine2;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::animation::{
    AnimationState, Backdrop, BackdropFrames, WalkCycle, WalkFrame, Walker, frame_scale,
};
use crate::assets::{SceneTextures, TextureAsset};
use crate::core::{SceneCamera, SceneTuning, StarFieldSeed};

use super::plan::plan_scene;

/// Marker for the grid floor.
#[derive(Component, Debug)]
pub struct Floor;

/// Marker for star field quads.
#[derive(Component, Debug)]
pub struct Star;

/// Unlit, alpha-blended material for a sprite texture.
fn sprite_material(texture: &TextureAsset, double_sided: bool) -> StandardMaterial {
    let mut material = StandardMaterial {
        base_color_texture: Some(texture.handle.clone()),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    };
    if double_sided {
        material.double_sided = true;
        material.cull_mode = None;
    }
    material
}

/// Build the static scene and hand the animated parts to the animation domain.
/// Runs once, on entering `SceneState::Running`.
pub(crate) fn spawn_scene(
    mut commands: Commands,
    textures: Res<SceneTextures>,
    tuning: Res<SceneTuning>,
    seed: Res<StarFieldSeed>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.0);
    let plan = plan_scene(&textures, &tuning, &mut rng);

    // Floor
    let grid = images.add(plan.grid.to_image());
    commands.spawn((
        Floor,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(tuning.floor_size, tuning.floor_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(grid),
            unlit: true,
            double_sided: true,
            cull_mode: None,
            uv_transform: Affine2::from_scale(Vec2::splat(tuning.grid_repeat)),
            ..default()
        })),
        Transform::from_xyz(0.0, tuning.floor_y, 0.0),
    ));

    let quad = meshes.add(Rectangle::new(1.0, 1.0));

    // Star field
    if textures.stars.is_empty() {
        warn!("No star textures loaded, star field stays empty");
    }
    let star_materials: Vec<_> = textures
        .stars
        .iter()
        .map(|texture| materials.add(sprite_material(texture, false)))
        .collect();
    for star in &plan.stars {
        commands.spawn((
            Star,
            Mesh3d(quad.clone()),
            MeshMaterial3d(star_materials[star.material].clone()),
            Transform::from_translation(star.translation).with_scale(tuning.star_scale),
        ));
    }

    // Walking character
    let walk_cycle = WalkCycle {
        frames: textures
            .walking
            .iter()
            .map(|texture| WalkFrame {
                material: materials.add(sprite_material(texture, false)),
                width: texture.width,
            })
            .collect(),
        max_height: plan.walk_max_height,
    };
    if let Some(first) = walk_cycle.frames.first() {
        commands.spawn((
            Walker,
            Mesh3d(quad.clone()),
            MeshMaterial3d(first.material.clone()),
            Transform::from_scale(frame_scale(
                first.width,
                walk_cycle.max_height,
                tuning.sprite_height,
            )),
        ));
    }

    // Backdrop
    let backdrop_size = tuning.backdrop_size();
    let backdrop_material = materials.add(match textures.backdrop.get(0) {
        Some(first) => sprite_material(first, true),
        None => StandardMaterial::default(),
    });
    commands.spawn((
        Backdrop,
        Mesh3d(meshes.add(Rectangle::new(backdrop_size.x, backdrop_size.y))),
        MeshMaterial3d(backdrop_material.clone()),
        Transform::from_translation(tuning.backdrop_translation()),
    ));

    for mut transform in &mut cameras {
        transform.translation = Vec3::new(0.0, 0.0, tuning.camera_distance);
    }

    info!(
        "Scene assembled: {} stars (seed {}), {} walking frames (max height {}px), {} backdrop frames",
        plan.stars.len(),
        seed.0,
        walk_cycle.frame_count(),
        walk_cycle.max_height,
        textures.backdrop.len()
    );

    commands.insert_resource(BackdropFrames {
        textures: textures
            .backdrop
            .iter()
            .map(|texture| texture.handle.clone())
            .collect(),
        material: backdrop_material,
    });
    commands.insert_resource(walk_cycle);
    commands.insert_resource(AnimationState::default());
}
