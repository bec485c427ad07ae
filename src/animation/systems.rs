//! Animation domain: per-frame systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{SceneCamera, SceneTuning};

use super::backdrop::BackdropCycle;
use super::components::{BackdropFrames, WalkCycle, Walker};
use super::events::BackdropTriggered;
use super::state::{AnimationState, advance};

/// Advance the walking state one tick and apply it to the character and camera.
pub(crate) fn drive_walker(
    mut state: ResMut<AnimationState>,
    walk_cycle: Option<Res<WalkCycle>>,
    tuning: Res<SceneTuning>,
    mut walkers: Query<(&mut Transform, &mut MeshMaterial3d<StandardMaterial>), With<Walker>>,
    mut cameras: Query<&mut Transform, (With<SceneCamera>, Without<Walker>)>,
    mut triggered: MessageWriter<BackdropTriggered>,
) {
    let Some(walk_cycle) = walk_cycle else {
        return;
    };

    let position_before = state.position_x;
    let (next, outcome) = advance(*state, walk_cycle.frame_count(), &tuning);
    *state = next;

    for (mut transform, mut material) in &mut walkers {
        if let Some(frame) = outcome.frame_changed {
            if let Some(walk_frame) = walk_cycle.frames.get(frame) {
                material.0 = walk_frame.material.clone();
            }
            if let Some(scale) = walk_cycle.scale_for(frame, tuning.sprite_height) {
                transform.scale = scale;
            }
        }
        transform.translation.x = next.position_x as f32;
    }

    for mut transform in &mut cameras {
        transform.translation.x = outcome.camera_x as f32;
    }

    if outcome.backdrop_triggered {
        triggered.write(BackdropTriggered {
            position_x: position_before,
        });
    }
}

/// Start the backdrop timer when the walker reaches it.
pub(crate) fn start_backdrop_cycle(
    mut commands: Commands,
    mut events: MessageReader<BackdropTriggered>,
    tuning: Res<SceneTuning>,
) {
    // The latch makes this fire at most once; extra reads are harmless.
    let Some(event) = events.read().last() else {
        return;
    };
    info!(
        "Walker reached x={:.2}, starting backdrop animation",
        event.position_x
    );
    commands.insert_resource(BackdropCycle::new(tuning.backdrop_interval()));
}

/// Tick the backdrop timer and swap the backdrop texture on each fire.
pub(crate) fn tick_backdrop_cycle(
    mut commands: Commands,
    time: Res<Time>,
    cycle: Option<ResMut<BackdropCycle>>,
    mut state: ResMut<AnimationState>,
    frames: Option<Res<BackdropFrames>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let (Some(mut cycle), Some(frames)) = (cycle, frames) else {
        return;
    };

    let shown = cycle.tick(time.delta(), &mut state, frames.frame_count());
    if let Some(&frame) = shown.last() {
        if let Some(material) = materials.get_mut(&frames.material) {
            material.base_color_texture = frames.textures.get(frame).cloned();
        }
        debug!("Backdrop frame {}", frame);
    }

    if cycle.is_finished() {
        info!("Backdrop animation finished on frame {}", state.backdrop_frame);
        commands.remove_resource::<BackdropCycle>();
    }
}
