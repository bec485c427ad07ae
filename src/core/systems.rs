//! Core domain: camera setup and window plumbing.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::resources::SceneTuning;

/// Marker for the scene camera that follows the character.
#[derive(Component, Debug)]
pub struct SceneCamera;

pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<SceneTuning>) {
    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: tuning.camera_fov_degrees.to_radians(),
            near: tuning.camera_near,
            far: tuning.camera_far,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, tuning.camera_distance),
    ));
}

/// Keep the camera aspect in step with the window.
pub(crate) fn handle_window_resized(
    mut events: MessageReader<WindowResized>,
    mut cameras: Query<&mut Projection, With<SceneCamera>>,
) {
    // Only the latest size matters when several resizes land in one frame.
    let Some(event) = events.read().last() else {
        return;
    };
    let Some(aspect_ratio) = aspect_ratio(event.width, event.height) else {
        return;
    };

    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.aspect_ratio = aspect_ratio;
        }
    }

    debug!(
        "Viewport resized to {}x{} (aspect {:.3})",
        event.width, event.height, aspect_ratio
    );
}

/// Width over height, or `None` for a collapsed (minimized) window.
pub(crate) fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    (width > 0.0 && height > 0.0).then(|| width / height)
}

#[cfg(test)]
mod tests {
    use super::aspect_ratio;

    #[test]
    fn test_aspect_ratio_of_regular_window() {
        assert_eq!(aspect_ratio(1280.0, 720.0), Some(1280.0 / 720.0));
    }

    #[test]
    fn test_aspect_ratio_of_minimized_window() {
        assert_eq!(aspect_ratio(1280.0, 0.0), None);
        assert_eq!(aspect_ratio(0.0, 0.0), None);
    }
}
