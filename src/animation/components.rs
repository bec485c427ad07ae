//! Animation domain: components and resources the scene is animated through.

use bevy::prelude::*;

use super::state::frame_scale;

/// Marker for the walking character quad.
#[derive(Component, Debug)]
pub struct Walker;

/// Marker for the backdrop plane.
#[derive(Component, Debug)]
pub struct Backdrop;

/// One walking frame: its material and source pixel width.
#[derive(Debug, Clone)]
pub struct WalkFrame {
    pub material: Handle<StandardMaterial>,
    pub width: u32,
}

/// The walking frames in playback order plus the scale normalization constant.
#[derive(Resource, Debug, Clone)]
pub struct WalkCycle {
    pub frames: Vec<WalkFrame>,
    /// Tallest frame's pixel height.
    pub max_height: u32,
}

impl WalkCycle {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn scale_for(&self, frame: usize, sprite_height: f32) -> Option<Vec3> {
        let frame = self.frames.get(frame)?;
        Some(frame_scale(frame.width, self.max_height, sprite_height))
    }
}

/// Backdrop textures in playback order, swapped into one shared material.
#[derive(Resource, Debug, Clone)]
pub struct BackdropFrames {
    pub textures: Vec<Handle<Image>>,
    pub material: Handle<StandardMaterial>,
}

impl BackdropFrames {
    pub fn frame_count(&self) -> usize {
        self.textures.len()
    }
}
