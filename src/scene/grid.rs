//! Scene domain: the procedural floor grid texture.

use bevy::asset::RenderAssetUsages;
use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

pub const GRID_LINE_COLOR: [u8; 4] = [0x00, 0xff, 0x00, 0xff];
pub const GRID_BACKGROUND: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAxis {
    Horizontal,
    Vertical,
}

/// One full-length line across the texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub axis: LineAxis,
    /// Offset from the top (horizontal) or left (vertical) edge, in pixels.
    pub offset: f32,
}

/// A square RGBA8 grid image. Same inputs always give the same bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTexture {
    pub size: u32,
    pub lines: Vec<GridLine>,
    pub pixels: Vec<u8>,
}

/// Line layout for a grid of `cells` cells per edge: `cells + 1` lines per axis,
/// both edges included.
pub fn grid_lines(size: u32, cells: u32) -> Vec<GridLine> {
    if cells == 0 {
        return Vec::new();
    }
    let step = size as f32 / cells as f32;
    (0..=cells)
        .flat_map(|i| {
            let offset = i as f32 * step;
            [
                GridLine {
                    axis: LineAxis::Horizontal,
                    offset,
                },
                GridLine {
                    axis: LineAxis::Vertical,
                    offset,
                },
            ]
        })
        .collect()
}

/// Draw the grid into a `size`×`size` pixel buffer.
///
/// Lines are one pixel wide. The far edge line lands on `size` and is clamped
/// into the last row/column.
pub fn grid_texture(size: u32, cells: u32) -> GridTexture {
    let lines = grid_lines(size, cells);
    let edge = size as usize;
    let mut pixels = GRID_BACKGROUND.repeat(edge * edge);

    if edge > 0 {
        for line in &lines {
            let fixed = (line.offset.round() as usize).min(edge - 1);
            for along in 0..edge {
                let (x, y) = match line.axis {
                    LineAxis::Horizontal => (along, fixed),
                    LineAxis::Vertical => (fixed, along),
                };
                let start = (y * edge + x) * 4;
                pixels[start..start + 4].copy_from_slice(&GRID_LINE_COLOR);
            }
        }
    }

    GridTexture {
        size,
        lines,
        pixels,
    }
}

impl GridTexture {
    #[cfg(test)]
    pub fn count(&self, axis: LineAxis) -> usize {
        self.lines.iter().filter(|line| line.axis == axis).count()
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let start = ((y * self.size + x) * 4) as usize;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[start..start + 4]);
        Some(rgba)
    }

    /// GPU image with repeat addressing so the floor can tile it.
    pub fn to_image(&self) -> Image {
        let mut image = Image::new(
            Extent3d {
                width: self.size,
                height: self.size,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            self.pixels.clone(),
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        );
        image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::Repeat,
            address_mode_v: ImageAddressMode::Repeat,
            ..default()
        });
        image
    }
}
