use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::types::Polygon;

/// Draws closed polygon outlines with a fixed colour and stroke width
#[derive(Debug, Clone)]
pub struct Renderer {
    pub color: Rgb<u8>,
    pub thickness: u32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            color: Rgb([0, 255, 0]),
            thickness: 3,
        }
    }
}

impl Renderer {
    pub fn new(color: [u8; 3], thickness: u32) -> Self {
        Self {
            color: Rgb(color),
            thickness,
        }
    }

    /// Copy of `image` with every polygon outlined
    pub fn render<'a, I>(&self, image: &RgbImage, polygons: I) -> RgbImage
    where
        I: IntoIterator<Item = &'a Polygon>,
    {
        let mut canvas = image.clone();
        for polygon in polygons {
            self.draw_mut(&mut canvas, polygon);
        }
        canvas
    }

    /// Outline a single polygon in place. Segments leaving the canvas are clipped.
    pub fn draw_mut(&self, canvas: &mut RgbImage, polygon: &Polygon) {
        let n = polygon.vertices.len();
        if n == 0 || self.thickness == 0 {
            return;
        }

        // `thickness` offsets per axis; even widths lean towards +x/+y
        let lo = -(((self.thickness - 1) / 2) as i32);
        let hi = (self.thickness / 2) as i32;
        for i in 0..n {
            let a = polygon.vertices[i];
            let b = polygon.vertices[(i + 1) % n];
            // Stroke width comes from stacking offset copies of the 1px segment
            for dy in lo..=hi {
                for dx in lo..=hi {
                    draw_line_segment_mut(
                        canvas,
                        ((a.x + dx) as f32, (a.y + dy) as f32),
                        ((b.x + dx) as f32, (b.y + dy) as f32),
                        self.color,
                    );
                }
            }
        }
    }
}
