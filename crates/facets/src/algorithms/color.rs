use geo_types::{Coord, LineString, Polygon as GeoPolygon};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::types::Polygon;

/// Sticker colours of a pyramid puzzle face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum FaceColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl FaceColor {
    /// One-letter puzzle notation
    pub fn letter(self) -> char {
        match self {
            FaceColor::Red => 'r',
            FaceColor::Green => 'g',
            FaceColor::Blue => 'b',
            FaceColor::Yellow => 'y',
        }
    }

    pub fn from_letter(letter: char) -> Option<FaceColor> {
        FaceColor::iter().find(|c| c.letter() == letter)
    }

    pub fn reference_rgb(self) -> [u8; 3] {
        match self {
            FaceColor::Red => [255, 0, 0],
            FaceColor::Green => [0, 255, 0],
            FaceColor::Blue => [0, 0, 255],
            FaceColor::Yellow => [255, 255, 0],
        }
    }

    /// Nearest palette entry by Euclidean RGB distance
    pub fn classify(rgb: [u8; 3]) -> FaceColor {
        let dist = |c: FaceColor| {
            c.reference_rgb()
                .iter()
                .zip(rgb.iter())
                .map(|(&a, &b)| {
                    let d = a as i32 - b as i32;
                    d * d
                })
                .sum::<i32>()
        };

        FaceColor::iter()
            .min_by_key(|&c| dist(c))
            .unwrap_or(FaceColor::Red)
    }
}

/// Mean colour of the pixels inside `polygon`, after shrinking it towards
/// its centroid by `inset` (0 keeps the full polygon, 0.5 halves it).
/// Thin slivers with no interior pixels fall back to the vertex pixels.
pub fn sample_face_color(image: &RgbImage, polygon: &Polygon, inset: f64) -> Option<[u8; 3]> {
    use geo::Contains;

    if polygon.vertices.is_empty() {
        return None;
    }

    let [cx, cy] = polygon.centroid().unwrap_or_else(|| {
        let n = polygon.vertices.len() as f64;
        let (sx, sy) = polygon
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
        [sx / n, sy / n]
    });
    let scale = (1.0 - inset).clamp(0.0, 1.0);

    let shrunk: Vec<Coord<f64>> = polygon
        .vertices
        .iter()
        .map(|p| Coord {
            x: cx + (p.x as f64 - cx) * scale,
            y: cy + (p.y as f64 - cy) * scale,
        })
        .collect();
    let region = GeoPolygon::new(LineString::new(shrunk), vec![]);

    let (min, max) = polygon.bounding_box()?;
    let in_bounds = |x: i32, y: i32| x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height();

    let mut sum = [0u64; 3];
    let mut count = 0u64;
    let accumulate = |x: i32, y: i32, sum: &mut [u64; 3], count: &mut u64| {
        let px = image.get_pixel(x as u32, y as u32).0;
        for (s, v) in sum.iter_mut().zip(px) {
            *s += v as u64;
        }
        *count += 1;
    };

    for y in min.y..=max.y {
        for x in min.x..=max.x {
            if in_bounds(x, y) && region.contains(&geo::Point::new(x as f64, y as f64)) {
                accumulate(x, y, &mut sum, &mut count);
            }
        }
    }

    if count == 0 {
        for p in &polygon.vertices {
            if in_bounds(p.x, p.y) {
                accumulate(p.x, p.y, &mut sum, &mut count);
            }
        }
    }

    (count > 0).then(|| sum.map(|s| (s / count) as u8))
}
