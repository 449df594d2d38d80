use image::GrayImage;
use imageproc::point::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{error::Result, traits::ContourExtractor, types::{BorderType, Contour}};

/// Which traced borders to keep
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq,
    Serialize, Deserialize, JsonSchema, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RetrievalMode {
    /// Outer and hole borders with their nesting
    #[default]
    Tree,
    /// Top-level outer borders only
    External,
}

/// Drop every point that continues the previous step in the same direction,
/// leaving only the end points of horizontal, vertical and diagonal runs.
pub fn compress_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |a: Point<i32>, b: Point<i32>| ((b.x - a.x).signum(), (b.y - a.y).signum());

    points
        .iter()
        .enumerate()
        .filter(|&(i, &p)| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, p) != step(p, next)
        })
        .map(|(_, &p)| p)
        .collect()
}

/// Imageproc-based contour extractor (Suzuki-Abe border following)
#[derive(Debug, Clone)]
pub struct ImageprocContourExtractor {
    pub retrieval: RetrievalMode,
    /// Compress straight runs down to their end points
    pub compress: bool,
}

impl Default for ImageprocContourExtractor {
    fn default() -> Self {
        Self {
            retrieval: RetrievalMode::Tree,
            compress: true,
        }
    }
}

impl ContourExtractor for ImageprocContourExtractor {
    fn extract_contours(&self, edges: &GrayImage) -> Result<Vec<Contour>> {
        let traced = imageproc::contours::find_contours::<i32>(edges);

        let to_points = |points: Vec<Point<i32>>| {
            if self.compress {
                compress_chain(&points)
            } else {
                points
            }
        };

        let contours = match self.retrieval {
            RetrievalMode::Tree => traced
                .into_iter()
                .map(|c| Contour::new(to_points(c.points), c.border_type.into(), c.parent))
                .collect(),
            RetrievalMode::External => traced
                .into_iter()
                .filter(|c| {
                    c.parent.is_none()
                        && matches!(c.border_type, imageproc::contours::BorderType::Outer)
                })
                .map(|c| Contour::new(to_points(c.points), BorderType::Outer, None))
                .collect(),
        };

        Ok(contours)
    }
}
