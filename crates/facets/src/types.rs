use geo_types::{Coord, LineString, Polygon as GeoPolygon};
use image::GrayImage;
use imageproc::point::Point;
use serde::{Deserialize, Serialize};

use crate::algorithms::{FaceColor, arc_length};

/// Whether a traced border separates an edge region from the background
/// around it, or from a background region enclosed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderType {
    Outer,
    Hole,
}

impl From<imageproc::contours::BorderType> for BorderType {
    fn from(border: imageproc::contours::BorderType) -> Self {
        match border {
            imageproc::contours::BorderType::Outer => BorderType::Outer,
            imageproc::contours::BorderType::Hole => BorderType::Hole,
        }
    }
}

/// A closed boundary curve traced in an edge map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    /// Boundary points in tracing order. The curve closes from the last
    /// point back to the first.
    pub points: Vec<Point<i32>>,
    pub border_type: BorderType,
    /// Index of the enclosing contour in the same collection, if any.
    pub parent: Option<usize>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>, border_type: BorderType, parent: Option<usize>) -> Self {
        Self {
            points,
            border_type,
            parent,
        }
    }

    /// Closed perimeter length
    pub fn perimeter(&self) -> f64 {
        arc_length(&self.points, true)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A reduced-vertex closed polygon approximating a contour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<Point<i32>>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point<i32>>) -> Self {
        Self { vertices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Convert to a geo-types polygon for geometric operations
    pub fn to_geo_polygon(&self) -> GeoPolygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .vertices
            .iter()
            .map(|p| Coord {
                x: p.x as f64,
                y: p.y as f64,
            })
            .collect();

        // LineString is closed by Polygon::new
        GeoPolygon::new(LineString::new(coords), vec![])
    }

    pub fn perimeter(&self) -> f64 {
        arc_length(&self.vertices, true)
    }

    pub fn area(&self) -> f64 {
        use geo::Area;
        self.to_geo_polygon().unsigned_area()
    }

    pub fn centroid(&self) -> Option<[f64; 2]> {
        use geo::Centroid;
        self.to_geo_polygon().centroid().map(|c| [c.x(), c.y()])
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<(Point<i32>, Point<i32>)> {
        let first = self.vertices.first()?;
        let mut min = *first;
        let mut max = *first;

        for p in &self.vertices {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Some((min, max))
    }
}

/// A contour accepted by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub polygon: Polygon,
    /// Index into [`DetectionReport::contours`]
    pub contour_index: usize,
    pub border_type: BorderType,
    /// Dominant face colour, when sampling was enabled
    pub color: Option<FaceColor>,
}

/// Everything a single pipeline run produced.
#[derive(Debug, Clone)]
pub struct DetectionReport {
    pub edges: GrayImage,
    pub contours: Vec<Contour>,
    pub detections: Vec<Detection>,
    pub image_width: u32,
    pub image_height: u32,
}

impl DetectionReport {
    /// Accepted polygons in detection order
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.detections.iter().map(|d| &d.polygon)
    }

    /// Accepted polygons traced on the outside of their edge region
    pub fn outer_detections(&self) -> impl Iterator<Item = &Detection> {
        self.detections
            .iter()
            .filter(|d| d.border_type == BorderType::Outer)
    }

    /// Number of edge pixels in the edge map
    pub fn edge_pixel_count(&self) -> usize {
        self.edges.pixels().filter(|p| p.0[0] > 0).count()
    }
}
