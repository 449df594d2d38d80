use image::{GrayImage, RgbImage};
use imageproc::point::Point;

use crate::{
    error::Result,
    types::{Contour, Polygon},
};

/// Trait for image preprocessing algorithms
pub trait ImagePreprocessor: Send + Sync {
    /// Turn the colour input into a smoothed single-channel image
    fn preprocess(&self, image: &RgbImage) -> Result<GrayImage>;
}

/// Trait for edge detection algorithms
pub trait EdgeDetector: Send + Sync {
    /// Produce a binary edge map (255 = edge, 0 = background) of the same size
    fn detect_edges(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Trace closed boundaries in a binary edge map
    fn extract_contours(&self, edges: &GrayImage) -> Result<Vec<Contour>>;
}

/// Trait for polygon approximation algorithms
pub trait PolygonApproximator: Send + Sync {
    /// Approximate a closed curve with a polygon whose vertices deviate
    /// from the curve by at most `epsilon`. Never returns more points
    /// than it was given.
    fn approximate(&self, points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>>;
}

/// Trait for shape classification
pub trait ShapeClassifier: Send + Sync {
    /// Approximate the contour and return the polygon if it is accepted
    fn classify(&self, contour: &Contour) -> Option<Polygon>;
}
