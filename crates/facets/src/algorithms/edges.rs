use image::GrayImage;
use crate::{error::{FacetError, Result}, traits::EdgeDetector};

/// Canny edge detector with fixed hysteresis thresholds
#[derive(Debug, Clone)]
pub struct CannyEdgeDetector {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for CannyEdgeDetector {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

impl EdgeDetector for CannyEdgeDetector {
    fn detect_edges(&self, image: &GrayImage) -> Result<GrayImage> {
        if self.low_threshold > self.high_threshold {
            return Err(FacetError::InvalidConfig(format!(
                "canny low threshold {} exceeds high threshold {}",
                self.low_threshold, self.high_threshold
            )));
        }

        Ok(imageproc::edges::canny(image, self.low_threshold, self.high_threshold))
    }
}
