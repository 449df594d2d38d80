pub mod builder;

use image::RgbImage;
use crate::{
    algorithms::{FaceColor, sample_face_color},
    error::{FacetError, Result},
    render::Renderer,
    traits::{ContourExtractor, EdgeDetector, ImagePreprocessor, ShapeClassifier},
    types::{Detection, DetectionReport},
};

/// Preprocess, detect edges, trace contours and keep the contours the
/// classifier accepts
pub struct Pipeline {
    preprocessor: Box<dyn ImagePreprocessor>,
    edge_detector: Box<dyn EdgeDetector>,
    contour_extractor: Box<dyn ContourExtractor>,
    classifier: Box<dyn ShapeClassifier>,
    renderer: Renderer,
    /// Inset used for face colour sampling; `None` disables sampling
    color_inset: Option<f64>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        preprocessor: Box<dyn ImagePreprocessor>,
        edge_detector: Box<dyn EdgeDetector>,
        contour_extractor: Box<dyn ContourExtractor>,
        classifier: Box<dyn ShapeClassifier>,
        renderer: Renderer,
        color_inset: Option<f64>,
    ) -> Self {
        Self {
            preprocessor,
            edge_detector,
            contour_extractor,
            classifier,
            renderer,
            color_inset,
        }
    }

    /// Run every detection stage on `image`. The image is only read.
    pub fn process(&self, image: &RgbImage) -> Result<DetectionReport> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(FacetError::InvalidImage { width, height });
        }

        // Step 1: grayscale + smoothing
        let smoothed = self.preprocessor.preprocess(image)?;

        // Step 2: binary edge map
        let edges = self.edge_detector.detect_edges(&smoothed)?;

        // Step 3: trace contours
        let contours = self.contour_extractor.extract_contours(&edges)?;
        tracing::debug!(contours = contours.len(), "extracted contours");

        // Step 4: classify each contour independently
        let detections: Vec<Detection> = contours
            .iter()
            .enumerate()
            .filter_map(|(index, contour)| {
                self.classifier.classify(contour).map(|polygon| Detection {
                    color: self
                        .color_inset
                        .and_then(|inset| sample_face_color(image, &polygon, inset))
                        .map(FaceColor::classify),
                    polygon,
                    contour_index: index,
                    border_type: contour.border_type,
                })
            })
            .collect();

        for detection in &detections {
            tracing::info!(
                contour = detection.contour_index,
                border = ?detection.border_type,
                vertices = ?detection.polygon.vertices,
                color = ?detection.color,
                "accepted polygon"
            );
        }
        tracing::debug!(accepted = detections.len(), "classified contours");

        Ok(DetectionReport {
            edges,
            contours,
            detections,
            image_width: width,
            image_height: height,
        })
    }

    /// Copy of `image` with every accepted polygon from `report` outlined
    pub fn render(&self, image: &RgbImage, report: &DetectionReport) -> RgbImage {
        self.renderer.render(image, report.polygons())
    }

    /// Process and render in one go
    pub fn run(&self, image: &RgbImage) -> Result<(DetectionReport, RgbImage)> {
        let report = self.process(image)?;
        let rendered = self.render(image, &report);
        Ok((report, rendered))
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: stroke {:?} x{}, colour sampling {}",
            self.renderer.color.0,
            self.renderer.thickness,
            if self.color_inset.is_some() { "on" } else { "off" }
        )
    }
}
