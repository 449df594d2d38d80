use crate::{
    algorithms::{
        CannyEdgeDetector, ClosedDouglasPeucker, GrayscaleBlurPreprocessor,
        ImageprocContourExtractor, VertexCountClassifier,
    },
    config::DetectionConfig,
    error::Result,
    pipeline::Pipeline,
    render::Renderer,
    traits::{ContourExtractor, EdgeDetector, ImagePreprocessor, ShapeClassifier},
};

/// Inset used when colour sampling is switched on without an explicit value
pub const DEFAULT_COLOR_INSET: f64 = 0.3;

/// Builder for creating processing pipelines with a fluent API
pub struct PipelineBuilder {
    preprocessor: Option<Box<dyn ImagePreprocessor>>,
    edge_detector: Option<Box<dyn EdgeDetector>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
    classifier: Option<Box<dyn ShapeClassifier>>,
    renderer: Renderer,
    color_inset: Option<f64>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            preprocessor: None,
            edge_detector: None,
            contour_extractor: None,
            classifier: None,
            renderer: Renderer::default(),
            color_inset: None,
        }
    }

    /// Set the preprocessor (replaces any existing one)
    pub fn set_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: ImagePreprocessor + 'static,
    {
        self.preprocessor = Some(Box::new(preprocessor));
        self
    }

    /// Set the edge detector (replaces any existing one)
    pub fn set_edge_detector<E>(mut self, detector: E) -> Self
    where
        E: EdgeDetector + 'static,
    {
        self.edge_detector = Some(Box::new(detector));
        self
    }

    /// Set the contour extractor (replaces any existing one)
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    /// Set the shape classifier (replaces any existing one)
    pub fn set_classifier<C>(mut self, classifier: C) -> Self
    where
        C: ShapeClassifier + 'static,
    {
        self.classifier = Some(Box::new(classifier));
        self
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Sample each accepted face's colour, shrinking the polygon by `inset`
    pub fn with_color_sampling(mut self, inset: f64) -> Self {
        self.color_inset = Some(inset);
        self
    }

    /// Build the pipeline with default components if not specified
    pub fn build(self) -> Pipeline {
        let preprocessor = self
            .preprocessor
            .unwrap_or_else(|| Box::new(GrayscaleBlurPreprocessor::default()));

        let edge_detector = self
            .edge_detector
            .unwrap_or_else(|| Box::new(CannyEdgeDetector::default()));

        let contour_extractor = self
            .contour_extractor
            .unwrap_or_else(|| Box::new(ImageprocContourExtractor::default()));

        let classifier = self
            .classifier
            .unwrap_or_else(|| Box::new(VertexCountClassifier::triangles(0.04)));

        Pipeline::new(
            preprocessor,
            edge_detector,
            contour_extractor,
            classifier,
            self.renderer,
            self.color_inset,
        )
    }

    /// Build the pipeline described by a validated config
    pub fn from_config(config: &DetectionConfig) -> Result<Pipeline> {
        config.validate()?;

        let mut builder = Self::new()
            .set_preprocessor(GrayscaleBlurPreprocessor {
                kernel_size: config.blur_kernel_size,
                sigma: config.blur_sigma,
            })
            .set_edge_detector(CannyEdgeDetector {
                low_threshold: config.canny_low,
                high_threshold: config.canny_high,
            })
            .set_contour_extractor(ImageprocContourExtractor {
                retrieval: config.retrieval,
                compress: true,
            })
            .set_classifier(VertexCountClassifier::new(
                ClosedDouglasPeucker,
                config.epsilon_fraction,
                config.target_vertices,
            ))
            .with_renderer(Renderer::new(config.render.color, config.render.thickness));

        if config.sample_colors {
            builder = builder.with_color_sampling(DEFAULT_COLOR_INSET);
        }

        Ok(builder.build())
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
