//! # Triangular Face Detection Library
//!
//! Finds triangular faces in a photo: grayscale + blur, Canny edges,
//! contour tracing with full nesting, closed polygon approximation with a
//! perimeter-relative tolerance, and a vertex-count filter. Accepted faces
//! can be outlined on a copy of the input and have their sticker colour
//! sampled.
//!
//! ## Core Features
//!
//! - **Trait-based Architecture**: every stage sits behind a trait and can be swapped
//! - **Pipeline System**: stages composed with a fluent builder or from a config file
//! - **Scale Invariance**: approximation tolerance follows the contour perimeter
//! - **Fail-fast Loading**: unreadable inputs are reported before any stage runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use facets::{Pipeline, load_image};
//!
//! let pipeline = Pipeline::builder().build();
//!
//! let image = load_image("Pyramid_img1.jpg")?;
//! let (report, annotated) = pipeline.run(&image)?;
//! println!("{} triangular faces", report.detections.len());
//! annotated.save("annotated.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use facets::{Pipeline, algorithms::*};
//!
//! let pipeline = Pipeline::builder()
//!     .set_edge_detector(CannyEdgeDetector { low_threshold: 30.0, high_threshold: 90.0 })
//!     .set_contour_extractor(ImageprocContourExtractor {
//!         retrieval: RetrievalMode::External,
//!         compress: true,
//!     })
//!     .with_color_sampling(0.3)
//!     .build();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod render;
pub mod config;
pub mod io;
pub mod pyramid;

// Re-exports for convenience
pub use error::{FacetError, Result};
pub use types::{BorderType, Contour, Detection, DetectionReport, Polygon};
pub use traits::*;
pub use algorithms::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use render::Renderer;
pub use config::{DetectionConfig, DisplayConfig, InputConfig, PathResolution, RenderConfig, WindowSizing};
pub use io::*;
pub use pyramid::{Pyramid, Surface, encode_runs};
