//! Detection settings, loadable from TOML or JSON.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! canny_low = 40.0
//!
//! [display]
//! sizing = { fixed = { width = 800, height = 600 } }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{
    algorithms::RetrievalMode,
    error::{FacetError, Result},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DetectionConfig {
    /// Gaussian kernel size, odd
    #[schemars(range(min = 1))]
    pub blur_kernel_size: u32,
    /// Gaussian sigma; 0 derives it from the kernel size
    pub blur_sigma: f32,
    pub canny_low: f32,
    pub canny_high: f32,
    /// Approximation tolerance as a fraction of the contour perimeter
    #[schemars(range(min = 0.0, max = 1.0))]
    pub epsilon_fraction: f64,
    /// Vertex count a polygon needs to be accepted
    pub target_vertices: usize,
    pub retrieval: RetrievalMode,
    /// Sample and classify the colour of each accepted face
    pub sample_colors: bool,
    pub render: RenderConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            blur_kernel_size: 5,
            blur_sigma: 0.0,
            canny_low: 50.0,
            canny_high: 150.0,
            epsilon_fraction: 0.04,
            target_vertices: 3,
            retrieval: RetrievalMode::Tree,
            sample_colors: false,
            render: RenderConfig::default(),
            display: DisplayConfig::default(),
            input: InputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RenderConfig {
    pub color: [u8; 3],
    pub thickness: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: [0, 255, 0],
            thickness: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub sizing: WindowSizing,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Image with Triangle Detection".to_string(),
            sizing: WindowSizing::Auto,
        }
    }
}

/// How the viewer window is sized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WindowSizing {
    /// Fit the window to the image
    #[default]
    Auto,
    /// Fixed initial size, user resizable
    Fixed { width: u32, height: u32 },
}

impl WindowSizing {
    pub const FIXED_DEFAULT: WindowSizing = WindowSizing::Fixed {
        width: 600,
        height: 600,
    };

    /// Initial window size for an image of the given dimensions
    pub fn initial_size(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        match *self {
            WindowSizing::Auto => (image_width, image_height),
            WindowSizing::Fixed { width, height } => (width, height),
        }
    }

    pub fn resizable(&self) -> bool {
        matches!(self, WindowSizing::Fixed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputConfig {
    pub path: PathBuf,
    pub resolution: PathResolution,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Pyramid_img1.jpg"),
            resolution: PathResolution::WorkingDirectory,
        }
    }
}

/// Base directory for relative input paths
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq,
    Serialize, Deserialize, JsonSchema, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PathResolution {
    /// Relative to the process working directory
    #[default]
    WorkingDirectory,
    /// Relative to the directory holding the running executable
    ExecutableDirectory,
}

impl PathResolution {
    /// Resolve `path` against this base. Absolute paths are returned unchanged.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        match self {
            PathResolution::WorkingDirectory => Ok(path.to_path_buf()),
            PathResolution::ExecutableDirectory => {
                let exe = std::env::current_exe()?;
                let dir = exe.parent().ok_or_else(|| {
                    FacetError::InvalidConfig(format!(
                        "executable path {} has no parent directory",
                        exe.display()
                    ))
                })?;
                Ok(dir.join(path))
            }
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.blur_kernel_size == 0 || self.blur_kernel_size % 2 == 0 {
            return Err(FacetError::InvalidConfig(format!(
                "blur_kernel_size must be odd and positive, got {}",
                self.blur_kernel_size
            )));
        }
        if self.blur_sigma < 0.0 {
            return Err(FacetError::InvalidConfig(format!(
                "blur_sigma must not be negative, got {}",
                self.blur_sigma
            )));
        }
        if self.canny_low > self.canny_high {
            return Err(FacetError::InvalidConfig(format!(
                "canny_low ({}) exceeds canny_high ({})",
                self.canny_low, self.canny_high
            )));
        }
        if !(self.epsilon_fraction > 0.0 && self.epsilon_fraction < 1.0) {
            return Err(FacetError::InvalidConfig(format!(
                "epsilon_fraction must be in (0, 1), got {}",
                self.epsilon_fraction
            )));
        }
        if self.target_vertices == 0 {
            return Err(FacetError::InvalidConfig("target_vertices must be positive".to_string()));
        }
        if let WindowSizing::Fixed { width, height } = self.display.sizing {
            if width == 0 || height == 0 {
                return Err(FacetError::InvalidConfig(format!(
                    "fixed window size must be non-zero, got {width}x{height}"
                )));
            }
        }
        Ok(())
    }

    /// Input path resolved with the configured policy
    pub fn resolved_input(&self) -> Result<PathBuf> {
        self.input.resolution.resolve(&self.input.path)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DetectionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: DetectionConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Auto-detect the format from the file extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&fs::read_to_string(path)?),
            Some("json") => Self::from_json(&fs::read_to_string(path)?),
            _ => Err(FacetError::ConfigFormat(path.to_path_buf())),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// JSON schema describing the config file
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(DetectionConfig)
    }
}
