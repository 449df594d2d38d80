pub mod viewer;

use std::path::PathBuf;

use facets::{DetectionConfig, FacetError, PathResolution, WindowSizing};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Facet(#[from] FacetError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Viewer failed: {0}")]
    Viewer(String),
}

/// Command-line settings that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub image: Option<PathBuf>,
    pub resolution: Option<PathResolution>,
    pub fixed_window: bool,
    pub sample_colors: bool,
}

impl Overrides {
    pub fn apply(&self, mut config: DetectionConfig) -> DetectionConfig {
        if let Some(image) = &self.image {
            config.input.path = image.clone();
        }
        if let Some(resolution) = self.resolution {
            config.input.resolution = resolution;
        }
        if self.fixed_window {
            config.display.sizing = WindowSizing::FIXED_DEFAULT;
        }
        if self.sample_colors {
            config.sample_colors = true;
        }
        config
    }
}

/// Load the config file if one was given, otherwise start from defaults
pub fn load_config(path: Option<&PathBuf>, overrides: &Overrides) -> Result<DetectionConfig, CliError> {
    let config = match path {
        Some(path) => DetectionConfig::from_file(path)?,
        None => DetectionConfig::default(),
    };

    let config = overrides.apply(config);
    config.validate()?;
    Ok(config)
}

/// Pretty-printed JSON schema of the config file
pub fn config_schema() -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&DetectionConfig::schema())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = DetectionConfig::default();
        assert_eq!(Overrides::default().apply(config.clone()), config);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = Overrides {
            image: Some(PathBuf::from("faces/left.png")),
            resolution: Some(PathResolution::ExecutableDirectory),
            fixed_window: true,
            sample_colors: true,
        };
        let config = overrides.apply(DetectionConfig::default());

        assert_eq!(config.input.path, PathBuf::from("faces/left.png"));
        assert_eq!(config.input.resolution, PathResolution::ExecutableDirectory);
        assert_eq!(config.display.sizing, WindowSizing::Fixed { width: 600, height: 600 });
        assert!(config.sample_colors);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("faces.toml");
        std::fs::write(&path, "canny_high = 120.0\n\n[render]\nthickness = 5\n").expect("Should write");

        let config = load_config(Some(&path), &Overrides::default()).expect("Should load");
        assert_eq!(config.canny_high, 120.0);
        assert_eq!(config.render.thickness, 5);
        assert_eq!(config.render.color, [0, 255, 0]);
    }

    #[test]
    fn test_load_config_rejects_unknown_extension() {
        let path = PathBuf::from("faces.ini");
        assert!(matches!(
            load_config(Some(&path), &Overrides::default()),
            Err(CliError::Facet(FacetError::ConfigFormat(_)))
        ));
    }

    #[test]
    fn test_schema_is_json() {
        let schema = config_schema().expect("Should render schema");
        let value: serde_json::Value = serde_json::from_str(&schema).expect("Should be JSON");
        assert!(value["properties"]["input"].is_object());
    }
}
