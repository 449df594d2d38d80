use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacetError {
    #[error("Failed to load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image has no pixels ({width}x{height})")]
    InvalidImage { width: u32, height: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse TOML configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write TOML configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Unsupported config format {0:?}, use .toml or .json")]
    ConfigFormat(PathBuf),

    #[error("Invalid pyramid notation {input:?}: {reason}")]
    Notation { input: String, reason: String },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FacetError>;
