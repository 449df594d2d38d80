use std::path::Path;

use image::RgbImage;
use crate::error::{FacetError, Result};

/// Load an image file as 8-bit RGB.
///
/// Fails with [`FacetError::ImageLoad`] when the file is missing, unreadable
/// or not a decodable image, so no processing stage ever sees an empty image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| FacetError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), width = image.width(), height = image.height(), "loaded image");
    Ok(image.to_rgb8())
}

/// Decode an in-memory image as 8-bit RGB
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<RgbImage> {
    let image = image::load_from_memory(bytes).map_err(|source| FacetError::ImageLoad {
        path: "<memory>".into(),
        source,
    })?;
    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb};
    use std::io::Cursor;

    #[test]
    fn test_missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let missing = dir.path().join("Pyramid_img1.jpg");

        match load_image(&missing) {
            Err(FacetError::ImageLoad { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected ImageLoad error, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_file_is_a_load_error() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"definitely not a png").expect("Should write");
        assert!(matches!(load_image(&path), Err(FacetError::ImageLoad { .. })));
    }

    #[test]
    fn test_png_round_trip_from_disk_and_memory() {
        let image = RgbImage::from_pixel(8, 6, Rgb([12, 34, 56]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("Should encode");

        let from_memory = load_image_from_bytes(&bytes).expect("Should decode");
        assert_eq!(from_memory, image);

        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("face.png");
        std::fs::write(&path, &bytes).expect("Should write");
        assert_eq!(load_image(&path).expect("Should load"), image);
    }
}
