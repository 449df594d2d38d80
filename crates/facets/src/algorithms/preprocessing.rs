use image::{DynamicImage, GrayImage, RgbImage};
use crate::{error::{FacetError, Result}, traits::ImagePreprocessor};

/// Sigma used for a Gaussian kernel of the given size when none is set
/// explicitly. Matches the usual `0.3 * ((k - 1) / 2 - 1) + 0.8` rule.
pub fn sigma_for_kernel(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Grayscale conversion followed by Gaussian smoothing
#[derive(Debug, Clone)]
pub struct GrayscaleBlurPreprocessor {
    pub kernel_size: u32,
    /// Zero derives sigma from `kernel_size`
    pub sigma: f32,
}

impl Default for GrayscaleBlurPreprocessor {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            sigma: 0.0,
        }
    }
}

impl GrayscaleBlurPreprocessor {
    pub fn effective_sigma(&self) -> f32 {
        if self.sigma > 0.0 {
            self.sigma
        } else {
            sigma_for_kernel(self.kernel_size)
        }
    }
}

impl ImagePreprocessor for GrayscaleBlurPreprocessor {
    fn preprocess(&self, image: &RgbImage) -> Result<GrayImage> {
        if image.width() == 0 || image.height() == 0 {
            return Err(FacetError::InvalidImage {
                width: image.width(),
                height: image.height(),
            });
        }

        // DynamicImage owns its buffer; the clone keeps the caller's image untouched
        let gray = DynamicImage::ImageRgb8(image.clone()).to_luma8();
        Ok(imageproc::filter::gaussian_blur_f32(&gray, self.effective_sigma()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_sigma_for_default_kernel() {
        assert!((sigma_for_kernel(5) - 1.1).abs() < 1e-6);
        assert!((sigma_for_kernel(3) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_explicit_sigma_wins() {
        let pre = GrayscaleBlurPreprocessor { kernel_size: 5, sigma: 2.5 };
        assert_eq!(pre.effective_sigma(), 2.5);
    }

    #[test]
    fn test_preserves_dimensions() {
        let image = RgbImage::from_pixel(40, 30, Rgb([200, 10, 10]));
        let gray = GrayscaleBlurPreprocessor::default()
            .preprocess(&image)
            .expect("Should preprocess");
        assert_eq!(gray.dimensions(), (40, 30));
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        let image = RgbImage::from_pixel(32, 32, Rgb([90, 90, 90]));
        let gray = GrayscaleBlurPreprocessor::default()
            .preprocess(&image)
            .expect("Should preprocess");
        let first = gray.get_pixel(0, 0).0[0];
        assert!(gray.pixels().all(|p| p.0[0].abs_diff(first) <= 1));
    }

    #[test]
    fn test_rejects_empty_image() {
        let image = RgbImage::new(0, 0);
        let err = GrayscaleBlurPreprocessor::default().preprocess(&image);
        assert!(matches!(err, Err(FacetError::InvalidImage { .. })));
    }
}
