//! Image preprocessing for MobileNet-style classifiers.

use image::imageops::FilterType;
use image::DynamicImage;
use ndarray::Array4;

use classipix_core::error::Result;
use classipix_core::pipeline::{ImageBatch, Preprocessor};

/// Fixed input edge length expected by the model.
pub const MODEL_INPUT_SIZE: u32 = 224;

/// Resizes to the model's fixed input dimensions and scales pixel values
/// into [-1, 1], producing a single-element NCHW batch.
#[derive(Debug, Clone, Copy)]
pub struct MobileNetPreprocessor {
    input_size: u32,
}

impl MobileNetPreprocessor {
    /// Preprocessor for a custom input edge length.
    pub fn with_input_size(input_size: u32) -> Self {
        Self { input_size }
    }
}

impl Default for MobileNetPreprocessor {
    fn default() -> Self {
        Self {
            input_size: MODEL_INPUT_SIZE,
        }
    }
}

impl Preprocessor for MobileNetPreprocessor {
    #[allow(clippy::cast_possible_truncation)]
    fn preprocess(&self, image: &DynamicImage) -> Result<ImageBatch> {
        let side = self.input_size;
        let resized = image
            .resize_exact(side, side, FilterType::Triangle)
            .to_rgb8();

        let side = side as usize;
        let mut data = Array4::<f32>::zeros((1, 3, side, side));
        for (x, y, pixel) in resized.enumerate_pixels() {
            let (x, y) = (x as usize, y as usize);
            for channel in 0..3 {
                data[[0, channel, y, x]] = f32::from(pixel[channel]) / 127.5 - 1.0;
            }
        }

        Ok(ImageBatch::new(data))
    }
}
