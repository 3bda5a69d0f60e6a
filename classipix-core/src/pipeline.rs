//! Collaborator traits for the analysis pipeline.
//!
//! The file picker, image decoder, pretrained model, and label vocabulary
//! are external capabilities consumed through these seams; concrete
//! implementations live in `classipix-model`.

use std::path::Path;

use image::DynamicImage;
use ndarray::Array4;

use crate::error::Result;
use crate::prediction::Prediction;

/// Single-element input batch in NCHW layout, ready for the model.
#[derive(Debug, Clone)]
pub struct ImageBatch {
    /// Batch data of shape [1, channels, height, width].
    pub data: Array4<f32>,
}

impl ImageBatch {
    /// Wraps preprocessed batch data.
    pub fn new(data: Array4<f32>) -> Self {
        Self { data }
    }

    /// Batch dimensions as (batch, channels, height, width).
    pub fn dims(&self) -> (usize, usize, usize, usize) {
        self.data.dim()
    }
}

/// Reads and decodes an image file into pixels.
pub trait ImageReader: Send + Sync {
    /// Decodes the image at `path`.
    fn read(&self, path: &Path) -> Result<DynamicImage>;
}

/// Resizes and normalizes a decoded image into a model input batch.
pub trait Preprocessor: Send + Sync {
    /// Produces a single-element batch at the model's fixed input size.
    fn preprocess(&self, image: &DynamicImage) -> Result<ImageBatch>;
}

/// Pretrained classifier producing one raw score per class.
pub trait Classifier: Send + Sync {
    /// Runs the model on a preprocessed batch.
    ///
    /// The call is atomic from the runner's point of view: cancellation
    /// cannot interrupt an invocation already in flight.
    fn predict(&self, batch: &ImageBatch) -> Result<Vec<f32>>;
}

/// Maps raw scores onto the top-k labels of a fixed vocabulary.
pub trait LabelDecoder: Send + Sync {
    /// Returns up to `k` predictions sorted by descending confidence.
    fn decode_top_k(&self, scores: &[f32], k: usize) -> Result<Vec<Prediction>>;
}
