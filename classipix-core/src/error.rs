//! Error types for classipix-core.

use thiserror::Error;

/// Result type alias for classipix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for classipix operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Image could not be read or decoded.
    #[error("image load error: {0}")]
    Load(String),

    /// Preprocessing failed.
    #[error("preprocessing error: {0}")]
    Preprocess(String),

    /// Model inference failed.
    #[error("inference error: {0}")]
    Inference(String),

    /// Raw scores could not be decoded into labels.
    #[error("label decoding error: {0}")]
    LabelDecode(String),

    /// Confidence value outside the [0, 1] range.
    #[error("invalid confidence value: {0}")]
    InvalidConfidence(f32),

    /// Predictions not ordered by descending confidence.
    #[error("predictions not ordered by descending confidence")]
    UnorderedPredictions,
}
