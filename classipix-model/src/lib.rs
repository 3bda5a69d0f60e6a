//! classipix-model: Concrete collaborators for the analysis pipeline.
//!
//! Provides the filesystem image reader, the MobileNet-style preprocessor,
//! the TorchScript classifier, and the JSON label vocabulary, all behind
//! the trait seams defined in `classipix-core`.

pub mod classifier;
pub mod labels;
pub mod preprocess;
pub mod reader;

pub use classifier::TorchClassifier;
pub use labels::ImageNetLabels;
pub use preprocess::{MobileNetPreprocessor, MODEL_INPUT_SIZE};
pub use reader::FsImageReader;
