//! classipix-core: Task lifecycle and classification types for classipix.
//!
//! This crate provides the cancellable analysis pipeline: the per-run
//! [`Task`] with its cooperative cancellation flag, the collaborator traits
//! the pipeline is built from, and the checkpointed [`runner`] that drives
//! one load/preprocess/infer run to exactly one terminal [`Outcome`].

pub mod error;
pub mod pipeline;
pub mod prediction;
pub mod runner;
pub mod task;

pub use error::{Error, Result};
pub use pipeline::{Classifier, ImageBatch, ImageReader, LabelDecoder, Preprocessor};
pub use prediction::{Classification, Prediction, TOP_K};
pub use runner::{AnalysisPipeline, Outcome, ProgressObserver};
pub use task::{CancelHandle, Stage, Task};
