//! Cancellable task runner for the load/preprocess/infer pipeline.
//!
//! Runs on a background thread, reports progress at fixed checkpoints,
//! and checks the task's cancellation flag at every checkpoint boundary.
//! Each run resolves to exactly one terminal [`Outcome`].

use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::pipeline::{Classifier, ImageReader, LabelDecoder, Preprocessor};
use crate::prediction::{Classification, TOP_K};
use crate::task::{Stage, Task};

/// Checkpoints spanned by the preprocessing stage (progress 1..=25).
pub const PREPROCESS_CHECKPOINTS: u8 = 25;

/// Final checkpoint; the inference stage spans 26..=100.
pub const TOTAL_CHECKPOINTS: u8 = 100;

/// Terminal resolution of one run.
#[derive(Debug)]
pub enum Outcome {
    /// Run finished with a validated classification.
    Done(Classification),
    /// Run stopped at a checkpoint after a cancel request.
    Cancelled,
    /// A collaborator call failed; carries the underlying error text.
    Failed(String),
}

/// Receives progress checkpoints while a run is in flight.
///
/// Invoked from the worker's execution context; implementations must
/// marshal onto the UI thread before touching widget state.
pub trait ProgressObserver {
    /// Called once per checkpoint with the progress count in 1..=100.
    fn on_progress(&mut self, progress: u8);
}

impl<F: FnMut(u8)> ProgressObserver for F {
    fn on_progress(&mut self, progress: u8) {
        self(progress);
    }
}

/// The collaborators one run is wired to.
pub struct AnalysisPipeline<'a> {
    /// Decodes the source image file.
    pub reader: &'a dyn ImageReader,
    /// Resizes and normalizes into the model input batch.
    pub preprocessor: &'a dyn Preprocessor,
    /// Pretrained classifier.
    pub classifier: &'a dyn Classifier,
    /// Maps raw scores to labeled predictions.
    pub labels: &'a dyn LabelDecoder,
}

/// Executes one run of the pipeline.
///
/// `pacing` is the delay applied between checkpoints, modeling the
/// incremental work of each stage; pass `Duration::ZERO` in tests.
/// Progress reports are monotonically non-decreasing and the returned
/// outcome is always the final event of the run.
pub fn run(
    task: &mut Task,
    image_path: &Path,
    pipeline: &AnalysisPipeline<'_>,
    observer: &mut dyn ProgressObserver,
    pacing: Duration,
) -> Outcome {
    let image = match pipeline.reader.read(image_path) {
        Ok(image) => image,
        Err(e) => return fail(task, &e.to_string()),
    };

    task.advance_stage(Stage::Preprocessing);
    for checkpoint in 1..=PREPROCESS_CHECKPOINTS {
        if task.is_cancel_requested() {
            return cancel(task);
        }
        pace(pacing);
        report(task, observer, checkpoint);
    }
    if task.is_cancel_requested() {
        return cancel(task);
    }
    let batch = match pipeline.preprocessor.preprocess(&image) {
        Ok(batch) => batch,
        Err(e) => return fail(task, &e.to_string()),
    };

    task.advance_stage(Stage::Inferring);
    for checkpoint in (PREPROCESS_CHECKPOINTS + 1)..=TOTAL_CHECKPOINTS {
        if task.is_cancel_requested() {
            return cancel(task);
        }
        pace(pacing);
        report(task, observer, checkpoint);
    }
    if task.is_cancel_requested() {
        return cancel(task);
    }

    // The model call itself is atomic; a cancel arriving from here on is
    // observed too late to take effect.
    let scores = match pipeline.classifier.predict(&batch) {
        Ok(scores) => scores,
        Err(e) => return fail(task, &e.to_string()),
    };
    let predictions = match pipeline.labels.decode_top_k(&scores, TOP_K) {
        Ok(predictions) => predictions,
        Err(e) => return fail(task, &e.to_string()),
    };
    let classification = match Classification::new(predictions) {
        Ok(classification) => classification,
        Err(e) => return fail(task, &e.to_string()),
    };

    task.advance_stage(Stage::Done);
    Outcome::Done(classification)
}

fn report(task: &mut Task, observer: &mut dyn ProgressObserver, checkpoint: u8) {
    task.set_progress(checkpoint);
    observer.on_progress(task.progress());
}

fn pace(pacing: Duration) {
    if !pacing.is_zero() {
        thread::sleep(pacing);
    }
}

fn cancel(task: &mut Task) -> Outcome {
    task.advance_stage(Stage::Cancelled);
    Outcome::Cancelled
}

fn fail(task: &mut Task, message: &str) -> Outcome {
    task.advance_stage(Stage::Failed);
    Outcome::Failed(message.to_string())
}
