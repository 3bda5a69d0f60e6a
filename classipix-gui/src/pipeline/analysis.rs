//! Analysis worker and helper functions.
//!
//! Runs the load/preprocess/infer pipeline in a background thread and
//! reports progress and the terminal outcome back over the app channel.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use eframe::egui;

use classipix_core::runner::{self, AnalysisPipeline, Outcome};
use classipix_core::task::Task;
use classipix_model::{FsImageReader, ImageNetLabels, MobileNetPreprocessor, TorchClassifier};

use crate::message::AppMessage;

/// Configuration for the analysis worker.
#[derive(Clone)]
pub struct AnalysisWorkerConfig {
    /// Path of the serialized TorchScript model.
    pub model_path: PathBuf,
    /// Path of the JSON label vocabulary.
    pub labels_path: PathBuf,
    /// Delay between progress checkpoints.
    pub pacing: Duration,
    /// Longest edge of the preview image in pixels.
    pub preview_max_dim: u32,
}

impl Default for AnalysisWorkerConfig {
    fn default() -> Self {
        Self {
            model_path: env_path("CLASSIPIX_MODEL", "models/mobilenet_v2.pt"),
            labels_path: env_path("CLASSIPIX_LABELS", "models/imagenet_classes.json"),
            pacing: Duration::from_millis(100),
            preview_max_dim: 400,
        }
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var_os(var).map_or_else(|| PathBuf::from(default), PathBuf::from)
}

/// Main entry point for image analysis in a background thread.
///
/// Sends a preview of the selected image, runs the cancellable pipeline,
/// and delivers exactly one terminal message for the run.
pub fn run_analysis_worker(
    task: &mut Task,
    path: &Path,
    tx: &Sender<AppMessage>,
    config: &AnalysisWorkerConfig,
) {
    let start = Instant::now();
    log::info!("task {}: analyzing {}", task.id(), path.display());

    send_preview(path, tx, config.preview_max_dim);

    let classifier = match TorchClassifier::load(&config.model_path) {
        Ok(classifier) => classifier,
        Err(e) => {
            let _ = tx.send(AppMessage::AnalysisError(e.to_string()));
            return;
        }
    };
    let labels = match ImageNetLabels::from_file(&config.labels_path) {
        Ok(labels) => labels,
        Err(e) => {
            let _ = tx.send(AppMessage::AnalysisError(e.to_string()));
            return;
        }
    };
    let reader = FsImageReader;
    let preprocessor = MobileNetPreprocessor::default();
    let pipeline = AnalysisPipeline {
        reader: &reader,
        preprocessor: &preprocessor,
        classifier: &classifier,
        labels: &labels,
    };

    let mut on_progress = |progress: u8| {
        let _ = tx.send(AppMessage::AnalysisProgress(progress));
    };
    let outcome = runner::run(task, path, &pipeline, &mut on_progress, config.pacing);

    match outcome {
        Outcome::Done(result) => {
            log::info!(
                "task {}: {} predictions in {:.2}s",
                task.id(),
                result.len(),
                start.elapsed().as_secs_f64()
            );
            let _ = tx.send(AppMessage::AnalysisComplete(result, start.elapsed()));
        }
        Outcome::Cancelled => {
            log::info!("task {}: cancelled", task.id());
            let _ = tx.send(AppMessage::AnalysisCancelled);
        }
        Outcome::Failed(message) => {
            log::warn!("task {}: failed: {message}", task.id());
            let _ = tx.send(AppMessage::AnalysisError(message));
        }
    }
}

/// Decode a scaled-down preview and hand it to the UI thread.
///
/// A decode failure here is silent; the same file goes through the
/// pipeline's load stage, which surfaces the error.
#[allow(clippy::cast_possible_truncation)]
fn send_preview(path: &Path, tx: &Sender<AppMessage>, max_dim: u32) {
    let Ok(image) = image::open(path) else {
        return;
    };
    let thumbnail = image.thumbnail(max_dim, max_dim).to_rgba8();
    let size = [thumbnail.width() as usize, thumbnail.height() as usize];
    let preview = egui::ColorImage::from_rgba_unmultiplied(size, thumbnail.as_raw());
    let _ = tx.send(AppMessage::PreviewReady(preview));
}
