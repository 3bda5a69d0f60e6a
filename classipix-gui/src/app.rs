//! Main application state and logic.
//!
//! Contains the `ClassipixApp` struct which owns widget state, starts and
//! cancels analysis runs, and handles worker messages.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use eframe::egui;
use rfd::FileDialog;

use classipix_core::prediction::Classification;
use classipix_core::task::{CancelHandle, Task};

use crate::message::AppMessage;
use crate::pipeline::{run_analysis_worker, AnalysisWorkerConfig};
use crate::state::{ProcessingState, StatusKind};

/// Main application state.
pub struct ClassipixApp {
    /// Currently selected image path.
    pub(crate) selected_file: Option<PathBuf>,

    /// Results of the last completed run.
    pub(crate) results: Option<Classification>,
    /// Preview texture of the selected image.
    pub(crate) preview: Option<egui::TextureHandle>,

    /// Analysis progress and status.
    pub(crate) processing: ProcessingState,
    /// Cancellation handle of the active run.
    pub(crate) cancel: Option<CancelHandle>,

    /// Message receiver for the background worker.
    pub(crate) rx: Receiver<AppMessage>,
    /// Message sender handed to workers.
    pub(crate) tx: Sender<AppMessage>,

    /// Worker configuration (asset paths, checkpoint pacing).
    pub(crate) worker_config: AnalysisWorkerConfig,
}

impl Default for ClassipixApp {
    fn default() -> Self {
        let (tx, rx) = channel();
        Self {
            selected_file: None,
            results: None,
            preview: None,
            processing: ProcessingState::default(),
            cancel: None,
            rx,
            tx,
            worker_config: AnalysisWorkerConfig::default(),
        }
    }
}

/// Filters offered by the image selection dialog.
///
/// Any file may be picked; the pipeline's load stage rejects what the
/// decoder cannot handle.
fn dialog_filters() -> [(&'static str, &'static [&'static str]); 2] {
    [
        ("Images", &["png", "jpg", "jpeg", "bmp", "gif", "webp"]),
        ("All files", &["*"]),
    ]
}

impl ClassipixApp {
    /// Open the file dialog and start analysis on the chosen image.
    pub fn select_image(&mut self) {
        if self.processing.is_processing {
            return;
        }
        let mut dialog = FileDialog::new();
        for (name, extensions) in dialog_filters() {
            dialog = dialog.add_filter(name, extensions);
        }
        let Some(path) = dialog.pick_file() else {
            self.processing.notice = Some("No image selected. Try again.".to_string());
            return;
        };
        self.start_analysis(path);
    }

    /// Start an analysis run asynchronously.
    ///
    /// A start while a run is already active is a rejected no-op.
    pub fn start_analysis(&mut self, path: PathBuf) {
        if self.processing.is_processing {
            return;
        }
        self.selected_file = Some(path.clone());
        self.results = None;
        self.preview = None;
        self.processing.begin_run();

        let mut task = Task::new();
        self.cancel = Some(task.cancel_handle());

        let tx = self.tx.clone();
        let config = self.worker_config.clone();
        thread::spawn(move || run_analysis_worker(&mut task, path.as_path(), &tx, &config));
    }

    /// Request cooperative cancellation of the active run.
    ///
    /// Idempotent; the worker keeps running until its next checkpoint.
    pub fn cancel_analysis(&mut self) {
        if !self.processing.is_processing || self.processing.cancel_requested {
            return;
        }
        if let Some(handle) = &self.cancel {
            handle.request();
            self.processing.cancel_requested = true;
        }
    }

    /// Handle pending messages from the background worker.
    pub fn handle_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::PreviewReady(img) => {
                    self.preview =
                        Some(ctx.load_texture("preview", img, egui::TextureOptions::LINEAR));
                }
                AppMessage::AnalysisProgress(progress) => {
                    self.processing.progress = self.processing.progress.max(progress);
                }
                AppMessage::AnalysisComplete(result, dur) => {
                    self.processing.finish(StatusKind::Complete);
                    self.processing.progress = 100;
                    self.processing.notice =
                        Some(format!("Finished in {:.2}s", dur.as_secs_f64()));
                    self.results = Some(result);
                    self.cancel = None;
                }
                AppMessage::AnalysisCancelled => {
                    self.processing.finish(StatusKind::Cancelled);
                    self.cancel = None;
                }
                AppMessage::AnalysisError(message) => {
                    self.processing.finish(StatusKind::Error);
                    self.processing.notice = Some(message);
                    self.cancel = None;
                }
            }
        }
    }
}

impl eframe::App for ClassipixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_messages(ctx);
        self.render_controls(ctx);
        self.render_results(ctx);

        if self.processing.is_processing {
            ctx.request_repaint();
        }
    }
}
