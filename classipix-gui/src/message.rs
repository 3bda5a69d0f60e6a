//! Application message types for async communication.
//!
//! Messages are sent from the background analysis worker to the main UI
//! thread via a channel; the UI thread is the sole mutator of widget state.

use std::time::Duration;

use classipix_core::prediction::Classification;
use eframe::egui;

/// Messages sent from the background worker to the UI thread.
pub enum AppMessage {
    /// Scaled preview of the selected image, ready for display.
    PreviewReady(egui::ColorImage),

    /// Analysis progress checkpoint, 1..=100.
    AnalysisProgress(u8),

    /// Analysis completed with the ordered top predictions and the time
    /// the run took.
    AnalysisComplete(Classification, Duration),

    /// Analysis stopped at a checkpoint after a cancel request.
    AnalysisCancelled,

    /// Analysis failed; carries the underlying error text.
    AnalysisError(String),
}
