//! Processing state for the background analysis run.

/// User-facing status of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// No run active.
    Idle,
    /// A run is in flight.
    Processing,
    /// The last run finished with results.
    Complete,
    /// The last run was cancelled by the user.
    Cancelled,
    /// The last run failed.
    Error,
}

impl StatusKind {
    /// Status line text for this state.
    pub fn text(self) -> &'static str {
        match self {
            StatusKind::Idle => "Ready",
            StatusKind::Processing => "Processing…",
            StatusKind::Complete => "Analysis complete!",
            StatusKind::Cancelled => "Processing cancelled.",
            StatusKind::Error => "Error processing image.",
        }
    }
}

/// Tracks the state of the background analysis operation.
pub struct ProcessingState {
    /// Whether a run is currently active.
    pub is_processing: bool,
    /// Last reported progress checkpoint, 0..=100.
    pub progress: u8,
    /// Current status line state.
    pub status: StatusKind,
    /// Whether cancellation has already been requested for the active run.
    pub cancel_requested: bool,
    /// Transient detail shown next to the status line: a selection notice
    /// or the underlying error text.
    pub notice: Option<String>,
}

impl Default for ProcessingState {
    fn default() -> Self {
        Self {
            is_processing: false,
            progress: 0,
            status: StatusKind::Idle,
            cancel_requested: false,
            notice: None,
        }
    }
}

impl ProcessingState {
    /// Resets the state for a new run.
    pub fn begin_run(&mut self) {
        self.is_processing = true;
        self.progress = 0;
        self.status = StatusKind::Processing;
        self.cancel_requested = false;
        self.notice = None;
    }

    /// Applies a terminal status, restoring controls to a usable state.
    pub fn finish(&mut self, status: StatusKind) {
        self.is_processing = false;
        self.status = status;
        self.cancel_requested = false;
        if status == StatusKind::Cancelled {
            self.progress = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_texts() {
        assert_eq!(StatusKind::Processing.text(), "Processing…");
        assert_eq!(StatusKind::Complete.text(), "Analysis complete!");
        assert_eq!(StatusKind::Cancelled.text(), "Processing cancelled.");
        assert_eq!(StatusKind::Error.text(), "Error processing image.");
    }

    #[test]
    fn test_begin_run_resets_progress_and_notice() {
        let mut state = ProcessingState {
            progress: 60,
            notice: Some("stale".to_string()),
            ..ProcessingState::default()
        };
        state.begin_run();
        assert!(state.is_processing);
        assert_eq!(state.progress, 0);
        assert_eq!(state.status, StatusKind::Processing);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_cancelled_terminal_resets_progress() {
        let mut state = ProcessingState::default();
        state.begin_run();
        state.progress = 42;
        state.finish(StatusKind::Cancelled);
        assert!(!state.is_processing);
        assert_eq!(state.progress, 0);
        assert_eq!(state.status, StatusKind::Cancelled);
    }

    #[test]
    fn test_complete_terminal_keeps_progress() {
        let mut state = ProcessingState::default();
        state.begin_run();
        state.progress = 100;
        state.finish(StatusKind::Complete);
        assert!(!state.is_processing);
        assert_eq!(state.progress, 100);
    }
}
