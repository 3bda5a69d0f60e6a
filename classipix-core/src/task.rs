//! Per-run task state and cooperative cancellation.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Process-wide counter for unique run identifiers.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Pipeline stage of a running task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and decoding the source image.
    Loading,
    /// Resizing and normalizing into a model input batch.
    Preprocessing,
    /// Running the classifier and decoding labels.
    Inferring,
    /// Terminal: run finished with a classification.
    Done,
    /// Terminal: run stopped at a checkpoint after a cancel request.
    Cancelled,
    /// Terminal: a collaborator call failed.
    Failed,
}

impl Stage {
    /// Returns true for `Done`, `Cancelled`, and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Cancelled | Stage::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Loading => write!(f, "loading"),
            Stage::Preprocessing => write!(f, "preprocessing"),
            Stage::Inferring => write!(f, "inferring"),
            Stage::Done => write!(f, "done"),
            Stage::Cancelled => write!(f, "cancelled"),
            Stage::Failed => write!(f, "failed"),
        }
    }
}

/// One run of the load/preprocess/infer pipeline for a single image.
///
/// A task exists only while a run is active; the idle state of the
/// application is the absence of a task. Progress is monotonically
/// non-decreasing within a run, and the cancellation flag, once set,
/// is never cleared for the lifetime of the run.
#[derive(Debug)]
pub struct Task {
    id: u64,
    stage: Stage,
    progress: u8,
    cancel: Arc<AtomicBool>,
}

impl Task {
    /// Creates a new task in the `Loading` stage with a fresh run id.
    pub fn new() -> Self {
        Self {
            id: NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed),
            stage: Stage::Loading,
            progress: 0,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Unique run identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current pipeline stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Progress count in 0..=100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Whether cancellation has been requested for this run.
    pub fn is_cancel_requested(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Handle through which the UI requests cooperative cancellation.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(Arc::clone(&self.cancel))
    }

    /// Advances the task to `stage`. Terminal stages accept no further
    /// transitions.
    pub(crate) fn advance_stage(&mut self, stage: Stage) {
        debug_assert!(!self.stage.is_terminal());
        self.stage = stage;
    }

    /// Records a progress checkpoint, clamped to keep progress monotone
    /// and within 0..=100.
    pub(crate) fn set_progress(&mut self, progress: u8) {
        self.progress = self.progress.max(progress.min(100));
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}

/// Clonable handle for requesting cancellation of a single run.
///
/// The request is cooperative: the runner observes it at the next
/// checkpoint boundary. Repeated requests have no further effect.
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Requests cancellation. Idempotent; the flag is never cleared.
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
