//! Background worker for the analysis pipeline.

mod analysis;

pub use analysis::{run_analysis_worker, AnalysisWorkerConfig};
