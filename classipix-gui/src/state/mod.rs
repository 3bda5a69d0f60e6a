//! Application state modules.

mod processing;

pub use processing::{ProcessingState, StatusKind};
