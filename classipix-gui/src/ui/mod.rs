//! UI rendering modules.

mod controls;
mod results;
