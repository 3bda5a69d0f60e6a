//! Classipix GUI application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod message;
mod pipeline;
mod state;
mod ui;

use app::ClassipixApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Classipix",
        opts,
        Box::new(|_cc| Ok(Box::new(ClassipixApp::default()))),
    )
}
