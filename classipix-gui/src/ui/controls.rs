//! Control panel: select/cancel buttons, progress bar, status line.

use eframe::egui;

use crate::app::ClassipixApp;
use crate::state::StatusKind;

fn status_color(status: StatusKind) -> egui::Color32 {
    match status {
        StatusKind::Idle => egui::Color32::GRAY,
        StatusKind::Processing => egui::Color32::from_rgb(90, 140, 235),
        StatusKind::Complete => egui::Color32::from_rgb(40, 160, 60),
        StatusKind::Cancelled => egui::Color32::from_rgb(230, 140, 0),
        StatusKind::Error => egui::Color32::from_rgb(215, 55, 55),
    }
}

impl ClassipixApp {
    /// Render the top panel with controls and the status line.
    pub(crate) fn render_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let can_select = !self.processing.is_processing;
                if ui
                    .add_enabled(can_select, egui::Button::new("Select Image"))
                    .clicked()
                {
                    self.select_image();
                }

                let can_cancel =
                    self.processing.is_processing && !self.processing.cancel_requested;
                if ui
                    .add_enabled(can_cancel, egui::Button::new("Cancel"))
                    .clicked()
                {
                    self.cancel_analysis();
                }

                if let Some(name) = self.selected_file.as_deref().and_then(|p| p.file_name()) {
                    ui.label(egui::RichText::new(name.to_string_lossy()).weak());
                }
            });

            if self.processing.is_processing {
                ui.add_space(4.0);
                ui.add(
                    egui::ProgressBar::new(f32::from(self.processing.progress) / 100.0)
                        .show_percentage(),
                );
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(self.processing.status.text())
                        .color(status_color(self.processing.status))
                        .strong(),
                );
                if let Some(notice) = &self.processing.notice {
                    ui.label(egui::RichText::new(notice).weak());
                }
            });
            ui.add_space(8.0);
        });
    }
}
