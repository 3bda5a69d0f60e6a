//! Central panel: image preview and the ordered result list.

use eframe::egui;

use crate::app::ClassipixApp;

impl ClassipixApp {
    /// Render the central panel with the preview and analysis results.
    pub(crate) fn render_results(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.preview.is_none() && self.results.is_none() {
                ui.centered_and_justified(|ui| ui.label("No image selected"));
                return;
            }

            ui.vertical_centered(|ui| {
                if let Some(tex) = &self.preview {
                    ui.add_space(8.0);
                    ui.image((tex.id(), tex.size_vec2()));
                }
            });

            if let Some(results) = &self.results {
                ui.add_space(8.0);
                ui.separator();
                ui.heading("Analysis results");
                ui.add_space(4.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (rank, prediction) in results.predictions().iter().enumerate() {
                        ui.label(format!(
                            "{}. {} ({:.2}%)",
                            rank + 1,
                            prediction.label,
                            f64::from(prediction.confidence) * 100.0
                        ));
                    }
                });
            }
        });
    }
}
