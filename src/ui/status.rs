//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, ExportKind};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Striche: {} | Punkte: {} | final_time: {:.3}s",
                state.session.stroke_count(),
                state.session.sample_count(),
                state.session.final_time()
            ));

            if state.is_drawing() {
                ui.separator();
                ui.label(egui::RichText::new("● Aufnahme").color(egui::Color32::RED));
            }

            if let Some(ref report) = state.ui.last_export {
                ui.separator();
                let source = match report.kind {
                    ExportKind::Strokes => "Striche",
                    ExportKind::Image => "Bild",
                };
                ui.label(format!(
                    "Export ({}): {} Segmente → {}",
                    source,
                    report.segment_count,
                    report.path.display()
                ));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
