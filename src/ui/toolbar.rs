//! Toolbar mit den Export- und Bild-Aktionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let drawing = state.is_drawing();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!drawing, egui::Button::new("Terminate"))
                .on_hover_text("Striche exportieren und beenden")
                .clicked()
            {
                events.push(AppIntent::TerminateRequested);
            }

            if ui
                .add_enabled(!drawing, egui::Button::new("Export"))
                .on_hover_text("Striche exportieren, Fenster bleibt offen")
                .clicked()
            {
                events.push(AppIntent::ExportRequested);
            }

            ui.separator();

            if ui
                .add_enabled(!drawing, egui::Button::new("Upload Image"))
                .clicked()
            {
                events.push(AppIntent::ImageUploadRequested);
            }

            if ui
                .add_enabled(!drawing, egui::Button::new("Clear"))
                .clicked()
            {
                events.push(AppIntent::ClearRequested);
            }

            ui.separator();

            if ui.button("Optionen…").clicked() {
                events.push(AppIntent::OpenOptionsDialogRequested);
            }
        });
    });

    events
}
