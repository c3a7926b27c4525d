//! Optionen-Dialog für Canvas, Abtastung, Bild-Vektorisierung und Darstellung.

use crate::app::{AppIntent, AppState};
use crate::desmos::DomainGuard;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Aufnahme ────────────────────────────────────
            ui.collapsing("Aufnahme", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Abtastintervall (ms):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.sampling_interval_ms)
                                .range(1..=100)
                                .speed(1),
                        )
                        .changed();
                });
            });

            // ── Bild ────────────────────────────────────────
            ui.collapsing("Bild", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Tinten-Schwellwert:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.ink_threshold).range(1..=255))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Schrittweite:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.scan_stride).range(1..=32))
                        .changed();
                });
            });

            // ── Export ──────────────────────────────────────
            ui.collapsing("Export", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Ausgabedatei:");
                    let mut text = opts.output_path.display().to_string();
                    if ui.text_edit_singleline(&mut text).changed() {
                        opts.output_path = text.into();
                        changed = true;
                    }
                });
                changed |= guard_combo(
                    ui,
                    "Bedingung Striche:",
                    "stroke_guard",
                    &mut opts.stroke_guard,
                );
                changed |=
                    guard_combo(ui, "Bedingung Bild:", "image_guard", &mut opts.image_guard);
            });

            // ── Darstellung ─────────────────────────────────
            ui.collapsing("Darstellung", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Strichstärke:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.stroke_width_px)
                                .range(0.5..=10.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Strichfarbe:", &mut opts.stroke_color);
                changed |= color_edit(ui, "Bild-Vorschau:", &mut opts.image_preview_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Auswahl der Bereichsbedingung; die Slider-Variante nutzt `a` als Obergrenze.
fn guard_combo(ui: &mut egui::Ui, label: &str, id: &str, guard: &mut DomainGuard) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let current = match guard {
            DomainGuard::None => "keine",
            DomainGuard::UnitInterval => "0 < t < 1",
            DomainGuard::UpperBound { .. } => "0 < t < a",
        };
        egui::ComboBox::from_id_salt(id)
            .selected_text(current)
            .show_ui(ui, |ui| {
                let choices = [
                    (DomainGuard::None, "keine"),
                    (DomainGuard::UnitInterval, "0 < t < 1"),
                    (
                        DomainGuard::UpperBound {
                            bound: "a".to_string(),
                        },
                        "0 < t < a",
                    ),
                ];
                for (choice, text) in choices {
                    let selected = *guard == choice;
                    if ui.selectable_label(selected, text).clicked() && !selected {
                        *guard = choice;
                        changed = true;
                    }
                }
            });
    });
    changed
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
