//! Zeichenfläche: Pointer-Events → AppIntent, Szene zeichnen, Abtast-Task takten.

use crate::app::{AppIntent, SamplingTask};
use crate::shared::CanvasScene;
use glam::DVec2;
use std::time::Instant;

/// Input-Zustand der Zeichenfläche zwischen zwei Frames.
#[derive(Default)]
pub struct CanvasInput {
    /// Letzte bekannte Canvas-Position, solange die Taste auf dem Canvas gedrückt ist
    held_at: Option<DVec2>,
    /// Canvas-Ursprung (oben links) im letzten Frame, in egui-Punkten
    origin: Option<egui::Pos2>,
}

impl CanvasInput {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet die Szene und sammelt Press/Release-Events als AppIntents.
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &CanvasScene) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let size = egui::vec2(scene.canvas_size[0] as f32, scene.canvas_size[1] as f32);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
        self.origin = Some(rect.min);

        let (pressed, released, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });
        let now = Instant::now();

        let position = pointer.map(|pos| to_canvas(rect.min, pos));

        if pressed && response.hovered() {
            if let Some(position) = position {
                self.press(position);
                events.push(AppIntent::PointerPressed { position, at: now });
            }
        } else {
            self.track(position);
        }

        if released {
            if let Some(position) = self.release(position) {
                events.push(AppIntent::PointerReleased { position, at: now });
            }
        }

        paint_scene(&ui.painter_at(rect), rect.min, scene);
        events
    }

    fn press(&mut self, position: DVec2) {
        self.held_at = Some(position);
    }

    fn track(&mut self, position: Option<DVec2>) {
        if let (Some(held), Some(position)) = (self.held_at.as_mut(), position) {
            *held = position;
        }
    }

    /// Beendet ein Drücken auf dem Canvas.
    ///
    /// Ohne aktuelle Zeigerposition (Zeiger hat das Fenster verlassen) gilt
    /// die zuletzt bekannte, damit der offene Strich immer versiegelt wird.
    fn release(&mut self, position: Option<DVec2>) -> Option<DVec2> {
        let held = self.held_at.take()?;
        Some(position.unwrap_or(held))
    }

    /// Taktet den Abtast-Task und meldet fällige Polls mit der aktuellen Zeigerposition.
    ///
    /// Plant außerdem den nächsten Repaint, solange der Task aktiv ist.
    pub fn drive_sampling(
        &self,
        ctx: &egui::Context,
        sampling: &mut SamplingTask,
    ) -> Option<AppIntent> {
        let now = Instant::now();
        let pointer = ctx.input(|i| i.pointer.latest_pos());
        let intent = match (sampling.tick(now), self.origin, pointer) {
            (true, Some(origin), Some(pos)) => Some(AppIntent::SamplingTick {
                position: to_canvas(origin, pos),
                at: now,
            }),
            _ => None,
        };

        if let Some(wait) = sampling.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }
        intent
    }
}

fn to_canvas(origin: egui::Pos2, pos: egui::Pos2) -> DVec2 {
    DVec2::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y))
}

fn to_screen(origin: egui::Pos2, p: DVec2) -> egui::Pos2 {
    origin + egui::vec2(p.x as f32, p.y as f32)
}

fn color32(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}

fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &CanvasScene) {
    painter.rect_filled(painter.clip_rect(), 0.0, egui::Color32::WHITE);

    let stroke = egui::Stroke::new(scene.stroke_width, color32(scene.stroke_color));
    let preview = egui::Stroke::new(1.0, color32(scene.preview_color));

    for [a, b] in &scene.image_preview {
        painter.line_segment([to_screen(origin, *a), to_screen(origin, *b)], preview);
    }

    for points in scene.strokes.iter().chain(scene.open_stroke.iter()) {
        if points.len() < 2 {
            continue;
        }
        let screen: Vec<egui::Pos2> = points.iter().map(|p| to_screen(origin, *p)).collect();
        painter.line(screen, stroke);
    }

    if scene.is_empty() {
        painter.text(
            painter.clip_rect().center(),
            egui::Align2::CENTER_CENTER,
            "Mit gedrückter Maustaste zeichnen",
            egui::FontId::proportional(18.0),
            egui::Color32::GRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_without_pointer_uses_last_known_position() {
        let mut input = CanvasInput::new();
        input.press(DVec2::new(10.0, 10.0));
        input.track(Some(DVec2::new(50.0, 40.0)));
        input.track(None);

        assert_eq!(input.release(None), Some(DVec2::new(50.0, 40.0)));
        assert_eq!(input.release(None), None);
    }

    #[test]
    fn test_release_prefers_current_pointer() {
        let mut input = CanvasInput::new();
        input.press(DVec2::new(10.0, 10.0));

        assert_eq!(
            input.release(Some(DVec2::new(12.0, 15.0))),
            Some(DVec2::new(12.0, 15.0))
        );
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut input = CanvasInput::new();
        input.track(Some(DVec2::new(5.0, 5.0)));

        assert_eq!(input.release(Some(DVec2::new(5.0, 5.0))), None);
    }
}
