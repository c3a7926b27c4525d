//! Canvas-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.

use glam::DVec2;

/// Read-only Daten für einen Zeichen-Frame (Canvas-Koordinaten, y nach unten).
#[derive(Debug, Clone, Default)]
pub struct CanvasScene {
    /// Logische Canvas-Größe [Breite, Höhe]
    pub canvas_size: [f64; 2],
    /// Versiegelte Striche als Polylinien
    pub strokes: Vec<Vec<DVec2>>,
    /// Aktuell offener Strich (Live-Feedback)
    pub open_stroke: Option<Vec<DVec2>>,
    /// Linien der letzten Bild-Vektorisierung
    pub image_preview: Vec<[DVec2; 2]>,
    /// Strichstärke in Pixeln
    pub stroke_width: f32,
    /// Strichfarbe (RGBA)
    pub stroke_color: [f32; 4],
    /// Farbe der Bild-Vorschau (RGBA)
    pub preview_color: [f32; 4],
}

impl CanvasScene {
    /// Gibt zurück, ob es irgendetwas zu zeichnen gibt.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.open_stroke.is_none() && self.image_preview.is_empty()
    }
}
