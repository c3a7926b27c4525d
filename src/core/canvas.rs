//! Logischer Canvas-Koordinatenraum.

use glam::DVec2;

/// Feste logische Canvas-Größe; alle exportierten Koordinaten liegen in diesem Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpace {
    pub width: f64,
    pub height: f64,
}

impl CanvasSpace {
    /// Erstellt einen Canvas-Raum mit gegebener Breite und Höhe.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Spiegelt die y-Achse (Canvas: nach unten, Export: nach oben).
    ///
    /// Zweimal angewendet ergibt sich wieder der Ausgangswert.
    pub fn flip_y(&self, y: f64) -> f64 {
        self.height - y
    }

    /// Canvas-Punkt → Export-Punkt (nur y gespiegelt).
    pub fn to_export(&self, position: DVec2) -> DVec2 {
        DVec2::new(position.x, self.flip_y(position.y))
    }

    /// Skalierung Bildpixel → Canvas-Einheiten (horizontal, vertikal).
    pub fn pixel_scale(&self, image_width: u32, image_height: u32) -> DVec2 {
        DVec2::new(
            self.width / f64::from(image_width),
            self.height / f64::from(image_height),
        )
    }

    /// Ob ein Punkt innerhalb des Canvas liegt.
    pub fn contains(&self, position: DVec2) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }
}

impl Default for CanvasSpace {
    fn default() -> Self {
        Self::new(
            crate::shared::options::CANVAS_WIDTH,
            crate::shared::options::CANVAS_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_twice_is_identity() {
        let canvas = CanvasSpace::new(800.0, 600.0);
        for y in [0.0, 1.5, 300.0, 599.25, 600.0] {
            assert_eq!(canvas.flip_y(canvas.flip_y(y)), y);
        }
    }

    #[test]
    fn test_pixel_scale() {
        let canvas = CanvasSpace::new(800.0, 600.0);
        let scale = canvas.pixel_scale(400, 1200);
        assert_eq!(scale, DVec2::new(2.0, 0.5));
    }
}
