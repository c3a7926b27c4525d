//! Lauflängen-Vektorisierung einer Tintenmaske in achsparallele Linien.
//!
//! Zwei gierige Durchläufe teilen sich ein Besucht-Raster: zuerst vertikale
//! Läufe ab jeder `stride`-ten Zeile, dann horizontale Läufe ab jeder
//! `stride`-ten Spalte. Ein bereits beanspruchtes Pixel wird im zweiten
//! Durchlauf nicht erneut betrachtet. Das Ergebnis hängt von Reihenfolge und
//! Schrittweite ab.

use super::InkMask;

/// Richtung eines Pixel-Laufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAxis {
    /// Von `(x, y)` nach unten
    Vertical,
    /// Von `(x, y)` nach rechts
    Horizontal,
}

/// Maximale zusammenhängende Tintenfolge entlang einer Achse (Länge > 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRun {
    pub axis: RunAxis,
    pub x: u32,
    pub y: u32,
    /// Anzahl Pixel im Lauf
    pub length: u32,
}

impl PixelRun {
    /// Alle Pixel des Laufs als `(x, y)`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.length).map(move |i| match self.axis {
            RunAxis::Vertical => (self.x, self.y + i),
            RunAxis::Horizontal => (self.x + i, self.y),
        })
    }
}

/// Besucht-Raster, gemeinsam für beide Durchläufe.
struct VisitedGrid {
    width: u32,
    cells: Vec<bool>,
}

impl VisitedGrid {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            cells: vec![false; (width as usize) * (height as usize)],
        }
    }

    fn get(&self, x: u32, y: u32) -> bool {
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    fn mark(&mut self, x: u32, y: u32) {
        self.cells[(y as usize) * (self.width as usize) + (x as usize)] = true;
    }
}

/// Zerlegt eine Maske in vertikale und horizontale Läufe.
///
/// Reihenfolge der Rückgabe: alle vertikalen Läufe (zeilenweise), danach alle
/// horizontalen (spaltenweise). `stride == 0` wird als 1 behandelt.
pub fn vectorize(mask: &InkMask, stride: u32) -> Vec<PixelRun> {
    let stride = stride.max(1) as usize;
    let (width, height) = (mask.width(), mask.height());
    let mut visited = VisitedGrid::new(width, height);
    let mut runs = Vec::new();

    // Durchlauf 1: vertikal
    for y in (0..height).step_by(stride) {
        for x in 0..width {
            if !mask.is_ink(x, y) || visited.get(x, y) {
                continue;
            }
            let mut length = 0;
            while y + length < height
                && mask.is_ink(x, y + length)
                && !visited.get(x, y + length)
            {
                visited.mark(x, y + length);
                length += 1;
            }
            if length > 1 {
                runs.push(PixelRun {
                    axis: RunAxis::Vertical,
                    x,
                    y,
                    length,
                });
            }
        }
    }

    let vertical = runs.len();

    // Durchlauf 2: horizontal
    for x in (0..width).step_by(stride) {
        for y in 0..height {
            if !mask.is_ink(x, y) || visited.get(x, y) {
                continue;
            }
            let mut length = 0;
            while x + length < width
                && mask.is_ink(x + length, y)
                && !visited.get(x + length, y)
            {
                visited.mark(x + length, y);
                length += 1;
            }
            if length > 1 {
                runs.push(PixelRun {
                    axis: RunAxis::Horizontal,
                    x,
                    y,
                    length,
                });
            }
        }
    }

    log::debug!(
        "Vektorisierung {}x{} (Stride {}): {} vertikale, {} horizontale Läufe",
        width,
        height,
        stride,
        vertical,
        runs.len() - vertical
    );
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_single_vertical_run() {
        let mut mask = InkMask::blank(8, 8);
        for y in 0..5 {
            mask.set(3, y, true);
        }

        let runs = vectorize(&mask, 4);
        assert_eq!(
            runs,
            vec![PixelRun {
                axis: RunAxis::Vertical,
                x: 3,
                y: 0,
                length: 5
            }]
        );
    }

    #[test]
    fn test_isolated_pixel_yields_no_run() {
        let mut mask = InkMask::blank(4, 4);
        mask.set(0, 0, true);
        assert!(vectorize(&mask, 4).is_empty());
    }

    #[test]
    fn test_horizontal_run_found_from_scanned_column() {
        let mut mask = InkMask::blank(8, 8);
        // Zeile 2 wird vom vertikalen Durchlauf (Zeilen 0, 4) nicht getroffen
        for x in 0..6 {
            mask.set(x, 2, true);
        }

        let runs = vectorize(&mask, 4);
        assert_eq!(
            runs,
            vec![PixelRun {
                axis: RunAxis::Horizontal,
                x: 0,
                y: 2,
                length: 6
            }]
        );
    }

    #[test]
    fn test_vertical_claim_excludes_horizontal_reuse() {
        // Kreuz: vertikale Linie in Spalte 4 und horizontale in Zeile 4
        let mut mask = InkMask::blank(9, 9);
        for i in 0..9 {
            mask.set(4, i, true);
            mask.set(i, 4, true);
        }

        let runs = vectorize(&mask, 4);
        let vertical_pixels: HashSet<(u32, u32)> = runs
            .iter()
            .filter(|r| r.axis == RunAxis::Vertical)
            .flat_map(|r| r.pixels().collect::<Vec<_>>())
            .collect();

        for run in runs.iter().filter(|r| r.axis == RunAxis::Horizontal) {
            for pixel in run.pixels() {
                assert!(
                    !vertical_pixels.contains(&pixel),
                    "Pixel {pixel:?} doppelt beansprucht"
                );
            }
        }
    }

    #[test]
    fn test_horizontal_walk_stops_at_claimed_pixel() {
        // Zeile 2 liegt zwischen den vertikal gescannten Zeilen 0 und 4
        let mut mask = InkMask::blank(9, 9);
        for i in 0..9 {
            mask.set(4, i, true);
            mask.set(i, 2, true);
        }

        let runs = vectorize(&mask, 4);
        assert_eq!(
            runs,
            vec![
                PixelRun {
                    axis: RunAxis::Vertical,
                    x: 4,
                    y: 0,
                    length: 9
                },
                PixelRun {
                    axis: RunAxis::Horizontal,
                    x: 0,
                    y: 2,
                    length: 4
                },
            ]
        );

        let claimed: HashSet<(u32, u32)> = runs[0].pixels().collect();
        assert!(runs[1].pixels().all(|p| !claimed.contains(&p)));
    }

    #[test]
    fn test_stride_skips_rows() {
        // Lauf beginnt in Zeile 1, vertikal nur ab Zeile 4 sichtbar
        let mut mask = InkMask::blank(3, 8);
        for y in 1..8 {
            mask.set(1, y, true);
        }

        // Zeilen 1..3 bleiben übrig: Spalte 1 wird horizontal nicht gescannt
        let runs = vectorize(&mask, 4);
        assert_eq!(
            runs,
            vec![PixelRun {
                axis: RunAxis::Vertical,
                x: 1,
                y: 4,
                length: 4
            }]
        );

        let dense = vectorize(&mask, 1);
        assert_eq!(dense.len(), 1);
        assert_eq!(dense[0].y, 1);
        assert_eq!(dense[0].length, 7);
    }
}
