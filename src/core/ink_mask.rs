//! Binärmaske aus einem Graustufenbild.

use crate::desmos::ExportError;
use image::{DynamicImage, GrayImage, ImageReader};
use std::io::BufReader;
use std::path::Path;

/// Schwarz/Weiß-Raster: `true` = Tinte (Intensität unter Schwellwert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InkMask {
    width: u32,
    height: u32,
    ink: Vec<bool>,
}

impl InkMask {
    /// Baut eine Maske aus Zeilen (`rows[y][x]`). Alle Zeilen müssen gleich lang sein.
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let mut ink = Vec::with_capacity((width * height) as usize);
        for row in rows {
            debug_assert_eq!(row.len() as u32, width, "ungleiche Zeilenlängen");
            ink.extend_from_slice(row);
        }
        Self { width, height, ink }
    }

    /// Leere Maske (keine Tinte).
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ink: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Binarisiert ein 8-Bit-Graustufenbild.
    pub fn from_luma(image: &GrayImage, threshold: u8) -> Self {
        let (width, height) = image.dimensions();
        let ink = image.pixels().map(|p| p.0[0] < threshold).collect();
        Self { width, height, ink }
    }

    /// Konvertiert ein beliebiges dekodiertes Bild nach Graustufen und binarisiert es.
    pub fn from_image(image: &DynamicImage, threshold: u8) -> Self {
        Self::from_luma(&image.to_luma8(), threshold)
    }

    /// Lädt und dekodiert eine Bilddatei.
    ///
    /// Die Formaterkennung erfolgt über den Dateiinhalt, nicht die Endung.
    pub fn load(path: &Path, threshold: u8) -> Result<Self, ExportError> {
        let decode_err = |source| ExportError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let file = std::fs::File::open(path)
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
        let image = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;

        log::info!(
            "Bild dekodiert: {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_image(&image, threshold))
    }

    /// Breite in Pixeln.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Höhe in Pixeln.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Ob das Pixel `(x, y)` Tinte ist. Außerhalb des Rasters: `false`.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.ink[self.index(x, y)]
    }

    /// Setzt ein Pixel (Tests, Fuzzing).
    pub fn set(&mut self, x: u32, y: u32, ink: bool) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.ink[i] = ink;
        }
    }

    /// Anzahl der Tintenpixel.
    pub fn ink_count(&self) -> usize {
        self.ink.iter().filter(|&&b| b).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_threshold_is_strictly_less_than() {
        let mut img = GrayImage::new(3, 1);
        img.put_pixel(0, 0, Luma([0]));
        img.put_pixel(1, 0, Luma([127]));
        img.put_pixel(2, 0, Luma([128]));

        let mask = InkMask::from_luma(&img, 128);
        assert!(mask.is_ink(0, 0));
        assert!(mask.is_ink(1, 0));
        assert!(!mask.is_ink(2, 0));
        assert_eq!(mask.ink_count(), 2);
    }

    #[test]
    fn test_out_of_bounds_is_not_ink() {
        let mask = InkMask::from_rows(&[&[true, true], &[true, true]]);
        assert!(!mask.is_ink(2, 0));
        assert!(!mask.is_ink(0, 2));
    }

    #[test]
    fn test_load_missing_file_is_decode_error() {
        let path = std::env::temp_dir().join("desmos_sketch_does_not_exist.png");
        let err = InkMask::load(&path, 128).expect_err("Fehler erwartet");
        assert!(matches!(err, ExportError::Decode { .. }));
    }
}
