//! Zentrale Konfiguration für den Desmos Sketch Exporter.
//!
//! `SketchOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use crate::core::CanvasSpace;
use crate::desmos::DomainGuard;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ── Canvas ──────────────────────────────────────────────────────────

/// Logische Canvas-Breite (Export-Koordinatenraum).
pub const CANVAS_WIDTH: f64 = 800.0;
/// Logische Canvas-Höhe (Export-Koordinatenraum).
pub const CANVAS_HEIGHT: f64 = 600.0;

// ── Aufnahme ────────────────────────────────────────────────────────

/// Abtastintervall während gedrückter Maustaste in Millisekunden.
pub const SAMPLING_INTERVAL_MS: u64 = 10;

// ── Bild-Vektorisierung ─────────────────────────────────────────────

/// Graustufen-Schwellwert: darunter gilt ein Pixel als Tinte.
pub const INK_THRESHOLD: u8 = 128;
/// Zeilen-/Spalten-Schrittweite der Lauf-Suche.
pub const SCAN_STRIDE: u32 = 4;

// ── Darstellung ─────────────────────────────────────────────────────

/// Strichstärke auf dem Canvas in Pixeln.
pub const STROKE_WIDTH_PX: f32 = 2.0;
/// Strichfarbe (RGBA: Schwarz).
pub const STROKE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Bild-Vorschau (RGBA: Blau).
pub const IMAGE_PREVIEW_COLOR: [f32; 4] = [0.1, 0.3, 0.9, 1.0];

/// Standard-Name der Ausgabedatei.
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `desmos_sketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Logische Canvas-Breite
    pub canvas_width: f64,
    /// Logische Canvas-Höhe
    pub canvas_height: f64,

    // ── Aufnahme ────────────────────────────────────────────────
    /// Abtastintervall in Millisekunden
    pub sampling_interval_ms: u64,

    // ── Bild ────────────────────────────────────────────────────
    /// Schwellwert für Tintenpixel
    pub ink_threshold: u8,
    /// Schrittweite der Lauf-Suche (Zeilen bzw. Spalten)
    pub scan_stride: u32,

    // ── Export ──────────────────────────────────────────────────
    /// Pfad der Ausgabedatei
    pub output_path: PathBuf,

    // ── Darstellung ─────────────────────────────────────────────
    /// Strichstärke in Pixeln
    #[serde(default = "default_stroke_width")]
    pub stroke_width_px: f32,
    /// Strichfarbe (RGBA)
    #[serde(default = "default_stroke_color")]
    pub stroke_color: [f32; 4],
    /// Farbe der Bild-Vorschau (RGBA)
    #[serde(default = "default_image_preview_color")]
    pub image_preview_color: [f32; 4],

    // ── Bereichsbedingungen (TOML-Tabellen, stehen am Ende) ─────
    /// Bereichsbedingung für Strich-Exporte
    #[serde(default)]
    pub stroke_guard: DomainGuard,
    /// Bereichsbedingung für Bild-Exporte
    #[serde(default = "default_image_guard")]
    pub image_guard: DomainGuard,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            sampling_interval_ms: SAMPLING_INTERVAL_MS,
            ink_threshold: INK_THRESHOLD,
            scan_stride: SCAN_STRIDE,
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
            stroke_guard: DomainGuard::UnitInterval,
            image_guard: default_image_guard(),
            stroke_width_px: STROKE_WIDTH_PX,
            stroke_color: STROKE_COLOR,
            image_preview_color: IMAGE_PREVIEW_COLOR,
        }
    }
}

/// Serde-Default für `image_guard` (Bildzeilen tragen keine Bedingung).
fn default_image_guard() -> DomainGuard {
    DomainGuard::None
}

fn default_stroke_width() -> f32 {
    STROKE_WIDTH_PX
}

fn default_stroke_color() -> [f32; 4] {
    STROKE_COLOR
}

fn default_image_preview_color() -> [f32; 4] {
    IMAGE_PREVIEW_COLOR
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content =
            toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("desmos_sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("desmos_sketch.toml")
    }

    /// Logischer Canvas-Raum aus den Optionen.
    pub fn canvas(&self) -> CanvasSpace {
        CanvasSpace::new(self.canvas_width, self.canvas_height)
    }

    /// Abtastintervall als `Duration` (mindestens 1 ms).
    pub fn sampling_interval(&self) -> Duration {
        Duration::from_millis(self.sampling_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = SketchOptions::default();
        assert_eq!(opts.canvas(), CanvasSpace::new(800.0, 600.0));
        assert_eq!(opts.sampling_interval(), Duration::from_millis(10));
        assert_eq!(opts.ink_threshold, 128);
        assert_eq!(opts.scan_stride, 4);
        assert_eq!(opts.output_path, PathBuf::from("output.txt"));
    }

    #[test]
    fn test_toml_roundtrip_keeps_guards() {
        let mut opts = SketchOptions::default();
        opts.stroke_guard = DomainGuard::UpperBound {
            bound: "a".to_string(),
        };

        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: SketchOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let text = r#"
canvas_width = 1024.0
canvas_height = 768.0
sampling_interval_ms = 20
ink_threshold = 100
scan_stride = 2
output_path = "curves.txt"
"#;
        let opts: SketchOptions = toml::from_str(text).expect("parsebar");
        assert_eq!(opts.stroke_guard, DomainGuard::UnitInterval);
        assert_eq!(opts.image_guard, DomainGuard::None);
        assert_eq!(opts.stroke_width_px, STROKE_WIDTH_PX);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let opts = SketchOptions {
            sampling_interval_ms: 0,
            ..SketchOptions::default()
        };
        assert_eq!(opts.sampling_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("desmos_sketch_missing_options.toml");
        assert_eq!(SketchOptions::load_from_file(&path), SketchOptions::default());
    }
}
