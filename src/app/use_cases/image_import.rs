//! Use-Case-Funktionen für Bild-Upload und Vektorisierung.

use super::export::write_document;
use crate::app::state::{ExportKind, ImagePreview};
use crate::app::AppState;
use crate::core::{vectorize, InkMask};
use crate::desmos::{self, ExportError, ExportSource};
use std::path::PathBuf;

/// Öffnet den Bild-Auswahl-Dialog über UI-State.
pub fn request_image_dialog(state: &mut AppState) {
    state.ui.show_image_dialog = true;
}

/// Ergebnis des Auswahl-Dialogs; `None` bedeutet Abbruch.
pub fn picked_path(selection: Option<PathBuf>) -> Result<PathBuf, ExportError> {
    selection.ok_or(ExportError::Cancelled)
}

/// Verarbeitet eine Dialog-Auswahl.
///
/// Ein Abbruch ändert nichts und erzeugt keine Fehlermeldung.
pub fn import_selection(state: &mut AppState, selection: Option<PathBuf>) -> anyhow::Result<()> {
    match picked_path(selection) {
        Ok(path) => vectorize_image(state, path),
        Err(cancelled @ ExportError::Cancelled) => {
            log::debug!("Bildauswahl: {}", cancelled);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Lädt ein Bild, zerlegt es in Pixel-Läufe und exportiert diese.
///
/// Bei Dekodierfehlern bleibt die Ausgabedatei unverändert.
pub fn vectorize_image(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    log::info!("Lade Bild: {}", path.display());

    let mask = match InkMask::load(&path, state.options.ink_threshold) {
        Ok(mask) => mask,
        Err(e) => {
            let err = anyhow::Error::from(e);
            state.ui.status_message = Some(format!("{:#}", err));
            return Err(err);
        }
    };

    let runs = vectorize(&mask, state.options.scan_stride);
    log::info!(
        "Bild vektorisiert: {}x{} Pixel, {} Tintenpixel, {} Läufe",
        mask.width(),
        mask.height(),
        mask.ink_count(),
        runs.len()
    );

    let canvas = state.options.canvas();
    let document = desmos::build_export(
        ExportSource::Image {
            runs: &runs,
            width: mask.width(),
            height: mask.height(),
        },
        &canvas,
        &state.options.image_guard,
    )?;

    let output = state.options.output_path.clone();
    write_document(state, &output, &document, ExportKind::Image)?;

    state.image_preview = Some(ImagePreview {
        runs,
        image_width: mask.width(),
        image_height: mask.height(),
    });

    log::info!("Image processed and output saved to {}", output.display());
    Ok(())
}
