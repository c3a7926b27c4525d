//! Handler für Datei-Operationen (Export, Bild-Upload).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Schreibt die Striche der Sitzung in die Ausgabedatei.
pub fn export_strokes(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::export::export_strokes(state)
}

/// Öffnet den Bild-Auswahl-Dialog.
pub fn request_image(state: &mut AppState) {
    use_cases::image_import::request_image_dialog(state);
}

/// Vektorisiert das gewählte Bild und schreibt die Ausgabedatei.
pub fn vectorize_image(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::image_import::import_selection(state, Some(path))
}

/// Bildauswahl abgebrochen.
pub fn cancel_image(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::image_import::import_selection(state, None)
}
