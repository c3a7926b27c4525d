use crate::app::{AppIntent, UiState};

/// Bildformate, die im Auswahldialog angeboten werden.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Bild-Auswahl-Dialog
    if ui_state.show_image_dialog {
        ui_state.show_image_dialog = false;

        match rfd::FileDialog::new()
            .add_filter("Bild", IMAGE_EXTENSIONS)
            .add_filter("Alle Dateien", &["*"])
            .pick_file()
        {
            Some(path) => events.push(AppIntent::ImageSelected { path }),
            None => events.push(AppIntent::ImageSelectionCancelled),
        }
    }

    events
}
