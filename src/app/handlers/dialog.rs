//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::SketchOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: SketchOptions) -> anyhow::Result<()> {
    set_options(state, options);
    let path = SketchOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    set_options(state, SketchOptions::default());
    let path = SketchOptions::config_path();
    state.options.save_to_file(&path)
}

/// Übernimmt Optionen in den State; das Abtastintervall wirkt sofort.
fn set_options(state: &mut AppState, options: SketchOptions) {
    let interval = options.sampling_interval();
    state.recorder.set_interval(interval);
    state.sampling.set_interval(interval);
    state.options = options;
}
